//! Dock locations for drag-and-drop targeting
//!
//! A [`DockLocation`] names the region of a target rectangle a dragged panel
//! would dock into. Classification and dock rectangles both take an `rtl`
//! flag: under right-to-left reading order the logical LEFT side is the
//! physical right half of the target and vice versa. TOP, BOTTOM and CENTER
//! never change with direction.

use crate::{Orientation, Rect};
use serde::{Deserialize, Serialize};

/// Normalised bounds of the central docking box (exclusive on both ends).
const CENTER_MIN: f64 = 0.3;
const CENTER_MAX: f64 = 0.7;

/// Region of a rectangle a panel can be docked into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockLocation {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl DockLocation {
    pub const ALL: [DockLocation; 5] = [
        DockLocation::Top,
        DockLocation::Bottom,
        DockLocation::Left,
        DockLocation::Right,
        DockLocation::Center,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|loc| loc.name() == name)
    }

    /// Orientation of the split docking here would create
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Left | Self::Right => Orientation::Horizontal,
            Self::Top | Self::Bottom | Self::Center => Orientation::Vertical,
        }
    }

    /// Insertion offset relative to the target node: 1 for the trailing sides
    pub fn index_plus(self) -> usize {
        match self {
            Self::Bottom | Self::Right => 1,
            Self::Top | Self::Left | Self::Center => 0,
        }
    }

    /// The opposite side; CENTER reflects onto itself
    pub fn reflect(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Center => Self::Center,
        }
    }

    /// Swap LEFT and RIGHT when `rtl` is set; everything else is unchanged
    pub fn mirror(self, rtl: bool) -> Self {
        match self {
            Self::Left | Self::Right if rtl => self.reflect(),
            _ => self,
        }
    }

    /// Classify the point `(x, y)` against `rect`.
    ///
    /// The point is normalised into the unit square. A central box yields
    /// CENTER; outside it the two diagonals split the square into four
    /// wedges. Degenerate rectangles classify as CENTER.
    pub fn get_location(rect: &Rect, x: f64, y: f64, rtl: bool) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::Center;
        }

        let nx = (x - rect.x) / rect.width;
        let ny = (y - rect.y) / rect.height;

        if nx > CENTER_MIN && nx < CENTER_MAX && ny > CENTER_MIN && ny < CENTER_MAX {
            return Self::Center;
        }

        // Below the main diagonal / below the anti-diagonal
        let below_main = ny >= nx;
        let below_anti = ny >= 1.0 - nx;

        let physical = match (below_main, below_anti) {
            (true, true) => Self::Bottom,
            (true, false) => Self::Left,
            (false, true) => Self::Right,
            (false, false) => Self::Top,
        };

        physical.mirror(rtl)
    }

    /// The part of `rect` a panel docked at this location would occupy.
    pub fn get_dock_rect(self, rect: &Rect, rtl: bool) -> Rect {
        let half_w = rect.width / 2.0;
        let half_h = rect.height / 2.0;
        match self.mirror(rtl) {
            Self::Top => Rect::new(rect.x, rect.y, rect.width, half_h),
            Self::Bottom => Rect::new(rect.x, rect.bottom() - half_h, rect.width, half_h),
            Self::Left => Rect::new(rect.x, rect.y, half_w, rect.height),
            Self::Right => Rect::new(rect.right() - half_w, rect.y, half_w, rect.height),
            Self::Center => *rect,
        }
    }

    /// Split `rect` into the docked part of the given `size` and the remainder.
    ///
    /// CENTER does not split: the docked part is the whole rectangle and the
    /// remainder is empty.
    pub fn split(self, rect: &Rect, size: f64, rtl: bool) -> (Rect, Rect) {
        let size = size.max(0.0);
        match self.mirror(rtl) {
            Self::Top => (
                Rect::new(rect.x, rect.y, rect.width, size),
                Rect::new(rect.x, rect.y + size, rect.width, rect.height - size),
            ),
            Self::Bottom => (
                Rect::new(rect.x, rect.bottom() - size, rect.width, size),
                Rect::new(rect.x, rect.y, rect.width, rect.height - size),
            ),
            Self::Left => (
                Rect::new(rect.x, rect.y, size, rect.height),
                Rect::new(rect.x + size, rect.y, rect.width - size, rect.height),
            ),
            Self::Right => (
                Rect::new(rect.right() - size, rect.y, size, rect.height),
                Rect::new(rect.x, rect.y, rect.width - size, rect.height),
            ),
            Self::Center => (*rect, Rect::empty()),
        }
    }
}

impl std::fmt::Display for DockLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_get_location_mirrors_horizontally() {
        let rect = square();
        assert_eq!(DockLocation::get_location(&rect, 10.0, 50.0, false), DockLocation::Left);
        assert_eq!(DockLocation::get_location(&rect, 10.0, 50.0, true), DockLocation::Right);
        assert_eq!(DockLocation::get_location(&rect, 90.0, 50.0, false), DockLocation::Right);
        assert_eq!(DockLocation::get_location(&rect, 90.0, 50.0, true), DockLocation::Left);
    }

    #[test]
    fn test_get_location_vertical_and_center_ignore_rtl() {
        let rect = square();
        for rtl in [false, true] {
            assert_eq!(DockLocation::get_location(&rect, 50.0, 10.0, rtl), DockLocation::Top);
            assert_eq!(DockLocation::get_location(&rect, 50.0, 90.0, rtl), DockLocation::Bottom);
            assert_eq!(DockLocation::get_location(&rect, 50.0, 50.0, rtl), DockLocation::Center);
        }
    }

    #[test]
    fn test_degenerate_rect_is_center() {
        let rect = Rect::new(0.0, 0.0, 0.0, 100.0);
        assert_eq!(DockLocation::get_location(&rect, 0.0, 10.0, false), DockLocation::Center);
    }

    #[test]
    fn test_get_dock_rect_mirrors_left_right() {
        let r = square();

        let left_ltr = DockLocation::Left.get_dock_rect(&r, false);
        assert_eq!((left_ltr.x, left_ltr.width), (0.0, 50.0));

        let left_rtl = DockLocation::Left.get_dock_rect(&r, true);
        assert_eq!((left_rtl.x, left_rtl.width), (50.0, 50.0));

        let right_ltr = DockLocation::Right.get_dock_rect(&r, false);
        assert_eq!((right_ltr.x, right_ltr.width), (50.0, 50.0));

        let right_rtl = DockLocation::Right.get_dock_rect(&r, true);
        assert_eq!((right_rtl.x, right_rtl.width), (0.0, 50.0));
    }

    #[test]
    fn test_get_dock_rect_vertical_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 60.0);
        for rtl in [false, true] {
            assert_eq!(DockLocation::Top.get_dock_rect(&r, rtl), Rect::new(10.0, 20.0, 100.0, 30.0));
            assert_eq!(DockLocation::Bottom.get_dock_rect(&r, rtl), Rect::new(10.0, 50.0, 100.0, 30.0));
            assert_eq!(DockLocation::Center.get_dock_rect(&r, rtl), r);
        }
    }

    #[test]
    fn test_split() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0);
        let (docked, rest) = DockLocation::Left.split(&r, 50.0, false);
        assert_eq!(docked, Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(rest, Rect::new(50.0, 0.0, 150.0, 100.0));

        let (docked, rest) = DockLocation::Left.split(&r, 50.0, true);
        assert_eq!(docked, Rect::new(150.0, 0.0, 50.0, 100.0));
        assert_eq!(rest, Rect::new(0.0, 0.0, 150.0, 100.0));

        let (docked, rest) = DockLocation::Bottom.split(&r, 30.0, false);
        assert_eq!(docked, Rect::new(0.0, 70.0, 200.0, 30.0));
        assert_eq!(rest, Rect::new(0.0, 0.0, 200.0, 70.0));
    }

    #[test]
    fn test_names_and_metadata() {
        for loc in DockLocation::ALL {
            assert_eq!(DockLocation::from_name(loc.name()), Some(loc));
            assert_eq!(loc.reflect().reflect(), loc);
        }
        assert_eq!(DockLocation::from_name("middle"), None);
        assert_eq!(DockLocation::Right.index_plus(), 1);
        assert_eq!(DockLocation::Top.index_plus(), 0);
        assert_eq!(DockLocation::Left.orientation(), Orientation::Horizontal);
        assert_eq!(
            serde_json::to_string(&DockLocation::Center).unwrap(),
            "\"center\""
        );
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0..500.0f64, -500.0..500.0f64, 1.0..1000.0f64, 1.0..1000.0f64)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_location_mirrors_between_directions(
            r in rect_strategy(),
            fx in 0.0..1.0f64,
            fy in 0.0..1.0f64,
        ) {
            let x = r.x + fx * r.width;
            let y = r.y + fy * r.height;
            let ltr = DockLocation::get_location(&r, x, y, false);
            let rtl = DockLocation::get_location(&r, x, y, true);
            match ltr {
                DockLocation::Left => prop_assert_eq!(rtl, DockLocation::Right),
                DockLocation::Right => prop_assert_eq!(rtl, DockLocation::Left),
                other => prop_assert_eq!(rtl, other),
            }
        }

        #[test]
        fn prop_dock_rect_mirroring_is_involution(r in rect_strategy()) {
            prop_assert_eq!(
                DockLocation::Left.get_dock_rect(&r, false).x,
                DockLocation::Right.get_dock_rect(&r, true).x
            );
            prop_assert_eq!(
                DockLocation::Right.get_dock_rect(&r, false).x,
                DockLocation::Left.get_dock_rect(&r, true).x
            );
            for loc in DockLocation::ALL {
                prop_assert_eq!(loc.mirror(true).mirror(true), loc);
                prop_assert_eq!(
                    loc.mirror(true).get_dock_rect(&r, true),
                    loc.get_dock_rect(&r, false)
                );
            }
        }

        #[test]
        fn prop_dock_rect_center_classifies_back(r in rect_strategy(), rtl in any::<bool>()) {
            for loc in DockLocation::ALL {
                let (cx, cy) = loc.get_dock_rect(&r, rtl).center();
                prop_assert_eq!(DockLocation::get_location(&r, cx, cy, rtl), loc);
            }
        }
    }
}
