//! Rectangle and orientation primitives

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in layout coordinates.
///
/// Width and height are never negative: constructors clamp them to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point as `(x, y)`
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Point containment; the right and bottom edges are exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Extent along the main axis of `orientation`
    pub fn size(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Origin along the main axis of `orientation`
    pub fn start(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// End coordinate along the main axis of `orientation`
    pub fn end(&self, orientation: Orientation) -> f64 {
        self.start(orientation) + self.size(orientation)
    }

    /// Shrink the rectangle by the given insets
    pub fn remove_insets(&self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self::new(
            self.x + left,
            self.y + top,
            self.width - left - right,
            self.height - top - bottom,
        )
    }

    /// Express this rectangle in the coordinate space whose origin is `other`'s top-left
    pub fn relative_to(&self, other: &Rect) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.width, self.height)
    }

    /// Same-sized rectangle centered inside `outer`
    pub fn center_in(&self, outer: &Rect) -> Self {
        Self::new(
            outer.x + (outer.width - self.width) / 2.0,
            outer.y + (outer.height - self.height) / 2.0,
            self.width,
            self.height,
        )
    }

    /// Snap all coordinates to a multiple of `round`
    pub fn snap(&self, round: f64) -> Self {
        if round <= 0.0 {
            return *self;
        }
        let snap = |v: f64| (v / round).round() * round;
        Self::new(snap(self.x), snap(self.y), snap(self.width), snap(self.height))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(Rect: x={}, y={}, w={}, h={})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Axis along which a row arranges its children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children laid out left to right (right to left when mirrored)
    #[default]
    Horizontal,
    /// Children stacked top to bottom
    Vertical,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}
