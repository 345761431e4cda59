//! Splitter drag protocol
//!
//! A drag over the splitter at logical `index` of a row (between children
//! `index - 1` and `index`) goes through three calls:
//!
//! - [`splitter_initials`] once at drag start, capturing the child sizes and
//!   the splitter's physical position,
//! - [`splitter_bounds`] for the physical range the splitter may travel,
//! - [`calculate_split`] for every pointer move, turning the pointer position
//!   into new child weights relative to the captured snapshot.
//!
//! Positions are physical: under right-to-left layout the pointer moves along
//! a horizontal axis that runs against logical child order, so the pointer
//! delta is reflected before it is applied. Dragging toward a child always
//! shrinks it, whatever the reading direction.

use crate::{LayoutError, Result};
use dock_model::{Model, NodeId, Orientation, Rect, SizeLimits};
use serde::{Deserialize, Serialize};

/// State captured at the start of a splitter drag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitterInitials {
    /// Main-axis size of every child, in logical order
    pub initial_sizes: Vec<f64>,
    /// Total of `initial_sizes`
    pub sum: f64,
    /// Physical main-axis coordinate of the splitter's leading edge
    pub start_position: f64,
}

/// What the splitter math needs to know about a row
struct RowGeometry {
    id: NodeId,
    orientation: Orientation,
    /// Horizontal row of a right-to-left model
    mirrored: bool,
    splitter_size: f64,
    rect: Option<Rect>,
    children: Vec<ChildGeometry>,
}

struct ChildGeometry {
    id: NodeId,
    rect: Option<Rect>,
    limits: SizeLimits,
}

impl RowGeometry {
    fn load<Q: AsRef<str> + ?Sized>(model: &Model, row: &Q, index: usize) -> Result<Self> {
        if !model.limits_valid() {
            return Err(LayoutError::ConstraintsStale);
        }

        let node = model.get_node(row)?;
        if !node.is_row() {
            return Err(LayoutError::NotARow(node.id().clone()));
        }

        let child_count = node.children().len();
        if index == 0 || index >= child_count {
            return Err(LayoutError::InvalidSplitterIndex {
                row: node.id().clone(),
                index,
                child_count,
            });
        }

        let mut children = Vec::with_capacity(child_count);
        for child in node.children() {
            let child = model.get_node(child)?;
            children.push(ChildGeometry {
                id: child.id().clone(),
                rect: child.rect(),
                limits: *child.limits(),
            });
        }

        let orientation = model.orientation_of(node.id())?;
        Ok(Self {
            id: node.id().clone(),
            orientation,
            mirrored: model.is_rtl() && orientation.is_horizontal(),
            splitter_size: model.splitter_size(),
            rect: node.rect(),
            children,
        })
    }

    fn child_rect(&self, index: usize) -> Result<Rect> {
        let child = &self.children[index];
        child
            .rect
            .ok_or_else(|| LayoutError::GeometryNotComputed(child.id.clone()))
    }

    /// Logical indices of the neighbours of splitter `index` in physical
    /// order: the one on the leading side first.
    fn physical_pair(&self, index: usize) -> (usize, usize) {
        if self.mirrored {
            (index, index - 1)
        } else {
            (index - 1, index)
        }
    }

    fn min(&self, index: usize) -> f64 {
        self.children[index].limits.min(self.orientation)
    }

    fn max(&self, index: usize) -> f64 {
        self.children[index].limits.max(self.orientation)
    }

    /// Range the leading neighbour may take so neither neighbour leaves its limits
    fn leading_range(&self, leading: usize, trailing: usize, pair_total: f64) -> (f64, f64) {
        let lo = self.min(leading).max(pair_total - self.max(trailing));
        let hi = self.max(leading).min(pair_total - self.min(trailing));
        (lo, hi.max(lo))
    }
}

/// Capture the drag snapshot for the splitter at logical `index` of `row`.
///
/// `start_position` is physical: the trailing edge of whichever neighbour
/// sits first on screen, so under right-to-left layout it is the right edge
/// of child `index` rather than of child `index - 1`.
pub fn splitter_initials<Q: AsRef<str> + ?Sized>(
    model: &Model,
    row: &Q,
    index: usize,
) -> Result<SplitterInitials> {
    let geometry = RowGeometry::load(model, row, index)?;

    let mut initial_sizes = Vec::with_capacity(geometry.children.len());
    for i in 0..geometry.children.len() {
        initial_sizes.push(geometry.child_rect(i)?.size(geometry.orientation));
    }
    let sum = initial_sizes.iter().sum();

    let (leading, _) = geometry.physical_pair(index);
    let start_position = geometry.child_rect(leading)?.end(geometry.orientation);

    tracing::debug!(
        target: "layout_engine::splitter",
        row = %geometry.id,
        index,
        sum,
        start_position,
        mirrored = geometry.mirrored,
        "drag started"
    );

    Ok(SplitterInitials {
        initial_sizes,
        sum,
        start_position,
    })
}

/// Physical `(min, max)` range of the splitter's leading edge.
///
/// Only the two neighbours of the splitter take part: the splitter stops
/// where either of them would drop below its minimum or grow past its
/// maximum.
pub fn splitter_bounds<Q: AsRef<str> + ?Sized>(
    model: &Model,
    row: &Q,
    index: usize,
) -> Result<(f64, f64)> {
    let geometry = RowGeometry::load(model, row, index)?;
    let (leading, trailing) = geometry.physical_pair(index);
    let leading_rect = geometry.child_rect(leading)?;
    let trailing_rect = geometry.child_rect(trailing)?;

    let o = geometry.orientation;
    let pair_total = leading_rect.size(o) + trailing_rect.size(o);
    let (lo, hi) = geometry.leading_range(leading, trailing, pair_total);
    let origin = leading_rect.start(o);

    Ok((origin + lo, origin + hi))
}

/// Weights for the row's children after moving the splitter to `pointer`.
///
/// `initial_sizes`, `sum` and `start_position` must come unchanged from the
/// [`splitter_initials`] snapshot of the same drag. The logical delta is
/// `pointer - start_position`, reflected through `start_position` for
/// mirrored rows. It grows child `index - 1` and shrinks child `index` by the
/// same amount, clamped so both stay within their limits; other children
/// keep their size. Weights are `size * 100 / sum`.
pub fn calculate_split<Q: AsRef<str> + ?Sized>(
    model: &Model,
    row: &Q,
    index: usize,
    pointer: f64,
    initial_sizes: &[f64],
    sum: f64,
    start_position: f64,
) -> Result<Vec<f64>> {
    let geometry = RowGeometry::load(model, row, index)?;
    if initial_sizes.len() != geometry.children.len() {
        return Err(LayoutError::SnapshotMismatch {
            expected: geometry.children.len(),
            actual: initial_sizes.len(),
        });
    }

    let delta = if geometry.mirrored {
        start_position - pointer
    } else {
        pointer - start_position
    };

    let before = index - 1;
    let after = index;
    let pair_total = initial_sizes[before] + initial_sizes[after];
    let (lo, hi) = geometry.leading_range(before, after, pair_total);

    let mut sizes = initial_sizes.to_vec();
    sizes[before] = (initial_sizes[before] + delta).min(hi).max(lo);
    sizes[after] = pair_total - sizes[before];

    let weights: Vec<f64> = if sum > 0.0 {
        sizes.iter().map(|size| size * 100.0 / sum).collect()
    } else {
        vec![0.0; sizes.len()]
    };

    tracing::trace!(
        target: "layout_engine::splitter",
        row = %geometry.id,
        index,
        pointer,
        delta,
        ?weights,
        "split calculated"
    );
    Ok(weights)
}

/// Store `weights` on the children of `row`, in logical order.
///
/// Weights do not affect size limits, so no constraint pass is needed;
/// run [`set_rect`](crate::set_rect) again to see the new geometry.
pub fn apply_weights<Q: AsRef<str> + ?Sized>(
    model: &mut Model,
    row: &Q,
    weights: &[f64],
) -> Result<()> {
    let node = model.get_node(row)?;
    if !node.is_row() {
        return Err(LayoutError::NotARow(node.id().clone()));
    }
    let children = node.children().to_vec();
    if weights.len() != children.len() {
        return Err(LayoutError::SnapshotMismatch {
            expected: children.len(),
            actual: weights.len(),
        });
    }

    for (child, &weight) in children.iter().zip(weights) {
        model.get_node_mut(child)?.set_weight(weight);
    }
    Ok(())
}

/// Physical rectangle of the splitter at logical `index`, for hit testing
/// and painting.
pub fn splitter_rect<Q: AsRef<str> + ?Sized>(model: &Model, row: &Q, index: usize) -> Result<Rect> {
    let geometry = RowGeometry::load(model, row, index)?;
    let row_rect = geometry
        .rect
        .ok_or_else(|| LayoutError::GeometryNotComputed(geometry.id.clone()))?;
    let (leading, _) = geometry.physical_pair(index);
    let start = geometry.child_rect(leading)?.end(geometry.orientation);

    Ok(match geometry.orientation {
        Orientation::Horizontal => Rect::new(start, row_rect.y, geometry.splitter_size, row_rect.height),
        Orientation::Vertical => Rect::new(row_rect.x, start, row_rect.width, geometry.splitter_size),
    })
}
