//! Minimum/maximum size propagation
//!
//! A bottom-up pass that resolves the size limits of every node. Rows add
//! their children's limits along their own axis (plus the splitters between
//! them) and take the largest child limits across it. Tabsets use their
//! declared limits, falling back to the global tabset bounds.

use crate::Result;
use dock_model::{Model, NodeId, NodeType, Orientation, SizeLimits};

/// Recompute cached size limits for the whole tree.
///
/// Must run after the model is built and after every structural change,
/// before [`set_rect`](crate::set_rect) or any splitter query.
pub fn calc_min_max_size(model: &mut Model) -> Result<()> {
    let root = model.root_id().clone();
    let orientation = model.orientation_of(&root)?;
    let limits = calc_node(model, &root, orientation)?;
    model.mark_limits_valid();

    tracing::debug!(
        target: "layout_engine::constraints",
        min_width = limits.min_width,
        min_height = limits.min_height,
        max_width = limits.max_width,
        max_height = limits.max_height,
        "size limits resolved"
    );
    Ok(())
}

/// Resolve limits for `id`, laid out as a row of `orientation` if it is one
fn calc_node(model: &mut Model, id: &NodeId, orientation: Orientation) -> Result<SizeLimits> {
    let node = model.get_node(id)?;
    let children = node.children().to_vec();
    let declared = *node.declared();

    let limits = match node.node_type() {
        NodeType::Row => {
            let mut child_limits = Vec::with_capacity(children.len());
            for child in &children {
                child_limits.push(calc_node(model, child, orientation.flip())?);
            }
            let combined = combine_row(&child_limits, orientation, model.splitter_size());
            declared.apply(combined)
        }
        NodeType::TabSet => {
            let config = model.config();
            let fallback = SizeLimits::new(
                config.tab_set_min_width,
                config.tab_set_min_height,
                config.tab_set_max_width,
                config.tab_set_max_height,
            );
            let limits = declared.or(fallback);
            for tab in &children {
                model.get_node_mut(tab)?.set_limits(limits);
            }
            limits
        }
        NodeType::Tab => declared.or(SizeLimits::unbounded()),
    };

    model.get_node_mut(id)?.set_limits(limits);

    tracing::trace!(
        target: "layout_engine::constraints",
        node = %id,
        ?orientation,
        min_width = limits.min_width,
        min_height = limits.min_height,
        max_width = limits.max_width,
        max_height = limits.max_height,
        "node limits"
    );
    Ok(limits)
}

/// Combine child limits for a row: additive along `orientation`, the largest
/// child value across it. An empty row is unconstrained.
fn combine_row(children: &[SizeLimits], orientation: Orientation, splitter_size: f64) -> SizeLimits {
    if children.is_empty() {
        return SizeLimits::unbounded();
    }

    let splitters = splitter_size * (children.len() - 1) as f64;
    let main_min: f64 = children.iter().map(|c| c.min(orientation)).sum::<f64>() + splitters;
    let main_max: f64 = children.iter().map(|c| c.max(orientation)).sum::<f64>() + splitters;

    let cross = orientation.flip();
    let cross_min = children.iter().map(|c| c.min(cross)).fold(0.0, f64::max);
    let cross_max = children.iter().map(|c| c.max(cross)).fold(0.0, f64::max);

    match orientation {
        Orientation::Horizontal => SizeLimits::new(main_min, cross_min, main_max, cross_max),
        Orientation::Vertical => SizeLimits::new(cross_min, main_min, cross_max, main_max),
    }
}
