//! Top-down rectangle assignment
//!
//! A row splits its main-axis extent, minus the splitters, among its children
//! in proportion to their weights while keeping every child inside its size
//! limits. Children always span the row's full cross-axis extent. Horizontal
//! rows of a right-to-left model place their children in reverse logical
//! order; vertical rows are never mirrored.

use crate::{LayoutError, Result};
use dock_model::{Model, NodeId, NodeType, Orientation, Rect};

/// Assign `rect` to `id` and lay out its subtree.
///
/// Rows distribute the rectangle among their children, tabsets hand the same
/// rectangle to each of their tabs, and tabs just store it. Requires size
/// limits from [`calc_min_max_size`](crate::calc_min_max_size).
pub fn set_rect<Q: AsRef<str> + ?Sized>(model: &mut Model, id: &Q, rect: Rect) -> Result<()> {
    if !model.limits_valid() {
        return Err(LayoutError::ConstraintsStale);
    }
    let id = model.get_node(id)?.id().clone();
    layout_node(model, &id, rect)
}

fn layout_node(model: &mut Model, id: &NodeId, rect: Rect) -> Result<()> {
    let node = model.get_node_mut(id)?;
    node.set_rect(rect);
    let children = node.children().to_vec();

    match node.node_type() {
        NodeType::Row => layout_row(model, id, &children, rect),
        NodeType::TabSet => {
            for tab in &children {
                model.get_node_mut(tab)?.set_rect(rect);
            }
            Ok(())
        }
        NodeType::Tab => Ok(()),
    }
}

fn layout_row(model: &mut Model, id: &NodeId, children: &[NodeId], rect: Rect) -> Result<()> {
    if children.is_empty() {
        return Ok(());
    }

    let orientation = model.orientation_of(id)?;
    let mirrored = model.is_rtl() && orientation.is_horizontal();
    let splitter = model.splitter_size();
    let splitters = splitter * (children.len() - 1) as f64;
    let available = (rect.size(orientation) - splitters).max(0.0);

    let mut items = Vec::with_capacity(children.len());
    for child in children {
        let node = model.get_node(child)?;
        let limits = node.limits();
        items.push(Item {
            weight: node.weight(),
            min: limits.min(orientation),
            max: limits.max(orientation),
        });
    }

    let sizes = distribute(&items, available).ok_or_else(|| {
        LayoutError::DistributionDidNotConverge {
            row: id.clone(),
            iterations: max_iterations(items.len()),
        }
    })?;

    let mut physical: Vec<usize> = (0..children.len()).collect();
    if mirrored {
        physical.reverse();
    }

    let mut cursor = rect.start(orientation);
    for index in physical {
        let size = sizes[index];
        let child_rect = match orientation {
            Orientation::Horizontal => Rect::new(cursor, rect.y, size, rect.height),
            Orientation::Vertical => Rect::new(rect.x, cursor, rect.width, size),
        };
        cursor += size + splitter;
        layout_node(model, &children[index], child_rect)?;
    }

    tracing::trace!(
        target: "layout_engine::distribute",
        row = %id,
        ?orientation,
        mirrored,
        available,
        ?sizes,
        "row laid out"
    );
    Ok(())
}

/// Weight and main-axis limits of one row child
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub weight: f64,
    pub min: f64,
    pub max: f64,
}

fn max_iterations(count: usize) -> usize {
    count + 2
}

/// Split `available` among `items` by weight, clamped to each item's limits.
///
/// Each round shares what is left among the unfrozen items in proportion to
/// their weight (equally when those weights sum to zero), then freezes the
/// items whose share falls outside their limits. When the net correction is
/// positive only the items below their minimum freeze, when negative only the
/// items above their maximum, otherwise all violators. A round that freezes
/// nothing is final.
///
/// Returns `None` if the rounds do not settle, which cannot happen for a
/// finite item list since every unsettled round freezes at least one item.
/// When the limits cannot all be met the items end at their bounds and the
/// total differs from `available`.
pub fn distribute(items: &[Item], available: f64) -> Option<Vec<f64>> {
    let mut sizes = vec![0.0; items.len()];
    let mut frozen = vec![false; items.len()];

    for _ in 0..max_iterations(items.len()) {
        let free: Vec<usize> = (0..items.len()).filter(|&i| !frozen[i]).collect();
        if free.is_empty() {
            return Some(sizes);
        }

        let used: f64 = (0..items.len()).filter(|&i| frozen[i]).map(|i| sizes[i]).sum();
        let remaining = available - used;
        let total_weight: f64 = free.iter().map(|&i| items[i].weight).sum();

        for &i in &free {
            sizes[i] = if total_weight > 0.0 {
                remaining * items[i].weight / total_weight
            } else {
                remaining / free.len() as f64
            };
        }

        let mut violation = 0.0;
        let mut clamped = Vec::with_capacity(free.len());
        for &i in &free {
            let target = sizes[i].min(items[i].max).max(items[i].min);
            violation += target - sizes[i];
            clamped.push((i, target));
        }

        let mut froze_any = false;
        for (i, target) in clamped {
            let below = target > sizes[i];
            let above = target < sizes[i];
            let freeze = if violation > 0.0 {
                below
            } else if violation < 0.0 {
                above
            } else {
                below || above
            };
            if freeze {
                sizes[i] = target;
                frozen[i] = true;
                froze_any = true;
            }
        }

        if !froze_any {
            return Some(sizes);
        }
    }

    None
}
