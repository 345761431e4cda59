//! Error types for layout engine

use dock_model::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Splitter index {index} out of range for row {row} with {child_count} children")]
    InvalidSplitterIndex {
        row: NodeId,
        index: usize,
        child_count: usize,
    },

    #[error("Node {0} is not a row")]
    NotARow(NodeId),

    #[error("Geometry not computed for node {0}; run set_rect first")]
    GeometryNotComputed(NodeId),

    #[error("Size limits are stale; run calc_min_max_size after structural changes")]
    ConstraintsStale,

    #[error("Drag snapshot has {actual} sizes but the row has {expected} children")]
    SnapshotMismatch { expected: usize, actual: usize },

    #[error("Size distribution for row {row} did not settle after {iterations} iterations")]
    DistributionDidNotConverge { row: NodeId, iterations: usize },

    #[error("Model error: {0}")]
    Model(#[from] dock_model::ModelError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
