//! Error types for dock model operations

use crate::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Duplicate node id: {0}")]
    DuplicateId(NodeId),

    #[error("Invalid tree structure: {0}")]
    InvalidStructure(String),

    #[error("Invalid close type: {0} (expected 1, 2 or 3)")]
    InvalidCloseType(u8),

    #[error("Invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
