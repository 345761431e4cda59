//! Dock Model - Layout tree structure and geometry primitives
//!
//! This crate provides the data side of the docking layout: rows, tab-sets
//! and tabs stored in an id-indexed arena, together with the rectangle,
//! orientation and dock-location primitives the layout engine works with.

mod close_type;
mod config;
mod dock_location;
mod error;
mod geometry;
mod json;
mod model;
mod node;
mod node_id;
mod tree;

pub use close_type::*;
pub use config::*;
pub use dock_location::*;
pub use error::*;
pub use geometry::*;
pub use json::*;
pub use model::*;
pub use node::*;
pub use node_id::*;
