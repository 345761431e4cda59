//! Layout Engine - Constraint propagation, rectangle assignment, and splitter math
//!
//! This crate turns a [`dock_model::Model`] into pixel geometry. The usual
//! sequence is:
//!
//! 1. [`calc_min_max_size`] after building or restructuring the tree,
//! 2. [`set_rect`] on the root with the available area,
//! 3. during a splitter drag, [`splitter_initials`] once, then
//!    [`splitter_bounds`] and [`calculate_split`] per pointer move, and
//!    [`apply_weights`] followed by another [`set_rect`] to show the result.

mod constraints;
mod distribute;
mod error;
mod splitter;

pub use constraints::*;
pub use distribute::*;
pub use error::*;
pub use splitter::*;
