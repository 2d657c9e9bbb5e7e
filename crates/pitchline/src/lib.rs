//! # pitchline
//!
//! Evenly spaced groups of points along a straight line segment.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod geometry;
pub mod grouping;

// Re-export common types at crate root for convenience.
pub use geometry::{Point, Segment};
pub use grouping::{Group, GroupLayout, GroupingError, MAX_POINTS};
