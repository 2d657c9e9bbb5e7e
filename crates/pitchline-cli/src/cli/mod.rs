//! CLI command implementations.
//!
//! - `demo` - Group the reference diagonal segment
//! - `group` - Group a segment given on the command line
//! - `recipe` - Group every segment listed in a YAML recipe

pub mod common;
pub mod demo;
pub mod group;
pub mod png;
pub mod recipe;

pub use demo::cmd_demo;
pub use group::cmd_group;
pub use recipe::cmd_recipe;
