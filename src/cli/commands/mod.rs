//! CLI command handlers for `cooked`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod interactive;
pub mod list;
pub mod score;
