//! Core module: catalog loading, scoring, tiers and result rendering

pub mod catalog;
pub mod config;
pub mod models;
pub mod report;
pub mod score;
pub mod share;
pub mod tier;

/// Returns the current version of the `cooked-calculator` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
