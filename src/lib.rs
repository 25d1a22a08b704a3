//! Library for The Cooked Calculator
//! Scores a degree, grade and postgraduate choice for AI job displacement risk.

pub mod core;
pub mod logger;

pub use crate::core::{catalog, config, get_version, models, report, score, share, tier};
