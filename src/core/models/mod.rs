//! Data models for the calculator

pub mod degree;
pub mod selection;

pub use degree::DegreeRecord;
pub use selection::{Grade, PostGrad, Selection};
