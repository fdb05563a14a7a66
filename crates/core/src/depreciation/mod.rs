//! Straight-line depreciation.

pub mod engine;
pub mod types;


pub use engine::DepreciationEngine;
pub use types::{DepreciationResult, DepreciationStatus};
