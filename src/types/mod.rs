//! Shared data structures for the water quality pipeline
//!
//! - `Sample`: one location's measurements as received from a client or source
//! - `RiskLevel`: the five ordered risk tiers
//! - `AnalysisResult` / `AnalysisReport`: scored output returned to the dashboard

mod sample;
mod risk;
mod report;

pub use sample::*;
pub use risk::*;
pub use report::*;
