//! AquaScore: water quality scoring
//!
//! Computes a Water Quality Index (WQI) and a Heavy-metal Pollution Index
//! (HPI) for batches of per-location water samples and classifies each
//! location into a risk tier with advisory alerts.
//!
//! ## Architecture
//!
//! - **Scoring**: quality ratings, weighted WQI/HPI aggregation, risk tiers
//! - **Config**: TOML-backed regulatory limits, weights and server settings
//! - **Acquisition**: pluggable sources of sample batches (files, HTTP, stdin)
//! - **API**: Axum routes consumed by the results dashboard

pub mod acquisition;
pub mod api;
pub mod config;
pub mod scoring;
pub mod types;

pub use config::{AppConfig, ConfigError, ScoringStandards};

pub use types::{AnalysisReport, AnalysisResult, BatchSummary, RiskLevel, Sample};

pub use scoring::{analyze, classify_risk, compute_indices, quality_rating, IndexScores};

pub use acquisition::{SampleSource, SourceError};
