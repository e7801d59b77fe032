//! API route handlers
//!
//! Request handling logic for all API endpoints:
//! - Batch analysis (dashboard contract and enveloped v2)
//! - Fetch-and-analyze from the configured sample source
//! - Health and active scoring standards

mod analyze;
mod status;

pub use analyze::*;
pub use status::*;

use std::sync::Arc;
use std::time::Instant;

use crate::acquisition::SampleSource;
use crate::config::AppConfig;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Active configuration (immutable after startup)
    pub config: Arc<AppConfig>,
    /// Configured sample source, if any
    pub source: Option<Arc<dyn SampleSource>>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(config: Arc<AppConfig>, source: Option<Arc<dyn SampleSource>>) -> Self {
        Self {
            config,
            source,
            started_at: Instant::now(),
        }
    }
}
