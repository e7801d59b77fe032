//! Application Configuration Module
//!
//! Scoring standards, HTTP server settings and the optional sample source,
//! loaded from a TOML file with built-in defaults for every value.
//!
//! ## Loading Order
//!
//! 1. `AQUASCORE_CONFIG` environment variable (path to TOML file)
//! 2. `aquascore.toml` in the current working directory
//! 3. Built-in defaults (the standard regulatory limits and weights)
//!
//! A missing file falls through to the next step. A file that exists but does
//! not parse or validate is an error and the service refuses to start.
//!
//! The loaded [`AppConfig`] is immutable; `main` wraps it in an `Arc` and
//! hands it to the API layer.

mod app_config;
pub mod defaults;
mod standards;
pub mod validation;

pub use app_config::*;
pub use standards::*;
