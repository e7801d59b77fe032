//! Sample acquisition module
//!
//! Abstracts "a source of sample batches" so the scoring engine never
//! depends on where records come from: local JSON/CSV files, stdin, a remote
//! HTTP endpoint, or a primary source with a local fallback.

mod csv_parser;
mod remote;
mod source;

pub use csv_parser::parse_csv;
pub use remote::{FallbackSource, HttpSource};
pub use source::*;
