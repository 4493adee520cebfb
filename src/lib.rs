//! Deterministic lat/long backfill for the services dataset.
//!
//! Derives repeatable coordinates from each row's `zip` and `city` fields
//! instead of calling a geocoding service, so map previews get stable pins
//! without an external dependency.

pub mod config;
pub mod constants;
pub mod coords;
pub mod dataset;
pub mod enrich;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use types::Record;
