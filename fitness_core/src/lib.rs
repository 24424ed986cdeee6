#![forbid(unsafe_code)]

//! Core domain model and calculations for the workout statistics system.
//!
//! This crate provides:
//! - Domain types (sensor packages, workouts, summaries)
//! - Package decoding
//! - Distance, speed and calorie formulas
//! - Report formatting
//! - Package sources (built-in samples, JSONL, CSV)

pub mod types;
pub mod error;
pub mod package;
pub mod stats;
pub mod report;
pub mod source;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use package::decode_package;
pub use stats::{calories_kcal, distance_km, mean_speed_kmh, summarize};
pub use report::format_summary;
pub use source::{builtin_packages, load_packages};
pub use config::Config;
