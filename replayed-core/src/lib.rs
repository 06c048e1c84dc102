//! # replayed-core
//!
//! Core library for replayed - listening statistics from a personal
//! streaming-history export.
//!
//! This library provides:
//! - The play-event domain model
//! - Ingestion of JSON history files
//! - Aggregation into ranked frequency tables
//! - Report rendering
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! The whole computation is a one-shot batch pipeline:
//!
//! ```text
//! load → (optional) year filter → aggregators → top-N ranking → render
//! ```
//!
//! Every aggregation pass is an independent pure fold over the same
//! immutable event sequence; nothing is persisted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use replayed_core::analytics::{ListeningSummary, SummaryOptions};
//! use replayed_core::{ingest, report, Config};
//!
//! let config = Config::load().expect("failed to load config");
//! let events = ingest::load_history(&["history.json"]).expect("failed to load history");
//! let summary = ListeningSummary::generate(&events, &SummaryOptions::default());
//! let text = report::render_top_stats(&summary, &config.report);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use types::PlayEvent;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod report;
pub mod types;
