//! SentimentSense - sentiment scoring service over HTTP
//!
//! Wraps a lexicon-based (VADER) polarity model behind two endpoints:
//! single-text analysis and CSV batch analysis. The model is loaded once at
//! startup and shared read-only across request handlers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use self::core::{label_for, score_rows, BatchError, Scorer};
pub use self::models::{BatchResponse, SentimentLabel, SentimentResult, SentimentScores};
