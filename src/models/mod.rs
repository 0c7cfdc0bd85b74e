// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{SentimentLabel, SentimentResult, SentimentScores};
pub use requests::AnalyzeRequest;
pub use responses::{BatchResponse, ErrorResponse, HealthResponse};
