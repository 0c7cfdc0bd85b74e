use serde::{Deserialize, Serialize};

/// Form payload for single-text analysis.
///
/// `text` is required; a submission without it is rejected by the form
/// extractor before the handler runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}
