use serde::{Deserialize, Serialize};

/// Polarity label derived from the compound score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

/// Raw sub-scores from the lexicon model.
///
/// Field names match the VADER wire format: `neg`, `neu` and `pos` are the
/// proportions of negative, neutral and positive content, `compound` is the
/// normalized overall polarity in [-1, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// One scored text.
///
/// Built fresh per request and discarded after serialization; nothing is
/// persisted. `confidence` is always the absolute value of
/// `scores.compound`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub text: String,
    pub label: SentimentLabel,
    pub confidence: f64,
    pub scores: SentimentScores,
}
