use crate::models::{SentimentLabel, SentimentResult, SentimentScores};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Compound score at or above this is labeled Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below this is labeled Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Lexicon-backed sentiment scorer.
///
/// Wraps a VADER intensity analyzer. The analyzer's lexicon is loaded once;
/// the scorer is constructed at startup and shared read-only across all
/// request handlers. Scoring is CPU-bound, holds no mutable state and is
/// safe to call concurrently without synchronization.
pub struct Scorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Scorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score a single text.
    ///
    /// Never fails: empty input is valid and yields the model's zero scores,
    /// which map to a Neutral label with zero confidence.
    pub fn score(&self, text: &str) -> SentimentResult {
        let polarity = self.analyzer.polarity_scores(text);

        let scores = SentimentScores {
            neg: polarity.get("neg").copied().unwrap_or(0.0),
            neu: polarity.get("neu").copied().unwrap_or(0.0),
            pos: polarity.get("pos").copied().unwrap_or(0.0),
            compound: polarity.get("compound").copied().unwrap_or(0.0),
        };

        SentimentResult {
            text: text.to_string(),
            label: label_for(scores.compound),
            confidence: scores.compound.abs(),
            scores,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a compound score to a polarity label using the fixed thresholds.
#[inline]
pub fn label_for(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
