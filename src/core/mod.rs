// Core exports
pub mod batch;
pub mod scorer;

pub use batch::{score_rows, BatchError, TEXT_COLUMN};
pub use scorer::{label_for, Scorer, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
