use crate::core::scorer::Scorer;
use crate::models::SentimentResult;
use thiserror::Error;

/// Header name the uploaded CSV must carry.
pub const TEXT_COLUMN: &str = "text";

/// Errors for a rejected CSV upload.
///
/// Both variants surface to the client as a structured 400 with an `error`
/// field; display strings are the wire messages.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("CSV must have a 'text' column.")]
    MissingTextColumn,
    #[error("Uploaded file could not be parsed as CSV.")]
    Malformed(#[source] csv::Error),
}

/// Score every data row of an uploaded CSV, preserving input order.
///
/// The first row is the header and must contain a `text` column; other
/// columns are ignored. Every cell is read as text, so one odd row never
/// aborts the batch: N data rows in means N results out, in the same order.
pub fn score_rows(scorer: &Scorer, data: &[u8]) -> Result<Vec<SentimentResult>, BatchError> {
    let mut reader = csv::Reader::from_reader(data);

    let text_idx = reader
        .headers()
        .map_err(BatchError::Malformed)?
        .iter()
        .position(|header| header == TEXT_COLUMN)
        .ok_or(BatchError::MissingTextColumn)?;

    let mut results = Vec::new();
    for record in reader.records() {
        let record = record.map_err(BatchError::Malformed)?;
        let text = record.get(text_idx).unwrap_or("");
        results.push(scorer.score(text));
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;

    #[test]
    fn test_missing_text_column() {
        let scorer = Scorer::new();
        let data = b"name,age\nJohn,25\nJane,30\n";

        let err = score_rows(&scorer, data).unwrap_err();
        assert!(matches!(err, BatchError::MissingTextColumn));
        assert_eq!(err.to_string(), "CSV must have a 'text' column.");
    }

    #[test]
    fn test_rows_scored_in_order() {
        let scorer = Scorer::new();
        let data = b"text\nI love this project!\nI hate this project!\nThis is neutral.\nAmazing work! Great day!\nTerrible experience bad day!\n";

        let results = score_rows(&scorer, data).unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].text, "I love this project!");
        assert_eq!(results[0].label, SentimentLabel::Positive);
        assert_eq!(results[1].label, SentimentLabel::Negative);
        assert_eq!(results[4].text, "Terrible experience bad day!");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let scorer = Scorer::new();
        let data = b"id,text,source\n1,Great work,web\n2,Awful service,app\n";

        let results = score_rows(&scorer, data).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].text, "Great work");
        assert_eq!(results[1].text, "Awful service");
    }

    #[test]
    fn test_unparseable_upload_is_rejected() {
        let scorer = Scorer::new();
        // Second record has more fields than the header row
        let data = b"text,score\ngood,1,extra\n";

        let err = score_rows(&scorer, data).unwrap_err();
        assert!(matches!(err, BatchError::Malformed(_)));
        assert_eq!(err.to_string(), "Uploaded file could not be parsed as CSV.");
    }

    #[test]
    fn test_empty_cells_are_scored() {
        let scorer = Scorer::new();
        // A blank line would be skipped entirely, a quoted empty field is a row
        let data = b"text\n\"\"\nstill here\n";

        let results = score_rows(&scorer, data).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].text, "");
        assert_eq!(results[0].label, SentimentLabel::Neutral);
    }
}
