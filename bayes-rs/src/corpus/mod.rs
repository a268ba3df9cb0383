//! Training-corpus ingestion
//!
//! Parses labeled records from the tab-separated corpus format: each line is
//! `label<TAB>message`, where the label is the literal "ham" or a spam label
//! (anything that is not exactly "ham" counts as spam). Malformed lines are
//! skipped with a warning so a single bad line never aborts a training run.
//! The model itself never touches files or streams; corpus acquisition
//! lives entirely here.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::classifier::{Label, TrainingRecord};
use crate::error::{BayesError, Result};

/// Parse a single `label<TAB>message` line
///
/// The line must contain exactly one tab: no tab means the label/body
/// structure is missing, and a second tab means the body itself contains a
/// tab, which the format does not support. The body is everything after the
/// tab, internal spaces preserved.
pub fn parse_record(line: &str) -> Result<TrainingRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 2 {
        return Err(BayesError::MalformedRecord(format!(
            "expected exactly one tab separator, found {}",
            fields.len() - 1
        )));
    }

    Ok(TrainingRecord::new(Label::parse(fields[0]), fields[1]))
}

/// Read labeled records line by line from any buffered reader
///
/// Malformed lines are skipped and logged; blank lines are ignored. An I/O
/// failure while reading aborts with the underlying error.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<TrainingRecord>> {
    let mut records = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match parse_record(&line) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed record on line {}: {}", line_no + 1, e),
        }
    }

    Ok(records)
}

/// Load a training corpus from a file
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingRecord>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ham_record() {
        let record = parse_record("ham\tI love you").unwrap();
        assert_eq!(record.label, Label::Ham);
        assert_eq!(record.text, "I love you");
    }

    #[test]
    fn test_parse_spam_record() {
        let record = parse_record("spam\tfree prize inside").unwrap();
        assert_eq!(record.label, Label::Spam);
        assert_eq!(record.text, "free prize inside");
    }

    #[test]
    fn test_parse_preserves_internal_spaces() {
        let record = parse_record("ham\thello   there  friend").unwrap();
        assert_eq!(record.text, "hello   there  friend");
    }

    #[test]
    fn test_parse_unknown_label_is_spam() {
        let record = parse_record("junk\thello").unwrap();
        assert_eq!(record.label, Label::Spam);
    }

    #[test]
    fn test_parse_missing_tab_is_malformed() {
        let result = parse_record("ham hello world");
        assert!(matches!(result, Err(BayesError::MalformedRecord(_))));
    }

    #[test]
    fn test_parse_tab_in_body_is_malformed() {
        let result = parse_record("ham\thello\tworld");
        assert!(matches!(result, Err(BayesError::MalformedRecord(_))));
    }

    #[test]
    fn test_read_records_skips_malformed_lines() {
        let input = b"ham\thello world\nno delimiter here\nspam\tfree money\n" as &[u8];
        let records = read_records(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, Label::Ham);
        assert_eq!(records[1].label, Label::Spam);
    }

    #[test]
    fn test_read_records_skips_blank_lines() {
        let input = b"ham\thello\n\nspam\tfree\n" as &[u8];
        let records = read_records(input).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_corpus_missing_file() {
        let result = load_corpus("/nonexistent/corpus.tsv");
        assert!(matches!(result, Err(BayesError::Io(_))));
    }
}
