//! CSV question set loader.
//!
//! Loads two-column `question,answer` files into a [`QuestionSet`] and
//! validates them. Rows with any other field count are skipped; a
//! parser-level error ends reading and keeps what was loaded so far.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::QuizError;
use crate::model::{Question, QuestionSet};

/// What happened while reading a question file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Records handed back by the CSV reader, kept or not.
    pub rows_read: usize,
    /// Records dropped because they did not have exactly two fields.
    pub rows_skipped: usize,
    /// Reading stopped on a parser error before the end of input.
    pub stopped_early: bool,
}

/// Load a question set from a CSV file.
pub fn load_question_set(path: &Path) -> Result<QuestionSet, QuizError> {
    load_question_set_with_stats(path).map(|(set, _)| set)
}

/// Load a question set from a CSV file, also returning load statistics.
pub fn load_question_set_with_stats(path: &Path) -> Result<(QuestionSet, LoadStats), QuizError> {
    let file = File::open(path).map_err(|source| QuizError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let (set, stats) = parse_question_set_reader(file);
    tracing::debug!(
        path = %path.display(),
        questions = set.len(),
        skipped = stats.rows_skipped,
        "loaded question set"
    );
    Ok((set, stats))
}

/// Parse a CSV string into a question set (useful for testing).
pub fn parse_question_set_str(content: &str) -> (QuestionSet, LoadStats) {
    parse_question_set_reader(content.as_bytes())
}

/// Parse CSV from any reader. Never fails: parse errors end input.
pub fn parse_question_set_reader<R: Read>(reader: R) -> (QuestionSet, LoadStats) {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut questions = Vec::new();
    let mut stats = LoadStats::default();

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("stopped reading questions: {e}");
                stats.stopped_early = true;
                break;
            }
        };
        stats.rows_read += 1;

        match (record.len(), record.get(0), record.get(1)) {
            (2, Some(prompt), Some(answer)) => questions.push(Question::new(prompt, answer)),
            (fields, ..) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                tracing::debug!(line, fields, "skipping row without exactly two fields");
                stats.rows_skipped += 1;
            }
        }
    }

    (QuestionSet::new(questions), stats)
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based index of the question (if applicable).
    pub index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common issues.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.is_empty() {
        warnings.push(ValidationWarning {
            index: None,
            message: "question set is empty".into(),
        });
    }

    let mut seen_prompts = std::collections::HashSet::new();
    for (index, q) in set.iter().enumerate() {
        if !seen_prompts.insert(q.prompt.as_str()) {
            warnings.push(ValidationWarning {
                index: Some(index),
                message: format!("duplicate question: {}", q.prompt),
            });
        }
    }

    for (index, q) in set.iter().enumerate() {
        if q.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                index: Some(index),
                message: "question text is empty".into(),
            });
        }
        // An empty expected answer is matched by a blank line or end of input.
        if q.answer.is_empty() {
            warnings.push(ValidationWarning {
                index: Some(index),
                message: "expected answer is empty".into(),
            });
        }
    }

    warnings
}
