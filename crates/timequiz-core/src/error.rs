//! Quiz error types.
//!
//! Only failures that stop a quiz from starting are represented here.
//! Malformed rows, late answers and timeouts are absorbed by the loader and
//! the runner and never surface as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur before a quiz session starts.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question file could not be opened.
    #[error("failed to open question file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
