//! Session outcome and summary formatting.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The final tally of one quiz session.
///
/// Questions that were never shown or never answered count as incorrect,
/// so `correct + incorrect == total` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Session identifier, also recorded on the session's tracing span.
    pub session_id: Uuid,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    pub correct: usize,
    pub incorrect: usize,
    /// Number of questions in the set.
    pub total: usize,
    /// Answers that arrived before the deadline.
    pub answered: usize,
    /// Whether the deadline ended the session.
    pub timed_out: bool,
    /// Wall-clock session duration in milliseconds.
    pub elapsed_ms: u64,
}

impl SessionOutcome {
    /// Build the tally for a finished session.
    pub fn tally(
        session_id: Uuid,
        started_at: DateTime<Utc>,
        total: usize,
        correct: usize,
        answered: usize,
        timed_out: bool,
        elapsed: Duration,
    ) -> Self {
        debug_assert!(correct <= answered && answered <= total);
        Self {
            session_id,
            started_at,
            correct,
            incorrect: total - correct,
            total,
            answered,
            timed_out,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Serialize the outcome as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct responses: {}", self.correct)?;
        write!(f, "Incorrect responses: {}", self.incorrect)
    }
}
