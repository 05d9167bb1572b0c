//! Core trait definitions for answer input and session progress.
//!
//! Answer sources live in the `timequiz-sources` crate; observers are
//! implemented by the binary (console output) and by tests.

use std::time::Duration;

use crate::model::Question;
use crate::report::SessionOutcome;

// ---------------------------------------------------------------------------
// Answer source trait
// ---------------------------------------------------------------------------

/// A blocking supplier of answer lines.
///
/// The runner calls `read_answer` once per question on a fresh thread, so an
/// implementation may block for as long as it likes. A read that loses the
/// race against the deadline is abandoned and its result dropped.
pub trait AnswerSource: Send + Sync + 'static {
    /// Read one answer line. `Ok(None)` means the input is exhausted.
    fn read_answer(&self) -> std::io::Result<Option<String>>;
}

// ---------------------------------------------------------------------------
// Observer trait
// ---------------------------------------------------------------------------

/// Progress reporting trait.
pub trait QuizObserver: Send + Sync {
    fn on_session_start(&self, total: usize, budget: Duration);
    fn on_prompt(&self, index: usize, question: &Question);
    fn on_answer(&self, index: usize, correct: bool);
    fn on_deadline(&self, index: usize);
    fn on_session_complete(&self, outcome: &SessionOutcome);
}

/// No-op observer.
pub struct NoopObserver;

impl QuizObserver for NoopObserver {
    fn on_session_start(&self, _: usize, _: Duration) {}
    fn on_prompt(&self, _: usize, _: &Question) {}
    fn on_answer(&self, _: usize, _: bool) {}
    fn on_deadline(&self, _: usize) {}
    fn on_session_complete(&self, _: &SessionOutcome) {}
}
