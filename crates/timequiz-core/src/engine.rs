//! Timed quiz session runner.
//!
//! Presents questions in order against a single session deadline. Every
//! question gets its own reader thread that hands one answer back over a
//! oneshot channel; the control flow races that channel against the
//! deadline and is the only place the score is ever touched.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::model::QuestionSet;
use crate::normalize::answers_match;
use crate::report::SessionOutcome;
use crate::traits::{AnswerSource, QuizObserver};

/// Runs timed quiz sessions against an answer source.
pub struct QuizRunner {
    source: Arc<dyn AnswerSource>,
}

impl QuizRunner {
    pub fn new(source: Arc<dyn AnswerSource>) -> Self {
        Self { source }
    }

    /// Run one session over `questions` with a single overall `budget`.
    ///
    /// The deadline is fixed when this is called and never reset. If it
    /// passes before all questions are answered, the remaining questions are
    /// not shown and count as incorrect.
    pub async fn run(
        &self,
        questions: QuestionSet,
        budget: Duration,
        observer: &dyn QuizObserver,
    ) -> SessionOutcome {
        let session_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "session",
            %session_id,
            questions = questions.len(),
            budget_ms = u64::try_from(budget.as_millis()).unwrap_or(u64::MAX),
        );
        self.run_session(session_id, questions, budget, observer)
            .instrument(span)
            .await
    }

    async fn run_session(
        &self,
        session_id: Uuid,
        questions: QuestionSet,
        budget: Duration,
        observer: &dyn QuizObserver,
    ) -> SessionOutcome {
        let started_at = chrono::Utc::now();
        let start = Instant::now();
        let total = questions.len();

        let deadline = tokio::time::sleep(budget);
        tokio::pin!(deadline);

        let mut correct = 0usize;
        let mut answered = 0usize;
        let mut timed_out = false;

        tracing::info!("session started");
        observer.on_session_start(total, budget);

        for (index, question) in questions.iter().enumerate() {
            observer.on_prompt(index, question);
            let pending = self.spawn_reader(index);

            tokio::select! {
                _ = &mut deadline => {
                    tracing::info!(index, correct, "deadline reached");
                    observer.on_deadline(index);
                    timed_out = true;
                    break;
                }
                answer = pending => {
                    // A reader that died without sending counts as an empty answer.
                    let answer = answer.unwrap_or_default();
                    answered += 1;
                    let is_correct = answers_match(&answer, &question.answer);
                    if is_correct {
                        correct += 1;
                    }
                    tracing::debug!(index, is_correct, "answer scored");
                    observer.on_answer(index, is_correct);
                }
            }
        }

        let outcome = SessionOutcome::tally(
            session_id,
            started_at,
            total,
            correct,
            answered,
            timed_out,
            start.elapsed(),
        );
        tracing::info!(
            correct = outcome.correct,
            incorrect = outcome.incorrect,
            timed_out,
            "session finished"
        );
        observer.on_session_complete(&outcome);
        outcome
    }

    /// Start a detached thread that reads one answer for question `index`.
    ///
    /// The thread is never joined. If the session has moved on by the time
    /// it finishes, the receiver is gone and the answer is dropped.
    fn spawn_reader(&self, index: usize) -> oneshot::Receiver<String> {
        let (tx, rx) = oneshot::channel();
        let source = Arc::clone(&self.source);

        let spawned = std::thread::Builder::new()
            .name(format!("answer-reader-{index}"))
            .spawn(move || {
                let answer = match source.read_answer() {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        tracing::debug!(index, "answer input exhausted");
                        String::new()
                    }
                    Err(e) => {
                        tracing::warn!(index, "failed to read answer: {e}");
                        String::new()
                    }
                };
                if tx.send(answer).is_err() {
                    tracing::debug!(index, "late answer discarded");
                }
            });

        if let Err(e) = spawned {
            // The sender went down with the closure, so the receiver resolves
            // immediately with an error.
            tracing::error!(index, "failed to spawn answer reader: {e}");
        }

        rx
    }
}
