//! timequiz-core — Question sets, answer normalization and the timed runner.
//!
//! This crate defines the data model, the CSV loader and the session loop
//! that the timequiz binary builds on. Input and output are reached only
//! through the [`traits::AnswerSource`] and [`traits::QuizObserver`] traits.

pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod traits;

pub use engine::QuizRunner;
pub use error::QuizError;
pub use model::{Question, QuestionSet};
pub use report::SessionOutcome;
