//! timequiz-sources — Answer sources and configuration.
//!
//! Implements the `AnswerSource` trait for terminal input and for scripted
//! replies, and loads the `timequiz.toml` configuration.

pub mod config;
pub mod scripted;
pub mod stdin;

pub use config::{load_config_from, QuizConfig};
pub use scripted::{Reply, ScriptedSource};
pub use stdin::{LineSource, StdinSource};
