//! The `timequiz run` command.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use timequiz_core::parser;
use timequiz_core::traits::QuizObserver;
use timequiz_core::{Question, QuizRunner, SessionOutcome};
use timequiz_sources::StdinSource;

use super::{plural, resolve_config};

/// How the final tally is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown format: '{other}' (expected text or json)"),
        }
    }
}

/// Console observer: prompts on stdout, no newline before the answer.
struct ConsoleObserver;

impl QuizObserver for ConsoleObserver {
    fn on_session_start(&self, total: usize, budget: Duration) {
        println!(
            "Starting quiz: {}, {}s time limit",
            plural(total, "question"),
            budget.as_secs()
        );
    }

    fn on_prompt(&self, _index: usize, question: &Question) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout only loses the prompt; the session carries on.
        let _ = write!(stdout, "{} = ", question.prompt).and_then(|()| stdout.flush());
    }

    fn on_answer(&self, _index: usize, _correct: bool) {}

    fn on_deadline(&self, _index: usize) {
        println!("\nTime's up!");
    }

    fn on_session_complete(&self, _outcome: &SessionOutcome) {}
}

pub async fn execute(
    csv: Option<PathBuf>,
    limit: Option<u64>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = resolve_config(csv, config_path)?;
    if let Some(limit) = limit {
        config.time_limit_secs = limit;
    }
    if let Some(format) = format {
        config.format = format;
    }
    let format: OutputFormat = config.format.parse()?;

    // Nothing is shown until the question file has been opened.
    let questions = parser::load_question_set(&config.csv_path)?;
    if questions.is_empty() {
        tracing::warn!(path = %config.csv_path.display(), "no questions loaded");
    }

    let runner = QuizRunner::new(Arc::new(StdinSource));
    let budget = Duration::from_secs(config.time_limit_secs);
    let outcome = runner.run(questions, budget, &ConsoleObserver).await;

    if ends_on_open_prompt(outcome.total, outcome.timed_out, std::io::stdin().is_terminal()) {
        println!();
    }

    match format {
        OutputFormat::Text => println!("{outcome}"),
        OutputFormat::Json => {
            let json = outcome.to_json().context("failed to serialize outcome")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Whether the last prompt is still waiting for a line break.
///
/// A terminal echoes the user's Enter and the deadline message starts with
/// its own newline, so only a normal finish on piped input needs one.
fn ends_on_open_prompt(total: usize, timed_out: bool, stdin_is_terminal: bool) -> bool {
    total > 0 && !timed_out && !stdin_is_terminal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_output_format() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn line_break_only_after_piped_normal_finish() {
        assert!(ends_on_open_prompt(2, false, false));
        assert!(!ends_on_open_prompt(2, false, true));
        assert!(!ends_on_open_prompt(2, true, false));
        assert!(!ends_on_open_prompt(0, false, false));
    }
}
