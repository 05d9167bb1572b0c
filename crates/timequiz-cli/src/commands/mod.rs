pub mod init;
pub mod run;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use timequiz_sources::{load_config_from, QuizConfig};

/// Load the config and apply the command-line CSV override.
fn resolve_config(csv: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<QuizConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(csv) = csv {
        config.csv_path = csv;
    }
    Ok(config)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
