//! Quiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default question file, looked up relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "problems.csv";

/// Default session time budget in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 30;

/// Top-level timequiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Path to the `question,answer` CSV file.
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    /// Time budget for the whole session, in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
    /// Summary format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}
fn default_time_limit() -> u64 {
    DEFAULT_TIME_LIMIT_SECS
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            time_limit_secs: default_time_limit(),
            format: default_format(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied as-is and never scanned again.
fn resolve_env_vars(s: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&lookup(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `path`, which must exist when given
/// 2. `timequiz.toml` in the current directory
/// 3. `~/.config/timequiz/config.toml`
///
/// Environment variable overrides: `TIMEQUIZ_CSV`, `TIMEQUIZ_LIMIT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    load_config_with(path, |name| std::env::var(name).ok())
}

/// [`load_config_from`] with environment reads going through `lookup`.
fn load_config_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("timequiz.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path(&lookup)
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(&mut config, &lookup)?;

    let resolved = resolve_env_vars(&config.csv_path.to_string_lossy(), &lookup);
    config.csv_path = PathBuf::from(resolved);

    Ok(config)
}

/// Apply `TIMEQUIZ_*` overrides using `lookup` to read variables.
fn apply_env_overrides(
    config: &mut QuizConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(csv) = lookup("TIMEQUIZ_CSV") {
        config.csv_path = PathBuf::from(csv);
    }
    if let Some(limit) = lookup("TIMEQUIZ_LIMIT") {
        config.time_limit_secs = limit
            .trim()
            .parse()
            .with_context(|| format!("invalid TIMEQUIZ_LIMIT: '{limit}'"))?;
    }
    Ok(())
}

fn dirs_path(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    lookup("HOME").map(|h| PathBuf::from(h).join(".config").join("timequiz"))
}
