//! The `timequiz validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use timequiz_core::parser::{load_question_set_with_stats, validate_question_set};
use timequiz_core::QuestionSet;

use super::{plural, resolve_config};

pub fn execute(csv: Option<PathBuf>, config_path: Option<PathBuf>, list: bool) -> Result<()> {
    let config = resolve_config(csv, config_path)?;
    let (set, stats) = load_question_set_with_stats(&config.csv_path)?;

    println!(
        "Question set: {} ({})",
        config.csv_path.display(),
        plural(set.len(), "question")
    );

    let mut total_warnings = 0;

    if stats.rows_skipped > 0 {
        println!(
            "  skipped {} without exactly two fields",
            plural(stats.rows_skipped, "row")
        );
    }
    if stats.stopped_early {
        println!("  WARNING: reading stopped at a malformed row; later rows were not loaded");
        total_warnings += 1;
    }

    let warnings = validate_question_set(&set);
    for w in &warnings {
        let prefix = w
            .index
            .map(|i| format!("  [#{}]", i + 1))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }
    total_warnings += warnings.len();

    if list {
        print_questions(&set);
    }

    if total_warnings == 0 {
        println!("All questions valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn print_questions(set: &QuestionSet) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Answer"]);

    for (i, q) in set.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&q.prompt),
            Cell::new(&q.answer),
        ]);
    }

    println!("\n{table}\n");
}
