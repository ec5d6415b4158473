//! The `decoquiz run` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use decoquiz_core::config::load_config_from;
use decoquiz_core::content::load_questions;
use decoquiz_core::engine::{QuizEngine, RunReport};
use decoquiz_core::model::Messages;
use decoquiz_core::parser::parse_bank;
use decoquiz_core::QuizError;

use crate::console::TerminalConsole;

pub async fn execute(
    locale: Option<String>,
    bank_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    no_pause: bool,
    no_retry: bool,
) -> Result<()> {
    // Load config, then let flags override it
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(locale) = locale {
        config.locale = locale;
    }
    if bank_path.is_some() {
        config.bank = bank_path;
    }
    if no_pause {
        config.pause_between_questions = false;
    }
    if no_retry {
        config.offer_retry = false;
    }

    // Content problems must stop us before the first question
    let bank = match &config.bank {
        Some(path) => parse_bank(path)?,
        None => load_questions(&config.locale)?,
    };
    tracing::info!(
        "starting quiz '{}' ({}, {} questions)",
        bank.id(),
        bank.locale(),
        bank.len()
    );

    let engine = QuizEngine::new(&bank, config.engine_options());
    let mut console = TerminalConsole::new();

    let report = match engine.run(&mut console).await {
        Ok(report) => report,
        Err(e) => {
            // stdout may be the thing that failed
            let _ = writeln!(std::io::stdout(), "\n{}", fault_notice(bank.messages(), &e));
            return Err(e.into());
        }
    };

    if report.sessions.len() > 1 {
        print_recap(&report);
    }
    Ok(())
}

/// The operator-facing notice for a fault, in the bank's language.
fn fault_notice(messages: &Messages, err: &QuizError) -> String {
    Messages::render(&messages.error, &[("text", err.to_string().as_str())])
}

fn print_recap(report: &RunReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Session", "Score", "Percentage", "Tier"]);

    for (i, summary) in report.sessions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{}/{}", summary.score, summary.total)),
            Cell::new(format!("{:.1}%", summary.percentage)),
            Cell::new(summary.tier),
        ]);
    }

    eprintln!("\n{table}");
}
