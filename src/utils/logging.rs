// file: src/utils/logging.rs
// description: tracing subscriber setup and colored terminal lines for workflow output

use crate::models::{ChangeKind, ChangeStatus, EvaluationStatus};
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over the `--verbose` switch when set.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(colored_output);

    // a second init (tests, embedding) keeps the first subscriber
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
    {
        tracing::debug!("Logger already initialized: {}", err);
    }
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

pub fn format_step(step: usize, total: usize, msg: &str) -> String {
    format!("{} {}", format!("[{}/{}]", step, total).cyan().bold(), msg)
}

pub fn format_evaluation(status: EvaluationStatus, question: &str) -> String {
    match status {
        EvaluationStatus::Good => format!("{} {}", "✓".green().bold(), question),
        EvaluationStatus::Warning => format!("{} {}", "⚠".yellow().bold(), question),
        EvaluationStatus::Critical => format!("{} {}", "⚠".red().bold(), question.red()),
    }
}

pub fn format_change(kind: ChangeKind, status: ChangeStatus, section: &str) -> String {
    let marker = match kind {
        ChangeKind::Addition => "+".green().bold(),
        ChangeKind::Deletion => "-".red().bold(),
        ChangeKind::Modification => "~".yellow().bold(),
    };
    let status = match status {
        ChangeStatus::Pending => "pending".dimmed(),
        ChangeStatus::Approved => "approved".green(),
        ChangeStatus::Referred => "referred".yellow(),
    };
    format!("{} {} [{}]", marker, section, status)
}
