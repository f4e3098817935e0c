//! Resync command: refresh every account, best-effort.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rankbook::{ResyncProgress, ResyncReport};

use crate::settings::Settings;

/// Refresh all accounts.
///
/// Accounts that fail are reported and skipped; only setup and save
/// failures make the command fail.
pub fn run(settings: &Settings) -> Result<()> {
    let api = rankbook::connect(settings.platform_config()?)?;
    let mut store = settings.store();

    let report = rankbook::resync(&mut store, &*api, |progress| {
        eprintln!("{}", progress_line(&progress))
    })
    .with_context(|| format!("Failed to resync {}", settings.db.display()))?;

    for line in summary_lines(&report) {
        eprintln!("{}", line);
    }

    println!("All accounts have been resynced.");
    Ok(())
}

/// One line per account as it finishes. Failure reasons wait for the summary.
fn progress_line(progress: &ResyncProgress<'_>) -> String {
    let status = match progress.error {
        None => "ok".green().to_string(),
        Some(_) => "failed".red().to_string(),
    };
    format!(
        "[{}/{}] {} ... {}",
        progress.position, progress.total, progress.key, status
    )
}

fn summary_lines(report: &ResyncReport) -> Vec<String> {
    let mut lines = Vec::new();
    if !report.is_clean() {
        lines.push(String::new());
        lines.push("Skipped accounts:".to_string());
        for (key, err) in &report.failed {
            lines.push(format!("  {} {}: {}", "✗".red(), key, err));
        }
    }
    lines.push(format!(
        "{} updated, {} failed",
        report.updated.len().bold(),
        report.failed.len().bold()
    ));
    lines
}
