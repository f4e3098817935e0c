//! Show command: list accounts as a table, TSV or JSON.

use anyhow::{Context, Result};
use rankbook::{RegionFilter, ShowOptions};
use tracing::debug;

use crate::cli::ExportFormat;
use crate::settings::Settings;

pub fn run(
    settings: &Settings,
    filter: RegionFilter,
    output: Option<&str>,
    reveal: bool,
    format: ExportFormat,
) -> Result<()> {
    let store = settings.store();
    let options = ShowOptions { filter, reveal };
    let rows = rankbook::show(&store, &options)
        .with_context(|| format!("Failed to load {}", settings.db.display()))?;
    debug!("Rendering {} accounts for region {}", rows.len(), options.filter);

    let content = rankbook::render(&rows, format.into())?;

    if let Some(output_path) = output {
        std::fs::write(output_path, format!("{}\n", content))
            .with_context(|| format!("Failed to write {}", output_path))?;
        println!("Accounts exported to {}", output_path);
    } else {
        println!("{}", content);
    }

    Ok(())
}
