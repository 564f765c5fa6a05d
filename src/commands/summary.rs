use anyhow::Context;
use std::path::PathBuf;

use super::highlight::resolve_target;
use crate::display::{complexity_badge, format_total_complexity, lens_title, status_tooltip};
use crate::storage;

#[derive(Debug, Clone)]
pub struct SummaryCommand {
    pub target: PathBuf,
    pub root: Option<PathBuf>,
}

/// Print the total complexity of one analysed file.
pub fn handle_summary(command: SummaryCommand) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let target = resolve_target(&command.target, command.root.as_deref(), &cwd)?;
    let analysis = storage::read_analysis(&target.analysis_path)?;

    let file_name = target
        .source_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Unknown".to_string());
    let total = analysis.total_complexity;

    println!("{}", status_tooltip(total, &file_name));
    println!("  total: {}", format_total_complexity(total));
    println!("  badge: {}", complexity_badge(total));
    if let Some(title) = lens_title(total) {
        println!("  lens:  {}", title);
    }
    println!("  nodes: {}", analysis.len());

    Ok(())
}
