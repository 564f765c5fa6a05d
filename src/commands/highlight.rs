use anyhow::{bail, Context};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::attenuation::{Attenuation, ProjectGraphFile};
use crate::config::{load_config_from, BoltzmannConfig};
use crate::errors::Result;
use crate::highlights::generate_highlights;
use crate::io::{create_writer, ensure_dir, OutputFormat, OutputWriter};
use crate::session::FileHighlights;
use crate::storage::{self, ANALYSIS_EXTENSION, STORAGE_DIR};

/// Command-line values that take precedence over `.boltzmann.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    pub attenuation: Option<bool>,
    pub complexity_threshold: Option<f64>,
    pub highlight_alpha: Option<f64>,
    pub min_complexity_per_loc: Option<f64>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: BoltzmannConfig) -> BoltzmannConfig {
        if let Some(enabled) = self.attenuation {
            config.attenuation.enabled = enabled;
        }
        if let Some(threshold) = self.complexity_threshold {
            config.highlights.complexity_threshold = threshold;
        }
        if let Some(alpha) = self.highlight_alpha {
            config.highlights.highlight_alpha = alpha;
        }
        if let Some(floor) = self.min_complexity_per_loc {
            config.highlights.min_complexity_per_loc = floor;
        }
        config
    }
}

#[derive(Debug, Clone)]
pub struct HighlightCommand {
    /// A `.blta` analysis file, or a source file whose analysis to use
    pub target: PathBuf,
    pub root: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Where an analysis lives and which source file it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub analysis_path: PathBuf,
    pub root: PathBuf,
    pub source_file: PathBuf,
}

/// Work out the analysis file, workspace root and source file for `target`.
///
/// A `.blta` target is used as-is; its root defaults to the directory above
/// the enclosing `.boltzmann`. Any other target is a source file, relative to
/// `root` (defaulting to `cwd`), and is mapped into the storage directory.
pub fn resolve_target(
    target: &Path,
    root: Option<&Path>,
    cwd: &Path,
) -> anyhow::Result<ResolvedTarget> {
    let is_analysis = target
        .extension()
        .is_some_and(|ext| ext == ANALYSIS_EXTENSION);

    if is_analysis {
        let storage_root = root
            .map(Path::to_path_buf)
            .or_else(|| storage::workspace_root_of(target));
        let source_file = storage_root
            .as_ref()
            .and_then(|root| target.strip_prefix(root.join(STORAGE_DIR)).ok())
            .map(|relative| relative.with_extension(""))
            .unwrap_or_else(|| target.to_path_buf());
        // `.boltzmann/x.blta` yields an empty root; the config search needs a real directory.
        let root = storage_root
            .filter(|root| !root.as_os_str().is_empty())
            .map(|root| cwd.join(root))
            .unwrap_or_else(|| cwd.to_path_buf());
        return Ok(ResolvedTarget {
            analysis_path: target.to_path_buf(),
            root,
            source_file,
        });
    }

    if storage::is_storage_path(target) {
        bail!(
            "{} is inside the {} storage directory. Skipping analysis.",
            target.display(),
            STORAGE_DIR
        );
    }

    let root = root.map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf());
    let relative = target.strip_prefix(&root).unwrap_or(target).to_path_buf();
    Ok(ResolvedTarget {
        analysis_path: storage::analysis_path(&root, &relative),
        root,
        source_file: relative,
    })
}

/// Read the analysis for `target`, load attenuation for its workspace and
/// run the highlight pipeline.
///
/// The project graph is reloaded on every call since a project analysis may
/// have regenerated it in between.
pub fn highlight_target(
    target: &ResolvedTarget,
    config: &BoltzmannConfig,
) -> Result<FileHighlights> {
    let analysis = storage::read_analysis(&target.analysis_path)?;
    let attenuation = Attenuation::load(
        &config.attenuation,
        &ProjectGraphFile::for_root(&target.root),
    );
    Ok(FileHighlights {
        file: target.source_file.clone(),
        total_complexity: analysis.total_complexity,
        highlights: generate_highlights(&analysis, &attenuation, &config.highlights),
    })
}

/// Write `result` and flush, so buffered write errors are not lost on drop.
pub fn write_result<W: Write>(
    format: OutputFormat,
    writer: W,
    result: &FileHighlights,
) -> anyhow::Result<()> {
    let mut writer = create_writer(format, writer);
    writer.write_highlights(result)?;
    writer.flush()
}

pub fn handle_highlight(command: HighlightCommand) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let target = resolve_target(&command.target, command.root.as_deref(), &cwd)?;
    log::info!(
        "Highlighting {} from {}",
        target.source_file.display(),
        target.analysis_path.display()
    );

    let config = command.overrides.apply(load_config_from(&target.root));
    config.validate()?;

    let result = highlight_target(&target, &config)?;
    log::debug!(
        "{} highlight(s), total complexity {}",
        result.highlights.len(),
        result.total_complexity
    );

    match command.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                ensure_dir(parent)?;
            }
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_result(command.format, BufWriter::new(file), &result)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout();
            write_result(command.format, stdout.lock(), &result)?;
        }
    }

    Ok(())
}
