//! Layout of the analyser's on-disk output.
//!
//! The analyser writes one `.blta` JSON file per source file under
//! `<root>/.boltzmann/`, mirroring the source tree, and a single
//! `project.blta` holding the project-wide weighted graph.

use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::analysis::{Analysis, AnalysisFile};
use crate::attenuation::WeightedGraph;
use crate::errors::{Error, Result, ResultExt};

/// Directory holding analyser output, relative to the workspace root
pub const STORAGE_DIR: &str = ".boltzmann";

/// Extension of analyser output files
pub const ANALYSIS_EXTENSION: &str = "blta";

/// Name of the project-level analysis file inside [`STORAGE_DIR`]
pub const PROJECT_FILE_NAME: &str = "project.blta";

/// `<root>/.boltzmann/<relative_source>.blta`
pub fn analysis_path(root: &Path, relative_source: &Path) -> PathBuf {
    let mut file_name = relative_source.as_os_str().to_os_string();
    file_name.push(".");
    file_name.push(ANALYSIS_EXTENSION);
    root.join(STORAGE_DIR).join(file_name)
}

/// `<root>/.boltzmann/project.blta`
pub fn project_graph_path(root: &Path) -> PathBuf {
    root.join(STORAGE_DIR).join(PROJECT_FILE_NAME)
}

/// Whether `path` lies inside an analyser storage directory.
///
/// Such files are analyser output and are never analysed themselves.
pub fn is_storage_path(path: &Path) -> bool {
    path.components()
        .any(|component| matches!(component, Component::Normal(name) if name == STORAGE_DIR))
}

/// Workspace root owning an analysis file: the parent of the nearest
/// enclosing `.boltzmann` directory.
pub fn workspace_root_of(analysis_file: &Path) -> Option<PathBuf> {
    analysis_file
        .ancestors()
        .find(|dir| dir.file_name().is_some_and(|name| name == STORAGE_DIR))
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}

/// Read and parse one file's analysis.
///
/// A file without a syntax tree parses to an empty analysis.
pub fn read_analysis(path: &Path) -> Result<Analysis> {
    let contents = fs::read_to_string(path)
        .context(format!("Failed to read analysis {}", path.display()))?;
    parse_analysis(&contents).map_err(|e| Error::analysis(path, e.to_string()))
}

/// Parse analysis JSON already held in memory.
pub fn parse_analysis(contents: &str) -> Result<Analysis> {
    let file: AnalysisFile = serde_json::from_str(contents)?;
    Ok(file.into_analysis())
}

#[derive(Debug, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    weighted_graph: Option<WeightedGraph>,
}

/// Read the weighted graph from a project analysis file.
///
/// `Ok(None)` when the file exists but carries no graph.
pub fn read_project_graph(path: &Path) -> Result<Option<WeightedGraph>> {
    let contents = fs::read_to_string(path)
        .context(format!("Failed to read project analysis {}", path.display()))?;
    let project = serde_json::from_str::<ProjectFile>(&contents)
        .context(format!("Malformed project analysis {}", path.display()))?;
    Ok(project.weighted_graph)
}
