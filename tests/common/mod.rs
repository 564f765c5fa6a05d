// Test utility module for boltzmann-highlights integration tests
#![allow(dead_code)]

use boltzmann_highlights::{Analysis, AnalysisNode, Span};
use std::fs;
use std::path::{Path, PathBuf};

/// Node spanning whole lines `[start_line, end_line)`.
pub fn node(complexity: f64, start_line: u32, end_line: u32, name: &str) -> AnalysisNode {
    AnalysisNode::new(
        complexity,
        Span::from_coords(start_line, 0, end_line, 0),
        name,
        None,
    )
}

pub fn child(
    complexity: f64,
    start_line: u32,
    end_line: u32,
    name: &str,
    parent: &str,
) -> AnalysisNode {
    AnalysisNode::new(
        complexity,
        Span::from_coords(start_line, 0, end_line, 0),
        name,
        Some(parent.to_string()),
    )
}

/// Disjoint single-line nodes, one per complexity.
pub fn disjoint_analysis(complexities: &[f64]) -> Analysis {
    Analysis::from_nodes(
        complexities
            .iter()
            .enumerate()
            .map(|(i, &c)| node(c, (i * 2) as u32, (i * 2) as u32 + 1, "expr"))
            .collect(),
    )
}

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write_fixture(root: &Path, relative: impl AsRef<Path>, contents: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("fixture path has a parent"))
        .expect("create fixture directory");
    fs::write(&path, contents).expect("write fixture");
    path
}
