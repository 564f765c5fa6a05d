use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Project-wide parent/child occurrence graph written by `Analyse Project`.
///
/// Keyed by node name. The edges of a node are keyed by child name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedGraph {
    #[serde(default)]
    pub nodes: HashMap<String, WeightedGraphNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedGraphNode {
    #[serde(default)]
    pub edges: HashMap<String, WeightedEdge>,
}

/// Edge from a parent to a named child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub name: String,
    #[serde(default)]
    pub count: u64,
    /// Surprise of seeing this child under the parent, used as a multiplier
    #[serde(default)]
    pub self_information: Option<f64>,
}

impl WeightedEdge {
    pub fn new(name: impl Into<String>, count: u64, self_information: f64) -> Self {
        Self {
            name: name.into(),
            count,
            self_information: Some(self_information),
        }
    }
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the edge `parent -> edge.name`.
    pub fn insert_edge(&mut self, parent: impl Into<String>, edge: WeightedEdge) {
        self.nodes
            .entry(parent.into())
            .or_default()
            .edges
            .insert(edge.name.clone(), edge);
    }

    pub fn edge(&self, parent: &str, child: &str) -> Option<&WeightedEdge> {
        self.nodes.get(parent)?.edges.get(child)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.edges.len()).sum()
    }
}

/// Something that can produce the project graph.
///
/// `Ok(None)` means the source exists but holds no graph, e.g. a project
/// file written before graph generation was added.
pub trait GraphSource {
    fn load_graph(&self) -> Result<Option<WeightedGraph>>;
}

impl GraphSource for WeightedGraph {
    fn load_graph(&self) -> Result<Option<WeightedGraph>> {
        Ok(Some(self.clone()))
    }
}

impl<S: GraphSource + ?Sized> GraphSource for &S {
    fn load_graph(&self) -> Result<Option<WeightedGraph>> {
        (**self).load_graph()
    }
}

/// The `project.blta` file inside a project's storage directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGraphFile {
    path: PathBuf,
}

impl ProjectGraphFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the project graph for a workspace root.
    pub fn for_root(root: &Path) -> Self {
        Self::new(crate::storage::project_graph_path(root))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphSource for ProjectGraphFile {
    /// A project that was never analysed has no graph; that is not an error.
    fn load_graph(&self) -> Result<Option<WeightedGraph>> {
        if !self.path.exists() {
            return Ok(None);
        }
        crate::storage::read_project_graph(&self.path)
    }
}
