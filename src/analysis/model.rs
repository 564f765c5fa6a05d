use serde::{Deserialize, Serialize};

/// Name given to nodes the analyser left unnamed.
pub const UNKNOWN_NODE_NAME: &str = "unknown";

/// Zero-based line/column position in a source file.
///
/// Ordering is line-major, so `Position`s compare the way an editor
/// compares cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open source range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Convenience constructor from raw line/column pairs.
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self::new(
            Position::new(start_line, start_col),
            Position::new(end_line, end_col),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Two spans overlap unless one ends strictly before the other starts.
    ///
    /// Touching endpoints count as overlapping: `[0:0, 1:0)` and
    /// `[1:0, 2:0)` overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.end < other.start || other.end < self.start)
    }
}

/// A single measured syntax node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisNode {
    /// Local complexity score, never negative
    pub complexity: f64,
    pub span: Span,
    pub name: String,
    /// Name of the syntactic parent, `None` at the root or when unresolvable
    pub parent_name: Option<String>,
}

impl AnalysisNode {
    pub fn new(
        complexity: f64,
        span: Span,
        name: impl Into<String>,
        parent_name: Option<String>,
    ) -> Self {
        Self {
            complexity,
            span,
            name: name.into(),
            parent_name,
        }
    }
}

/// The measurements for one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Nodes in traversal order; the first is conventionally the file root
    pub nodes: Vec<AnalysisNode>,
    /// Root complexity rounded to two decimals, 0 for an empty tree
    pub total_complexity: f64,
}

impl Analysis {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an analysis from already-parsed nodes.
    ///
    /// The total is taken from the first node, matching what the analyser
    /// reports for the file root.
    pub fn from_nodes(nodes: Vec<AnalysisNode>) -> Self {
        let total_complexity = nodes
            .first()
            .map(|root| round_to_hundredths(root.complexity))
            .unwrap_or(0.0);
        Self {
            nodes,
            total_complexity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
