use serde::{Deserialize, Deserializer};

use super::model::{round_to_hundredths, Analysis, AnalysisNode, Span, UNKNOWN_NODE_NAME};

/// Top level of a `.blta` analysis file.
///
/// Only the syntax tree is read; every other field the analyser writes is
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisFile {
    #[serde(default)]
    pub tree: Option<RawTree>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTree {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNode {
    /// Accumulated complexity of the node and its descendants
    #[serde(default, deserialize_with = "null_as_zero")]
    pub complexity: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub local_complexity: f64,
    #[serde(default)]
    pub name: Option<String>,
    /// Missing spans read as empty and the node is dropped
    #[serde(default)]
    pub syntax_span: RawSyntaxSpan,
    #[serde(default)]
    pub parent: Option<RawParent>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawSyntaxSpan {
    pub start_row: u32,
    pub start_column: u32,
    pub end_row: u32,
    pub end_column: u32,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawParent {
    #[serde(default)]
    pub index: Option<usize>,
}

/// The analyser writes `null` for complexity it could not compute.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl From<RawSyntaxSpan> for Span {
    fn from(raw: RawSyntaxSpan) -> Self {
        Span::from_coords(raw.start_row, raw.start_column, raw.end_row, raw.end_column)
    }
}

impl AnalysisFile {
    pub fn into_analysis(self) -> Analysis {
        self.tree.map(Analysis::from_tree).unwrap_or_default()
    }
}

impl Analysis {
    /// Build the model from the analyser's raw tree.
    ///
    /// Parent indices point into the raw node list, so a node whose parent
    /// was dropped for having an empty span still gets its parent's name.
    pub fn from_tree(tree: RawTree) -> Self {
        let total_complexity = tree
            .nodes
            .first()
            .map(|root| round_to_hundredths(root.complexity))
            .unwrap_or(0.0);

        let nodes = tree
            .nodes
            .iter()
            .filter_map(|raw| {
                let span = Span::from(raw.syntax_span);
                if span.is_empty() {
                    return None;
                }
                Some(AnalysisNode {
                    complexity: raw.local_complexity,
                    span,
                    name: non_empty_name(raw)
                        .unwrap_or(UNKNOWN_NODE_NAME)
                        .to_string(),
                    parent_name: resolve_parent_name(&tree.nodes, raw.parent),
                })
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Parsed {} of {} analyser nodes (total complexity {})",
            nodes.len(),
            tree.nodes.len(),
            total_complexity
        );

        Self {
            nodes,
            total_complexity,
        }
    }
}

fn resolve_parent_name(nodes: &[RawNode], parent: Option<RawParent>) -> Option<String> {
    let index = parent?.index?;
    non_empty_name(nodes.get(index)?).map(str::to_string)
}

fn non_empty_name(node: &RawNode) -> Option<&str> {
    node.name.as_deref().filter(|name| !name.is_empty())
}
