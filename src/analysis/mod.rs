//! Per-file complexity measurements produced by the Boltzmann analyser.
//!
//! The analyser emits a flat list of syntax nodes. Each node carries its
//! local complexity, its source span and an index pointing at its syntactic
//! parent. This module turns that raw tree into an [`Analysis`]: empty spans
//! are dropped, names default to `"unknown"` and parent indices are resolved
//! to parent names once, up front.

mod model;
mod raw;

pub use model::{Analysis, AnalysisNode, Position, Span, UNKNOWN_NODE_NAME};
pub use raw::{AnalysisFile, RawNode, RawParent, RawSyntaxSpan, RawTree};
