use serde::Serialize;

use super::color::Rgba;
use super::generator::HighlightCandidate;
use crate::analysis::Span;

/// A highlight ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub span: Span,
    pub color: Rgba,
    pub hover_text: String,
}

impl From<HighlightCandidate> for Highlight {
    fn from(candidate: HighlightCandidate) -> Self {
        Self {
            span: candidate.span,
            color: candidate.color,
            hover_text: candidate.hover_text,
        }
    }
}

/// Greedily pick non-overlapping candidates, most complex first.
///
/// Candidates are visited in descending normalized complexity (stable, so
/// equal complexities keep their input order) and kept unless they overlap
/// something already kept. This is not a maximum-weight selection: a single
/// complex region can suppress several slightly less complex ones it
/// overlaps, which is the behaviour the editor output relies on.
///
/// Quadratic in the number of candidates, which is bounded by the syntax
/// nodes of a single file.
pub fn resolve_overlaps(mut candidates: Vec<HighlightCandidate>) -> Vec<Highlight> {
    candidates.sort_by(|a, b| b.normalized_complexity.total_cmp(&a.normalized_complexity));

    let mut kept: Vec<HighlightCandidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !kept.iter().any(|k| k.span.overlaps(&candidate.span)) {
            kept.push(candidate);
        }
    }

    log::debug!("Kept {} non-overlapping highlights", kept.len());
    kept.into_iter().map(Highlight::from).collect()
}
