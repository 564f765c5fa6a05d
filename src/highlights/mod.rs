//! Highlight generation and overlap resolution.
//!
//! The pipeline turns an [`Analysis`] into the set of regions an editor
//! should tint:
//!
//! 1. each node's complexity is multiplied by its attenuation weight
//! 2. nodes below `min_complexity_per_loc` are dropped
//! 3. the rest are rescaled against the non-zero min/max
//! 4. degenerate and below-threshold values are dropped
//! 5. survivors get a green-to-red colour and hover text
//! 6. overlapping regions are resolved greedily, most complex first
//!
//! Every step filters instead of failing, so any input yields a (possibly
//! empty) list.

mod color;
mod generator;
mod overlap;

pub use color::Rgba;
pub use generator::{format_hover, generate_candidates, ComplexityRange, HighlightCandidate};
pub use overlap::{resolve_overlaps, Highlight};

use crate::analysis::Analysis;
use crate::attenuation::Attenuation;
use crate::config::HighlightConfig;

/// Run the full pipeline: generate candidates, then resolve overlaps.
pub fn generate_highlights(
    analysis: &Analysis,
    attenuation: &Attenuation,
    config: &HighlightConfig,
) -> Vec<Highlight> {
    resolve_overlaps(generate_candidates(analysis, attenuation, config))
}
