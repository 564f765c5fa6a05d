// Export modules for library usage
pub mod analysis;
pub mod attenuation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod errors;
pub mod highlights;
pub mod io;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use crate::analysis::{Analysis, AnalysisNode, Position, Span};

pub use crate::attenuation::{
    Attenuation, GraphSource, ProjectGraphFile, WeightedEdge, WeightedGraph,
};

pub use crate::config::{AttenuationConfig, BoltzmannConfig, HighlightConfig};

pub use crate::errors::{Error, Result};

pub use crate::highlights::{
    generate_candidates, generate_highlights, resolve_overlaps, Highlight, HighlightCandidate,
    Rgba,
};

pub use crate::session::{FileHighlights, HighlightSession};
