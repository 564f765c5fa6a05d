//! CLI command implementations.
//!
//! Available commands:
//! - **highlight**: Compute the highlight set for one analysed file
//! - **summary**: Show a file's total complexity
//! - **init**: Write a default `.boltzmann.toml`

pub mod highlight;
pub mod init;
pub mod summary;

pub use highlight::{
    handle_highlight, highlight_target, resolve_target, ConfigOverrides, HighlightCommand,
    ResolvedTarget,
};
pub use init::init_config;
pub use summary::{handle_summary, SummaryCommand};
