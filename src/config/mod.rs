//! Configuration for highlight generation and attenuation.
//!
//! Values come from `.boltzmann.toml` (searched upwards from the working
//! directory) and can be overridden from the command line. Every field has
//! a default, so an empty or missing file is a valid configuration.

mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Top-level `.boltzmann.toml` contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoltzmannConfig {
    #[serde(default)]
    pub highlights: HighlightConfig,

    #[serde(default)]
    pub attenuation: AttenuationConfig,
}

impl BoltzmannConfig {
    pub fn validate(&self) -> Result<()> {
        self.highlights.validate()
    }
}

/// Options recognised by the highlight generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Minimum normalized complexity (0.0-1.0) a node needs to be highlighted
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: f64,

    /// Alpha channel magnitude of every highlight colour (0.0-1.0)
    #[serde(default = "default_highlight_alpha")]
    pub highlight_alpha: f64,

    /// Minimum attenuated complexity, applied before normalization
    #[serde(default = "default_min_complexity_per_loc")]
    pub min_complexity_per_loc: f64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: default_complexity_threshold(),
            highlight_alpha: default_highlight_alpha(),
            min_complexity_per_loc: default_min_complexity_per_loc(),
        }
    }
}

impl HighlightConfig {
    /// Reject values outside their documented ranges.
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("complexity_threshold", self.complexity_threshold)?;
        check_unit_interval("highlight_alpha", self.highlight_alpha)?;

        if !self.min_complexity_per_loc.is_finite() || self.min_complexity_per_loc < 0.0 {
            return Err(Error::configuration(format!(
                "min_complexity_per_loc must be a non-negative number, got {}",
                self.min_complexity_per_loc
            )));
        }

        Ok(())
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "{} must be between 0.0 and 1.0, got {}",
            field, value
        )))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttenuationConfig {
    /// Reweight complexity with the project graph
    #[serde(default)]
    pub enabled: bool,
}

pub fn default_complexity_threshold() -> f64 {
    0.5
}

pub fn default_highlight_alpha() -> f64 {
    0.3
}

pub fn default_min_complexity_per_loc() -> f64 {
    0.0
}
