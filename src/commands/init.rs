use anyhow::Result;
use std::path::Path;

use crate::config::CONFIG_FILE_NAME;
use crate::io;

const DEFAULT_CONFIG: &str = r#"# Boltzmann highlight configuration

[highlights]
# Minimum normalized complexity (0.0-1.0) to highlight
complexity_threshold = 0.5
# Alpha of highlight colours (0.0-1.0)
highlight_alpha = 0.3
# Minimum attenuated complexity, applied before normalization
min_complexity_per_loc = 0.0

[attenuation]
# Reweight complexity with .boltzmann/project.blta
enabled = false
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, BoltzmannConfig};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses_to_defaults() {
        assert_eq!(parse_config(DEFAULT_CONFIG).unwrap(), BoltzmannConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        init_config(temp.path(), false).unwrap();
        assert!(init_config(temp.path(), false).is_err());
        assert!(init_config(temp.path(), true).is_ok());
    }
}
