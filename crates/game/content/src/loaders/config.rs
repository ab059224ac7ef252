//! Engine configuration loader.

use std::path::Path;

use sewing_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Every key is optional; missing keys keep the built-in constants.
    ///
    /// ```toml
    /// precision_crit_bonus = 0.25
    ///
    /// [scoring]
    /// overshoot_factor = 12.0
    /// ```
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        for (name, value) in config.scoring.named_values() {
            anyhow::ensure!(
                value.is_finite(),
                "scoring.{} must be a finite number, got {}",
                name,
                value
            );
        }
        anyhow::ensure!(
            (0.0..=1.0).contains(&config.precision_crit_bonus),
            "precision_crit_bonus must be within 0.0..=1.0, got {}",
            config.precision_crit_bonus
        );

        Ok(config)
    }
}
