//! Environment-driven CLI configuration.
use std::env;
use std::path::PathBuf;

/// Settings read from the environment (and `.env`).
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Engine configuration TOML used when `--config` is not given.
    pub engine_config: Option<PathBuf>,

    /// Directory for a log file in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SEWING_CONFIG` - Path to an engine configuration TOML file
    /// - `SEWING_LOG_DIR` - Directory for `sewing.log` (default: no file logging)
    pub fn from_env() -> Self {
        Self {
            engine_config: read_env::<PathBuf>("SEWING_CONFIG"),
            log_dir: read_env::<PathBuf>("SEWING_LOG_DIR"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}
