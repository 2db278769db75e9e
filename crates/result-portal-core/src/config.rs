//! Portal configuration.
//!
//! Only presentation is configurable; the pass threshold is fixed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::OutputFormat;

/// Environment variable that overrides `default_format`.
pub const FORMAT_ENV_VAR: &str = "RESULT_PORTAL_FORMAT";

/// Top-level result-portal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Directory rendered reports are saved to when `--output` is not given.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Load config from an explicit path, or search the well-known paths.
///
/// Search order:
/// 1. `result-portal.toml` in the current directory
/// 2. `~/.config/result-portal/config.toml`
///
/// Environment variable override: `RESULT_PORTAL_FORMAT`.
pub fn load_config_from(path: Option<&Path>) -> Result<PortalConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("result-portal.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config(&path)?
        }
        None => PortalConfig::default(),
    };

    if let Ok(format) = std::env::var(FORMAT_ENV_VAR) {
        config.default_format = format
            .parse()
            .map_err(|e: String| anyhow::anyhow!("{FORMAT_ENV_VAR}: {e}"))?;
    }

    Ok(config)
}

fn parse_config(path: &Path) -> Result<PortalConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<PortalConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("result-portal"))
}
