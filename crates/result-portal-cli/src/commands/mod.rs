pub mod calculate;
pub mod init;
pub mod interactive;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use result_portal_core::config::{load_config_from, PortalConfig};
use result_portal_core::model::OutputFormat;

/// Load config and resolve the output format: `--format` wins over the config.
pub fn resolve_format(
    format: Option<&str>,
    config_path: Option<&Path>,
) -> Result<(OutputFormat, PortalConfig)> {
    let config = load_config_from(config_path)?;
    let format = match format {
        Some(f) => f.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?,
        None => config.default_format,
    };
    Ok((format, config))
}
