use std::path::Path;

use anyhow::Result;
use textcheck_api::ServerConfig;

/// Config file, then `TEXTCHECK_RULE_CONFIDENCE_FILE`, then the flag.
pub fn load_config(
    config_path: Option<&Path>,
    confidence_file: Option<&Path>,
) -> Result<ServerConfig> {
    let config = match config_path {
        Some(path) => ServerConfig::from_path(path)?,
        None => ServerConfig::default(),
    };
    Ok(config
        .with_env_overrides()
        .with_confidence_file(confidence_file.map(Path::to_path_buf)))
}
