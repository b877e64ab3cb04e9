//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use sheetnum::config::Config;

/// Write the default configuration to `path` (or the global config path)
pub fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(&Config::with_defaults())
        .context("Failed to serialize default config")?;
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    info!("Wrote default config to {}", config_path.display());
    println!("Created {}", config_path.display());

    Ok(())
}
