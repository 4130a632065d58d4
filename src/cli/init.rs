//! `vacmap init` - write a starter configuration file

use std::path::Path;

use anyhow::{Context, Result};

use vacmap::config::CardConfig;

/// Write `vacmap.yaml` with the built-in demo floor plan
pub async fn init_command(work_dir: &Path, force: bool) -> Result<()> {
    let path = work_dir.join("vacmap.yaml");
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let yaml = serde_yaml::to_string(&CardConfig::with_defaults())
        .context("Failed to serialize default config")?;
    std::fs::write(&path, yaml)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}
