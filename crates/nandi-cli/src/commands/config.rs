use anyhow::{Context, Result};
use colored::Colorize;

use nandi_core::config::NandiConfig;
use nandi_infrastructure::ConfigService;

pub fn show(service: &ConfigService, config: &NandiConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
    println!("{}", format!("# {}", service.path().display()).bright_black());
    print!("{}", rendered);
    Ok(())
}

pub fn init(service: &ConfigService, force: bool) -> Result<()> {
    let path = service.path();
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    service.save(&NandiConfig::default())?;
    println!("{}", format!("✅ Wrote default configuration to {}", path.display()).green());
    Ok(())
}
