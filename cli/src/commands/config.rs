use anyhow::{Context, Result};
use embedreq_config::Config;

pub fn handle_config(config: &Config) -> Result<()> {
    print!("{}", render_config(config)?);
    Ok(())
}

fn render_config(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("failed to render configuration")
}
