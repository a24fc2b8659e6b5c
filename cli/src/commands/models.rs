use anyhow::Result;
use embedreq_config::Config;
use embedreq_core::{output::render_models, OllamaClient};
use std::io;

pub async fn handle_models(config: &Config) -> Result<()> {
    let client = OllamaClient::new(&config.ollama, config.embedding.model.clone())?;
    let models = client.list_models().await?;
    tracing::info!(count = models.len(), "listed models");

    if models.is_empty() {
        tracing::warn!(base_url = %client.base_url(), "no models installed on server");
    }

    let stdout = io::stdout();
    render_models(config.output.format, &models, &mut stdout.lock())
}
