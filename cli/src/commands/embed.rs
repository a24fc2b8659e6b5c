use anyhow::Result;
use embedreq_config::Config;
use embedreq_core::{
    default_documents, documents_from_texts, EmbeddingRequester, OllamaClient, RunSummary,
};
use std::io;
use std::sync::Arc;

pub async fn handle_embed(config: &Config, texts: Vec<String>) -> Result<RunSummary> {
    let documents = if texts.is_empty() {
        default_documents()
    } else {
        documents_from_texts(texts)
    };

    let client = OllamaClient::new(&config.ollama, config.embedding.model.clone())?;
    tracing::info!(base_url = %client.base_url(), "using Ollama server");

    let requester = EmbeddingRequester::new(Arc::new(client), config.output.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    requester.run(&documents, &mut out).await
}
