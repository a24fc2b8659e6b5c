use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use embedreq_config::OllamaConfig;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

use crate::models::{EmbedResponse, ListModelsResponse, ModelInfo};
use crate::traits::Embedder;

/// Client for a local Ollama server's embedding and model listing API.
pub struct OllamaClient {
    client: Client,
    model: String,
    base_url: String,
    truncate: Option<bool>,
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    truncate: Option<bool>,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig, model: impl Into<String>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            client,
            model: model.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            truncate: config.truncate,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Models installed on the server.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = self.endpoint("tags");
        tracing::debug!(%url, "listing models");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("failed to reach Ollama at {}", self.base_url))?;
        let resp = ensure_success(resp, "model listing").await?;

        let parsed: ListModelsResponse = resp
            .json()
            .await
            .context("invalid model listing from Ollama")?;
        Ok(parsed.models)
    }
}

#[async_trait]
impl Embedder for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn embed(&self, input: &str) -> Result<EmbedResponse> {
        let url = self.endpoint("embed");
        tracing::debug!(%url, model = %self.model, chars = input.len(), "requesting embedding");

        let resp = self
            .client
            .post(&url)
            .json(&EmbedRequest {
                model: &self.model,
                input,
                truncate: self.truncate,
            })
            .send()
            .await
            .with_context(|| format!("failed to reach Ollama at {}", self.base_url))?;
        let resp = ensure_success(resp, "embedding").await?;

        resp.json::<EmbedResponse>()
            .await
            .context("invalid embedding response from Ollama")
    }
}

async fn ensure_success(resp: Response, what: &str) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(anyhow!("Ollama {} failed ({}): {}", what, status, body.trim()))
}
