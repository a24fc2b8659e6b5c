use anyhow::Result;
use async_trait::async_trait;

use crate::models::EmbedResponse;

/// A service that turns one text into an embedding response.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Model identifier sent with every request.
    fn model(&self) -> &str;

    async fn embed(&self, input: &str) -> Result<EmbedResponse>;
}
