//! Sequential embedding of an ordered document list.
//!
//! Each document is sent to the embedder in turn and its record is written
//! as soon as the call returns. The first failure ends the run: records of
//! earlier documents stay written, nothing is written for the failed
//! document or anything after it.

use anyhow::{Context, Result};
use embedreq_config::OutputFormat;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use crate::documents::Document;
use crate::output::render_record;
use crate::traits::Embedder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub embedded: usize,
}

pub struct EmbeddingRequester {
    embedder: Arc<dyn Embedder>,
    format: OutputFormat,
}

impl EmbeddingRequester {
    pub fn new(embedder: Arc<dyn Embedder>, format: OutputFormat) -> Self {
        Self { embedder, format }
    }

    pub async fn run<W: Write>(&self, documents: &[Document], out: &mut W) -> Result<RunSummary> {
        let started = Instant::now();
        tracing::info!(
            model = %self.embedder.model(),
            documents = documents.len(),
            "embedding documents"
        );

        let mut embedded = 0;
        for doc in documents {
            let response = self.embedder.embed(&doc.text).await.with_context(|| {
                format!(
                    "embedding request failed for document {} (model {})",
                    doc.index,
                    self.embedder.model()
                )
            })?;
            tracing::debug!(
                index = doc.index,
                dimensions = ?response.dimensions(),
                "received embedding"
            );

            render_record(self.format, doc.index, &doc.text, &response, out)?;
            out.flush()?;
            embedded += 1;
        }

        tracing::info!(
            embedded,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "run complete"
        );
        Ok(RunSummary { embedded })
    }
}
