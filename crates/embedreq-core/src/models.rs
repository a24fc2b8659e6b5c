use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Response of one embedding request, as returned by the server.
///
/// Fields the server sends beyond the known ones are kept in `extra`, so
/// serializing the response reproduces what was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedResponse {
    pub model: String,

    #[serde(default)]
    pub embeddings: Vec<Vec<f32>>,

    /// Nanoseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<u64>,

    /// Nanoseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_duration: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_eval_count: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EmbedResponse {
    pub fn new(model: impl Into<String>, embeddings: Vec<Vec<f32>>) -> Self {
        Self {
            model: model.into(),
            embeddings,
            total_duration: None,
            load_duration: None,
            prompt_eval_count: None,
            extra: Map::new(),
        }
    }

    /// Length of the first vector, if any was returned.
    pub fn dimensions(&self) -> Option<usize> {
        self.embeddings.first().map(Vec::len)
    }
}

impl fmt::Display for EmbedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model={} embeddings={:?}", self.model, self.embeddings)?;
        if let Some(v) = self.total_duration {
            write!(f, " total_duration={}", v)?;
        }
        if let Some(v) = self.load_duration {
            write!(f, " load_duration={}", v)?;
        }
        if let Some(v) = self.prompt_eval_count {
            write!(f, " prompt_eval_count={}", v)?;
        }
        for (key, value) in &self.extra {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// One entry of the server's local model listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}
