pub mod documents;
pub mod models;
pub mod ollama;
pub mod output;
pub mod requester;
pub mod traits;

pub use documents::{default_documents, documents_from_texts, Document};
pub use models::{EmbedResponse, ModelInfo};
pub use ollama::OllamaClient;
pub use requester::{EmbeddingRequester, RunSummary};
pub use traits::Embedder;
