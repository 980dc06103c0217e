use std::sync::Arc;

use jina_core::{ClientConfig, HttpTransport, Result, Transport};
use jina_embed::{EmbeddingProvider, JinaEmbeddingProvider};
use jina_rerank::{JinaRerankProvider, RerankProvider};

pub fn build_transport(cfg: ClientConfig) -> Result<Arc<dyn Transport>> {
    Ok(Arc::new(HttpTransport::new(cfg)?))
}

pub fn build_embedding_provider(transport: Arc<dyn Transport>) -> Arc<dyn EmbeddingProvider> {
    Arc::new(JinaEmbeddingProvider::with_transport(transport))
}

pub fn build_rerank_provider(transport: Arc<dyn Transport>) -> Arc<dyn RerankProvider> {
    Arc::new(JinaRerankProvider::with_transport(transport))
}
