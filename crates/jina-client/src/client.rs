use std::sync::Arc;

use jina_core::{ClientConfig, Result, Transport};
use jina_embed::{
    EmbeddingProvider, EmbeddingRequest, EmbeddingResult, MultiVectorRequest, MultiVectorResult,
};
use jina_rerank::{RerankProvider, RerankRequest, RerankResult};
use tracing::info;

use crate::factory::{build_embedding_provider, build_rerank_provider, build_transport};

/// One handle for all three operations, sharing a single connection pool.
///
/// Cloning is cheap; clones share the pool and carry no mutable state.
#[derive(Clone)]
pub struct JinaClient {
    embedder: Arc<dyn EmbeddingProvider>,
    reranker: Arc<dyn RerankProvider>,
}

impl JinaClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        info!(base_url = %config.base_url, "jina client initialized");
        Ok(Self::with_transport(build_transport(config)?))
    }

    /// Configured from `JINA_API_KEY` and friends, see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            embedder: build_embedding_provider(Arc::clone(&transport)),
            reranker: build_rerank_provider(transport),
        }
    }

    pub async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResult> {
        self.embedder.embed(request).await
    }

    pub async fn embed_multi_vector(&self, request: MultiVectorRequest) -> Result<MultiVectorResult> {
        self.embedder.embed_multi_vector(request).await
    }

    pub async fn rerank(&self, request: RerankRequest) -> Result<RerankResult> {
        self.reranker.rerank(request).await
    }
}
