use std::sync::Arc;

use jina_core::{
    ClientConfig, EMBEDDINGS_PATH, HttpTransport, MULTI_VECTOR_PATH, Result, Transport,
};
use tracing::debug;

use crate::normalize::{normalize_embeddings, normalize_multi_vector};
use crate::request::{EmbeddingRequest, MultiVectorRequest};
use crate::traits::EmbeddingProvider;
use crate::types::{EmbeddingResult, MultiVectorResult};

#[derive(Clone)]
pub struct JinaEmbeddingProvider {
    transport: Arc<dyn Transport>,
}

impl JinaEmbeddingProvider {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for JinaEmbeddingProvider {
    fn name(&self) -> &'static str {
        "jina"
    }

    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResult> {
        debug!(
            model = %request.model(),
            items = request.input().len(),
            embedding_type = ?request.embedding_type(),
            "embedding request"
        );
        let (inputs, embedding_type) = (request.input().len(), request.embedding_type());
        let payload = serde_json::to_value(&request)?;
        let body = self.transport.post_json(EMBEDDINGS_PATH, payload).await?;
        normalize_embeddings(&body, inputs, embedding_type)
    }

    async fn embed_multi_vector(&self, request: MultiVectorRequest) -> Result<MultiVectorResult> {
        debug!(
            model = %request.model(),
            items = request.input().len(),
            input_type = ?request.input_type(),
            "multi-vector request"
        );
        let (inputs, embedding_type) = (request.input().len(), request.embedding_type());
        let payload = serde_json::to_value(&request)?;
        let body = self.transport.post_json(MULTI_VECTOR_PATH, payload).await?;
        normalize_multi_vector(&body, inputs, embedding_type)
    }
}
