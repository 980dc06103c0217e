use async_trait::async_trait;
use jina_core::Result;

use crate::request::{EmbeddingRequest, MultiVectorRequest};
use crate::types::{EmbeddingResult, MultiVectorResult};

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResult>;

    async fn embed_multi_vector(&self, request: MultiVectorRequest) -> Result<MultiVectorResult>;
}
