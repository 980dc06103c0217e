use async_trait::async_trait;
use jina_core::Result;

use crate::types::{RerankRequest, RerankResult};

#[async_trait]
pub trait RerankProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResult>;
}
