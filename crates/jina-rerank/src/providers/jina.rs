use std::sync::Arc;

use jina_core::{ClientConfig, HttpTransport, RERANK_PATH, Result, Transport};
use tracing::debug;

use crate::normalize::normalize_rerank;
use crate::traits::RerankProvider;
use crate::types::{RerankRequest, RerankResult};

#[derive(Clone)]
pub struct JinaRerankProvider {
    transport: Arc<dyn Transport>,
}

impl JinaRerankProvider {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait::async_trait]
impl RerankProvider for JinaRerankProvider {
    fn name(&self) -> &'static str {
        "jina"
    }

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResult> {
        debug!(
            model = %request.model(),
            documents = request.documents().len(),
            top_n = ?request.top_n(),
            "rerank request"
        );
        let payload = serde_json::to_value(&request)?;
        let body = self.transport.post_json(RERANK_PATH, payload).await?;
        normalize_rerank(&body, request.documents().len(), request.top_n())
    }
}
