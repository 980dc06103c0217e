//! Typed client for the Jina search foundation API.
//!
//! Requests are validated locally by their builders, sent through a
//! [`Transport`], and the polymorphic response bodies are normalized into
//! [`EmbeddingResult`], [`MultiVectorResult`] and [`RerankResult`].
//!
//! ```rust,ignore
//! use jina_client::{EmbeddingRequest, JinaClient};
//!
//! let client = JinaClient::from_env()?;
//! let request = EmbeddingRequest::builder("jina-embeddings-v3")
//!     .with_inputs(["Hello, world!"])
//!     .with_dimensions(512)
//!     .build()?;
//! let result = client.embed(request).await?;
//! ```

mod client;
mod factory;

pub use client::JinaClient;
pub use factory::{build_embedding_provider, build_rerank_provider, build_transport};

pub use jina_core::{
    API_KEY_ENV, ClientConfig, DEFAULT_BASE_URL, DimensionSupport, EMBEDDINGS_PATH,
    EmbeddingModel, Error, HttpTransport, MULTI_VECTOR_PATH, MultiVectorModel, OperationKind,
    RERANK_PATH, RerankModel, Result, Transport, Usage,
};
pub use jina_embed::{
    EmbeddingInput, EmbeddingItem, EmbeddingProvider, EmbeddingRequest, EmbeddingRequestBuilder,
    EmbeddingResult, EmbeddingTask, EmbeddingType, InputType, JinaEmbeddingProvider,
    MultiVectorItem, MultiVectorRequest, MultiVectorRequestBuilder, MultiVectorResult, Vector,
};
pub use jina_rerank::{
    JinaRerankProvider, RerankItem, RerankProvider, RerankRequest, RerankRequestBuilder,
    RerankResult,
};
