pub mod normalize;
pub mod providers;
pub mod request;
pub mod traits;
pub mod types;

pub use jina_core::{Error, Result};
pub use normalize::{normalize_embeddings, normalize_multi_vector};
pub use providers::JinaEmbeddingProvider;
pub use request::*;
pub use traits::*;
pub use types::*;
