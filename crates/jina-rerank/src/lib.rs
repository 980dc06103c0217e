pub mod normalize;
pub mod providers;
pub mod traits;
pub mod types;

pub use jina_core::{Error, Result};
pub use normalize::normalize_rerank;
pub use providers::JinaRerankProvider;
pub use traits::*;
pub use types::*;
