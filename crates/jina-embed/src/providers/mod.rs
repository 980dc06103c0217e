pub mod jina;

pub use jina::JinaEmbeddingProvider;
