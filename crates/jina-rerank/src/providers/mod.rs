pub mod jina;

pub use jina::JinaRerankProvider;
