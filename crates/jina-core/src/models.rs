//! Catalog of the models the search foundation API serves, grouped by the
//! operation that accepts them.
//!
//! Model identifiers are validated here rather than at the service so that a
//! typo fails with [`Error::InvalidModel`] before any request is sent.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Embedding,
    MultiVector,
    Rerank,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Embedding => "embedding",
            Self::MultiVector => "multi-vector",
            Self::Rerank => "rerank",
        })
    }
}

/// Output widths a model can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionSupport {
    /// Any width from 1 up to the model's maximum.
    Range { max: u32 },
    OneOf(&'static [u32]),
}

impl DimensionSupport {
    pub fn contains(self, dimensions: u32) -> bool {
        match self {
            Self::Range { max } => (1..=max).contains(&dimensions),
            Self::OneOf(allowed) => allowed.contains(&dimensions),
        }
    }

    pub fn max(self) -> u32 {
        match self {
            Self::Range { max } => max,
            Self::OneOf(allowed) => allowed.iter().copied().max().unwrap_or(0),
        }
    }
}

impl fmt::Display for DimensionSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { max } => write!(f, "1..={max}"),
            Self::OneOf(allowed) => {
                f.write_str("one of ")?;
                for (i, d) in allowed.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{d}")?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! model_ids {
    ($(#[$meta:meta])* $name:ident, $kind:expr, { $($variant:ident => $id:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $id),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($id => Ok(Self::$variant),)+
                    other => Err(Error::InvalidModel {
                        model: other.to_string(),
                        kind: $kind,
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(model: $name) -> Self {
                model.as_str().to_string()
            }
        }
    };
}

model_ids!(
    /// Single-vector embedding models served by `/v1/embeddings`.
    EmbeddingModel, OperationKind::Embedding, {
        JinaEmbeddingsV3 => "jina-embeddings-v3",
        JinaClipV2 => "jina-clip-v2",
        JinaClipV1 => "jina-clip-v1",
        JinaEmbeddingsV2BaseEn => "jina-embeddings-v2-base-en",
        JinaEmbeddingsV2BaseDe => "jina-embeddings-v2-base-de",
        JinaEmbeddingsV2BaseEs => "jina-embeddings-v2-base-es",
        JinaEmbeddingsV2BaseZh => "jina-embeddings-v2-base-zh",
        JinaEmbeddingsV2BaseCode => "jina-embeddings-v2-base-code",
    }
);

model_ids!(
    /// ColBERT-style models served by `/v1/multi-vector`.
    MultiVectorModel, OperationKind::MultiVector, {
        JinaColbertV2 => "jina-colbert-v2",
        JinaColbertV1En => "jina-colbert-v1-en",
    }
);

model_ids!(
    RerankModel, OperationKind::Rerank, {
        JinaRerankerV2BaseMultilingual => "jina-reranker-v2-base-multilingual",
        JinaRerankerV1BaseEn => "jina-reranker-v1-base-en",
        JinaRerankerV1TurboEn => "jina-reranker-v1-turbo-en",
        JinaRerankerV1TinyEn => "jina-reranker-v1-tiny-en",
        JinaRerankerM0 => "jina-reranker-m0",
        JinaColbertV2 => "jina-colbert-v2",
        JinaColbertV1En => "jina-colbert-v1-en",
    }
);

impl EmbeddingModel {
    pub const fn dimensions(self) -> DimensionSupport {
        match self {
            Self::JinaEmbeddingsV3 | Self::JinaClipV2 => DimensionSupport::Range { max: 1024 },
            Self::JinaClipV1
            | Self::JinaEmbeddingsV2BaseEn
            | Self::JinaEmbeddingsV2BaseDe
            | Self::JinaEmbeddingsV2BaseEs
            | Self::JinaEmbeddingsV2BaseZh
            | Self::JinaEmbeddingsV2BaseCode => DimensionSupport::Range { max: 768 },
        }
    }

    pub const fn supports_task(self) -> bool {
        matches!(self, Self::JinaEmbeddingsV3)
    }

    pub const fn supports_late_chunking(self) -> bool {
        matches!(self, Self::JinaEmbeddingsV3)
    }

    pub const fn accepts_images(self) -> bool {
        matches!(self, Self::JinaClipV1 | Self::JinaClipV2)
    }
}

const COLBERT_V2_DIMENSIONS: &[u32] = &[128, 96, 64];

impl MultiVectorModel {
    /// `None` when the model ignores a requested width.
    pub const fn dimensions(self) -> Option<DimensionSupport> {
        match self {
            Self::JinaColbertV2 => Some(DimensionSupport::OneOf(COLBERT_V2_DIMENSIONS)),
            Self::JinaColbertV1En => None,
        }
    }

    pub const fn supports_embedding_type(self) -> bool {
        matches!(self, Self::JinaColbertV2)
    }
}
