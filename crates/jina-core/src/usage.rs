use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Token accounting attached to every response.
///
/// The service answers with either the general shape (`total_tokens` only) or
/// the embedding-specific shape that also reports `prompt_tokens`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Usage {
    Embedding {
        prompt_tokens: u64,
        total_tokens: u64,
    },
    Base {
        total_tokens: u64,
    },
}

#[derive(Deserialize)]
struct EmbeddingUsage {
    #[serde(alias = "promptTokens")]
    prompt_tokens: u64,
    #[serde(alias = "totalTokens")]
    total_tokens: u64,
}

#[derive(Deserialize)]
struct BaseUsage {
    #[serde(alias = "totalTokens")]
    total_tokens: u64,
}

impl Usage {
    /// Picks the most specific shape whose required fields are all present.
    pub fn from_value(value: &Value) -> Result<Self> {
        if let Ok(u) = EmbeddingUsage::deserialize(value) {
            return Ok(Self::Embedding {
                prompt_tokens: u.prompt_tokens,
                total_tokens: u.total_tokens,
            });
        }
        if let Ok(u) = BaseUsage::deserialize(value) {
            return Ok(Self::Base {
                total_tokens: u.total_tokens,
            });
        }
        Err(Error::unrecognized_shape(format!("usage matches no known shape: {value}")))
    }

    pub const fn total_tokens(&self) -> u64 {
        match self {
            Self::Embedding { total_tokens, .. } | Self::Base { total_tokens } => *total_tokens,
        }
    }

    pub const fn prompt_tokens(&self) -> Option<u64> {
        match self {
            Self::Embedding { prompt_tokens, .. } => Some(*prompt_tokens),
            Self::Base { .. } => None,
        }
    }
}
