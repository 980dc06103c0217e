use jina_core::Usage;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmbeddingTask {
    #[serde(rename = "retrieval.query")]
    RetrievalQuery,
    #[serde(rename = "retrieval.passage")]
    RetrievalPassage,
    #[serde(rename = "text-matching")]
    TextMatching,
    #[serde(rename = "classification")]
    Classification,
    #[serde(rename = "separation")]
    Separation,
}

/// Encoding the service uses for returned vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingType {
    #[default]
    Float,
    Base64,
    /// Packed bits, signed bytes on the wire.
    Binary,
    /// Packed bits, unsigned bytes on the wire.
    Ubinary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Query,
    #[default]
    Document,
}

/// One item to embed. Images are only accepted by CLIP models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Text(String),
    /// Image URL or base64-encoded image bytes.
    Image { image: String },
}

impl EmbeddingInput {
    pub fn image(source: impl Into<String>) -> Self {
        Self::Image {
            image: source.into(),
        }
    }

    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

impl From<&str> for EmbeddingInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for EmbeddingInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Vector {
    Float(Vec<f32>),
    /// `binary` and `ubinary` payloads, eight dimensions per byte.
    Packed(Vec<u8>),
    /// Left encoded; the caller decodes according to the item's type tag.
    Base64(String),
}

impl Vector {
    pub fn as_floats(&self) -> Option<&[f32]> {
        match self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_packed(&self) -> Option<&[u8]> {
        match self {
            Self::Packed(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_base64(&self) -> Option<&str> {
        match self {
            Self::Base64(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingItem {
    pub index: usize,
    pub embedding_type: EmbeddingType,
    pub vector: Vector,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingResult {
    pub model: String,
    pub usage: Usage,
    pub data: Vec<EmbeddingItem>,
}

/// One vector per token of the input at `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiVectorItem {
    pub index: usize,
    pub embedding_type: EmbeddingType,
    pub vectors: Vec<Vector>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiVectorResult {
    pub model: String,
    pub usage: Usage,
    pub data: Vec<MultiVectorItem>,
}
