//! Validated payloads for `/v1/embeddings` and `/v1/multi-vector`.
//!
//! Builders collect caller input and `build()` checks it against the model
//! catalog. A built request serializes straight to the wire schema.

use jina_core::{EmbeddingModel, Error, MultiVectorModel, Result};
use serde::Serialize;

use crate::types::{EmbeddingInput, EmbeddingTask, EmbeddingType, InputType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddingRequest {
    model: EmbeddingModel,
    input: Vec<EmbeddingInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<EmbeddingTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<u32>,
    embedding_type: EmbeddingType,
    normalized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    late_chunking: Option<bool>,
    truncate: bool,
}

impl EmbeddingRequest {
    pub fn builder(model: impl Into<String>) -> EmbeddingRequestBuilder {
        EmbeddingRequestBuilder::new(model)
    }

    pub const fn model(&self) -> EmbeddingModel {
        self.model
    }

    pub fn input(&self) -> &[EmbeddingInput] {
        &self.input
    }

    pub const fn task(&self) -> Option<EmbeddingTask> {
        self.task
    }

    pub const fn dimensions(&self) -> Option<u32> {
        self.dimensions
    }

    pub const fn embedding_type(&self) -> EmbeddingType {
        self.embedding_type
    }

    pub const fn normalized(&self) -> bool {
        self.normalized
    }

    pub const fn late_chunking(&self) -> bool {
        matches!(self.late_chunking, Some(true))
    }

    pub const fn truncate(&self) -> bool {
        self.truncate
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmbeddingRequestBuilder {
    model: String,
    input: Vec<EmbeddingInput>,
    task: Option<EmbeddingTask>,
    dimensions: Option<u32>,
    embedding_type: Option<EmbeddingType>,
    normalized: Option<bool>,
    late_chunking: Option<bool>,
    truncate: Option<bool>,
}

impl EmbeddingRequestBuilder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_input(mut self, item: impl Into<EmbeddingInput>) -> Self {
        self.input.push(item.into());
        self
    }

    #[must_use]
    pub fn with_inputs<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EmbeddingInput>,
    {
        self.input.extend(items.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_task(mut self, task: EmbeddingTask) -> Self {
        self.task = Some(task);
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    #[must_use]
    pub fn with_embedding_type(mut self, embedding_type: EmbeddingType) -> Self {
        self.embedding_type = Some(embedding_type);
        self
    }

    #[must_use]
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = Some(normalized);
        self
    }

    #[must_use]
    pub fn with_late_chunking(mut self, late_chunking: bool) -> Self {
        self.late_chunking = Some(late_chunking);
        self
    }

    #[must_use]
    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = Some(truncate);
        self
    }

    pub fn build(self) -> Result<EmbeddingRequest> {
        let model: EmbeddingModel = self.model.parse()?;

        if self.input.is_empty() {
            return Err(Error::EmptyInput { field: "input" });
        }
        if !model.accepts_images() && self.input.iter().any(EmbeddingInput::is_image) {
            return Err(unsupported(model, "image input"));
        }

        if let Some(requested) = self.dimensions {
            let supported = model.dimensions();
            if !supported.contains(requested) {
                return Err(Error::DimensionOutOfRange {
                    model: model.to_string(),
                    requested,
                    supported,
                });
            }
        }

        let task = if model.supports_task() {
            Some(self.task.unwrap_or(EmbeddingTask::TextMatching))
        } else if self.task.is_some() {
            return Err(unsupported(model, "task"));
        } else {
            None
        };

        let late_chunking = if model.supports_late_chunking() {
            Some(self.late_chunking.unwrap_or(false))
        } else if self.late_chunking == Some(true) {
            return Err(unsupported(model, "late_chunking"));
        } else {
            None
        };

        Ok(EmbeddingRequest {
            model,
            input: self.input,
            task,
            dimensions: self.dimensions,
            embedding_type: self.embedding_type.unwrap_or_default(),
            normalized: self.normalized.unwrap_or(true),
            late_chunking,
            truncate: self.truncate.unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiVectorRequest {
    model: MultiVectorModel,
    input: Vec<String>,
    input_type: InputType,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embedding_type: Option<EmbeddingType>,
}

impl MultiVectorRequest {
    pub fn builder(model: impl Into<String>) -> MultiVectorRequestBuilder {
        MultiVectorRequestBuilder::new(model)
    }

    pub const fn model(&self) -> MultiVectorModel {
        self.model
    }

    pub fn input(&self) -> &[String] {
        &self.input
    }

    pub const fn input_type(&self) -> InputType {
        self.input_type
    }

    pub const fn dimensions(&self) -> Option<u32> {
        self.dimensions
    }

    /// Encoding of the returned vectors; models without a choice return floats.
    pub fn embedding_type(&self) -> EmbeddingType {
        self.embedding_type.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MultiVectorRequestBuilder {
    model: String,
    input: Vec<String>,
    input_type: Option<InputType>,
    dimensions: Option<u32>,
    embedding_type: Option<EmbeddingType>,
}

impl MultiVectorRequestBuilder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_input(mut self, text: impl Into<String>) -> Self {
        self.input.push(text.into());
        self
    }

    #[must_use]
    pub fn with_inputs<I, T>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.input.extend(texts.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    #[must_use]
    pub fn with_embedding_type(mut self, embedding_type: EmbeddingType) -> Self {
        self.embedding_type = Some(embedding_type);
        self
    }

    pub fn build(self) -> Result<MultiVectorRequest> {
        let model: MultiVectorModel = self.model.parse()?;

        if self.input.is_empty() {
            return Err(Error::EmptyInput { field: "input" });
        }

        if let Some(requested) = self.dimensions {
            let Some(supported) = model.dimensions() else {
                return Err(Error::UnsupportedParameter {
                    model: model.to_string(),
                    parameter: "dimensions",
                });
            };
            if !supported.contains(requested) {
                return Err(Error::DimensionOutOfRange {
                    model: model.to_string(),
                    requested,
                    supported,
                });
            }
        }

        let embedding_type = if model.supports_embedding_type() {
            Some(self.embedding_type.unwrap_or_default())
        } else if self.embedding_type.is_some() {
            return Err(Error::UnsupportedParameter {
                model: model.to_string(),
                parameter: "embedding_type",
            });
        } else {
            None
        };

        Ok(MultiVectorRequest {
            model,
            input: self.input,
            input_type: self.input_type.unwrap_or_default(),
            dimensions: self.dimensions,
            embedding_type,
        })
    }
}

fn unsupported(model: EmbeddingModel, parameter: &'static str) -> Error {
    Error::UnsupportedParameter {
        model: model.to_string(),
        parameter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jina_core::DimensionSupport;
    use serde_json::json;

    #[test]
    fn defaults_are_applied_for_task_aware_model() {
        let req = EmbeddingRequest::builder("jina-embeddings-v3")
            .with_input("Hello, world!")
            .build();
        let Ok(req) = req else {
            panic!("valid request rejected: {req:?}");
        };
        assert_eq!(req.task(), Some(EmbeddingTask::TextMatching));
        assert_eq!(req.embedding_type(), EmbeddingType::Float);
        assert!(req.normalized());
        assert!(!req.late_chunking());
        assert!(!req.truncate());

        assert_eq!(
            serde_json::to_value(&req).ok(),
            Some(json!({
                "model": "jina-embeddings-v3",
                "input": ["Hello, world!"],
                "task": "text-matching",
                "embedding_type": "float",
                "normalized": true,
                "late_chunking": false,
                "truncate": false,
            }))
        );
    }

    #[test]
    fn explicit_fields_reach_the_payload() {
        let req = EmbeddingRequest::builder("jina-embeddings-v3")
            .with_inputs(["Hello, world!", "Goodmem.ai is awesome!"])
            .with_task(EmbeddingTask::RetrievalQuery)
            .with_dimensions(512)
            .with_embedding_type(EmbeddingType::Base64)
            .with_normalized(false)
            .with_late_chunking(true)
            .with_truncate(true)
            .build();
        let value = req.ok().and_then(|r| serde_json::to_value(r).ok());
        assert_eq!(
            value,
            Some(json!({
                "model": "jina-embeddings-v3",
                "input": ["Hello, world!", "Goodmem.ai is awesome!"],
                "task": "retrieval.query",
                "dimensions": 512,
                "embedding_type": "base64",
                "normalized": false,
                "late_chunking": true,
                "truncate": true,
            }))
        );
    }

    #[test]
    fn unknown_model_is_rejected() {
        let err = EmbeddingRequest::builder("jina-colbert-v2")
            .with_input("x")
            .build();
        assert!(matches!(err, Err(Error::InvalidModel { .. })));

        let err = MultiVectorRequest::builder("jina-embeddings-v3")
            .with_input("x")
            .build();
        assert!(matches!(err, Err(Error::InvalidModel { .. })));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = EmbeddingRequest::builder("jina-embeddings-v3")
            .with_inputs(Vec::<String>::new())
            .build();
        assert!(matches!(err, Err(Error::EmptyInput { field: "input" })));

        let err = MultiVectorRequest::builder("jina-colbert-v2").build();
        assert!(matches!(err, Err(Error::EmptyInput { .. })));
    }

    #[test]
    fn dimensions_beyond_model_width_are_rejected() {
        for requested in [0, 1025, 4096] {
            let err = EmbeddingRequest::builder("jina-embeddings-v3")
                .with_input("x")
                .with_dimensions(requested)
                .build();
            assert!(
                matches!(err, Err(Error::DimensionOutOfRange { requested: r, .. }) if r == requested)
            );
        }

        let ok = EmbeddingRequest::builder("jina-embeddings-v3")
            .with_input("x")
            .with_dimensions(1024)
            .build();
        assert!(ok.is_ok());

        let narrower = EmbeddingRequest::builder("jina-embeddings-v2-base-en")
            .with_input("x")
            .with_dimensions(512)
            .build();
        assert_eq!(narrower.ok().and_then(|r| r.dimensions()), Some(512));

        let err = EmbeddingRequest::builder("jina-embeddings-v2-base-en")
            .with_input("x")
            .with_dimensions(769)
            .build();
        assert!(matches!(
            err,
            Err(Error::DimensionOutOfRange {
                requested: 769,
                supported: DimensionSupport::Range { max: 768 },
                ..
            })
        ));
    }

    #[test]
    fn task_and_late_chunking_only_for_models_that_take_them() {
        let req = EmbeddingRequest::builder("jina-embeddings-v2-base-en")
            .with_input("x")
            .build();
        let value = req.ok().and_then(|r| serde_json::to_value(r).ok());
        let value = value.unwrap_or_default();
        assert!(value.get("task").is_none());
        assert!(value.get("late_chunking").is_none());

        let err = EmbeddingRequest::builder("jina-embeddings-v2-base-en")
            .with_input("x")
            .with_task(EmbeddingTask::Classification)
            .build();
        assert!(matches!(
            err,
            Err(Error::UnsupportedParameter {
                parameter: "task",
                ..
            })
        ));

        let err = EmbeddingRequest::builder("jina-clip-v2")
            .with_input("x")
            .with_late_chunking(true)
            .build();
        assert!(matches!(
            err,
            Err(Error::UnsupportedParameter {
                parameter: "late_chunking",
                ..
            })
        ));
    }

    #[test]
    fn images_need_a_clip_model() {
        let ok = EmbeddingRequest::builder("jina-clip-v2")
            .with_input("a cat")
            .with_input(EmbeddingInput::image("https://example.com/cat.png"))
            .build();
        assert!(ok.is_ok());

        let err = EmbeddingRequest::builder("jina-embeddings-v3")
            .with_input(EmbeddingInput::image("https://example.com/cat.png"))
            .build();
        assert!(matches!(err, Err(Error::UnsupportedParameter { .. })));
    }

    #[test]
    fn multi_vector_defaults_and_payload() {
        let req = MultiVectorRequest::builder("jina-colbert-v2")
            .with_inputs(["Hello, world!", "Goodmem is awesome."])
            .with_dimensions(128)
            .build();
        let Ok(req) = req else {
            panic!("valid request rejected: {req:?}");
        };
        assert_eq!(req.input_type(), InputType::Document);
        assert_eq!(req.embedding_type(), EmbeddingType::Float);
        assert_eq!(
            serde_json::to_value(&req).ok(),
            Some(json!({
                "model": "jina-colbert-v2",
                "input": ["Hello, world!", "Goodmem is awesome."],
                "input_type": "document",
                "dimensions": 128,
                "embedding_type": "float",
            }))
        );
    }

    #[test]
    fn multi_vector_dimensions_follow_model_support() {
        let err = MultiVectorRequest::builder("jina-colbert-v2")
            .with_input("x")
            .with_dimensions(100)
            .build();
        assert!(matches!(err, Err(Error::DimensionOutOfRange { .. })));

        let err = MultiVectorRequest::builder("jina-colbert-v1-en")
            .with_input("x")
            .with_dimensions(128)
            .build();
        assert!(matches!(
            err,
            Err(Error::UnsupportedParameter {
                parameter: "dimensions",
                ..
            })
        ));

        let err = MultiVectorRequest::builder("jina-colbert-v1-en")
            .with_input("x")
            .with_embedding_type(EmbeddingType::Binary)
            .build();
        assert!(matches!(
            err,
            Err(Error::UnsupportedParameter {
                parameter: "embedding_type",
                ..
            })
        ));

        let req = MultiVectorRequest::builder("jina-colbert-v1-en")
            .with_input("x")
            .with_input_type(InputType::Query)
            .build();
        let value = req.ok().and_then(|r| serde_json::to_value(r).ok());
        assert_eq!(
            value,
            Some(json!({
                "model": "jina-colbert-v1-en",
                "input": ["x"],
                "input_type": "query",
            }))
        );
    }
}
