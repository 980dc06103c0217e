use jina_core::{Error, RerankModel, Result, Usage};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RerankRequest {
    model: RerankModel,
    query: String,
    documents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_n: Option<usize>,
    return_documents: bool,
}

impl RerankRequest {
    pub fn builder(model: impl Into<String>) -> RerankRequestBuilder {
        RerankRequestBuilder::new(model)
    }

    pub const fn model(&self) -> RerankModel {
        self.model
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub const fn top_n(&self) -> Option<usize> {
        self.top_n
    }

    pub const fn return_documents(&self) -> bool {
        self.return_documents
    }
}

#[derive(Debug, Clone, Default)]
pub struct RerankRequestBuilder {
    model: String,
    query: String,
    documents: Vec<String>,
    top_n: Option<usize>,
    return_documents: Option<bool>,
}

impl RerankRequestBuilder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.documents.push(document.into());
        self
    }

    #[must_use]
    pub fn with_documents<I, T>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.documents.extend(documents.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    #[must_use]
    pub fn with_return_documents(mut self, return_documents: bool) -> Self {
        self.return_documents = Some(return_documents);
        self
    }

    pub fn build(self) -> Result<RerankRequest> {
        let model: RerankModel = self.model.parse()?;

        if self.query.trim().is_empty() {
            return Err(Error::EmptyInput { field: "query" });
        }
        if self.documents.is_empty() {
            return Err(Error::EmptyInput { field: "documents" });
        }
        if let Some(top_n) = self.top_n {
            if top_n == 0 || top_n > self.documents.len() {
                return Err(Error::InvalidTopN {
                    top_n,
                    documents: self.documents.len(),
                });
            }
        }

        Ok(RerankRequest {
            model,
            query: self.query,
            documents: self.documents,
            top_n: self.top_n,
            return_documents: self.return_documents.unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RerankItem {
    /// Position of the document in the request.
    pub index: usize,
    pub relevance_score: f32,
    /// Echoed text, present only when documents were requested back.
    pub document: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RerankResult {
    pub model: String,
    pub usage: Usage,
    pub results: Vec<RerankItem>,
}
