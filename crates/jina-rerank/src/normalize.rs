use std::cmp::Ordering;

use jina_core::shape;
use jina_core::{Error, Result};
use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{RerankItem, RerankResult};

/// Normalizes a `/v1/rerank` body for a request over `documents` inputs.
///
/// Results come back ordered by score descending, ties by ascending index,
/// and cut to `top_n` when the service returned more.
pub fn normalize_rerank(
    payload: &Value,
    documents: usize,
    top_n: Option<usize>,
) -> Result<RerankResult> {
    let map = shape::object(payload, "rerank response")?;
    let (model, usage) = shape::envelope(map, "rerank response")?;
    let raw = shape::array(map, "results", "rerank response")?;

    let mut results = raw
        .iter()
        .map(|item| -> Result<RerankItem> {
            rerank_item(shape::object(item, "rerank result")?)
        })
        .collect::<Result<Vec<_>>>()?;
    shape::distinct_indices(results.iter().map(|r| r.index), documents, "rerank result")?;

    let ordered = results
        .iter()
        .zip(results.iter().skip(1))
        .all(|(a, b)| by_relevance(a, b) != Ordering::Greater);
    if !ordered {
        debug!(results = results.len(), "re-sorting rerank results");
        results.sort_by(by_relevance);
    }
    if let Some(n) = top_n {
        results.truncate(n);
    }

    Ok(RerankResult {
        model,
        usage,
        results,
    })
}

fn by_relevance(a: &RerankItem, b: &RerankItem) -> Ordering {
    b.relevance_score
        .total_cmp(&a.relevance_score)
        .then(a.index.cmp(&b.index))
}

#[allow(clippy::cast_possible_truncation)]
fn rerank_item(map: &Map<String, Value>) -> Result<RerankItem> {
    let index = shape::index(map, "rerank result")?;
    let score = shape::required(map, "relevance_score", "rerank result")
        .or_else(|_| shape::required(map, "score", "rerank result"))
        .ok()
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::unrecognized_shape("rerank result has no numeric relevance_score"))?;

    let document = match map.get("document") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Object(doc)) => Some(
            doc.get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::unrecognized_shape("rerank document has no text"))?
                .to_string(),
        ),
        Some(other) => {
            return Err(Error::unrecognized_shape(format!(
                "rerank document has unexpected shape: {other}"
            )));
        }
    };

    Ok(RerankItem {
        index,
        relevance_score: score as f32,
        document,
    })
}
