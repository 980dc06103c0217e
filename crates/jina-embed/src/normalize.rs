//! Turns `/v1/embeddings` and `/v1/multi-vector` bodies into typed results.
//!
//! Items arrive either wrapped (`{"index", "embedding"}` /
//! `{"index", "embeddings"}`) or as bare vectors whose position is their
//! index. The wrapped form is tried first; anything matching neither is an
//! [`Error::UnrecognizedResponseShape`]. So is an index that repeats or does
//! not address one of the request's inputs.

use jina_core::shape;
use jina_core::{Error, Result};
use serde_json::Value;

use crate::types::{
    EmbeddingItem, EmbeddingResult, EmbeddingType, MultiVectorItem, MultiVectorResult, Vector,
};

pub fn normalize_embeddings(
    payload: &Value,
    inputs: usize,
    embedding_type: EmbeddingType,
) -> Result<EmbeddingResult> {
    let map = shape::object(payload, "embedding response")?;
    let (model, usage) = shape::envelope(map, "embedding response")?;
    let items = shape::array(map, "data", "embedding response")?;

    let mut data = items
        .iter()
        .enumerate()
        .map(|(position, item)| -> Result<EmbeddingItem> {
            let (index, raw) = single_item(item, position)?;
            Ok(EmbeddingItem {
                index,
                embedding_type,
                vector: decode_vector(raw, embedding_type)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    shape::distinct_indices(data.iter().map(|it| it.index), inputs, "embedding item")?;
    data.sort_by_key(|it| it.index);

    Ok(EmbeddingResult { model, usage, data })
}

pub fn normalize_multi_vector(
    payload: &Value,
    inputs: usize,
    embedding_type: EmbeddingType,
) -> Result<MultiVectorResult> {
    let map = shape::object(payload, "multi-vector response")?;
    let (model, usage) = shape::envelope(map, "multi-vector response")?;
    let items = shape::array(map, "data", "multi-vector response")?;

    let mut data = items
        .iter()
        .enumerate()
        .map(|(position, item)| -> Result<MultiVectorItem> {
            let (index, raw) = multi_item(item, position)?;
            let vectors = raw
                .iter()
                .map(|v| decode_vector(v, embedding_type))
                .collect::<Result<Vec<_>>>()?;
            Ok(MultiVectorItem {
                index,
                embedding_type,
                vectors,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    shape::distinct_indices(data.iter().map(|it| it.index), inputs, "multi-vector item")?;
    data.sort_by_key(|it| it.index);

    Ok(MultiVectorResult { model, usage, data })
}

fn single_item(item: &Value, position: usize) -> Result<(usize, &Value)> {
    match item {
        Value::Object(map) => {
            let index = shape::index(map, "embedding item")?;
            let raw = shape::required(map, "embedding", "embedding item")?;
            Ok((index, raw))
        }
        Value::Array(values) if values.iter().all(Value::is_number) => Ok((position, item)),
        Value::String(_) => Ok((position, item)),
        _ => Err(Error::unrecognized_shape(format!(
            "embedding item {position} is neither a wrapped nor a flat vector"
        ))),
    }
}

fn multi_item(item: &Value, position: usize) -> Result<(usize, &[Value])> {
    match item {
        Value::Object(map) => {
            let index = shape::index(map, "multi-vector item")?;
            let raw = shape::array(map, "embeddings", "multi-vector item")?;
            Ok((index, raw))
        }
        Value::Array(values) if values.iter().all(|v| v.is_array() || v.is_string()) => {
            Ok((position, values.as_slice()))
        }
        _ => Err(Error::unrecognized_shape(format!(
            "multi-vector item {position} is neither a wrapped nor a nested vector list"
        ))),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn decode_vector(raw: &Value, embedding_type: EmbeddingType) -> Result<Vector> {
    match embedding_type {
        EmbeddingType::Base64 => raw
            .as_str()
            .map(|s| Vector::Base64(s.to_string()))
            .ok_or_else(|| Error::unrecognized_shape("expected a base64 string vector")),
        EmbeddingType::Float => {
            let values = raw
                .as_array()
                .ok_or_else(|| Error::unrecognized_shape("expected a float vector"))?;
            values
                .iter()
                .map(|v| {
                    v.as_f64()
                        .map(|f| f as f32)
                        .ok_or_else(|| Error::unrecognized_shape("non-numeric float component"))
                })
                .collect::<Result<Vec<_>>>()
                .map(Vector::Float)
        }
        EmbeddingType::Binary | EmbeddingType::Ubinary => {
            let values = raw
                .as_array()
                .ok_or_else(|| Error::unrecognized_shape("expected a packed byte vector"))?;
            values
                .iter()
                .map(packed_byte)
                .collect::<Result<Vec<_>>>()
                .map(Vector::Packed)
        }
    }
}

/// Signed `binary` bytes keep their bit pattern.
fn packed_byte(v: &Value) -> Result<u8> {
    let n = v
        .as_i64()
        .ok_or_else(|| Error::unrecognized_shape("packed component is not an integer"))?;
    u8::try_from(n)
        .or_else(|_| i8::try_from(n).map(|b| u8::from_be_bytes(b.to_be_bytes())))
        .map_err(|_| Error::unrecognized_shape(format!("packed component {n} is not a byte")))
}
