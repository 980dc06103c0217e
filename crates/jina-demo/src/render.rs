use std::io::{self, Write};

use jina_client::{EmbeddingResult, MultiVectorResult, RerankResult, Usage, Vector};

pub fn usage(out: &mut impl Write, usage: &Usage) -> io::Result<()> {
    writeln!(out, "Total tokens: {}", usage.total_tokens())?;
    if let Some(prompt) = usage.prompt_tokens() {
        writeln!(out, "Prompt tokens: {prompt}")?;
    }
    Ok(())
}

fn describe(vector: &Vector) -> String {
    match vector {
        Vector::Float(v) => format!("{} floats", v.len()),
        Vector::Packed(v) => format!("{} packed bytes", v.len()),
        Vector::Base64(v) => format!("{} base64 chars", v.len()),
    }
}

pub fn embeddings(out: &mut impl Write, res: &EmbeddingResult) -> io::Result<()> {
    writeln!(out, "=== Embedding Results ===")?;
    writeln!(out, "Model used: {}", res.model)?;
    usage(out, &res.usage)?;
    writeln!(out, "Number of embedding results: {}", res.data.len())?;
    for item in &res.data {
        writeln!(
            out,
            "  [{}] {:?}: {}",
            item.index,
            item.embedding_type,
            describe(&item.vector)
        )?;
    }
    Ok(())
}

pub fn multi_vector(out: &mut impl Write, res: &MultiVectorResult) -> io::Result<()> {
    writeln!(out, "=== Multi-Vector Embedding Results ===")?;
    writeln!(out, "Model used: {}", res.model)?;
    usage(out, &res.usage)?;
    for item in &res.data {
        let width = item.vectors.first().map(describe).unwrap_or_default();
        writeln!(
            out,
            "  [{}] {} token vectors of {}",
            item.index,
            item.vectors.len(),
            width
        )?;
    }
    Ok(())
}

pub fn rerank(out: &mut impl Write, res: &RerankResult) -> io::Result<()> {
    writeln!(out, "Model: {}", res.model)?;
    writeln!(out, "Usage: {} tokens", res.usage.total_tokens())?;
    writeln!(out, "Top {} ranked documents:", res.results.len())?;
    for ranked in &res.results {
        writeln!(
            out,
            "Index={}, score={}, document={}",
            ranked.index,
            ranked.relevance_score,
            ranked.document.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jina_client::{EmbeddingItem, EmbeddingType, RerankItem};

    #[test]
    fn embedding_report_lists_usage_and_items() {
        let res = EmbeddingResult {
            model: "jina-embeddings-v3".to_string(),
            usage: Usage::Embedding {
                prompt_tokens: 7,
                total_tokens: 7,
            },
            data: vec![EmbeddingItem {
                index: 0,
                embedding_type: EmbeddingType::Float,
                vector: Vector::Float(vec![0.0; 512]),
            }],
        };
        let mut out = Vec::new();
        assert!(embeddings(&mut out, &res).is_ok());
        let text = String::from_utf8(out).unwrap_or_default();
        assert!(text.contains("Model used: jina-embeddings-v3"));
        assert!(text.contains("Prompt tokens: 7"));
        assert!(text.contains("[0] Float: 512 floats"));
    }

    #[test]
    fn rerank_report_prints_one_line_per_result() {
        let res = RerankResult {
            model: "jina-reranker-v2-base-multilingual".to_string(),
            usage: Usage::Base { total_tokens: 30 },
            results: vec![
                RerankItem {
                    index: 4,
                    relevance_score: 0.5,
                    document: Some("Paris".to_string()),
                },
                RerankItem {
                    index: 1,
                    relevance_score: 0.25,
                    document: None,
                },
            ],
        };
        let mut out = Vec::new();
        assert!(rerank(&mut out, &res).is_ok());
        let text = String::from_utf8(out).unwrap_or_default();
        assert!(text.contains("Top 2 ranked documents:"));
        assert!(text.contains("Index=4, score=0.5, document=Paris"));
        assert!(text.contains("Index=1, score=0.25, document=-"));
    }
}
