mod render;

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jina_client::{
    ClientConfig, EmbeddingRequest, EmbeddingTask, EmbeddingType, Error, InputType, JinaClient,
    MultiVectorRequest, RerankRequest,
};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Calls one Jina endpoint with sample inputs and prints the normalized result.
#[derive(Debug, Parser)]
#[command(name = "jina-demo", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dense embeddings with jina-embeddings-v3
    Embed {
        #[arg(long, default_value_t = 512)]
        dimensions: u32,
    },
    /// Per-token embeddings with jina-colbert-v2
    MultiVector {
        #[arg(long, default_value_t = 128)]
        dimensions: u32,
    },
    /// Rerank sample documents against a query
    Rerank {
        #[arg(long, default_value_t = 3)]
        top_n: usize,
        #[arg(long, default_value = "What is the capital of France?")]
        query: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<()> {
    let mut config = ClientConfig::from_env().context("set JINA_API_KEY to run the demo")?;
    let mut out = io::stdout().lock();

    match command {
        Command::Embed { dimensions } => {
            let client = JinaClient::new(config)?;
            let request = EmbeddingRequest::builder("jina-embeddings-v3")
                .with_inputs([
                    "Hello, world!",
                    "Goodmem.ai is awesome!",
                    "The quick brown fox jumps over the lazy dog",
                ])
                .with_task(EmbeddingTask::TextMatching)
                .with_dimensions(dimensions)
                .with_embedding_type(EmbeddingType::Float)
                .with_normalized(true)
                .with_late_chunking(false)
                .with_truncate(true)
                .build()?;
            let res = client.embed(request).await?;
            render::embeddings(&mut out, &res)?;
        }
        Command::MultiVector { dimensions } => {
            config = config.with_timeouts(
                Duration::from_secs(30),
                Duration::from_secs(60),
                Duration::from_secs(60),
            );
            let client = JinaClient::new(config)?;
            let request = MultiVectorRequest::builder("jina-colbert-v2")
                .with_inputs(["Hello, world!", "Goodmem is awesome."])
                .with_input_type(InputType::Document)
                .with_dimensions(dimensions)
                .with_embedding_type(EmbeddingType::Float)
                .build()?;
            let res = client.embed_multi_vector(request).await?;
            render::multi_vector(&mut out, &res)?;
        }
        Command::Rerank { top_n, query } => {
            let client = JinaClient::new(config)?;
            let request = RerankRequest::builder("jina-reranker-v2-base-multilingual")
                .with_query(query)
                .with_documents([
                    "Madrid is the capital of Spain",
                    "France is a country in Europe",
                    "Paris to France is like Rome to Italy",
                    "Berlin is the capital of Germany",
                    "Paris is the capital and largest city of France",
                ])
                .with_top_n(top_n)
                .with_return_documents(true)
                .build()?;
            let res = client.rerank(request).await?;
            render::rerank(&mut out, &res)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(Error::Service {
            status,
            body,
            headers,
        }) => {
            error!(status, %body, ?headers, "service rejected the request");
        }
        Some(e) if e.is_request_error() => error!("invalid request: {e}"),
        _ => error!("{err:#}"),
    }
}
