use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

pub const EMBEDDINGS_PATH: &str = "/v1/embeddings";
pub const MULTI_VECTOR_PATH: &str = "/v1/multi-vector";
pub const RERANK_PATH: &str = "/v1/rerank";

/// Sends one JSON payload and hands back the decoded JSON body.
///
/// Implementations must map non-2xx answers to [`Error::Service`] and
/// connection-level failures to [`Error::Transport`] so callers can tell a
/// broken call apart from a payload that failed to normalize.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value>;
}

#[derive(Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::Config("api key is empty".to_string()));
        }
        // reqwest has no write-phase timeout; the overall deadline covers it.
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.connect_timeout + config.write_timeout + config.read_timeout)
            .build()?;
        Ok(Self { config, client })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value> {
        let url = self.config.endpoint(path);
        debug!(%url, "posting request");

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let headers = res.headers().clone();
            let body = match res.bytes().await {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(err) => {
                    warn!(%url, error = %err, "could not read error body");
                    String::new()
                }
            };
            warn!(%url, status = status.as_u16(), "service returned an error");
            return Err(Error::Service {
                status: status.as_u16(),
                body,
                headers,
            });
        }

        let bytes = res.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| {
            Error::unrecognized_shape(format!("response body is not JSON: {err}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;

    #[test]
    fn empty_api_key_is_a_config_error() {
        let err = HttpTransport::new(ClientConfig::new("  "));
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0");
        let Ok(addr) = listener.and_then(|l| l.local_addr()) else {
            return;
        };
        // listener dropped: nothing accepts on this port anymore

        let cfg = ClientConfig::new("key").with_base_url(format!("http://{addr}"));
        let Ok(transport) = HttpTransport::new(cfg) else {
            return;
        };
        let err = transport
            .post_json(RERANK_PATH, serde_json::json!({}))
            .await;
        assert!(matches!(err, Err(Error::Transport(_))));
    }

    /// Answers one request with `head` followed by `body`, then hangs up.
    fn one_shot_server(head: &'static str, body: &'static [u8]) -> Option<String> {
        let listener = TcpListener::bind("127.0.0.1:0").ok()?;
        let addr = listener.local_addr().ok()?;
        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut seen = Vec::new();
            let mut buf = [0_u8; 1024];
            while !seen.ends_with(b"{}") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => seen.extend_from_slice(buf.get(..n).unwrap_or_default()),
                }
            }
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        });
        Some(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn non_utf8_error_body_is_kept() {
        let Some(base) = one_shot_server(
            "HTTP/1.1 400 Bad Request\r\ncontent-length: 4\r\nconnection: close\r\n\r\n",
            b"ab\xffc",
        ) else {
            return;
        };
        let Ok(transport) = HttpTransport::new(ClientConfig::new("key").with_base_url(base)) else {
            return;
        };
        let err = transport
            .post_json(RERANK_PATH, serde_json::json!({}))
            .await;
        assert!(matches!(
            err,
            Err(Error::Service { status: 400, ref body, .. }) if body == "ab\u{fffd}c"
        ));
    }

    #[tokio::test]
    async fn truncated_error_body_keeps_status_and_headers() {
        let Some(base) = one_shot_server(
            "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 64\r\nretry-after: 2\r\n\r\n",
            b"partial",
        ) else {
            return;
        };
        let Ok(transport) = HttpTransport::new(ClientConfig::new("key").with_base_url(base)) else {
            return;
        };
        let err = transport
            .post_json(RERANK_PATH, serde_json::json!({}))
            .await;
        assert!(matches!(
            err,
            Err(Error::Service { status: 503, ref body, ref headers })
                if body.is_empty() && headers.contains_key("retry-after")
        ));
    }
}
