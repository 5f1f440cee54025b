/*
[INPUT]:  HTTP configuration (endpoint, credentials, timeouts, sub-account)
[OUTPUT]: Configured client plus request building/dispatch for all endpoints
[POS]:    HTTP layer - core client implementation
[UPDATE]: When changing authentication headers or response classification
*/

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::request::{canonical_payload, Request};
use crate::http::{FtxError, RequestSigner, Result};
use crate::types::responses::{BasicResponse, Envelope};

/// Production REST API root
pub const DEFAULT_REST_ENDPOINT: &str = "https://ftx.com/api";

/// Authentication header names; exact casing matters for exchange verification
const HEADER_API_KEY: &str = "FTX-KEY";
const HEADER_TIMESTAMP: &str = "FTX-TS";
const HEADER_SIGNATURE: &str = "FTX-SIGN";
const HEADER_SUBACCOUNT: &str = "FTX-SUBACCOUNT";

/// HTTP client configuration
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_secret: String,
    /// REST API root; override for testnets or stub servers
    pub endpoint: String,
    /// Scopes every call issued by the client to a named sub-ledger
    pub subaccount: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            endpoint: DEFAULT_REST_ENDPOINT.to_string(),
            subaccount: None,
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

// The secret must never reach logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("subaccount", &self.subaccount)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Main HTTP client for the FTX REST API.
///
/// One `async` method per exchange endpoint, grouped into the sibling
/// modules of this file. All state is immutable after construction -
/// including the sub-account, which is set once via [`ClientConfig`];
/// issuing calls under a different sub-account means constructing
/// another client (the underlying `reqwest::Client` can be shared via
/// [`FtxClient::with_http_client`]). Concurrent calls on one client are
/// safe: each carries its own independently computed nonce.
#[derive(Debug)]
pub struct FtxClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    signer: RequestSigner,
    subaccount: Option<String>,
}

impl FtxClient {
    /// Create a new client with its own connection pool.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self::assemble(config, http))
    }

    /// Create a new client on a caller-provided transport. Timeouts in
    /// `config` are ignored; the provided client's settings apply.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self::assemble(config, http)
    }

    fn assemble(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            signer: RequestSigner::new(config.api_secret),
            subaccount: config.subaccount,
        }
    }

    /// Sub-account this client is scoped to, if any.
    pub fn subaccount(&self) -> Option<&str> {
        self.subaccount.as_deref()
    }

    // ── Request building ─────────────────────────────────────────────────

    /// Turn a descriptor into a transport-ready request.
    ///
    /// The nonce is captured once from `now`; the canonical payload is
    /// derived from the finalized URL, so what gets signed is byte for
    /// byte what gets sent.
    pub(crate) fn build_request(
        &self,
        r: &Request,
        now: DateTime<Utc>,
    ) -> Result<reqwest::Request> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url,
            r.path.trim_start_matches('/')
        ))?;
        if !r.params.is_empty() {
            url.query_pairs_mut().extend_pairs(r.params.iter());
        }

        let mut builder = self.http.request(r.method.clone(), url.clone());
        if r.method != Method::GET {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }
        if let Some(body) = &r.body {
            builder = builder.body(body.clone());
        }
        if r.auth {
            let nonce = now.timestamp_millis();
            let payload =
                canonical_payload(nonce, &r.method, url.path(), url.query(), r.body.as_deref());
            builder = builder
                .header(HEADER_API_KEY, &self.api_key)
                .header(HEADER_TIMESTAMP, nonce.to_string())
                .header(HEADER_SIGNATURE, self.signer.sign(&payload));
        }
        if let Some(subaccount) = &self.subaccount {
            builder = builder.header(HEADER_SUBACCOUNT, subaccount);
        }
        builder.build().map_err(FtxError::Transport)
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    /// Send a descriptor and classify the raw response.
    ///
    /// Returns the body bytes on HTTP 200; decoding into the endpoint's
    /// result shape is the wrapper's responsibility.
    pub(crate) async fn call_api(&self, r: Request) -> Result<Vec<u8>> {
        let request = self.build_request(&r, Utc::now())?;
        debug!(method = %r.method, path = %r.path, "dispatching request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        // Rate-limit bodies are not guaranteed meaningful, so classify
        // before reading the body at all.
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(path = %r.path, "rate limited");
            return Err(FtxError::RateLimited);
        }

        let body = response.bytes().await.map_err(FtxError::BodyRead)?;
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), path = %r.path, "non-success status");
            let Ok(parsed) = serde_json::from_slice::<BasicResponse>(&body) else {
                return Err(FtxError::UnexpectedStatus(status.as_u16()));
            };
            let message = parsed.error.unwrap_or_default();
            return Err(match message.as_str() {
                "Order already closed" => FtxError::OrderAlreadyClosed,
                "Order already queued for cancellation" => FtxError::OrderAlreadyQueued,
                _ => FtxError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }
        Ok(body.to_vec())
    }

    // ── Envelope decoding ────────────────────────────────────────────────

    /// Dispatch and decode the uniform `{success, error, result}` envelope.
    ///
    /// The exchange signals some failures at HTTP 200 with
    /// `success: false`; that channel is distinct from the status-based
    /// classification in [`call_api`] and both are checked on every call.
    pub(crate) async fn call<T: DeserializeOwned>(&self, r: Request) -> Result<T> {
        let body = self.call_api(r).await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;
        if !envelope.success {
            return Err(FtxError::Rejected(envelope.error.unwrap_or_default()));
        }
        envelope
            .result
            .ok_or_else(|| FtxError::Rejected("response missing result".to_string()))
    }

    /// Dispatch and check the envelope for endpoints whose `result` is null.
    pub(crate) async fn call_ok(&self, r: Request) -> Result<()> {
        let body = self.call_api(r).await?;
        let envelope: BasicResponse = serde_json::from_slice(&body)?;
        if !envelope.success {
            return Err(FtxError::Rejected(envelope.error.unwrap_or_default()));
        }
        Ok(())
    }
}
