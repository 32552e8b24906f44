//! Main NCANode client implementation.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_PROTOCOL_VERSION};
use ncanode_core::{NcaNodeError, Result};
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Status reported for an envelope that carries none
const STATUS_MISSING: i64 = -1;

/// Main NCANode client
#[derive(Clone)]
pub struct NcaNodeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
    protocol_version: String,
    timeout: Duration,
}

impl NcaNodeClient {
    /// Create a client for the server at `base_url` using default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        NcaNodeClientBuilder::new().base_url(base_url).build()
    }

    /// Create a client from a loaded [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        NcaNodeClientBuilder::from_config(config).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> NcaNodeClientBuilder {
        NcaNodeClientBuilder::new()
    }

    /// Server address requests are posted to
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Access server information
    #[must_use]
    pub fn node(&self) -> NodeApi<'_> {
        NodeApi::new(self)
    }

    /// Access PKCS#12 key container endpoints
    #[must_use]
    pub fn pkcs12(&self) -> Pkcs12Api<'_> {
        Pkcs12Api::new(self)
    }

    /// Access X.509 certificate endpoints
    #[must_use]
    pub fn x509(&self) -> X509Api<'_> {
        X509Api::new(self)
    }

    /// Access XML signing endpoints
    #[must_use]
    pub fn xml(&self) -> XmlApi<'_> {
        XmlApi::new(self)
    }

    /// Access CMS signing endpoints
    #[must_use]
    pub fn cms(&self) -> CmsApi<'_> {
        CmsApi::new(self)
    }

    /// Call an NCANode method and return the `result` field of the answer.
    ///
    /// The envelope must carry an integer `status`; anything other than 0 is
    /// an API error.
    pub(crate) async fn call(&self, method: &str, params: Option<Map<String, Value>>) -> Result<Value> {
        let mut envelope = json!({
            "version": self.inner.protocol_version,
            "method": method,
        });
        if let Some(params) = params {
            envelope["params"] = Value::Object(params);
        }

        let mut answer = self
            .post_json(self.inner.base_url.clone(), &envelope, method)
            .await?;

        let Some(code) = answer.get("status").and_then(Value::as_i64) else {
            warn!(method, "NCANode answer has no status");
            return Err(NcaNodeError::Api {
                status: STATUS_MISSING,
                message: message_of(&answer).unwrap_or_else(|| String::from("response has no status")),
            });
        };

        if code != 0 {
            let message = message_of(&answer).unwrap_or_default();
            warn!(method, status = code, message = %message, "NCANode API error");
            return Err(NcaNodeError::Api {
                status: code,
                message,
            });
        }

        answer
            .remove("result")
            .ok_or_else(|| NcaNodeError::MissingField(String::from("result")))
    }

    /// Post `params` as-is to `base_url + path` and return the whole answer.
    pub(crate) async fn call_path(&self, path: &str, params: Map<String, Value>) -> Result<Map<String, Value>> {
        let url = self.endpoint(path)?;
        self.post_json(url, &Value::Object(params), path).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&url).map_err(|e| NcaNodeError::InvalidUrl(format!("{url}: {e}")))
    }

    /// POST a JSON body and decode the answer as a JSON object.
    ///
    /// Any HTTP status other than 200 is an API error, whatever the body
    /// says; the body's `status` and `message` are used when present.
    async fn post_json(&self, url: Url, body: &Value, target: &str) -> Result<Map<String, Value>> {
        debug!(url = %url, target, "POST request");

        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(&e))?;
        let parsed = serde_json::from_str::<Value>(&text).ok();

        if status != StatusCode::OK {
            let http_code = i64::from(status.as_u16());
            let (code, message) = match &parsed {
                Some(Value::Object(answer)) => (
                    answer
                        .get("status")
                        .and_then(Value::as_i64)
                        .filter(|code| *code != 0)
                        .unwrap_or(http_code),
                    message_of(answer).unwrap_or_else(|| text.clone()),
                ),
                _ => (http_code, text),
            };
            warn!(target, status = code, http_status = status.as_u16(), "NCANode request failed");
            return Err(NcaNodeError::Api {
                status: code,
                message,
            });
        }

        match parsed {
            Some(Value::Object(answer)) => Ok(answer),
            _ => {
                warn!(target, "NCANode returned a non-object body");
                Err(NcaNodeError::InvalidResponse(format!(
                    "invalid response given: {text:?}"
                )))
            }
        }
    }

    /// Convert a reqwest failure to an NcaNodeError
    fn transport_error(&self, err: &reqwest::Error) -> NcaNodeError {
        if err.is_timeout() {
            NcaNodeError::Timeout(self.inner.timeout.as_secs())
        } else if err.is_connect() {
            NcaNodeError::Connection(err.to_string())
        } else {
            NcaNodeError::Http(err.to_string())
        }
    }
}

fn message_of(answer: &Map<String, Value>) -> Option<String> {
    answer.get("message").and_then(Value::as_str).map(String::from)
}

/// Builder for configuring a [`NcaNodeClient`]
pub struct NcaNodeClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    protocol_version: String,
}

impl Default for NcaNodeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NcaNodeClientBuilder {
    /// Create a builder pointing at a local NCANode
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("ncanode-rust/{}", env!("CARGO_PKG_VERSION")),
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
        }
    }

    /// Start from a loaded [`ClientConfig`]
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = Self::new()
            .base_url(config.base_url.clone())
            .timeout(config.timeout())
            .protocol_version(config.protocol_version.clone());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder
    }

    /// Set the server address
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the envelope `version` field
    #[must_use]
    pub fn protocol_version(mut self, version: impl Into<String>) -> Self {
        self.protocol_version = version.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<NcaNodeClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| NcaNodeError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| NcaNodeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(NcaNodeClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                protocol_version: self.protocol_version,
                timeout: self.timeout,
            }),
        })
    }
}
