//! Cloudflare client implementation

use crate::CF_API_BASE;
use crate::error::{Error, Result};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::types::{Envelope, ResultInfo};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Credentials and target zone, supplied by the caller at construction
#[derive(Clone)]
pub struct ClientConfig {
    pub api_token: String,
    pub zone_id: String,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            zone_id: zone_id.into(),
            base_url: CF_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &"***")
            .field("zone_id", &self.zone_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Cloudflare API client for one zone
pub struct CloudflareClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: Arc<dyn Transport>,
}

impl CloudflareClient {
    /// Create a client that talks to the real API over reqwest
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Path of the zone's record collection, e.g. `/zones/<id>/dns_records`
    pub(crate) fn records_path(&self) -> String {
        format!("/zones/{}/dns_records", self.config.zone_id)
    }

    /// Issue a request and unwrap the envelope's `result`
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        let (result, _) = self.request_with_info(method, path, body).await?;
        Ok(result)
    }

    /// Like [`request`](Self::request), also returning `result_info` for paging
    pub async fn request_with_info<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(T, Option<ResultInfo>)> {
        let envelope: Envelope<T> = self.send(method, path, body).await?;
        let result = envelope.result.ok_or(Error::MissingResult)?;
        Ok((result, envelope.result_info))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope<T>> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%method, %url, "cloudflare request");

        let request = HttpRequest {
            method,
            url,
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", self.config.api_token),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: body.map(Value::to_string),
        };

        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "cloudflare response");

        let envelope: Envelope<T> =
            serde_json::from_str(&response.body).map_err(|source| Error::Decode {
                status: response.status,
                source,
            })?;

        if !envelope.success {
            return Err(Error::Api {
                status: response.status,
                errors: envelope.errors,
            });
        }

        Ok(envelope)
    }
}
