//! HTTP-backed generation service.
//!
//! Sends `POST {endpoint}/generate/{target}` with a bearer key and a JSON body
//! carrying the topic, context, and the target's JSON Schema. The response
//! body is the raw payload.

use std::time::Duration;

use quill_config::GenerationConfig;
use serde::Serialize;
use serde_json::Value;

use crate::error::GenerationError;
use crate::service::{GenerationContext, GenerationRequest, GenerationService};

/// Fallback when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody<'a> {
    topic: &'a str,
    context: &'a GenerationContext,
    schema: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

/// Generation service client.
#[derive(Debug, Clone)]
pub struct HttpGenerationService {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: Option<String>,
}

impl HttpGenerationService {
    /// Build a client from generation configuration.
    ///
    /// Missing credentials are not an error here; they surface per request as
    /// [`GenerationError::MissingCredential`] so the run can record them per
    /// task.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim().trim_end_matches('/').to_string(),
            api_key: config.api_key.trim().to_string(),
            model: config.model().map(ToString::to_string),
        })
    }

    /// Request a raw payload.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::MissingCredential`] / [`GenerationError::NotConfigured`]
    ///   before any request when the key or endpoint is empty.
    /// - [`GenerationError::Unauthorized`] on 401/403.
    /// - [`GenerationError::RateLimited`] on 429.
    /// - [`GenerationError::Api`] on any other non-success status.
    /// - [`GenerationError::Http`] on transport or body decode failure.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::MissingCredential);
        }
        if self.endpoint.is_empty() {
            return Err(GenerationError::NotConfigured);
        }

        let url = format!("{}/generate/{}", self.endpoint, request.target);
        let body = GenerateBody {
            topic: &request.topic,
            context: &request.context,
            schema: &request.schema,
            model: self.model.as_deref(),
        };

        tracing::debug!(kind = %request.target, topic = %request.topic, "requesting generation");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json::<Value>().await?)
    }
}

impl GenerationService for HttpGenerationService {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<Value, GenerationError>> + Send {
        Self::generate(self, request)
    }
}

/// Check a generation response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`GenerationError::RateLimited`] with
///   `Retry-After` parsing (falls back to 60 s).
/// - **401/403** → [`GenerationError::Unauthorized`].
/// - **Other non-success** → [`GenerationError::Api`] with the body.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, GenerationError> {
    let status = resp.status();
    if status == 429 {
        return Err(GenerationError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == 401 || status == 403 {
        return Err(GenerationError::Unauthorized {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    if !status.is_success() {
        return Err(GenerationError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
