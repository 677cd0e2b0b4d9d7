//! HTTP link validator.

use std::time::Duration;

use quill_config::LinkConfig;

use crate::probe::{needs_get_fallback, verdict_for_error, verdict_for_status};
use crate::{LinkCheck, LinkVerdict, has_http_scheme};

/// Maximum redirects followed per probe.
const MAX_REDIRECTS: usize = 10;

/// Reachability prober backed by a shared `reqwest::Client`.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct LinkValidator {
    http: reqwest::Client,
    head_timeout: Duration,
    get_timeout: Duration,
}

impl LinkValidator {
    /// Build a validator from link configuration.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be constructed
    /// (e.g., the TLS backend fails to initialize).
    pub fn new(config: &LinkConfig) -> Result<Self, reqwest::Error> {
        let mut builder =
            reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));
        if let Some(agent) = config.user_agent.as_deref() {
            builder = builder.user_agent(agent);
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            head_timeout: config.head_timeout(),
            get_timeout: config.get_timeout(),
        })
    }

    /// Probe `url`: HEAD first, one GET retry on 405/501.
    pub async fn validate(&self, url: &str) -> LinkVerdict {
        if !has_http_scheme(url) {
            tracing::debug!(url, "link rejected without probe: not an http(s) url");
            return LinkVerdict::rejected(None, "URL must start with http:// or https://");
        }

        let head = self
            .http
            .head(url)
            .timeout(self.head_timeout)
            .send()
            .await;

        let verdict = match head {
            Ok(resp) if needs_get_fallback(resp.status()) => {
                tracing::debug!(url, status = resp.status().as_u16(), "HEAD refused, retrying with GET");
                match self.http.get(url).timeout(self.get_timeout).send().await {
                    Ok(resp) => verdict_for_status(resp.status()),
                    Err(error) => verdict_for_error(&error, self.get_timeout),
                }
            }
            Ok(resp) => verdict_for_status(resp.status()),
            Err(error) => verdict_for_error(&error, self.head_timeout),
        };

        tracing::debug!(
            url,
            valid = verdict.is_valid,
            status = verdict.status_code,
            error = verdict.error.as_deref(),
            "link probed"
        );
        verdict
    }
}

impl LinkCheck for LinkValidator {
    fn validate(&self, url: &str) -> impl Future<Output = LinkVerdict> + Send {
        Self::validate(self, url)
    }
}
