//! # quill-links
//!
//! Reachability probing for links embedded in generated content.
//!
//! [`LinkValidator`] issues a HEAD request (redirects followed, short
//! timeout) and falls back to a single GET when the server answers 405 or 501.
//! Every failure mode resolves to a [`LinkVerdict`]; validation never returns
//! an error and holds no shared mutable state, so one validator can probe
//! many URLs concurrently.
//!
//! The [`LinkCheck`] trait is the seam adapters depend on, so tests can swap
//! in a double that counts calls or scripts verdicts.

mod probe;
mod validator;

pub use validator::LinkValidator;

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Outcome of probing one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkVerdict {
    pub is_valid: bool,
    /// Final HTTP status, if a response was received.
    pub status_code: Option<u16>,
    /// Why the link was rejected.
    pub error: Option<String>,
}

impl LinkVerdict {
    #[must_use]
    pub const fn valid(status: u16) -> Self {
        Self {
            is_valid: true,
            status_code: Some(status),
            error: None,
        }
    }

    #[must_use]
    pub fn rejected(status: Option<u16>, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            status_code: status,
            error: Some(error.into()),
        }
    }
}

/// Anything that can decide whether a URL is reachable.
pub trait LinkCheck: Send + Sync {
    /// Probe `url`. Must not panic; every failure is a rejected verdict.
    fn validate(&self, url: &str) -> impl Future<Output = LinkVerdict> + Send;
}

/// Whether `url` is eligible for probing at all (`http://` or `https://`).
#[must_use]
pub fn has_http_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
