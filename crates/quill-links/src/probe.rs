//! Response and transport-error classification for link probes.
//!
//! Keeps the status rules (2xx valid, 405/501 retry with GET, anything else
//! rejected) in one place so the validator only sequences requests.

use std::time::Duration;

use reqwest::StatusCode;

use crate::LinkVerdict;

/// Whether a HEAD response should be retried once with GET.
pub fn needs_get_fallback(status: StatusCode) -> bool {
    status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED
}

/// Turn a final response status into a verdict.
pub fn verdict_for_status(status: StatusCode) -> LinkVerdict {
    if status.is_success() {
        return LinkVerdict::valid(status.as_u16());
    }
    let reason = status.canonical_reason().unwrap_or("unexpected status");
    LinkVerdict::rejected(
        Some(status.as_u16()),
        format!("HTTP {}: {reason}", status.as_u16()),
    )
}

/// Turn a transport failure into a verdict, separating timeouts from other
/// network errors.
pub fn verdict_for_error(error: &reqwest::Error, timeout: Duration) -> LinkVerdict {
    if error.is_timeout() {
        return LinkVerdict::rejected(
            None,
            format!("request timed out after {} ms", timeout.as_millis()),
        );
    }
    LinkVerdict::rejected(None, format!("network error: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn fallback_only_for_405_and_501() {
        assert!(needs_get_fallback(StatusCode::METHOD_NOT_ALLOWED));
        assert!(needs_get_fallback(StatusCode::NOT_IMPLEMENTED));
        assert!(!needs_get_fallback(StatusCode::NOT_FOUND));
        assert!(!needs_get_fallback(StatusCode::OK));
        assert!(!needs_get_fallback(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn success_statuses_are_valid() {
        for code in [200, 201, 204, 299] {
            let verdict = verdict_for_status(mock_response(code).status());
            assert!(verdict.is_valid, "{code} should be valid");
            assert_eq!(verdict.status_code, Some(code));
        }
    }

    #[test]
    fn non_success_statuses_are_rejected_with_message() {
        let verdict = verdict_for_status(mock_response(404).status());
        assert!(!verdict.is_valid);
        assert_eq!(verdict.status_code, Some(404));
        assert_eq!(verdict.error.as_deref(), Some("HTTP 404: Not Found"));

        let verdict = verdict_for_status(mock_response(301).status());
        assert!(!verdict.is_valid);
        assert_eq!(verdict.status_code, Some(301));
    }
}
