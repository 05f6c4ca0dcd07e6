//! HTTP response types for the monday.com API SDK.

use std::collections::HashMap;
use std::time::Duration;

/// An HTTP response from the GraphQL endpoint.
///
/// The body is kept both as text and, when it parses, as JSON, so the
/// dispatcher can tell an unexpected body apart from an empty one.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub text: String,
    /// The parsed body, or `None` if it was empty or not JSON.
    pub body: Option<serde_json::Value>,
    /// Seconds to wait before retrying, from a numeric `Retry-After` header.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the body and the
    /// `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, text: String) -> Self {
        let body = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&text).ok()
        };

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0);

        Self {
            code,
            headers,
            text,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Retry-After` delay as a [`Duration`].
    ///
    /// Only the delay-seconds form is read. The HTTP-date form is not
    /// parsed and yields `None`, as does a delay too large for a
    /// [`Duration`].
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_request_after
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in pairs {
            map.entry((*k).to_string()).or_default().push((*v).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        for code in 200..=299 {
            assert!(HttpResponse::new(code, HashMap::new(), String::new()).is_ok());
        }
        for code in [199, 300, 400, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), String::new()).is_ok());
        }
    }

    #[test]
    fn test_json_body_is_parsed() {
        let response = HttpResponse::new(200, HashMap::new(), r#"{"data":{"me":null}}"#.into());
        assert_eq!(response.body, Some(json!({"data": {"me": null}})));
    }

    #[test]
    fn test_empty_or_invalid_body_has_no_json() {
        assert!(HttpResponse::new(200, HashMap::new(), String::new()).body.is_none());
        assert!(HttpResponse::new(502, HashMap::new(), "<html>".into()).body.is_none());
    }

    #[test]
    fn test_retry_after_parsing() {
        let response = HttpResponse::new(429, headers(&[("retry-after", "2.5")]), String::new());
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
        assert_eq!(response.retry_after(), Some(Duration::from_millis(2500)));

        let response = HttpResponse::new(429, headers(&[("retry-after", "soon")]), String::new());
        assert!(response.retry_after().is_none());

        let response = HttpResponse::new(429, headers(&[("retry-after", "-1")]), String::new());
        assert!(response.retry_after().is_none());
    }

    #[test]
    fn test_retry_after_too_large_for_duration() {
        let response = HttpResponse::new(429, headers(&[("retry-after", "1e20")]), String::new());
        assert!(response.retry_request_after.is_some());
        assert!(response.retry_after().is_none());
    }

    #[test]
    fn test_retry_after_http_date_is_not_read() {
        let response = HttpResponse::new(
            503,
            headers(&[("retry-after", "Wed, 21 Oct 2015 07:28:00 GMT")]),
            String::new(),
        );
        assert!(response.retry_request_after.is_none());
        assert!(response.retry_after().is_none());
    }

    #[test]
    fn test_request_id_extraction() {
        let response =
            HttpResponse::new(200, headers(&[("x-request-id", "abc-123")]), String::new());
        assert_eq!(response.request_id(), Some("abc-123"));
    }
}
