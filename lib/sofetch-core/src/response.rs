//! Transport responses and response envelopes.
//!
//! [`Response`] is what a transport hands back: status, headers and the raw
//! body. [`Envelope`] is the normalized value the client works with after
//! parsing: decoded body, success/error flag and the originating request.

use bytes::Bytes;

use crate::{Headers, RequestConfig};

// ============================================================================
// Transport Response
// ============================================================================

/// Raw HTTP response produced by a transport.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: Headers,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: Headers, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Raw body bytes.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into the body as text. Invalid UTF-8 is replaced.
    #[must_use]
    pub fn into_text(self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, Headers, Bytes) {
        (self.status, self.headers, self.body)
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Decoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body<T> {
    /// Body decoded from JSON.
    Json(T),
    /// Raw body text (non-JSON content, or JSON that failed to decode).
    Text(String),
}

impl<T> Body<T> {
    /// The decoded value, if the body is JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&T> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw text, if the body was not decoded.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Consume into the decoded value, if the body is JSON.
    #[must_use]
    pub fn into_json(self) -> Option<T> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns `true` if the body was decoded from JSON.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Transform the decoded value, leaving text untouched.
    pub fn map<U, F>(self, f: F) -> Body<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Json(value) => Body::Json(f(value)),
            Self::Text(text) => Body::Text(text),
        }
    }
}

/// Normalized response handed to response interceptors and callers.
///
/// `is_error` is derived from the status once, at construction. Nothing
/// recomputes it afterwards; interceptors change it through
/// [`Envelope::set_error`].
#[derive(Debug, Clone)]
pub struct Envelope<T = serde_json::Value> {
    status: u16,
    headers: Headers,
    body: Body<T>,
    is_error: bool,
    config: Option<RequestConfig>,
}

impl<T> Envelope<T> {
    /// Creates an envelope; any status outside `200..300` is an error.
    #[must_use]
    pub fn new(status: u16, headers: Headers, body: Body<T>) -> Self {
        Self {
            status,
            headers,
            body,
            is_error: !(200..300).contains(&status),
            config: None,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Body<T> {
        &self.body
    }

    /// Mutable access to the body.
    #[must_use]
    pub fn body_mut(&mut self) -> &mut Body<T> {
        &mut self.body
    }

    /// Replaces the body.
    pub fn set_body(&mut self, body: Body<T>) {
        self.body = body;
    }

    /// Consume into the body.
    #[must_use]
    pub fn into_body(self) -> Body<T> {
        self.body
    }

    /// The decoded value, if the body is JSON.
    #[must_use]
    pub const fn json(&self) -> Option<&T> {
        self.body.as_json()
    }

    /// The raw text, if the body was not decoded.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.body.as_text()
    }

    /// Whether the call should reject with this envelope.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.is_error
    }

    /// Inverse of [`Envelope::is_error`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !self.is_error
    }

    /// Flags or unflags the envelope as an error.
    pub fn set_error(&mut self, is_error: bool) {
        self.is_error = is_error;
    }

    /// The request that produced this response.
    ///
    /// `None` until the response interceptors start.
    #[must_use]
    pub const fn config(&self) -> Option<&RequestConfig> {
        self.config.as_ref()
    }

    /// Attaches the originating request. A config that is already attached
    /// is kept.
    pub(crate) fn attach_config(&mut self, config: RequestConfig) {
        if self.config.is_none() {
            self.config = Some(config);
        }
    }

    /// Transform the decoded body, keeping status, headers, flag and config.
    pub fn map_body<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            status: self.status,
            headers: self.headers,
            body: self.body.map(f),
            is_error: self.is_error,
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    fn envelope(status: u16) -> Envelope<u32> {
        Envelope::new(status, Headers::new(), Body::Json(7))
    }

    #[test]
    fn response_basic() {
        let headers: Headers = [("Content-Type", "application/json")].into_iter().collect();
        let response = Response::new(200, headers, r#"{"id":1}"#);

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.into_text(), r#"{"id":1}"#);
    }

    #[test]
    fn response_text_is_lossy() {
        let response = Response::new(200, Headers::new(), vec![b'o', b'k', 0xff]);
        assert_eq!(response.into_text(), "ok\u{fffd}");
    }

    #[test]
    fn envelope_error_flag_follows_status_band() {
        assert!(!envelope(200).is_error());
        assert!(!envelope(204).is_error());
        assert!(!envelope(299).is_error());
        assert!(envelope(199).is_error());
        assert!(envelope(301).is_error());
        assert!(envelope(404).is_error());
        assert!(envelope(503).is_error());
    }

    #[test]
    fn envelope_flag_is_not_recomputed() {
        let mut env = envelope(500);
        env.set_error(false);
        env.headers_mut().insert("X-Retry", "no");
        env.set_body(Body::Json(8));

        assert!(env.is_success());
        assert_eq!(env.status(), 500);
    }

    #[test]
    fn envelope_config_attached_once() {
        let mut env = envelope(200);
        assert!(env.config().is_none());

        env.attach_config(RequestConfig::new(Method::Get, "/first"));
        env.attach_config(RequestConfig::new(Method::Post, "/second"));

        let config = env.config().expect("config attached");
        assert_eq!(config.url(), "/first");
        assert_eq!(config.method(), Method::Get);
    }

    #[test]
    fn envelope_map_body_keeps_metadata() {
        let mut env = envelope(404);
        env.attach_config(RequestConfig::new(Method::Get, "/missing"));

        let mapped = env.map_body(|value| value.to_string());

        assert_eq!(mapped.json().map(String::as_str), Some("7"));
        assert!(mapped.is_error());
        assert_eq!(mapped.config().map(RequestConfig::url), Some("/missing"));
    }

    #[test]
    fn body_accessors() {
        let json: Body<u32> = Body::Json(1);
        let text: Body<u32> = Body::Text("raw".to_string());

        assert!(json.is_json());
        assert_eq!(json.as_json(), Some(&1));
        assert_eq!(text.as_text(), Some("raw"));
        assert_eq!(text.map(|v| v + 1), Body::Text("raw".to_string()));
        assert_eq!(json.map(|v| v + 1).into_json(), Some(2));
    }
}
