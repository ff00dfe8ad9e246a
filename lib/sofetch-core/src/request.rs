//! Request descriptors.
//!
//! Callers describe a request with [`RequestOptions`]. The client merges the
//! options over the defaults and the current root URL into a
//! [`RequestConfig`], which is what interceptors and transports see.
//!
//! # Example
//!
//! ```
//! use sofetch_core::{Method, RequestConfig, RequestOptions};
//!
//! let options = RequestOptions::new()
//!     .method(Method::Delete)
//!     .header("Accept", "application/json");
//!
//! let config = RequestConfig::build("https://api.example.com", "/users/1", options);
//! assert_eq!(config.url(), "https://api.example.com/users/1");
//! assert_eq!(config.header("accept"), Some("application/json"));
//! ```

use bytes::Bytes;

use crate::{ContentType, Headers, Method};

/// Credentials mode forwarded to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Credentials {
    /// Never send credentials.
    Omit,
    /// Send credentials to the same origin only.
    SameOrigin,
    /// Always send credentials.
    Include,
}

// ============================================================================
// Caller Options
// ============================================================================

/// Caller-supplied request options.
///
/// Every field is optional; unset fields fall back to the defaults
/// (`GET`, no headers, no body).
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    method: Option<Method>,
    url: Option<String>,
    headers: Headers,
    body: Option<Bytes>,
    credentials: Option<Credentials>,
}

impl RequestOptions {
    /// Empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the path, for calls that carry it inside the options.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        self.headers.extend(headers);
        self
    }

    /// Sets the raw body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the credentials mode.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Serializes `value` as the JSON body and sets `content-type`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> crate::Result<Self> {
        let body = crate::to_json(value)?;
        let options = self.header("content-type", ContentType::Json.as_str());
        Ok(options.body(body))
    }

    /// Path carried by the options, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Removes and returns the carried path.
    pub fn take_url(&mut self) -> Option<String> {
        self.url.take()
    }
}

// ============================================================================
// Request Descriptor
// ============================================================================

/// The finalized request descriptor.
///
/// Built fresh for every call, handed through the request interceptors, then
/// to the transport, and finally attached to the response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    method: Method,
    url: String,
    headers: Headers,
    body: Option<Bytes>,
    credentials: Option<Credentials>,
}

impl RequestConfig {
    /// Creates a descriptor with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
            credentials: None,
        }
    }

    /// Merges caller options over the defaults.
    ///
    /// The URL is the plain concatenation `root_url + path`. Any path carried
    /// inside `options` is ignored in favor of `path`.
    #[must_use]
    pub fn build(root_url: &str, path: &str, options: RequestOptions) -> Self {
        Self {
            method: options.method.unwrap_or_default(),
            url: format!("{root_url}{path}"),
            headers: options.headers,
            body: options.body,
            credentials: options.credentials,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Replaces the method.
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Full request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replaces the URL.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Request headers.
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

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Replaces the body.
    pub fn set_body(&mut self, body: Option<Bytes>) {
        self.body = body;
    }

    /// Credentials mode, if set.
    #[must_use]
    pub const fn credentials(&self) -> Option<Credentials> {
        self.credentials
    }

    /// Replaces the credentials mode.
    pub fn set_credentials(&mut self, credentials: Option<Credentials>) {
        self.credentials = credentials;
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, String, Headers, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_defaults_to_get() {
        let config = RequestConfig::build("", "/users", RequestOptions::new());

        assert_eq!(config.method(), Method::Get);
        assert_eq!(config.url(), "/users");
        assert!(config.headers().is_empty());
        assert!(config.body().is_none());
        assert!(config.credentials().is_none());
    }

    #[test]
    fn build_concatenates_root_and_path() {
        let config = RequestConfig::build(
            "https://api.example.com/v1",
            "/users",
            RequestOptions::new(),
        );
        assert_eq!(config.url(), "https://api.example.com/v1/users");
    }

    #[test]
    fn build_keeps_caller_options() {
        let options = RequestOptions::new()
            .method(Method::Put)
            .header("X-Request-Id", "42")
            .body("payload")
            .credentials(Credentials::Include);

        let config = RequestConfig::build("http://localhost", "/items/1", options);

        assert_eq!(config.method(), Method::Put);
        assert_eq!(config.header("x-request-id"), Some("42"));
        assert_eq!(config.body(), Some(&Bytes::from_static(b"payload")));
        assert_eq!(config.credentials(), Some(Credentials::Include));
    }

    #[test]
    fn build_ignores_carried_url() {
        let options = RequestOptions::new().url("/ignored");
        let config = RequestConfig::build("http://localhost", "/used", options);
        assert_eq!(config.url(), "http://localhost/used");
    }

    #[test]
    fn options_json_sets_content_type() {
        #[derive(serde::Serialize)]
        struct User {
            name: String,
        }

        let options = RequestOptions::new()
            .json(&User {
                name: "test".to_string(),
            })
            .expect("json");
        let config = RequestConfig::build("", "/users", options);

        assert_eq!(config.header("Content-Type"), Some("application/json"));
        assert_eq!(
            config.body(),
            Some(&Bytes::from_static(br#"{"name":"test"}"#))
        );
    }

    #[test]
    fn take_url_empties_options() {
        let mut options = RequestOptions::new().url("/path");
        assert_eq!(options.path(), Some("/path"));
        assert_eq!(options.take_url().as_deref(), Some("/path"));
        assert!(options.path().is_none());
    }
}
