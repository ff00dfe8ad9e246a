//! The interceptor-driven client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use sofetch_core::{
    BoxError, Envelope, FetchError, FetchResult, Interceptor, Method, RequestConfig,
    RequestOptions, map_fn, parse_response, then_fn,
};
use tracing::{Instrument, debug, debug_span};

use crate::{
    Transport,
    config::{ClientOptions, RootUrl},
    transport::HyperTransport,
};

#[cfg(feature = "middleware-basic-auth")]
use crate::middleware::BasicAuth;
#[cfg(feature = "middleware-metrics")]
use crate::middleware::Metrics;
use crate::middleware::{BearerAuth, Logging};

// ============================================================================
// Client
// ============================================================================

/// HTTP client that runs every call through its interceptor chains.
///
/// `T` is the type JSON bodies decode into; `Tr` is the transport.
///
/// A call goes through these steps, strictly in order:
///
/// ```text
/// build descriptor → request interceptors → transport → parse
///                  → response interceptors → resolve / reject
/// ```
///
/// The client holds no per-call state. Clones share the same options, and
/// concurrent calls are independent.
///
/// # Example
///
/// ```ignore
/// use sofetch::prelude::*;
///
/// let client: Client = Client::builder()
///     .root_url("https://api.example.com")
///     .with_bearer_auth("my-token")
///     .build();
///
/// let user = client.get("/users/42", RequestOptions::new()).await?;
/// println!("{:?}", user.json());
/// ```
pub struct Client<T = serde_json::Value, Tr = HyperTransport> {
    transport: Tr,
    options: Arc<ClientOptions<T>>,
}

impl<T, Tr: Clone> Clone for Client<T, Tr> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            options: Arc::clone(&self.options),
        }
    }
}

impl<T, Tr: std::fmt::Debug> std::fmt::Debug for Client<T, Tr> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.transport)
            .field("options", &self.options)
            .finish()
    }
}

impl<T> Client<T, HyperTransport> {
    /// Client with default options over a [`HyperTransport`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default(), HyperTransport::new())
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> ClientBuilder<T> {
        ClientBuilder::default()
    }
}

impl<T> Default for Client<T, HyperTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Tr> Client<T, Tr> {
    /// Client from explicit options and transport.
    #[must_use]
    pub fn with_options(options: ClientOptions<T>, transport: Tr) -> Self {
        Self {
            transport,
            options: Arc::new(options),
        }
    }

    /// The client options.
    #[must_use]
    pub fn options(&self) -> &ClientOptions<T> {
        &self.options
    }

    /// The transport.
    #[must_use]
    pub fn transport(&self) -> &Tr {
        &self.transport
    }
}

impl<T, Tr> Client<T, Tr>
where
    T: DeserializeOwned + Send + 'static,
    Tr: Transport,
{
    /// Runs the request chain over a descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first interceptor error.
    pub async fn apply_request_interceptors(
        &self,
        config: RequestConfig,
    ) -> Result<RequestConfig, BoxError> {
        self.options
            .request_interceptors
            .apply_request(config)
            .await
    }

    /// Attaches `config` to the envelope, then runs the response chain.
    ///
    /// # Errors
    ///
    /// Returns the first interceptor error.
    pub async fn apply_response_interceptors(
        &self,
        envelope: Envelope<T>,
        config: RequestConfig,
    ) -> Result<Envelope<T>, BoxError> {
        self.options
            .response_interceptors
            .apply_response(envelope, config)
            .await
    }

    /// Fetch `root_url + path`.
    ///
    /// Resolves with the final envelope, or rejects with:
    /// - [`FetchError::Status`] when the final envelope is flagged as an error,
    /// - [`FetchError::Transport`] when the transport fails,
    /// - [`FetchError::Interceptor`] when an interceptor fails.
    ///
    /// A path carried inside `options` is ignored; use [`Client::send`] for
    /// that form.
    ///
    /// # Errors
    ///
    /// See above.
    pub async fn fetch(&self, path: &str, options: RequestOptions) -> FetchResult<T> {
        let config = RequestConfig::build(&self.options.root_url.get(), path, options);
        self.execute(config).await
    }

    /// Fetch the path carried by `options` (an empty path when unset).
    ///
    /// # Errors
    ///
    /// Same as [`Client::fetch`].
    pub async fn send(&self, mut options: RequestOptions) -> FetchResult<T> {
        let path = options.take_url().unwrap_or_default();
        self.fetch(&path, options).await
    }

    async fn execute(&self, config: RequestConfig) -> FetchResult<T> {
        let span = debug_span!("fetch", method = %config.method(), url = %config.url());

        async move {
            let config = self
                .apply_request_interceptors(config)
                .await
                .map_err(FetchError::Interceptor)?;

            let response = self
                .transport
                .send(config.clone())
                .await
                .map_err(FetchError::Transport)?;

            let envelope = parse_response::<T>(response);
            let envelope = self
                .apply_response_interceptors(envelope, config)
                .await
                .map_err(FetchError::Interceptor)?;

            if envelope.is_error() {
                debug!(status = envelope.status(), "rejecting error envelope");
                Err(FetchError::Status(Box::new(envelope)))
            } else {
                Ok(envelope)
            }
        }
        .instrument(span)
        .await
    }

    // ========================================================================
    // Verb Helpers
    // ========================================================================

    /// `GET root_url + path`.
    ///
    /// # Errors
    ///
    /// Same as [`Client::fetch`].
    pub async fn get(&self, path: &str, options: RequestOptions) -> FetchResult<T> {
        self.fetch(path, options.method(Method::Get)).await
    }

    /// `POST` without a body. No `content-type` is added.
    ///
    /// # Errors
    ///
    /// Same as [`Client::fetch`].
    pub async fn post(&self, path: &str, options: RequestOptions) -> FetchResult<T> {
        self.fetch(path, options.method(Method::Post)).await
    }

    /// `POST` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// [`FetchError::Body`] if serialization fails, otherwise same as
    /// [`Client::fetch`].
    pub async fn post_json<B>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> FetchResult<T>
    where
        B: serde::Serialize + ?Sized,
    {
        let options = with_json(options.method(Method::Post), body)?;
        self.fetch(path, options).await
    }

    /// `PUT` without a body. No `content-type` is added.
    ///
    /// # Errors
    ///
    /// Same as [`Client::fetch`].
    pub async fn put(&self, path: &str, options: RequestOptions) -> FetchResult<T> {
        self.fetch(path, options.method(Method::Put)).await
    }

    /// `PUT` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// [`FetchError::Body`] if serialization fails, otherwise same as
    /// [`Client::fetch`].
    pub async fn put_json<B>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> FetchResult<T>
    where
        B: serde::Serialize + ?Sized,
    {
        let options = with_json(options.method(Method::Put), body)?;
        self.fetch(path, options).await
    }

    /// `PATCH` without a body. No `content-type` is added.
    ///
    /// # Errors
    ///
    /// Same as [`Client::fetch`].
    pub async fn patch(&self, path: &str, options: RequestOptions) -> FetchResult<T> {
        self.fetch(path, options.method(Method::Patch)).await
    }

    /// `PATCH` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// [`FetchError::Body`] if serialization fails, otherwise same as
    /// [`Client::fetch`].
    pub async fn patch_json<B>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> FetchResult<T>
    where
        B: serde::Serialize + ?Sized,
    {
        let options = with_json(options.method(Method::Patch), body)?;
        self.fetch(path, options).await
    }

    /// `DELETE` without a body. No `content-type` is added.
    ///
    /// # Errors
    ///
    /// Same as [`Client::fetch`].
    pub async fn del(&self, path: &str, options: RequestOptions) -> FetchResult<T> {
        self.fetch(path, options.method(Method::Delete)).await
    }

    /// `DELETE` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// [`FetchError::Body`] if serialization fails, otherwise same as
    /// [`Client::fetch`].
    pub async fn del_json<B>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> FetchResult<T>
    where
        B: serde::Serialize + ?Sized,
    {
        let options = with_json(options.method(Method::Delete), body)?;
        self.fetch(path, options).await
    }
}

fn with_json<T, B>(options: RequestOptions, body: &B) -> Result<RequestOptions, FetchError<T>>
where
    B: serde::Serialize + ?Sized,
{
    options.json(body).map_err(FetchError::Body)
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Client`].
///
/// Interceptors run in the order they are added, request and response chains
/// independently.
///
/// # Example
///
/// ```ignore
/// use sofetch::Client;
///
/// let client: Client = Client::builder()
///     .root_url("https://api.example.com")
///     .map_request(|mut config| {
///         config.headers_mut().insert("X-Client", "sofetch");
///         Ok(config)
///     })
///     .with_logging()
///     .build();
/// ```
pub struct ClientBuilder<T = serde_json::Value> {
    options: ClientOptions<T>,
}

impl<T> Default for ClientBuilder<T> {
    fn default() -> Self {
        Self {
            options: ClientOptions::default(),
        }
    }
}

impl<T> std::fmt::Debug for ClientBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("options", &self.options)
            .finish()
    }
}

impl<T: Send + 'static> ClientBuilder<T> {
    // ========================================================================
    // Core Configuration
    // ========================================================================

    /// Set the root URL: a fixed string, or a [`RootUrl`] accessor.
    #[must_use]
    pub fn root_url(mut self, root_url: impl Into<RootUrl>) -> Self {
        self.options.root_url = root_url.into();
        self
    }

    /// Set the root URL accessor from a closure.
    #[must_use]
    pub fn root_url_fn<F>(self, accessor: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.root_url(RootUrl::from_fn(accessor))
    }

    // ========================================================================
    // Generic Interceptor API
    // ========================================================================

    /// Append a request interceptor.
    #[must_use]
    pub fn request_interceptor<I>(mut self, interceptor: I) -> Self
    where
        I: Interceptor<RequestConfig> + 'static,
    {
        self.options.request_interceptors.push(interceptor);
        self
    }

    /// Append a response interceptor.
    #[must_use]
    pub fn response_interceptor<I>(mut self, interceptor: I) -> Self
    where
        I: Interceptor<Envelope<T>> + 'static,
    {
        self.options.response_interceptors.push(interceptor);
        self
    }

    /// Append a synchronous request transform.
    #[must_use]
    pub fn map_request<F>(self, f: F) -> Self
    where
        F: Fn(RequestConfig) -> Result<RequestConfig, BoxError> + Send + Sync + 'static,
    {
        self.request_interceptor(map_fn(f))
    }

    /// Append an asynchronous request transform.
    #[must_use]
    pub fn then_request<F, Fut>(self, f: F) -> Self
    where
        F: Fn(RequestConfig) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RequestConfig, BoxError>> + Send + 'static,
    {
        self.request_interceptor(then_fn(f))
    }

    /// Append a synchronous response transform.
    #[must_use]
    pub fn map_response<F>(self, f: F) -> Self
    where
        F: Fn(Envelope<T>) -> Result<Envelope<T>, BoxError> + Send + Sync + 'static,
    {
        self.response_interceptor(map_fn(f))
    }

    /// Append an asynchronous response transform.
    #[must_use]
    pub fn then_response<F, Fut>(self, f: F) -> Self
    where
        F: Fn(Envelope<T>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Envelope<T>, BoxError>> + Send + 'static,
    {
        self.response_interceptor(then_fn(f))
    }

    // ========================================================================
    // Built-in Interceptor Helpers
    // ========================================================================

    /// Add a bearer token to every request.
    #[must_use]
    pub fn with_bearer_auth(self, token: impl Into<String>) -> Self {
        self.request_interceptor(BearerAuth::new(token))
    }

    /// Add a bearer token read from `source` on every request.
    #[must_use]
    pub fn with_bearer_auth_fn<F>(self, source: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.request_interceptor(BearerAuth::from_fn(source))
    }

    /// Add basic authentication to every request.
    #[cfg(feature = "middleware-basic-auth")]
    #[must_use]
    pub fn with_basic_auth(self, username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        self.request_interceptor(BasicAuth::new(username, password))
    }

    /// Log requests and responses at info level.
    ///
    /// The request is logged after the interceptors added so far, the
    /// response before the response interceptors added later.
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.request_interceptor(Logging::new())
            .response_interceptor(Logging::new())
    }

    /// Log requests and responses at debug level, headers included.
    #[must_use]
    pub fn with_debug_logging(self) -> Self {
        self.request_interceptor(Logging::debug())
            .response_interceptor(Logging::debug())
    }

    /// Record response metrics.
    #[cfg(feature = "middleware-metrics")]
    #[must_use]
    pub fn with_metrics(self) -> Self {
        self.response_interceptor(Metrics::new())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// The options collected so far.
    #[must_use]
    pub fn into_options(self) -> ClientOptions<T> {
        self.options
    }

    /// Build a client over a [`HyperTransport`].
    #[must_use]
    pub fn build(self) -> Client<T, HyperTransport> {
        self.build_with(HyperTransport::new())
    }

    /// Build a client over a custom transport.
    #[must_use]
    pub fn build_with<Tr: Transport>(self, transport: Tr) -> Client<T, Tr> {
        Client::with_options(self.options, transport)
    }
}
