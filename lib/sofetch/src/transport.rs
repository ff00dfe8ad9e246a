//! Transports: hyper-util over rustls, and any tower service.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower::ServiceExt;
use tower_service::Service;
use tracing::trace;

use crate::{Error, Headers, RequestConfig, Response, Result, Transport};

/// Future type for the tower [`Service`] implementation of [`HyperTransport`].
pub type TransportFuture = Pin<Box<dyn Future<Output = Result<Response>> + Send + 'static>>;

/// HTTPS connector with rustls and the Mozilla root certificates, speaking
/// HTTP/1.1 and HTTP/2. Plain `http://` URLs are accepted as well.
fn https_connector() -> HttpsConnector<HttpConnector> {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build()
}

// ============================================================================
// Hyper Transport
// ============================================================================

/// Transport backed by hyper-util and rustls.
///
/// Sends the descriptor as-is and buffers the whole response body. Status
/// codes are not interpreted. The `credentials` flag is ignored: there is no
/// cookie store.
///
/// Requires a tokio runtime.
#[derive(Clone)]
pub struct HyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport").finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a transport with a fresh connector.
    #[must_use]
    pub fn new() -> Self {
        let inner = Client::builder(TokioExecutor::new()).build(https_connector());
        Self { inner }
    }

    /// Build a hyper request from a descriptor.
    fn build_http_request(request: RequestConfig) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();
        let url = url::Url::parse(&url)?;

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }

        builder
            .body(body.map_or_else(Full::default, Full::new))
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }

    async fn execute(&self, request: RequestConfig) -> Result<Response> {
        let http_request = Self::build_http_request(request)?;
        trace!(uri = %http_request.uri(), "sending over hyper");

        let response = self
            .inner
            .request(http_request)
            .await
            .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let headers = Headers::from(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        Ok(Response::new(status, headers, body))
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperTransport {
    async fn send(&self, request: RequestConfig) -> Result<Response> {
        self.execute(request).await
    }
}

impl Service<RequestConfig> for HyperTransport {
    type Response = Response;
    type Error = Error;
    type Future = TransportFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: RequestConfig) -> Self::Future {
        let transport = self.clone();
        Box::pin(async move { transport.execute(request).await })
    }
}

// ============================================================================
// Service Transport
// ============================================================================

/// Adapts a tower [`Service`] into a [`Transport`].
///
/// The service is cloned for every call, so it must be cheap to clone.
///
/// # Example
///
/// ```
/// use sofetch::{Error, Headers, RequestConfig, Response, ServiceTransport};
///
/// let transport = ServiceTransport::new(tower::service_fn(|request: RequestConfig| async move {
///     Ok::<_, Error>(Response::new(200, Headers::new(), request.url().to_string()))
/// }));
/// ```
#[derive(Debug, Clone)]
pub struct ServiceTransport<S> {
    inner: S,
}

impl<S> ServiceTransport<S> {
    /// Wrap `service`.
    pub fn new(service: S) -> Self {
        Self { inner: service }
    }

    /// Get a reference to the wrapped service.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Consume the wrapper and return the service.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Transport for ServiceTransport<S>
where
    S: Service<RequestConfig, Response = Response, Error = Error> + Clone + Send + Sync + 'static,
    S::Future: Send,
{
    fn send(&self, request: RequestConfig) -> impl Future<Output = Result<Response>> + Send {
        self.inner.clone().oneshot(request)
    }
}

#[cfg(test)]
mod tests {
    use sofetch_core::Method;

    use super::*;

    #[test]
    fn builds_http_request() {
        let mut config = RequestConfig::new(Method::Post, "https://api.example.com/users?page=2");
        config
            .headers_mut()
            .insert("Content-Type", "application/json");
        config.set_body(Some(Bytes::from_static(b"{}")));

        let request = HyperTransport::build_http_request(config).expect("request");

        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.uri(), "https://api.example.com/users?page=2");
        assert_eq!(
            request.headers().get(http::header::CONTENT_TYPE),
            Some(&http::HeaderValue::from_static("application/json"))
        );
    }

    #[test]
    fn relative_url_is_rejected() {
        let config = RequestConfig::new(Method::Get, "/users");
        let err = HyperTransport::build_http_request(config).expect_err("no root URL");
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn invalid_header_is_rejected() {
        let mut config = RequestConfig::new(Method::Get, "https://api.example.com");
        config.headers_mut().insert("X-Bad", "line\nbreak");

        let err = HyperTransport::build_http_request(config).expect_err("bad header");
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn service_transport_delegates() {
        let service = tower::service_fn(|request: RequestConfig| async move {
            Ok::<_, Error>(Response::new(
                201,
                Headers::new(),
                format!("{} {}", request.method(), request.url()),
            ))
        });
        let transport = ServiceTransport::new(service);

        let response = transport
            .send(RequestConfig::new(Method::Patch, "/items/1"))
            .await
            .expect("response");

        assert_eq!(response.status(), 201);
        assert_eq!(response.into_text(), "PATCH /items/1");
    }

    #[test]
    fn hyper_transport_is_debug() {
        let debug = format!("{:?}", HyperTransport::new());
        assert!(debug.contains("HyperTransport"));
    }
}
