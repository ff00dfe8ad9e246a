//! Transport trait.
//!
//! The transport performs the actual exchange. The client never looks past
//! this surface: it hands over a finalized [`RequestConfig`] and gets back a
//! [`Response`] or an [`Error`](crate::Error).

use std::future::Future;

use crate::{RequestConfig, Response, Result};

/// Network primitive used by the client.
///
/// Implementations should not retry, time out or reinterpret status codes;
/// a non-2xx response is a successful exchange.
///
/// # Example
///
/// ```
/// use sofetch_core::{Headers, RequestConfig, Response, Result, Transport};
///
/// #[derive(Clone)]
/// struct Echo;
///
/// impl Transport for Echo {
///     async fn send(&self, request: RequestConfig) -> Result<Response> {
///         Ok(Response::new(200, Headers::new(), request.url().to_string()))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Send the request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails:
    /// - Network errors
    /// - TLS errors
    /// - A descriptor the transport cannot express (bad URL, header)
    fn send(&self, request: RequestConfig) -> impl Future<Output = Result<Response>> + Send;
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn send(&self, request: RequestConfig) -> impl Future<Output = Result<Response>> + Send {
        (**self).send(request)
    }
}
