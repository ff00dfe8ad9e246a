//! Bearer token authentication.
//!
//! Adds an `Authorization: Bearer <token>` header to every outgoing request.

use std::future;
use std::sync::Arc;

use sofetch_core::{InterceptFuture, Interceptor, RequestConfig};

#[derive(Clone)]
enum TokenSource {
    Static(Arc<str>),
    Dynamic(Arc<dyn Fn() -> Option<String> + Send + Sync>),
}

/// Request interceptor that adds bearer token authentication.
///
/// # Example
///
/// ```ignore
/// use sofetch::Client;
/// use sofetch::middleware::BearerAuth;
///
/// let client: Client = Client::builder()
///     .request_interceptor(BearerAuth::new("my-secret-token"))
///     .build();
/// ```
#[derive(Clone)]
pub struct BearerAuth {
    source: TokenSource,
}

impl BearerAuth {
    /// Always send `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            source: TokenSource::Static(Arc::from(token.into())),
        }
    }

    /// Ask `source` for the token on every request.
    ///
    /// When it returns `None` the request goes out without an
    /// `Authorization` header.
    pub fn from_fn<F>(source: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        Self {
            source: TokenSource::Dynamic(Arc::new(source)),
        }
    }

    fn token(&self) -> Option<String> {
        match &self.source {
            TokenSource::Static(token) => Some(token.to_string()),
            TokenSource::Dynamic(source) => source(),
        }
    }
}

impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match self.source {
            TokenSource::Static(_) => "static",
            TokenSource::Dynamic(_) => "dynamic",
        };
        f.debug_struct("BearerAuth")
            .field("source", &source)
            .finish()
    }
}

impl Interceptor<RequestConfig> for BearerAuth {
    fn intercept(&self, mut config: RequestConfig) -> InterceptFuture<'_, RequestConfig> {
        if let Some(token) = self.token() {
            config
                .headers_mut()
                .insert("Authorization", format!("Bearer {token}"));
        }
        Box::pin(future::ready(Ok(config)))
    }
}
