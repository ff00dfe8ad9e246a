//! Request URL rewriting.

use std::future;
use std::sync::Arc;

use sofetch_core::{InterceptFuture, Interceptor, RequestConfig};

/// Request interceptor that rewrites the URL.
///
/// # Example
///
/// ```ignore
/// use sofetch::middleware::RewriteUrl;
///
/// // Route API calls through a local proxy
/// let rewrite = RewriteUrl::replace_prefix("https://api.example.com", "http://localhost:8080");
///
/// // Arbitrary rewrite
/// let versioned = RewriteUrl::new(|url| url.replace("/v1/", "/v2/"));
/// ```
#[derive(Clone)]
pub struct RewriteUrl {
    rewrite: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl RewriteUrl {
    /// Rewrite every URL with `rewrite`.
    pub fn new<F>(rewrite: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            rewrite: Arc::new(rewrite),
        }
    }

    /// Replace a leading `from` by `to`. Other URLs are left untouched.
    pub fn replace_prefix(from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        let to = to.into();
        Self::new(move |url| match url.strip_prefix(from.as_str()) {
            Some(rest) => format!("{to}{rest}"),
            None => url.to_string(),
        })
    }
}

impl std::fmt::Debug for RewriteUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteUrl").finish_non_exhaustive()
    }
}

impl Interceptor<RequestConfig> for RewriteUrl {
    fn intercept(&self, mut config: RequestConfig) -> InterceptFuture<'_, RequestConfig> {
        let url = (self.rewrite)(config.url());
        config.set_url(url);
        Box::pin(future::ready(Ok(config)))
    }
}
