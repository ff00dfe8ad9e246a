//! Client configuration types.

use std::sync::Arc;

use sofetch_core::{Envelope, InterceptorChain, RequestConfig};

/// Lazily read base URL.
///
/// The accessor runs on every call, so a client follows runtime changes
/// (environment switch, tenant selection) without being rebuilt.
///
/// # Example
///
/// ```
/// use sofetch::RootUrl;
///
/// let fixed = RootUrl::fixed("https://api.example.com");
/// assert_eq!(fixed.get(), "https://api.example.com");
///
/// let from_env = RootUrl::from_env("MY_API_URL", "http://localhost:8080");
/// assert_eq!(from_env.get(), "http://localhost:8080");
/// ```
#[derive(Clone)]
pub struct RootUrl {
    accessor: Arc<dyn Fn() -> String + Send + Sync>,
}

impl RootUrl {
    /// Root URL computed by `accessor` at each call.
    pub fn from_fn<F>(accessor: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            accessor: Arc::new(accessor),
        }
    }

    /// Constant root URL.
    pub fn fixed(url: impl Into<String>) -> Self {
        let url: Arc<str> = Arc::from(url.into());
        Self::from_fn(move || url.to_string())
    }

    /// Root URL read from the environment variable `var` at each call,
    /// `fallback` when unset or not unicode.
    pub fn from_env(var: impl Into<String>, fallback: impl Into<String>) -> Self {
        let var = var.into();
        let fallback = fallback.into();
        Self::from_fn(move || std::env::var(&var).unwrap_or_else(|_| fallback.clone()))
    }

    /// Current value of the root URL.
    #[must_use]
    pub fn get(&self) -> String {
        (self.accessor)()
    }
}

impl Default for RootUrl {
    fn default() -> Self {
        Self::from_fn(String::new)
    }
}

impl std::fmt::Debug for RootUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RootUrl").field(&self.get()).finish()
    }
}

impl From<&str> for RootUrl {
    fn from(url: &str) -> Self {
        Self::fixed(url)
    }
}

impl From<String> for RootUrl {
    fn from(url: String) -> Self {
        Self::fixed(url)
    }
}

/// Construction options of a [`Client`](crate::Client).
///
/// Every field defaults to "no effect": empty chains and an empty root URL.
pub struct ClientOptions<T = serde_json::Value> {
    /// Request interceptors, in execution order.
    pub request_interceptors: InterceptorChain<RequestConfig>,
    /// Response interceptors, in execution order.
    pub response_interceptors: InterceptorChain<Envelope<T>>,
    /// Base URL prefixed to every path.
    pub root_url: RootUrl,
}

impl<T> Default for ClientOptions<T> {
    fn default() -> Self {
        Self {
            request_interceptors: InterceptorChain::new(),
            response_interceptors: InterceptorChain::new(),
            root_url: RootUrl::default(),
        }
    }
}

impl<T> Clone for ClientOptions<T> {
    fn clone(&self) -> Self {
        Self {
            request_interceptors: self.request_interceptors.clone(),
            response_interceptors: self.response_interceptors.clone(),
            root_url: self.root_url.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ClientOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .field("root_url", &self.root_url)
            .finish()
    }
}
