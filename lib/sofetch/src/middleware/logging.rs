//! Request/response logging.
//!
//! Logs requests and responses using the `tracing` crate. The same value
//! works as a request and as a response interceptor; register it on both
//! chains to get both sides.

use std::future;

use sofetch_core::{Envelope, InterceptFuture, Interceptor, RequestConfig};
use tracing::{debug, info, warn};

/// Log level for the logging interceptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level (request/response details).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

/// Interceptor that logs requests and responses.
///
/// Error envelopes are always logged at `warn`.
///
/// # Example
///
/// ```ignore
/// use sofetch::Client;
/// use sofetch::middleware::Logging;
///
/// let client: Client = Client::builder()
///     .request_interceptor(Logging::debug())
///     .response_interceptor(Logging::debug())
///     .build();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Logging {
    level: LogLevel,
}

impl Logging {
    /// Create a logging interceptor at info level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging interceptor that logs at debug level, headers included.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }

    /// The configured level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl Interceptor<RequestConfig> for Logging {
    fn intercept(&self, config: RequestConfig) -> InterceptFuture<'_, RequestConfig> {
        let method = config.method();
        let url = config.url();

        match self.level {
            LogLevel::Debug => {
                debug!(
                    method = %method,
                    url = %url,
                    headers = ?config.headers(),
                    "sending request"
                );
            }
            LogLevel::Info => {
                info!(method = %method, url = %url, "sending request");
            }
        }

        Box::pin(future::ready(Ok(config)))
    }
}

impl<T: Send + 'static> Interceptor<Envelope<T>> for Logging {
    fn intercept(&self, envelope: Envelope<T>) -> InterceptFuture<'_, Envelope<T>> {
        let status = envelope.status();
        let url = envelope
            .config()
            .map(RequestConfig::url)
            .unwrap_or_default();

        if envelope.is_error() {
            warn!(status, url, "request failed with HTTP error");
        } else {
            match self.level {
                LogLevel::Debug => {
                    debug!(
                        status,
                        url,
                        headers = ?envelope.headers(),
                        "request completed"
                    );
                }
                LogLevel::Info => info!(status, url, "request completed"),
            }
        }

        Box::pin(future::ready(Ok(envelope)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use sofetch_core::{Body, Headers, Method};

    use super::*;

    #[test]
    fn default_level_is_info() {
        assert_eq!(Logging::new().level(), LogLevel::Info);
        assert_eq!(Logging::debug().level(), LogLevel::Debug);
    }

    #[tokio::test]
    async fn request_passes_through() {
        let mut config = RequestConfig::new(Method::Delete, "https://api.example.com/items/3");
        config.headers_mut().insert("X-Trace", "abc");

        let logged = Logging::debug()
            .intercept(config.clone())
            .await
            .expect("intercept");

        assert_eq!(logged, config);
    }

    #[tokio::test]
    async fn response_passes_through() {
        for status in [200, 500] {
            let envelope: Envelope<Value> =
                Envelope::new(status, Headers::new(), Body::Json(json!({"ok": true})));

            let logged = Logging::new().intercept(envelope).await.expect("intercept");

            assert_eq!(logged.status(), status);
            assert_eq!(logged.json(), Some(&json!({"ok": true})));
        }
    }
}
