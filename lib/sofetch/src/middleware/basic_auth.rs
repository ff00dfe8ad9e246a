//! Basic authentication.
//!
//! Adds an `Authorization: Basic <base64(user:pass)>` header to every
//! outgoing request.

use std::future;
use std::sync::Arc;

use base64::Engine;
use sofetch_core::{InterceptFuture, Interceptor, RequestConfig};

/// Request interceptor that adds basic authentication.
///
/// # Example
///
/// ```ignore
/// use sofetch::Client;
/// use sofetch::middleware::BasicAuth;
///
/// let client: Client = Client::builder()
///     .request_interceptor(BasicAuth::new("username", "password"))
///     .build();
/// ```
#[derive(Clone)]
pub struct BasicAuth {
    /// Base64-encoded "username:password".
    encoded_credentials: Arc<str>,
}

impl BasicAuth {
    /// Create a basic auth interceptor with the given username and password.
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        let credentials = format!("{}:{}", username.as_ref(), password.as_ref());
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        Self {
            encoded_credentials: Arc::from(encoded),
        }
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth").finish_non_exhaustive()
    }
}

impl Interceptor<RequestConfig> for BasicAuth {
    fn intercept(&self, mut config: RequestConfig) -> InterceptFuture<'_, RequestConfig> {
        config.headers_mut().insert(
            "Authorization",
            format!("Basic {}", self.encoded_credentials),
        );
        Box::pin(future::ready(Ok(config)))
    }
}

#[cfg(test)]
mod tests {
    use sofetch_core::Method;

    use super::*;

    #[tokio::test]
    async fn credentials_are_encoded() {
        let config = BasicAuth::new("Aladdin", "open sesame")
            .intercept(RequestConfig::new(Method::Get, "https://example.com"))
            .await
            .expect("intercept");

        assert_eq!(
            config.header("authorization"),
            Some("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==")
        );
    }

    #[test]
    fn debug_hides_credentials() {
        let debug = format!("{:?}", BasicAuth::new("user", "pass"));
        assert_eq!(debug, "BasicAuth { .. }");
    }
}
