//! Static request headers.

use std::future;

use sofetch_core::{InterceptFuture, Interceptor, RequestConfig};

/// Request interceptor that sets one header.
///
/// # Example
///
/// ```ignore
/// use sofetch::middleware::SetHeader;
///
/// let client: sofetch::Client = sofetch::Client::builder()
///     .request_interceptor(SetHeader::overriding("User-Agent", "my-app/1.0"))
///     .request_interceptor(SetHeader::if_absent("Accept", "application/json"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct SetHeader {
    name: String,
    value: String,
    overwrite: bool,
}

impl SetHeader {
    /// Always set the header, replacing any value already present.
    pub fn overriding(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            overwrite: true,
        }
    }

    /// Set the header only when the request does not carry it yet.
    pub fn if_absent(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            overwrite: false,
        }
    }
}

impl Interceptor<RequestConfig> for SetHeader {
    fn intercept(&self, mut config: RequestConfig) -> InterceptFuture<'_, RequestConfig> {
        let headers = config.headers_mut();
        if self.overwrite || !headers.contains(&self.name) {
            headers.insert(&self.name, self.value.clone());
        }
        Box::pin(future::ready(Ok(config)))
    }
}
