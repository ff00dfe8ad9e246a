//! # Chapter 3: Interceptors
//!
//! Add cross-cutting behavior without touching call sites.
//!
//! ## Closures
//!
//! ```ignore
//! let client: Client = Client::builder()
//!     .map_request(|mut config| {
//!         config.headers_mut().insert("X-Client", "my-app");
//!         Ok(config)
//!     })
//!     .then_request(|mut config| async move {
//!         let token = token_store().fresh_token().await?;
//!         config.headers_mut().insert("Authorization", format!("Bearer {token}"));
//!         Ok(config)
//!     })
//!     .map_response(|mut envelope| {
//!         if envelope.status() == 404 {
//!             envelope.set_error(false);
//!         }
//!         Ok(envelope)
//!     })
//!     .build();
//! ```
//!
//! ## Built-in Interceptors
//!
//! | Feature | Interceptor | Helper |
//! |---------|-------------|--------|
//! | | [`BearerAuth`](crate::middleware::BearerAuth) | `.with_bearer_auth(token)` |
//! | `middleware-basic-auth` | `BasicAuth` | `.with_basic_auth(user, pass)` |
//! | | [`Logging`](crate::middleware::Logging) | `.with_logging()` |
//! | `middleware-metrics` | `Metrics` | `.with_metrics()` |
//! | | [`SetHeader`](crate::middleware::SetHeader) | |
//! | | [`RewriteUrl`](crate::middleware::RewriteUrl) | |
//! | | [`UnwrapField`](crate::middleware::UnwrapField) | |
//! | | [`AcceptStatus`](crate::middleware::AcceptStatus) | |
//! | | [`ErrorWhen`](crate::middleware::ErrorWhen) | |
//!
//! ## Order
//!
//! Each chain runs in the order interceptors were added, and each one sees
//! the output of the previous one:
//!
//! ```text
//! .with_bearer_auth(..)   →  1st on requests
//! .with_logging()         →  2nd on requests (sees the token), 1st on responses
//! .response_interceptor(UnwrapField::new("data"))  →  2nd on responses
//! ```
//!
//! An interceptor returning `Err` stops its chain. The call rejects with
//! [`FetchError::Interceptor`](crate::FetchError::Interceptor) holding that
//! exact error, which can be downcast back.
//!
//! ## Custom Interceptors
//!
//! Implement [`Interceptor`](crate::Interceptor) for types with state:
//!
//! ```ignore
//! use sofetch::{InterceptFuture, Interceptor, RequestConfig};
//!
//! struct ApiVersion(&'static str);
//!
//! impl Interceptor<RequestConfig> for ApiVersion {
//!     fn intercept(&self, mut config: RequestConfig) -> InterceptFuture<'_, RequestConfig> {
//!         let version = self.0;
//!         Box::pin(async move {
//!             config.headers_mut().insert("Api-Version", version);
//!             Ok(config)
//!         })
//!     }
//! }
//! ```
//!
//! ## Summary
//!
//! - Use `map_*` for synchronous closures, `then_*` for async ones
//! - Order matters: later interceptors see earlier changes
//! - Use feature flags for interceptors with extra dependencies
