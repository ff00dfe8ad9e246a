//! Built-in interceptors.
//!
//! Each type here implements [`Interceptor`](crate::Interceptor) for request
//! descriptors, response envelopes or both. Add them with
//! [`ClientBuilder::request_interceptor`](crate::ClientBuilder::request_interceptor)
//! and [`ClientBuilder::response_interceptor`](crate::ClientBuilder::response_interceptor),
//! or through the builder helpers. Interceptors run in the order they are
//! added.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `middleware-basic-auth` | `BasicAuth` and `.with_basic_auth()` |
//! | `middleware-metrics` | `Metrics` and `.with_metrics()` |
//! | `middleware-full` | All of the above |
//!
//! # Available Interceptors
//!
//! ## Request
//!
//! - [`BearerAuth`] - Adds `Authorization: Bearer <token>`, static or refreshed per call
//! - `BasicAuth` - Adds `Authorization: Basic <base64>`
//! - [`SetHeader`] - Sets a header, overriding or only when absent
//! - [`RewriteUrl`] - Rewrites the request URL
//! - [`Logging`] - Logs the outgoing request
//!
//! ## Response
//!
//! - [`UnwrapField`] - Replaces a JSON object body by one of its fields
//! - [`AcceptStatus`] - Treats listed statuses as success
//! - [`ErrorWhen`] - Flags envelopes matching a predicate as errors
//! - [`Logging`] - Logs the response
//! - `Metrics` - Counts responses by method, status and outcome
//!
//! # Example
//!
//! ```ignore
//! use sofetch::Client;
//! use sofetch::middleware::{AcceptStatus, SetHeader, UnwrapField};
//!
//! let client: Client = Client::builder()
//!     .root_url("https://api.example.com")
//!     .request_interceptor(SetHeader::if_absent("Accept", "application/json"))
//!     .response_interceptor(AcceptStatus::new([404]))
//!     .response_interceptor(UnwrapField::new("data"))
//!     .build();
//! ```

#[cfg(feature = "middleware-basic-auth")]
mod basic_auth;
mod bearer_auth;
mod logging;
#[cfg(feature = "middleware-metrics")]
mod metrics;
mod rewrite_url;
mod set_header;
mod status;
mod unwrap_field;

#[cfg(feature = "middleware-basic-auth")]
pub use basic_auth::BasicAuth;
pub use bearer_auth::BearerAuth;
pub use logging::{LogLevel, Logging};
#[cfg(feature = "middleware-metrics")]
pub use metrics::Metrics;
pub use rewrite_url::RewriteUrl;
pub use set_header::SetHeader;
pub use status::{AcceptStatus, ErrorWhen};
pub use unwrap_field::UnwrapField;
