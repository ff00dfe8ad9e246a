//! Core types for the sofetch HTTP client.
//!
//! This crate holds everything that does not depend on a network stack:
//! - [`RequestOptions`] and [`RequestConfig`] - what callers ask for, and the finalized descriptor
//! - [`Response`] - raw response handed back by a [`Transport`]
//! - [`Envelope`] and [`Body`] - normalized response with its success/error flag
//! - [`parse_response`] - raw response to envelope
//! - [`Interceptor`] and [`InterceptorChain`] - the sequential interceptor pipeline
//! - [`Error`], [`FetchError`] and [`Result`] - error handling
//! - [`Headers`] - case-insensitive header map
//! - [`Method`] and [`Credentials`] - request flags

mod body;
mod error;
mod headers;
mod interceptor;
mod method;
mod parse;
mod pipeline;
pub mod prelude;
mod request;
mod response;
mod transport;

pub use body::{ContentType, from_json, is_json_content_type, to_json};
pub use error::{BoxError, Error, FetchError, Result};
pub use headers::Headers;
pub use interceptor::{InterceptFuture, Interceptor, MapFn, ThenFn, map_fn, then_fn};
pub use method::Method;
pub use parse::parse_response;
pub use pipeline::InterceptorChain;
pub use request::{Credentials, RequestConfig, RequestOptions};
pub use response::{Body, Envelope, Response};
pub use transport::Transport;

/// Outcome of a fetch call.
pub type FetchResult<T = serde_json::Value> = std::result::Result<Envelope<T>, FetchError<T>>;
