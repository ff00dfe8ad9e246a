//! HTTP client with a sequential request/response interceptor pipeline.
//!
//! Every call builds a request descriptor, runs it through the request
//! interceptors, hands it to a transport, parses the response into an
//! [`Envelope`] and runs that through the response interceptors. An envelope
//! still flagged as an error at the end rejects the call.
//!
//! # Example
//!
//! ```ignore
//! use sofetch::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! let client = Client::<User>::builder()
//!     .root_url("https://api.example.com")
//!     .with_bearer_auth("my-token")
//!     .build();
//!
//! let user = client.get("/users/42", RequestOptions::new()).await?;
//! println!("{:?}", user.json());
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod client;
mod config;
pub mod middleware;
pub mod prelude;
mod transport;

// Re-export client types
pub use client::{Client, ClientBuilder};
pub use config::{ClientOptions, RootUrl};
pub use transport::{HyperTransport, ServiceTransport, TransportFuture};

// Re-export tower for custom transports
pub use tower;

// Re-export core types
pub use sofetch_core::{
    Body, BoxError, ContentType, Credentials, Envelope, Error, FetchError, FetchResult, Headers,
    InterceptFuture, Interceptor, InterceptorChain, MapFn, Method, RequestConfig, RequestOptions,
    Response, Result, ThenFn, Transport, from_json, is_json_content_type, map_fn, parse_response,
    then_fn, to_json,
};
