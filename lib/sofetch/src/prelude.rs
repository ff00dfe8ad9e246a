//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions for
//! easy glob importing:
//!
//! ```ignore
//! use sofetch::prelude::*;
//! ```

pub use crate::{
    Body, BoxError, Client, ClientBuilder, ClientOptions, Credentials, Envelope, Error, FetchError,
    FetchResult, Headers, HyperTransport, Interceptor, Method, RequestConfig, RequestOptions,
    Response, Result, RootUrl, ServiceTransport, Transport, map_fn, then_fn,
};
pub use serde::{Deserialize, Serialize};
