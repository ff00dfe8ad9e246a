//! Prelude module for convenient imports.
//!
//! ```ignore
//! use sofetch_core::prelude::*;
//! ```

pub use crate::{
    Body, BoxError, Credentials, Envelope, Error, FetchError, FetchResult, Headers, Interceptor,
    InterceptorChain, Method, RequestConfig, RequestOptions, Response, Result, Transport, map_fn,
    then_fn,
};
