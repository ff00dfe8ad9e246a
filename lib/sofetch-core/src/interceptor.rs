//! Interceptors.
//!
//! An interceptor transforms one value (a [`RequestConfig`](crate::RequestConfig)
//! or an [`Envelope`](crate::Envelope)) into the next. Every interceptor
//! returns a boxed future, so synchronous and asynchronous transforms run the
//! same way inside a chain.
//!
//! Closures are adapted with [`map_fn`] (synchronous) and [`then_fn`]
//! (asynchronous). Types with state implement [`Interceptor`] directly.
//!
//! # Example
//!
//! ```
//! use sofetch_core::{BoxError, RequestConfig, map_fn, then_fn};
//!
//! let add_header = map_fn(|mut config: RequestConfig| {
//!     config.headers_mut().insert("X-Client", "sofetch");
//!     Ok(config)
//! });
//!
//! let load_token = then_fn(|mut config: RequestConfig| async move {
//!     let token = fetch_token().await?;
//!     config.headers_mut().insert("Authorization", format!("Bearer {token}"));
//!     Ok::<_, BoxError>(config)
//! });
//!
//! async fn fetch_token() -> Result<String, BoxError> {
//!     Ok("secret".to_string())
//! }
//! ```

use std::future::{self, Future};
use std::pin::Pin;

use crate::BoxError;

/// Future returned by an interceptor.
pub type InterceptFuture<'a, V> = Pin<Box<dyn Future<Output = Result<V, BoxError>> + Send + 'a>>;

/// A transform applied to every value passing through a chain.
///
/// Interceptors own the value they receive: they may mutate it and hand it
/// back, or return a new one. An `Err` aborts the rest of the chain.
pub trait Interceptor<V>: Send + Sync {
    /// Transform `value`.
    fn intercept(&self, value: V) -> InterceptFuture<'_, V>;
}

/// Interceptor built from a synchronous closure. See [`map_fn`].
#[derive(Clone, Copy)]
pub struct MapFn<F> {
    f: F,
}

/// Adapt a synchronous closure into an [`Interceptor`].
pub fn map_fn<V, F>(f: F) -> MapFn<F>
where
    F: Fn(V) -> Result<V, BoxError>,
{
    MapFn { f }
}

impl<V, F> Interceptor<V> for MapFn<F>
where
    V: Send + 'static,
    F: Fn(V) -> Result<V, BoxError> + Send + Sync,
{
    fn intercept(&self, value: V) -> InterceptFuture<'_, V> {
        Box::pin(future::ready((self.f)(value)))
    }
}

impl<F> std::fmt::Debug for MapFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapFn")
            .field("f", &std::any::type_name::<F>())
            .finish()
    }
}

/// Interceptor built from an asynchronous closure. See [`then_fn`].
#[derive(Clone, Copy)]
pub struct ThenFn<F> {
    f: F,
}

/// Adapt an asynchronous closure into an [`Interceptor`].
pub fn then_fn<V, F, Fut>(f: F) -> ThenFn<F>
where
    F: Fn(V) -> Fut,
    Fut: Future<Output = Result<V, BoxError>>,
{
    ThenFn { f }
}

impl<V, F, Fut> Interceptor<V> for ThenFn<F>
where
    F: Fn(V) -> Fut + Send + Sync,
    Fut: Future<Output = Result<V, BoxError>> + Send + 'static,
{
    fn intercept(&self, value: V) -> InterceptFuture<'_, V> {
        Box::pin((self.f)(value))
    }
}

impl<F> std::fmt::Debug for ThenFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThenFn")
            .field("f", &std::any::type_name::<F>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, RequestConfig};

    #[tokio::test]
    async fn map_fn_runs_closure() {
        let interceptor = map_fn(|mut config: RequestConfig| {
            config.set_method(Method::Post);
            Ok(config)
        });

        let config = interceptor
            .intercept(RequestConfig::new(Method::Get, "/a"))
            .await
            .expect("intercept");
        assert_eq!(config.method(), Method::Post);
    }

    #[tokio::test]
    async fn then_fn_awaits_closure() {
        let interceptor = then_fn(|mut config: RequestConfig| async move {
            tokio::task::yield_now().await;
            config.set_url("/b");
            Ok::<_, BoxError>(config)
        });

        let config = interceptor
            .intercept(RequestConfig::new(Method::Get, "/a"))
            .await
            .expect("intercept");
        assert_eq!(config.url(), "/b");
    }

    #[tokio::test]
    async fn errors_are_returned_unchanged() {
        let interceptor = map_fn(|_: RequestConfig| Err("denied".into()));

        let err = interceptor
            .intercept(RequestConfig::new(Method::Get, "/a"))
            .await
            .expect_err("should fail");
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn debug_names_the_closure_type() {
        let interceptor = map_fn(|config: RequestConfig| Ok(config));
        assert!(format!("{interceptor:?}").starts_with("MapFn"));
    }
}
