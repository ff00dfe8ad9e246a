//! Interceptor chains.
//!
//! A chain is a left fold over its interceptors: the output of one step is
//! the input of the next, and each step is awaited before the next starts.
//! Steps never run concurrently, and the first failure stops the fold.

use std::sync::Arc;

use tracing::trace;

use crate::{BoxError, Envelope, Interceptor, RequestConfig};

/// Ordered sequence of interceptors over values of type `V`.
///
/// Registration order is execution order. There is no deduplication and no
/// priority.
pub struct InterceptorChain<V> {
    interceptors: Vec<Arc<dyn Interceptor<V>>>,
}

impl<V> InterceptorChain<V> {
    /// An empty chain (the identity transform).
    #[must_use]
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Appends an interceptor at the end of the chain.
    pub fn push<I>(&mut self, interceptor: I)
    where
        I: Interceptor<V> + 'static,
    {
        self.interceptors.push(Arc::new(interceptor));
    }

    /// Builder-style [`InterceptorChain::push`].
    #[must_use]
    pub fn with<I>(mut self, interceptor: I) -> Self
    where
        I: Interceptor<V> + 'static,
    {
        self.push(interceptor);
        self
    }

    /// Number of interceptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Returns `true` if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl<V: Send> InterceptorChain<V> {
    /// Runs every interceptor in order, starting from `initial`.
    ///
    /// # Errors
    ///
    /// Returns the first interceptor error verbatim; later interceptors are
    /// not run.
    pub async fn apply(&self, initial: V) -> Result<V, BoxError> {
        let mut value = initial;
        for (step, interceptor) in self.interceptors.iter().enumerate() {
            trace!(step, total = self.interceptors.len(), "running interceptor");
            value = interceptor.intercept(value).await?;
        }
        Ok(value)
    }
}

impl InterceptorChain<RequestConfig> {
    /// Runs the request chain over a freshly built descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first interceptor error.
    pub async fn apply_request(&self, config: RequestConfig) -> Result<RequestConfig, BoxError> {
        self.apply(config).await
    }
}

impl<T: Send> InterceptorChain<Envelope<T>> {
    /// Attaches `config` to the envelope, then runs the response chain.
    ///
    /// # Errors
    ///
    /// Returns the first interceptor error.
    pub async fn apply_response(
        &self,
        mut envelope: Envelope<T>,
        config: RequestConfig,
    ) -> Result<Envelope<T>, BoxError> {
        envelope.attach_config(config);
        self.apply(envelope).await
    }
}

impl<V> Default for InterceptorChain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for InterceptorChain<V> {
    fn clone(&self) -> Self {
        Self {
            interceptors: self.interceptors.clone(),
        }
    }
}

impl<V> std::fmt::Debug for InterceptorChain<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("len", &self.interceptors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{Body, Headers, Method, map_fn, then_fn};

    fn config() -> RequestConfig {
        RequestConfig::new(Method::Get, "https://api.example.com/users")
    }

    #[tokio::test]
    async fn empty_chain_is_identity() {
        let chain = InterceptorChain::<RequestConfig>::new();
        assert!(chain.is_empty());

        let result = chain.apply_request(config()).await.expect("apply");
        assert_eq!(result, config());
    }

    #[tokio::test]
    async fn empty_response_chain_only_attaches_config() {
        let chain = InterceptorChain::<Envelope<u32>>::new();
        let envelope = Envelope::new(200, Headers::new(), Body::Json(1));

        let result = chain
            .apply_response(envelope, config())
            .await
            .expect("apply");

        assert_eq!(result.status(), 200);
        assert_eq!(result.json(), Some(&1));
        assert!(!result.is_error());
        assert_eq!(result.config(), Some(&config()));
    }

    #[tokio::test]
    async fn output_of_each_step_feeds_the_next() {
        let chain = InterceptorChain::new()
            .with(map_fn(|mut config: RequestConfig| {
                let url = format!("{}/a", config.url());
                config.set_url(url);
                Ok(config)
            }))
            .with(map_fn(|mut config: RequestConfig| {
                let url = format!("{}/b", config.url());
                config.set_url(url);
                Ok(config)
            }));

        let result = chain.apply_request(config()).await.expect("apply");
        assert_eq!(result.url(), "https://api.example.com/users/a/b");
    }

    #[tokio::test]
    async fn earlier_interceptor_observes_pre_later_state() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first_seen = Arc::clone(&seen);

        let chain = InterceptorChain::new()
            .with(map_fn(move |config: RequestConfig| {
                first_seen
                    .lock()
                    .expect("lock")
                    .push(config.header("x-step").map(str::to_string));
                Ok(config)
            }))
            .with(map_fn(|mut config: RequestConfig| {
                config.headers_mut().insert("X-Step", "second");
                Ok(config)
            }));

        let result = chain.apply_request(config()).await.expect("apply");

        assert_eq!(*seen.lock().expect("lock"), vec![None]);
        assert_eq!(result.header("x-step"), Some("second"));
    }

    #[tokio::test]
    async fn sync_and_async_steps_run_sequentially() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (a, b, c) = (Arc::clone(&log), Arc::clone(&log), Arc::clone(&log));

        let chain = InterceptorChain::new()
            .with(map_fn(move |value: u32| {
                a.lock().expect("lock").push(format!("sync {value}"));
                Ok(value + 1)
            }))
            .with(then_fn(move |value: u32| {
                let b = Arc::clone(&b);
                async move {
                    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
                    b.lock().expect("lock").push(format!("async {value}"));
                    Ok::<_, BoxError>(value * 10)
                }
            }))
            .with(map_fn(move |value: u32| {
                c.lock().expect("lock").push(format!("sync {value}"));
                Ok(value)
            }));

        let result = chain.apply(1).await.expect("apply");

        assert_eq!(result, 20);
        assert_eq!(
            *log.lock().expect("lock"),
            vec!["sync 1", "async 2", "sync 20"]
        );
    }

    #[tokio::test]
    async fn failure_stops_the_chain() {
        let after = Arc::new(AtomicUsize::new(0));
        let spy = Arc::clone(&after);

        let chain = InterceptorChain::new()
            .with(map_fn(|_: RequestConfig| Err("token expired".into())))
            .with(map_fn(move |config: RequestConfig| {
                spy.fetch_add(1, Ordering::SeqCst);
                Ok(config)
            }));

        let err = chain
            .apply_request(config())
            .await
            .expect_err("should fail");

        assert_eq!(err.to_string(), "token expired");
        assert_eq!(after.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn response_interceptor_may_flip_error_flag() {
        let chain = InterceptorChain::new().with(map_fn(|mut envelope: Envelope<u32>| {
            if envelope.status() == 404 {
                envelope.set_error(false);
            }
            Ok(envelope)
        }));

        let envelope = Envelope::new(404, Headers::new(), Body::Json(0));
        let result = chain
            .apply_response(envelope, config())
            .await
            .expect("apply");

        assert!(!result.is_error());
        assert_eq!(result.status(), 404);
    }

    #[test]
    fn chain_debug_and_clone() {
        let chain = InterceptorChain::new().with(map_fn(|value: u32| Ok(value)));
        let cloned = chain.clone();

        assert_eq!(cloned.len(), 1);
        assert_eq!(format!("{chain:?}"), "InterceptorChain { len: 1 }");
    }
}
