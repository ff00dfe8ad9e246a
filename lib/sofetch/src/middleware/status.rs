//! Error normalization on response envelopes.
//!
//! The client rejects a call when the final envelope is flagged as an error.
//! These interceptors change that flag.

use std::collections::HashSet;
use std::future;
use std::sync::Arc;

use sofetch_core::{Envelope, InterceptFuture, Interceptor};

/// Response interceptor that treats the listed statuses as success.
///
/// ```ignore
/// // A missing resource is an expected answer here
/// builder.response_interceptor(AcceptStatus::new([404]))
/// ```
#[derive(Debug, Clone)]
pub struct AcceptStatus {
    statuses: HashSet<u16>,
}

impl AcceptStatus {
    /// Accept every status in `statuses`.
    pub fn new(statuses: impl IntoIterator<Item = u16>) -> Self {
        Self {
            statuses: statuses.into_iter().collect(),
        }
    }
}

impl<T: Send + 'static> Interceptor<Envelope<T>> for AcceptStatus {
    fn intercept(&self, mut envelope: Envelope<T>) -> InterceptFuture<'_, Envelope<T>> {
        if self.statuses.contains(&envelope.status()) {
            envelope.set_error(false);
        }
        Box::pin(future::ready(Ok(envelope)))
    }
}

/// Response interceptor that flags an envelope as an error when a predicate
/// holds.
///
/// Useful for APIs that answer `200` with an error payload.
///
/// ```ignore
/// builder.response_interceptor(ErrorWhen::new(|envelope: &Envelope| {
///     envelope.json().is_some_and(|body| body["ok"] == false)
/// }))
/// ```
pub struct ErrorWhen<T> {
    predicate: Arc<dyn Fn(&Envelope<T>) -> bool + Send + Sync>,
}

impl<T> ErrorWhen<T> {
    /// Flag envelopes for which `predicate` returns `true`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Envelope<T>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }
}

impl<T> Clone for ErrorWhen<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> std::fmt::Debug for ErrorWhen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorWhen").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Interceptor<Envelope<T>> for ErrorWhen<T> {
    fn intercept(&self, mut envelope: Envelope<T>) -> InterceptFuture<'_, Envelope<T>> {
        if (self.predicate)(&envelope) {
            envelope.set_error(true);
        }
        Box::pin(future::ready(Ok(envelope)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use sofetch_core::{Body, Headers};

    use super::*;

    fn envelope(status: u16, body: Value) -> Envelope<Value> {
        Envelope::new(status, Headers::new(), Body::Json(body))
    }

    #[tokio::test]
    async fn accept_status_clears_listed_errors() {
        let accept = AcceptStatus::new([404, 409]);

        let not_found = accept
            .intercept(envelope(404, json!(null)))
            .await
            .expect("intercept");
        assert!(not_found.is_success());

        let server_error = accept
            .intercept(envelope(500, json!(null)))
            .await
            .expect("intercept");
        assert!(server_error.is_error());
    }

    #[tokio::test]
    async fn error_when_flags_matching_envelopes() {
        let error_when = ErrorWhen::new(|envelope: &Envelope<Value>| {
            envelope.json().is_some_and(|b| b["ok"] == json!(false))
        });

        let failed = error_when
            .intercept(envelope(200, json!({"ok": false})))
            .await
            .expect("intercept");
        assert!(failed.is_error());

        let passed = error_when
            .intercept(envelope(200, json!({"ok": true})))
            .await
            .expect("intercept");
        assert!(passed.is_success());
    }
}
