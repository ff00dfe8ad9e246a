//! Response metrics using the metrics crate facade.
//!
//! Counts responses with the `metrics` crate, which allows integration with
//! various metrics backends (Prometheus, `StatsD`, etc.).

use std::future;

use sofetch_core::{Envelope, InterceptFuture, Interceptor, RequestConfig};

/// Labels used for metrics.
const LABEL_METHOD: &str = "method";
const LABEL_STATUS: &str = "status";
const LABEL_OUTCOME: &str = "outcome";

/// Metric names.
const METRIC_RESPONSES_TOTAL: &str = "http_client_responses_total";

/// Response interceptor that records HTTP metrics.
///
/// Records `http_client_responses_total` (counter), labeled by method, status
/// and outcome (`success` or `error`, read from the envelope flag at this
/// point of the chain).
///
/// Transport failures never reach the response chain and are not counted.
///
/// # Example
///
/// ```ignore
/// use sofetch::middleware::Metrics;
///
/// let client: sofetch::Client = sofetch::Client::builder()
///     .response_interceptor(Metrics::new())
///     .build();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Metrics {
    _private: (),
}

impl Metrics {
    /// Create a new metrics interceptor.
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl<T: Send + 'static> Interceptor<Envelope<T>> for Metrics {
    fn intercept(&self, envelope: Envelope<T>) -> InterceptFuture<'_, Envelope<T>> {
        let method = envelope
            .config()
            .map(RequestConfig::method)
            .unwrap_or_default()
            .to_string();
        let outcome = if envelope.is_error() {
            "error"
        } else {
            "success"
        };

        metrics::counter!(
            METRIC_RESPONSES_TOTAL,
            LABEL_METHOD => method,
            LABEL_STATUS => envelope.status().to_string(),
            LABEL_OUTCOME => outcome
        )
        .increment(1);

        Box::pin(future::ready(Ok(envelope)))
    }
}
