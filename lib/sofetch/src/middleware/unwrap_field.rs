//! Response envelope unwrapping.

use std::future;

use serde_json::Value;
use sofetch_core::{Body, Envelope, InterceptFuture, Interceptor};
use tracing::trace;

/// Response interceptor that replaces a JSON object body by one of its
/// fields.
///
/// APIs that wrap every payload (`{"data": ..., "meta": ...}`) can be
/// unwrapped once here instead of at every call site. Bodies that are not an
/// object holding `field` pass through unchanged.
///
/// ```ignore
/// builder.response_interceptor(UnwrapField::new("data"))
/// ```
#[derive(Debug, Clone)]
pub struct UnwrapField {
    field: String,
}

impl UnwrapField {
    /// Unwrap `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Interceptor<Envelope<Value>> for UnwrapField {
    fn intercept(&self, mut envelope: Envelope<Value>) -> InterceptFuture<'_, Envelope<Value>> {
        if let Body::Json(Value::Object(object)) = envelope.body_mut()
            && let Some(inner) = object.remove(&self.field)
        {
            trace!(field = %self.field, "unwrapped response field");
            envelope.set_body(Body::Json(inner));
        }
        Box::pin(future::ready(Ok(envelope)))
    }
}
