//! Response parsing.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Body, Envelope, Response, from_json, is_json_content_type};

/// Turn a transport response into an [`Envelope`].
///
/// A JSON `content-type` decodes the body into `T`; anything else keeps the
/// body as text. A JSON body that fails to decode falls back to its raw text,
/// so decoding never fails the call. The error flag comes from the status.
///
/// # Example
///
/// ```
/// use sofetch_core::{Headers, Response, parse_response};
///
/// let headers: Headers = [("Content-Type", "application/json")].into_iter().collect();
/// let envelope = parse_response::<serde_json::Value>(Response::new(200, headers, r#"{"a":1}"#));
///
/// assert!(!envelope.is_error());
/// assert_eq!(envelope.json(), Some(&serde_json::json!({"a": 1})));
/// ```
#[must_use]
pub fn parse_response<T: DeserializeOwned>(response: Response) -> Envelope<T> {
    let (status, headers, body) = response.into_parts();

    let is_json = headers
        .get("content-type")
        .is_some_and(is_json_content_type);

    let body = if is_json {
        match from_json::<T>(&body) {
            Ok(value) => Body::Json(value),
            Err(err) => {
                debug!(status, error = %err, "JSON body did not decode, keeping raw text");
                Body::Text(String::from_utf8_lossy(&body).into_owned())
            }
        }
    } else {
        Body::Text(String::from_utf8_lossy(&body).into_owned())
    };

    Envelope::new(status, headers, body)
}
