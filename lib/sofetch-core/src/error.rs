//! Error types for sofetch.
//!
//! [`Error`] covers failures of the exchange itself (transport, URL, body
//! codecs). [`FetchError`] is what a fetch call rejects with: it adds the
//! error envelope (non-2xx responses) and interceptor failures.

use derive_more::{Display, Error, From};

use crate::Envelope;

/// Boxed error returned by interceptors.
///
/// Any `std::error::Error + Send + Sync` converts into it with `?`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// ============================================================================
// Transport Error
// ============================================================================

/// Transport and codec error type.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// The descriptor could not be turned into a transport request.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

// ============================================================================
// Fetch Error
// ============================================================================

/// Rejection reason of a fetch call.
///
/// An HTTP error status is not a transport failure: the full [`Envelope`] is
/// handed back in [`FetchError::Status`] so callers can inspect status,
/// headers, body and the request config in one place.
#[derive(Debug)]
pub enum FetchError<T = serde_json::Value> {
    /// The final envelope was flagged as an error (by default: non-2xx status).
    Status(Box<Envelope<T>>),
    /// The transport failed; the error is passed through unchanged.
    Transport(Error),
    /// An interceptor failed; the remaining chain was skipped.
    Interceptor(BoxError),
    /// The request body could not be serialized.
    Body(Error),
}

impl<T> FetchError<T> {
    /// HTTP status of the error envelope, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.envelope().map(Envelope::status)
    }

    /// The error envelope, if this is a [`FetchError::Status`].
    #[must_use]
    pub fn envelope(&self) -> Option<&Envelope<T>> {
        match self {
            Self::Status(envelope) => Some(&**envelope),
            _ => None,
        }
    }

    /// Consume into the error envelope, if this is a [`FetchError::Status`].
    #[must_use]
    pub fn into_envelope(self) -> Option<Envelope<T>> {
        match self {
            Self::Status(envelope) => Some(*envelope),
            _ => None,
        }
    }

    /// Returns `true` if the call produced an error envelope.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status(_))
    }

    /// Returns `true` if the transport failed.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if an interceptor failed.
    #[must_use]
    pub const fn is_interceptor(&self) -> bool {
        matches!(self, Self::Interceptor(_))
    }

    /// Downcast an interceptor failure to its concrete type.
    #[must_use]
    pub fn downcast_interceptor<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Interceptor(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl<T> std::fmt::Display for FetchError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(envelope) => write!(f, "HTTP error {}", envelope.status()),
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::Interceptor(err) => write!(f, "interceptor error: {err}"),
            Self::Body(err) => write!(f, "request body error: {err}"),
        }
    }
}

impl<T: std::fmt::Debug> std::error::Error for FetchError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Status(_) => None,
            Self::Transport(err) | Self::Body(err) => Some(err),
            Self::Interceptor(err) => Some(err.as_ref()),
        }
    }
}
