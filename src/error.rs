use thiserror::Error;

pub use crate::client::transport::TransportError;

pub type Result<T> = std::result::Result<T, Error>;

/// Every error a request to Trakt may end in.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The request could not be built from the given input. Nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    /// The transport failed before a response was received.
    #[error("Network error: {0}")]
    Network(#[source] TransportError),

    /// The request was cancelled before a response was received.
    #[error("The request was cancelled")]
    Cancelled,

    /// Trakt responded with a non-successful status code. `message` is a human-readable explanation for the status
    /// codes Trakt documents, see [message_for](crate::status::message_for).
    #[error("Trakt responded with HTTP {status}: {}", .message.unwrap_or("no message for this status"))]
    Server { status: u16, message: Option<&'static str> },

    /// The response body did not match the expected shape. `field_path` is the dotted path to the offending field
    /// (e.g. `ids.trakt`), or `.` if the body as a whole couldn't be parsed.
    #[error("Failed to decode response at `{field_path}`: {source}")]
    Decoding {
        field_path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Trakt returned an empty response to a request that expects content.
    #[error("Trakt returned an empty response where content was expected")]
    EmptyResponse,
}

/// Reasons a request is rejected before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidRequest {
    #[error("{0:?} cannot be embedded in a request path")]
    UnsafePathSegment(String),

    #[error("The endpoint requires authorization but no access token is available")]
    MissingCredentials,

    #[error("The value for the {0} header contains characters not allowed in HTTP headers")]
    InvalidHeaderValue(&'static str),

    #[error("The base URL {0} cannot be used for API requests")]
    InvalidBaseUrl(String),
}

impl Error {
    /// Returns the HTTP status code of a [Server](Error::Server) error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Cancelled => Error::Cancelled,
            other => Error::Network(other),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let field_path = err.path().to_string();

        Error::Decoding {
            field_path,
            source: err.into_inner(),
        }
    }
}
