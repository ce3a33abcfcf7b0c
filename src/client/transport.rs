//! The network layer requests are dispatched through.
//!
//! The client builds a complete [HttpRequest] and hands it to a transport, which returns the response status, headers
//! and body as-is. Interpreting the response is left to the client. [AsyncHttpClient] and [BlockingHttpClient] are
//! the reqwest-backed default transports; anything else implementing [AsyncTransport] or [SyncTransport] can be given
//! to [TraktClientBuilder::build_with_transport](crate::client::TraktClientBuilder::build_with_transport).

#[cfg(feature = "async")]
mod async_client {
    use std::ops::Deref;

    use log::trace;

    use super::{AsyncTransport, HttpRequest, HttpResponse, TransportError};

    /// Transport backed by an asynchronous [reqwest::Client].
    #[derive(Debug, Clone, Default)]
    pub struct AsyncHttpClient(pub(crate) reqwest::Client);

    impl AsyncHttpClient {
        pub fn new() -> Self {
            Self(reqwest::Client::new())
        }
    }

    impl From<reqwest::Client> for AsyncHttpClient {
        fn from(client: reqwest::Client) -> Self {
            Self(client)
        }
    }

    impl Deref for AsyncHttpClient {
        type Target = reqwest::Client;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    #[async_trait::async_trait]
    impl AsyncTransport for AsyncHttpClient {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let response = self
                .0
                .request(request.method, request.url)
                .headers(request.headers)
                .send()
                .await?;

            trace!("Response: {:?}", response);

            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?.to_vec();

            Ok(HttpResponse { status, headers, body })
        }
    }
}

#[cfg(feature = "sync")]
mod sync_client {
    use std::ops::Deref;

    use log::trace;

    use super::{HttpRequest, HttpResponse, SyncTransport, TransportError};

    /// Transport backed by a [reqwest::blocking::Client].
    ///
    /// Creating this transport inside an async runtime panics, as creating any blocking reqwest client does.
    #[derive(Debug, Clone)]
    pub struct BlockingHttpClient(pub(crate) reqwest::blocking::Client);

    impl BlockingHttpClient {
        pub fn new() -> Self {
            Self(reqwest::blocking::Client::new())
        }
    }

    impl Default for BlockingHttpClient {
        fn default() -> Self {
            Self::new()
        }
    }

    impl From<reqwest::blocking::Client> for BlockingHttpClient {
        fn from(client: reqwest::blocking::Client) -> Self {
            Self(client)
        }
    }

    impl Deref for BlockingHttpClient {
        type Target = reqwest::blocking::Client;

        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    impl SyncTransport for BlockingHttpClient {
        fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let response = self
                .0
                .request(request.method, request.url)
                .headers(request.headers)
                .send()?;

            trace!("Response: {:?}", response);

            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes()?.to_vec();

            Ok(HttpResponse { status, headers, body })
        }
    }
}

use reqwest::{header::HeaderMap, Method, StatusCode, Url};
use thiserror::Error;

#[cfg(feature = "async")]
pub use self::async_client::AsyncHttpClient;
#[cfg(feature = "sync")]
pub use self::sync_client::BlockingHttpClient;

/// A fully built request: everything a transport needs to send it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

/// A response as received by a transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Failures in the transport, before a response was received.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The transport gave up on the request because it was cancelled.
    #[error("The request was cancelled")]
    Cancelled,

    /// The request could not be sent or its response could not be received.
    #[error("{0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// An asynchronous transport.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// A blocking transport.
#[cfg(feature = "sync")]
pub trait SyncTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl TransportError {
    /// Wrap any error as a transport failure.
    pub fn failed<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        TransportError::Failed(err.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Failed(Box::new(err))
    }
}

impl HttpResponse {
    /// Whether the response carries no content: either a 204 or an empty (or whitespace-only) body.
    pub fn is_empty(&self) -> bool {
        self.status == StatusCode::NO_CONTENT || self.body.iter().all(u8::is_ascii_whitespace)
    }
}
