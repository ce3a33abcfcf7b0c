//! The Trakt client and its builder.
//!
//! Build a client with [TraktClientBuilder]. The endpoints are split into traits by resource ([ShowsClient],
//! [SeasonsClient], [EpisodesClient] and so on), all of which [TraktClient] implements. Each endpoint function returns
//! a request builder that is sent with [`send_async`](AsyncRequestBuilder::send_async) or
//! [`send_sync`](SyncRequestBuilder::send_sync), depending on the client's transport.
//!
//! ```no_run
//! # async fn run() -> ferrotrakt::Result<()> {
//! use ferrotrakt::prelude::*;
//!
//! let client = TraktClientBuilder::new("client id").build_async()?;
//! let episode = client
//!     .episode_summary("game-of-thrones", 1, 1)
//!     .extended([ExtendedInfo::Full])
//!     .send_async()
//!     .await?;
//!
//! println!("{:?}", episode.title);
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub(crate) mod object;
pub(crate) mod path;
pub(crate) mod request_builder;
pub mod transport;

mod comments;
mod episodes;
mod movies;
mod search;
mod seasons;
mod shows;
mod sync;
mod users;

pub(crate) mod private {
    use std::borrow::Cow;

    use reqwest::Method;

    use crate::{
        client::{
            path::RequestPath,
            transport::{HttpRequest, HttpResponse},
        },
        error::Result,
    };

    /// Every Trakt client implements this trait.
    pub trait BuildHttpRequest: crate::private::Sealed {
        /// Returns a complete request with the API headers, and the authorization header if `authorized`, filled in.
        fn build_http_request(
            &self,
            method: Method,
            path: &RequestPath,
            query: &[(&'static str, Cow<'static, str>)],
            authorized: bool,
        ) -> Result<HttpRequest>;
    }

    /// Trakt clients with an asynchronous transport implement this trait.
    #[cfg(feature = "async")]
    #[async_trait::async_trait]
    pub trait SendHttpRequestAsync: BuildHttpRequest {
        async fn send_http_request_async(&self, request: HttpRequest) -> Result<HttpResponse>;
    }

    /// Trakt clients with a blocking transport implement this trait.
    #[cfg(feature = "sync")]
    pub trait SendHttpRequestSync: BuildHttpRequest {
        fn send_http_request_sync(&self, request: HttpRequest) -> Result<HttpResponse>;
    }
}

use std::{borrow::Cow, sync::Arc};

use const_format::concatcp;
use log::{debug, warn};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Method, Url,
};

pub use self::{
    comments::CommentsClient,
    credentials::{AccessToken, CredentialProvider},
    episodes::EpisodesClient,
    movies::MoviesClient,
    request_builder::{
        BaseRequestBuilder, EpisodesRequestBuilder, ExtendedPaginatedRequestBuilder, ExtendedRequestBuilder,
        ListsRequestBuilder, PaginatedRequestBuilder, ProgressRequestBuilder, RequestBuilder, WithExtendedInfo,
        WithPagination,
    },
    search::SearchClient,
    seasons::SeasonsClient,
    shows::ShowsClient,
    sync::SyncClient,
    users::UsersClient,
};
#[cfg(feature = "async")]
pub use self::{request_builder::AsyncRequestBuilder, transport::AsyncHttpClient};
#[cfg(feature = "sync")]
pub use self::{request_builder::SyncRequestBuilder, transport::BlockingHttpClient};
use self::{
    path::RequestPath,
    transport::{HttpRequest, HttpResponse},
};
#[cfg(feature = "async")]
use self::transport::AsyncTransport;
#[cfg(feature = "sync")]
use self::transport::SyncTransport;
use crate::{
    error::{InvalidRequest, Result},
    model::id::ItemId,
};

pub const API_BASE_URL: &str = "https://api.trakt.tv";
pub const STAGING_API_BASE_URL: &str = "https://api-staging.trakt.tv";
pub const API_VERSION: &str = "2";

const API_KEY_HEADER: &str = "trakt-api-key";
const API_VERSION_HEADER: &str = "trakt-api-version";

const SHOWS_ENDPOINT: &str = "shows";
const MOVIES_ENDPOINT: &str = "movies";
const COMMENTS_ENDPOINT: &str = "comments";
const SEARCH_ENDPOINT: &str = "search";
const USERS_ENDPOINT: &str = "users";
const SYNC_ENDPOINT: &str = "sync";

const USERS_SETTINGS_ENDPOINT: &str = concatcp!(USERS_ENDPOINT, "/settings");
const SYNC_LAST_ACTIVITIES_ENDPOINT: &str = concatcp!(SYNC_ENDPOINT, "/last_activities");
const SYNC_WATCHED_SHOWS_ENDPOINT: &str = concatcp!(SYNC_ENDPOINT, "/watched/shows");
const SYNC_WATCHED_MOVIES_ENDPOINT: &str = concatcp!(SYNC_ENDPOINT, "/watched/movies");

/// A client for the Trakt API. Cloning the client is cheap: the configuration is shared and the transport is cloned.
///
/// `T` is the transport requests are sent with. It decides whether requests are sent asynchronously or blocking.
#[derive(Debug, Clone)]
pub struct TraktClient<T> {
    inner: Arc<TraktClientRef>,
    transport: T,
}

#[derive(Debug)]
struct TraktClientRef {
    base_url: Url,
    api_key: HeaderValue,
    api_version: HeaderValue,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

/// Configures and builds a [TraktClient].
#[derive(Debug, Clone)]
pub struct TraktClientBuilder {
    client_id: String,
    base_url: Cow<'static, str>,
    api_version: Cow<'static, str>,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl TraktClientBuilder {
    /// Start building a client with the given client ID, sent as the API key in every request.
    pub fn new<S>(client_id: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            client_id: client_id.into(),
            base_url: Cow::Borrowed(API_BASE_URL),
            api_version: Cow::Borrowed(API_VERSION),
            credentials: None,
        }
    }

    /// Send requests to Trakt's staging environment instead of production.
    pub fn staging(self) -> Self {
        Self {
            base_url: Cow::Borrowed(STAGING_API_BASE_URL),
            ..self
        }
    }

    /// Send requests to the given base URL. Endpoint paths are appended to the URL's path.
    pub fn base_url<S>(self, base_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            base_url: Cow::Owned(base_url.into()),
            ..self
        }
    }

    /// Set the API version sent in every request. Defaults to [API_VERSION].
    pub fn api_version<S>(self, api_version: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            api_version: Cow::Owned(api_version.into()),
            ..self
        }
    }

    /// Use the given provider for the access token of endpoints that require authorization.
    pub fn credentials<P>(self, provider: P) -> Self
    where
        P: CredentialProvider + 'static,
    {
        self.shared_credentials(Arc::new(provider))
    }

    /// Like [credentials](Self::credentials), for a provider that is shared with the rest of the application.
    pub fn shared_credentials(self, provider: Arc<dyn CredentialProvider>) -> Self {
        Self {
            credentials: Some(provider),
            ..self
        }
    }

    /// Use a fixed access token for the endpoints that require authorization.
    pub fn access_token<S>(self, token: S) -> Self
    where
        S: Into<String>,
    {
        self.credentials(AccessToken::new(token))
    }

    /// Build a client that sends its requests with the given transport.
    pub fn build_with_transport<T>(self, transport: T) -> Result<TraktClient<T>> {
        let base_url =
            Url::parse(&self.base_url).map_err(|_| InvalidRequest::InvalidBaseUrl(self.base_url.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(InvalidRequest::InvalidBaseUrl(self.base_url.to_string()).into());
        }

        let api_key =
            HeaderValue::from_str(&self.client_id).map_err(|_| InvalidRequest::InvalidHeaderValue(API_KEY_HEADER))?;
        let api_version = HeaderValue::from_str(&self.api_version)
            .map_err(|_| InvalidRequest::InvalidHeaderValue(API_VERSION_HEADER))?;

        debug!("Building Trakt client for {base_url}");

        Ok(TraktClient {
            inner: Arc::new(TraktClientRef {
                base_url,
                api_key,
                api_version,
                credentials: self.credentials,
            }),
            transport,
        })
    }

    /// Build a client that sends its requests asynchronously with a default [reqwest::Client].
    #[cfg(feature = "async")]
    pub fn build_async(self) -> Result<TraktClient<AsyncHttpClient>> {
        self.build_with_transport(AsyncHttpClient::new())
    }

    /// Build a client that sends its blocking requests with a default [reqwest::blocking::Client].
    ///
    /// This function panics if called within an async runtime, as creating a blocking reqwest client does.
    #[cfg(feature = "sync")]
    pub fn build_sync(self) -> Result<TraktClient<BlockingHttpClient>> {
        self.build_with_transport(BlockingHttpClient::new())
    }
}

impl<T> TraktClient<T> {
    /// The base URL endpoint paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The transport this client sends its requests with.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn access_token(&self) -> Result<String> {
        self.inner
            .credentials
            .as_ref()
            .and_then(|credentials| credentials.access_token())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                warn!("Endpoint requires authorization but no access token is available");
                InvalidRequest::MissingCredentials.into()
            })
    }
}

impl<T> crate::private::Sealed for TraktClient<T> {}

impl<T> private::BuildHttpRequest for TraktClient<T> {
    fn build_http_request(
        &self,
        method: Method,
        path: &RequestPath,
        query: &[(&'static str, Cow<'static, str>)],
        authorized: bool,
    ) -> Result<HttpRequest> {
        let mut url = self.inner.base_url.clone();
        path.apply_to(&mut url)?;

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_ref())));

            // list values are comma-joined and Trakt expects the commas as-is. a literal % is encoded as %25, so every
            // %2C in the form-encoded query is a comma
            let query = url.query().map(|query| query.replace("%2C", ","));
            url.set_query(query.as_deref());
        }

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, self.inner.api_key.clone());
        headers.insert(API_VERSION_HEADER, self.inner.api_version.clone());

        if authorized {
            let mut authorization = HeaderValue::from_str(&format!("Bearer {}", self.access_token()?))
                .map_err(|_| InvalidRequest::InvalidHeaderValue("Authorization"))?;
            authorization.set_sensitive(true);

            headers.insert(header::AUTHORIZATION, authorization);
        }

        // Trakt requires that all empty POST and PUT have a Content-Length header set to 0. no request has a body so
        // they're all empty
        if method == Method::POST || method == Method::PUT {
            headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("0"));
        }

        Ok(HttpRequest { method, url, headers })
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<T> private::SendHttpRequestAsync for TraktClient<T>
where
    T: AsyncTransport,
{
    async fn send_http_request_async(&self, request: HttpRequest) -> Result<HttpResponse> {
        Ok(self.transport.send(request).await?)
    }
}

#[cfg(feature = "sync")]
impl<T> private::SendHttpRequestSync for TraktClient<T>
where
    T: SyncTransport,
{
    fn send_http_request_sync(&self, request: HttpRequest) -> Result<HttpResponse> {
        Ok(self.transport.send(request)?)
    }
}

impl<T> ShowsClient for TraktClient<T> where T: Clone {}
impl<T> SeasonsClient for TraktClient<T> where T: Clone {}
impl<T> EpisodesClient for TraktClient<T> where T: Clone {}
impl<T> MoviesClient for TraktClient<T> where T: Clone {}
impl<T> UsersClient for TraktClient<T> where T: Clone {}
impl<T> SyncClient for TraktClient<T> where T: Clone {}
impl<T> CommentsClient for TraktClient<T> where T: Clone {}
impl<T> SearchClient for TraktClient<T> where T: Clone {}

fn show_path<'a, I>(show: I) -> RequestPath
where
    I: Into<ItemId<'a>>,
{
    RequestPath::new(SHOWS_ENDPOINT).segment(show.into().as_path_segment().into_owned())
}

fn season_path<'a, I>(show: I, season: u32) -> RequestPath
where
    I: Into<ItemId<'a>>,
{
    show_path(show).fixed("seasons").segment(season.to_string())
}

fn episode_path<'a, I>(show: I, season: u32, episode: u32) -> RequestPath
where
    I: Into<ItemId<'a>>,
{
    season_path(show, season).fixed("episodes").segment(episode.to_string())
}

fn movie_path<'a, I>(movie: I) -> RequestPath
where
    I: Into<ItemId<'a>>,
{
    RequestPath::new(MOVIES_ENDPOINT).segment(movie.into().as_path_segment().into_owned())
}

fn comment_path(comment: u64) -> RequestPath {
    RequestPath::new(COMMENTS_ENDPOINT).segment(comment.to_string())
}
