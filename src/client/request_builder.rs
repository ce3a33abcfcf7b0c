mod extended_builder;
mod paginated_builder;
mod progress_builder;

mod private {
    use std::borrow::Cow;

    use reqwest::{header::HeaderMap, Method};
    use serde::de::DeserializeOwned;

    use super::RequestBuilder;
    use crate::{
        client::path::RequestPath,
        error::{Error, Result},
        model::page::Page,
    };

    pub trait BaseRequestBuilderContainer<TClient, TResponse, TReturn = TResponse>
    where
        Self: Sized,
    {
        fn new(method: Method, path: RequestPath, client: TClient) -> Self;

        fn take_base_builder(self) -> RequestBuilder<TClient, TResponse, TReturn>;
        fn get_base_builder(&self) -> &RequestBuilder<TClient, TResponse, TReturn>;
        fn get_base_builder_mut(&mut self) -> &mut RequestBuilder<TClient, TResponse, TReturn>;

        fn append_query<S>(mut self, key: &'static str, value: S) -> Self
        where
            S: Into<Cow<'static, str>>,
        {
            self.get_base_builder_mut().query_params.push((key, value.into()));
            self
        }

        /// Like [append_query](Self::append_query) but replaces any earlier value for the key, keeping its position.
        fn set_query<S>(mut self, key: &'static str, value: S) -> Self
        where
            S: Into<Cow<'static, str>>,
        {
            let value = value.into();
            let query_params = &mut self.get_base_builder_mut().query_params;

            match query_params.iter_mut().find(|(k, _)| *k == key) {
                Some((_, existing)) => *existing = value,
                None => query_params.push((key, value)),
            }

            self
        }

        fn authorized(mut self) -> Self {
            self.get_base_builder_mut().authorized = true;
            self
        }
    }

    /// Types a successful response body decodes into. Empty responses (204 or no body) become the type's empty value,
    /// or fail with [Error::EmptyResponse] for types that don't have one.
    // a blanket implementation over DeserializeOwned would need specialisation to override the empty value for (),
    // Vec and Option, so every other type implements this explicitly
    pub trait ResponseBody
    where
        Self: DeserializeOwned,
    {
        fn from_empty() -> Result<Self> {
            Err(Error::EmptyResponse)
        }
    }

    impl ResponseBody for () {
        fn from_empty() -> Result<Self> {
            Ok(())
        }
    }

    impl<T> ResponseBody for Vec<T>
    where
        T: DeserializeOwned,
    {
        fn from_empty() -> Result<Self> {
            Ok(Vec::new())
        }
    }

    impl<T> ResponseBody for Option<T>
    where
        T: DeserializeOwned,
    {
        fn from_empty() -> Result<Self> {
            Ok(None)
        }
    }

    impl ResponseBody for serde_json::Value {
        fn from_empty() -> Result<Self> {
            Ok(serde_json::Value::Null)
        }
    }

    /// Conversion from a decoded response body into what a request builder returns. Most builders return the body
    /// itself; paginated builders combine the body with the response's pagination headers.
    pub trait FromResponse<TResponse>
    where
        Self: Sized,
    {
        fn from_response(response: TResponse, headers: &HeaderMap) -> Self;
    }

    impl<T> FromResponse<T> for T
    where
        T: ResponseBody,
    {
        fn from_response(response: T, _headers: &HeaderMap) -> Self {
            response
        }
    }

    impl<T> FromResponse<Vec<T>> for Page<T>
    where
        T: DeserializeOwned,
    {
        fn from_response(response: Vec<T>, headers: &HeaderMap) -> Self {
            Page::from_headers(response, headers)
        }
    }
}

use std::{borrow::Cow, fmt::Debug, marker::PhantomData};
#[cfg(feature = "async")]
use std::future::Future;

use log::{debug, error, trace, warn};
use reqwest::Method;

pub use self::{
    extended_builder::{EpisodesRequestBuilder, ExtendedPaginatedRequestBuilder, ExtendedRequestBuilder},
    paginated_builder::{ListsRequestBuilder, PaginatedRequestBuilder},
    progress_builder::ProgressRequestBuilder,
};
pub(crate) use self::private::{BaseRequestBuilderContainer, FromResponse, ResponseBody};
#[cfg(feature = "async")]
use crate::client::private::SendHttpRequestAsync;
#[cfg(feature = "sync")]
use crate::client::private::SendHttpRequestSync;
use crate::{
    client::{
        object,
        path::RequestPath,
        private::BuildHttpRequest,
        transport::{HttpRequest, HttpResponse},
    },
    error::{Error, Result},
    extended::{ExtendedInfo, ToExtendedString},
    model::Pagination,
    status,
};

/// Options available in each request builder.
pub trait BaseRequestBuilder<TClient, TResponse, TReturn>
where
    Self: private::BaseRequestBuilderContainer<TClient, TResponse, TReturn> + Sized,
{
    /// Build the HTTP request this builder would send, without sending it. Fails the same way sending would before
    /// anything is sent: with [Error::InvalidRequest].
    fn to_http_request(&self) -> Result<HttpRequest>
    where
        TClient: BuildHttpRequest,
    {
        self.get_base_builder().build_http_request()
    }
}

/// Request builders for endpoints that support [extended info](crate::extended::ExtendedInfo). Without calling
/// [extended](Self::extended), the request asks for the minimal level.
pub trait WithExtendedInfo<TClient, TResponse, TReturn>
where
    Self: BaseRequestBuilder<TClient, TResponse, TReturn>,
{
    /// Request the given levels of extended info. The levels are sent in the given order and replace any earlier
    /// call's levels. An empty set of levels asks for the minimal level.
    fn extended<I>(self, info: I) -> Self
    where
        I: IntoIterator<Item = ExtendedInfo>,
    {
        let extended = info.to_extended_string();

        if extended.is_empty() {
            self.set_query(object::EXTENDED_QUERY, ExtendedInfo::Min.as_str())
        } else {
            self.set_query(object::EXTENDED_QUERY, extended)
        }
    }
}

/// Request builders for endpoints that support pagination. Without calling any of the functions, Trakt decides the
/// page and its size.
pub trait WithPagination<TClient, TResponse, TReturn>
where
    Self: BaseRequestBuilder<TClient, TResponse, TReturn>,
{
    /// Request the given page with the given page size.
    fn pagination(self, pagination: Pagination) -> Self {
        self.page(pagination.page).limit(pagination.limit)
    }

    /// Request the given page, starting from 1.
    fn page(self, page: u32) -> Self {
        self.set_query(object::PAGE_QUERY, page.to_string())
    }

    /// Request pages of the given size.
    fn limit(self, limit: u32) -> Self {
        self.set_query(object::LIMIT_QUERY, limit.to_string())
    }
}

/// Turn a response into the builder's return value, or into an error for non-successful statuses.
fn handle_response<TResponse, TReturn>(response: HttpResponse) -> Result<TReturn>
where
    TResponse: ResponseBody + Debug,
    TReturn: FromResponse<TResponse>,
{
    let code = response.status.as_u16();

    if !response.status.is_success() {
        match code {
            status::UNAUTHORIZED => warn!("Got 401 Unauthorized response"),
            status::FORBIDDEN => error!("Got 403 Forbidden response, is the API key valid?"),
            status::RATE_LIMIT_EXCEEDED => warn!("Got 429 response"),
            code if code >= status::SERVER_ERROR => error!("Got {code} response from Trakt"),
            code => warn!("Got {code} response"),
        }

        trace!("Error response body: {}", String::from_utf8_lossy(&response.body));

        return Err(Error::Server {
            status: code,
            message: status::message_for(code),
        });
    }

    let body = if response.is_empty() {
        debug!("Got empty {code} response");
        TResponse::from_empty()?
    } else {
        let deserializer = &mut serde_json::Deserializer::from_slice(&response.body);
        serde_path_to_error::deserialize(deserializer)
            .inspect_err(|err| warn!("Failed to decode response body at {}", err.path()))?
    };

    trace!("Body: {body:?}");
    Ok(TReturn::from_response(body, &response.headers))
}

/// Asynchronous request builder functionality, namely sending the request and processing its response asynchronously.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncRequestBuilder<TClient, TResponse, TReturn>
where
    Self: BaseRequestBuilder<TClient, TResponse, TReturn>,
    TResponse: ResponseBody + Debug + Send,
    TReturn: FromResponse<TResponse> + Send,
    TClient: SendHttpRequestAsync + Send + Sync,
{
    async fn send_async(self) -> Result<TReturn> {
        let common = self.take_base_builder();
        let request = common.build_http_request()?;
        debug!("Sending {} {}", request.method, request.url);

        let response = common.client.send_http_request_async(request).await?;
        handle_response(response)
    }

    /// Send the request, unless the given future completes first. In that case the request is dropped and this
    /// resolves to [Error::Cancelled].
    async fn send_async_or_cancel<F>(self, cancel: F) -> Result<TReturn>
    where
        F: Future<Output = ()> + Send,
    {
        tokio::select! {
            result = self.send_async() => result,
            _ = cancel => {
                debug!("Request cancelled before a response was received");
                Err(Error::Cancelled)
            }
        }
    }
}

/// Synchronous request builder functionality, namely sending the request and processing its response synchronously.
#[cfg(feature = "sync")]
pub trait SyncRequestBuilder<TClient, TResponse, TReturn>
where
    Self: BaseRequestBuilder<TClient, TResponse, TReturn>,
    TResponse: ResponseBody + Debug,
    TReturn: FromResponse<TResponse>,
    TClient: SendHttpRequestSync,
{
    fn send_sync(self) -> Result<TReturn> {
        let common = self.take_base_builder();
        let request = common.build_http_request()?;
        debug!("Sending {} {}", request.method, request.url);

        let response = common.client.send_http_request_sync(request)?;
        handle_response(response)
    }
}

/// A "base" request builder that doesn't include any special functionality. The commonly available options are
/// available in the [BaseRequestBuilder]-trait.
pub struct RequestBuilder<TClient, TResponse, TReturn = TResponse> {
    client: TClient,
    method: Method,
    path: RequestPath,
    query_params: Vec<(&'static str, Cow<'static, str>)>,
    authorized: bool,

    return_phantom: PhantomData<TReturn>,
    response_phantom: PhantomData<TResponse>,
}

impl<TClient, TResponse, TReturn> RequestBuilder<TClient, TResponse, TReturn> {
    pub(crate) fn set_path(&mut self, path: RequestPath) {
        self.path = path;
    }

    fn build_http_request(&self) -> Result<HttpRequest>
    where
        TClient: BuildHttpRequest,
    {
        self.client
            .build_http_request(self.method.clone(), &self.path, &self.query_params, self.authorized)
    }
}

impl<TClient, TResponse, TReturn> private::BaseRequestBuilderContainer<TClient, TResponse, TReturn>
    for RequestBuilder<TClient, TResponse, TReturn>
{
    fn new(method: Method, path: RequestPath, client: TClient) -> Self {
        Self {
            client,
            method,
            path,
            query_params: Vec::new(),
            authorized: false,

            return_phantom: PhantomData,
            response_phantom: PhantomData,
        }
    }

    fn take_base_builder(self) -> RequestBuilder<TClient, TResponse, TReturn> {
        self
    }

    fn get_base_builder(&self) -> &RequestBuilder<TClient, TResponse, TReturn> {
        self
    }

    fn get_base_builder_mut(&mut self) -> &mut RequestBuilder<TClient, TResponse, TReturn> {
        self
    }
}

impl<TBuilder, TClient, TResponse, TReturn> BaseRequestBuilder<TClient, TResponse, TReturn> for TBuilder where
    TBuilder: BaseRequestBuilderContainer<TClient, TResponse, TReturn>
{
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<TBuilder, TClient, TResponse, TReturn> AsyncRequestBuilder<TClient, TResponse, TReturn> for TBuilder
where
    TBuilder: BaseRequestBuilder<TClient, TResponse, TReturn>,
    TResponse: ResponseBody + Debug + Send,
    TReturn: FromResponse<TResponse> + Send,
    TClient: SendHttpRequestAsync + Send + Sync,
{
}

#[cfg(feature = "sync")]
impl<TBuilder, TClient, TResponse, TReturn> SyncRequestBuilder<TClient, TResponse, TReturn> for TBuilder
where
    TBuilder: BaseRequestBuilder<TClient, TResponse, TReturn>,
    TResponse: ResponseBody + Debug,
    TReturn: FromResponse<TResponse>,
    TClient: SendHttpRequestSync,
{
}

/// Implements the base request builder container for a newtype wrapper over [RequestBuilder]. The optional block is
/// run on every newly created wrapper to set its default query parameters.
macro_rules! wrap_request_builder {
    ($name:ident) => {
        $crate::client::request_builder::wrap_request_builder!($name, |builder| builder);
    };

    ($name:ident, |$builder:ident| $defaults:expr) => {
        impl<TClient, TResponse, TReturn> $crate::client::request_builder::BaseRequestBuilderContainer<TClient, TResponse, TReturn>
            for $name<TClient, TResponse, TReturn>
        {
            fn new(method: ::reqwest::Method, path: $crate::client::path::RequestPath, client: TClient) -> Self {
                let $builder = Self(<$crate::client::request_builder::RequestBuilder<TClient, TResponse, TReturn> as
                    $crate::client::request_builder::BaseRequestBuilderContainer<TClient, TResponse, TReturn>>::new(
                    method, path, client,
                ));
                $defaults
            }

            fn take_base_builder(self) -> $crate::client::request_builder::RequestBuilder<TClient, TResponse, TReturn> {
                self.0
            }

            fn get_base_builder(&self) -> &$crate::client::request_builder::RequestBuilder<TClient, TResponse, TReturn> {
                &self.0
            }

            fn get_base_builder_mut(
                &mut self,
            ) -> &mut $crate::client::request_builder::RequestBuilder<TClient, TResponse, TReturn> {
                &mut self.0
            }
        }
    };
}

pub(crate) use wrap_request_builder;
