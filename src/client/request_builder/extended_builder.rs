use crate::client::{
    object,
    request_builder::{wrap_request_builder, BaseRequestBuilderContainer, RequestBuilder, WithExtendedInfo, WithPagination},
};

/// A builder type for requests to endpoints that support extended info.
pub struct ExtendedRequestBuilder<TClient, TResponse, TReturn = TResponse>(RequestBuilder<TClient, TResponse, TReturn>);

/// A builder type for requests to endpoints that support both extended info and pagination.
pub struct ExtendedPaginatedRequestBuilder<TClient, TResponse, TReturn = TResponse>(
    RequestBuilder<TClient, TResponse, TReturn>,
);

/// A builder type for the episodes of a season. Besides extended info, it may ask for the episodes' translations.
pub struct EpisodesRequestBuilder<TClient, TResponse, TReturn = TResponse>(RequestBuilder<TClient, TResponse, TReturn>);

wrap_request_builder!(ExtendedRequestBuilder, |builder| builder.set_query(object::EXTENDED_QUERY, "min"));
wrap_request_builder!(ExtendedPaginatedRequestBuilder, |builder| builder
    .set_query(object::EXTENDED_QUERY, "min"));
wrap_request_builder!(EpisodesRequestBuilder, |builder| builder.set_query(object::EXTENDED_QUERY, "min"));

impl<TClient, TResponse, TReturn> WithExtendedInfo<TClient, TResponse, TReturn>
    for ExtendedRequestBuilder<TClient, TResponse, TReturn>
{
}

impl<TClient, TResponse, TReturn> WithExtendedInfo<TClient, TResponse, TReturn>
    for ExtendedPaginatedRequestBuilder<TClient, TResponse, TReturn>
{
}

impl<TClient, TResponse, TReturn> WithPagination<TClient, TResponse, TReturn>
    for ExtendedPaginatedRequestBuilder<TClient, TResponse, TReturn>
{
}

impl<TClient, TResponse, TReturn> WithExtendedInfo<TClient, TResponse, TReturn>
    for EpisodesRequestBuilder<TClient, TResponse, TReturn>
{
}

impl<TClient, TResponse, TReturn> EpisodesRequestBuilder<TClient, TResponse, TReturn> {
    /// Include the episodes' translations in the given language, as a two-letter language code. `"all"` includes every
    /// available translation.
    pub fn translations<S>(self, language: S) -> Self
    where
        S: Into<String>,
    {
        self.set_query(object::TRANSLATIONS_QUERY, language.into())
    }
}
