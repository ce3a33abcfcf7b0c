use reqwest::Method;

use crate::{
    client::{
        path::RequestPath,
        request_builder::{wrap_request_builder, BaseRequestBuilderContainer, RequestBuilder, WithPagination},
    },
    model::list::{ListSortType, ListType},
};

/// A builder type for requests to endpoints that support pagination.
pub struct PaginatedRequestBuilder<TClient, TResponse, TReturn = TResponse>(RequestBuilder<TClient, TResponse, TReturn>);

/// A builder type for the lists containing an item. The lists may be filtered by their type and sorted; both are
/// sent as path segments after the endpoint.
pub struct ListsRequestBuilder<TClient, TResponse, TReturn = TResponse> {
    builder: RequestBuilder<TClient, TResponse, TReturn>,
    lists_path: RequestPath,
    list_type: Option<ListType>,
    sort: Option<ListSortType>,
}

wrap_request_builder!(PaginatedRequestBuilder);

impl<TClient, TResponse, TReturn> WithPagination<TClient, TResponse, TReturn>
    for PaginatedRequestBuilder<TClient, TResponse, TReturn>
{
}

impl<TClient, TResponse, TReturn> BaseRequestBuilderContainer<TClient, TResponse, TReturn>
    for ListsRequestBuilder<TClient, TResponse, TReturn>
{
    fn new(method: Method, path: RequestPath, client: TClient) -> Self {
        Self {
            builder: RequestBuilder::new(method, path.clone(), client),
            lists_path: path,
            list_type: None,
            sort: None,
        }
    }

    fn take_base_builder(self) -> RequestBuilder<TClient, TResponse, TReturn> {
        self.builder
    }

    fn get_base_builder(&self) -> &RequestBuilder<TClient, TResponse, TReturn> {
        &self.builder
    }

    fn get_base_builder_mut(&mut self) -> &mut RequestBuilder<TClient, TResponse, TReturn> {
        &mut self.builder
    }
}

impl<TClient, TResponse, TReturn> WithPagination<TClient, TResponse, TReturn>
    for ListsRequestBuilder<TClient, TResponse, TReturn>
{
}

impl<TClient, TResponse, TReturn> ListsRequestBuilder<TClient, TResponse, TReturn> {
    /// Only return lists of the given type.
    pub fn list_type(mut self, list_type: ListType) -> Self {
        self.list_type = Some(list_type);
        self.update_path();
        self
    }

    /// Sort the lists. The sort is a path segment after the type, so it only applies together with
    /// [list_type](Self::list_type); without a type, Trakt's default order is used.
    pub fn sort_by(mut self, sort: ListSortType) -> Self {
        self.sort = Some(sort);
        self.update_path();
        self
    }

    fn update_path(&mut self) {
        let mut path = self.lists_path.clone();

        if let Some(list_type) = self.list_type {
            path.push_fixed(list_type.as_str());

            if let Some(sort) = self.sort {
                path.push_fixed(sort.as_str());
            }
        }

        self.builder.set_path(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::{
            request_builder::{
                tests::{client, FakeTransport},
                BaseRequestBuilder,
            },
            TraktClient,
        },
        model::{list::TraktList, page::Page, Pagination},
    };

    type Builder = ListsRequestBuilder<TraktClient<FakeTransport>, Vec<TraktList>, Page<TraktList>>;

    fn lists() -> Builder {
        let path = RequestPath::new("shows").segment("1").fixed("seasons").segment("1").fixed("lists");
        Builder::new(Method::GET, path, client(FakeTransport::new(200, "[]")))
    }

    fn url(builder: &Builder) -> String {
        builder.to_http_request().unwrap().url.to_string()
    }

    #[test]
    fn no_filters() {
        assert_eq!(url(&lists()), "https://api.trakt.tv/shows/1/seasons/1/lists");
    }

    #[test]
    fn type_only() {
        assert_eq!(
            url(&lists().list_type(ListType::Official)),
            "https://api.trakt.tv/shows/1/seasons/1/lists/official"
        );
    }

    #[test]
    fn type_and_sort() {
        let builder = lists().sort_by(ListSortType::Likes).list_type(ListType::All);
        assert_eq!(url(&builder), "https://api.trakt.tv/shows/1/seasons/1/lists/all/likes");
    }

    #[test]
    fn sort_without_type_is_not_sent() {
        assert_eq!(
            url(&lists().sort_by(ListSortType::Comments)),
            "https://api.trakt.tv/shows/1/seasons/1/lists"
        );
    }

    #[test]
    fn sort_applies_once_a_type_is_chosen() {
        let builder = lists().sort_by(ListSortType::Comments).list_type(ListType::Personal);
        assert_eq!(url(&builder), "https://api.trakt.tv/shows/1/seasons/1/lists/personal/comments");
    }

    #[test]
    fn pagination_is_exact() {
        let builder = lists().pagination(Pagination::new(2, 10));
        let request = builder.to_http_request().unwrap();

        assert_eq!(request.url.query(), Some("page=2&limit=10"));
    }

    #[test]
    fn later_page_call_replaces_earlier() {
        let builder = lists().page(1).limit(5).page(3);
        let request = builder.to_http_request().unwrap();

        assert_eq!(request.url.query(), Some("page=3&limit=5"));
    }
}
