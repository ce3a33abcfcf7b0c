use reqwest::Method;

use super::{object, path::RequestPath, SEARCH_ENDPOINT};
use crate::{
    client::request_builder::{BaseRequestBuilderContainer, ExtendedPaginatedRequestBuilder},
    model::{
        id::LookupId,
        page::Page,
        search::{join_search_types, SearchResult, SearchType},
    },
};

/// Endpoints for searching. All Trakt clients implement this trait.
pub trait SearchClient
where
    Self: Clone + Sized,
{
    /// Look up items by an ID from Trakt or another catalog. Several items may share an ID, such as a show and a movie
    /// with the same TMDB ID; pass the wanted [SearchType]s to narrow the results down, or none to get every type.
    fn id_lookup<I>(
        &self,
        id: LookupId,
        types: I,
    ) -> ExtendedPaginatedRequestBuilder<Self, Vec<SearchResult>, Page<SearchResult>>
    where
        I: IntoIterator<Item = SearchType>,
    {
        let path = RequestPath::new(SEARCH_ENDPOINT)
            .fixed(id.id_type())
            .segment(id.value().into_owned());
        let builder = ExtendedPaginatedRequestBuilder::new(Method::GET, path, self.clone());

        let types = join_search_types(types);
        if types.is_empty() {
            builder
        } else {
            builder.append_query(object::SEARCH_TYPE_QUERY, types)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::request_builder::{
            tests::{client, FakeTransport},
            BaseRequestBuilder, WithPagination,
        },
        error::{Error, InvalidRequest},
    };

    #[test]
    fn lookup_by_imdb_id() {
        let request = client(FakeTransport::new(200, "[]"))
            .id_lookup(LookupId::Imdb("tt0848228".to_owned()), [SearchType::Movie])
            .to_http_request()
            .unwrap();

        assert_eq!(request.url.path(), "/search/imdb/tt0848228");
        assert_eq!(request.url.query(), Some("extended=min&type=movie"));
    }

    #[test]
    fn lookup_several_types() {
        let request = client(FakeTransport::new(200, "[]"))
            .id_lookup(LookupId::Tmdb(1399), [SearchType::Show, SearchType::Episode])
            .page(1)
            .to_http_request()
            .unwrap();

        assert_eq!(request.url.path(), "/search/tmdb/1399");
        assert_eq!(request.url.query(), Some("extended=min&type=show,episode&page=1"));
    }

    #[test]
    fn lookup_without_types() {
        let request = client(FakeTransport::new(200, "[]"))
            .id_lookup(LookupId::Trakt(1), Vec::new())
            .to_http_request()
            .unwrap();

        assert_eq!(request.url.as_str(), "https://api.trakt.tv/search/trakt/1?extended=min");
    }

    #[test]
    fn unsafe_imdb_id() {
        let result = client(FakeTransport::new(200, "[]"))
            .id_lookup(LookupId::Imdb("tt1/../x".to_owned()), Vec::new())
            .to_http_request();

        assert!(matches!(
            result,
            Err(Error::InvalidRequest(InvalidRequest::UnsafePathSegment(_)))
        ));
    }
}
