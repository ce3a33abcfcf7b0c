use reqwest::Method;

use super::{season_path, show_path};
use crate::{
    client::request_builder::{
        BaseRequestBuilderContainer, EpisodesRequestBuilder, ExtendedRequestBuilder, ListsRequestBuilder,
        PaginatedRequestBuilder, RequestBuilder,
    },
    model::{
        comment::Comment, episode::Episode, id::ItemId, list::TraktList, page::Page, people::CastAndCrew,
        rating::RatingDistribution, season::Season, stats::Stats, user::User,
    },
};

/// Endpoints for the seasons of a show. None of them require authorization. All Trakt clients implement this trait.
///
/// Shows are referred to by their Trakt ID, slug or IMDB ID; see [ItemId]. Seasons are referred to by their number;
/// specials are season 0.
pub trait SeasonsClient
where
    Self: Clone + Sized,
{
    /// Get all seasons of a show, including specials. With [ExtendedInfo::Episodes](crate::extended::ExtendedInfo),
    /// each season includes its episodes.
    fn seasons<'a, I>(&self, show: I) -> ExtendedRequestBuilder<Self, Vec<Season>>
    where
        I: Into<ItemId<'a>>,
    {
        ExtendedRequestBuilder::new(Method::GET, show_path(show).fixed("seasons"), self.clone())
    }

    /// Get all episodes of a season. The episodes' translations may be included with
    /// [translations](EpisodesRequestBuilder::translations).
    fn season_episodes<'a, I>(&self, show: I, season: u32) -> EpisodesRequestBuilder<Self, Vec<Episode>>
    where
        I: Into<ItemId<'a>>,
    {
        EpisodesRequestBuilder::new(Method::GET, season_path(show, season), self.clone())
    }

    /// Get the top level comments of a season, most recent first.
    fn season_comments<'a, I>(&self, show: I, season: u32) -> PaginatedRequestBuilder<Self, Vec<Comment>, Page<Comment>>
    where
        I: Into<ItemId<'a>>,
    {
        PaginatedRequestBuilder::new(Method::GET, season_path(show, season).fixed("comments"), self.clone())
    }

    /// Get the lists that contain a season. Without a list type, Trakt returns personal lists sorted by popularity.
    fn lists_containing_season<'a, I>(
        &self,
        show: I,
        season: u32,
    ) -> ListsRequestBuilder<Self, Vec<TraktList>, Page<TraktList>>
    where
        I: Into<ItemId<'a>>,
    {
        ListsRequestBuilder::new(Method::GET, season_path(show, season).fixed("lists"), self.clone())
    }

    /// Get a season's rating and the distribution of its votes.
    fn season_ratings<'a, I>(&self, show: I, season: u32) -> RequestBuilder<Self, RatingDistribution>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, season_path(show, season).fixed("ratings"), self.clone())
    }

    /// Get a season's statistics.
    fn season_stats<'a, I>(&self, show: I, season: u32) -> RequestBuilder<Self, Stats>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, season_path(show, season).fixed("stats"), self.clone())
    }

    /// Get the users watching a season right now.
    fn season_watching<'a, I>(&self, show: I, season: u32) -> RequestBuilder<Self, Vec<User>>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, season_path(show, season).fixed("watching"), self.clone())
    }

    /// Get the cast and crew of a season. Guest stars are included with
    /// [ExtendedInfo::GuestStars](crate::extended::ExtendedInfo::GuestStars).
    fn season_people<'a, I>(&self, show: I, season: u32) -> ExtendedRequestBuilder<Self, CastAndCrew>
    where
        I: Into<ItemId<'a>>,
    {
        ExtendedRequestBuilder::new(Method::GET, season_path(show, season).fixed("people"), self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::{
            request_builder::{
                tests::{client, FakeTransport},
                BaseRequestBuilder, WithExtendedInfo, WithPagination,
            },
            TraktClient,
        },
        extended::ExtendedInfo,
        model::{
            list::{ListSortType, ListType},
            Pagination,
        },
    };

    fn trakt() -> TraktClient<FakeTransport> {
        client(FakeTransport::new(200, "[]"))
    }

    #[test]
    fn seasons_with_episodes() {
        let request = trakt()
            .seasons("game-of-thrones")
            .extended([ExtendedInfo::Full, ExtendedInfo::Episodes])
            .to_http_request()
            .unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.path(), "/shows/game-of-thrones/seasons");
        assert_eq!(request.url.query(), Some("extended=full,episodes"));
    }

    #[test]
    fn season_episodes_with_translations() {
        let request = trakt()
            .season_episodes(1390u64, 0)
            .translations("es")
            .to_http_request()
            .unwrap();

        assert_eq!(request.url.path(), "/shows/1390/seasons/0");
        assert_eq!(request.url.query(), Some("extended=min&translations=es"));
    }

    #[test]
    fn season_comments_page() {
        let request = trakt()
            .season_comments("game-of-thrones", 1)
            .pagination(Pagination::new(2, 10))
            .to_http_request()
            .unwrap();

        assert_eq!(request.url.path(), "/shows/game-of-thrones/seasons/1/comments");
        assert_eq!(request.url.query(), Some("page=2&limit=10"));
    }

    #[test]
    fn sorted_lists_containing_season() {
        let request = trakt()
            .lists_containing_season("game-of-thrones", 1)
            .list_type(ListType::Personal)
            .sort_by(ListSortType::Added)
            .to_http_request()
            .unwrap();

        assert_eq!(request.url.path(), "/shows/game-of-thrones/seasons/1/lists/personal/added");
    }

    #[test]
    fn season_subresources() {
        let client = trakt();

        assert_eq!(client.season_ratings("x", 1).to_http_request().unwrap().url.path(), "/shows/x/seasons/1/ratings");
        assert_eq!(client.season_stats("x", 1).to_http_request().unwrap().url.path(), "/shows/x/seasons/1/stats");
        assert_eq!(client.season_watching("x", 1).to_http_request().unwrap().url.path(), "/shows/x/seasons/1/watching");
        assert_eq!(
            client
                .season_people("x", 1)
                .extended([ExtendedInfo::GuestStars])
                .to_http_request()
                .unwrap()
                .url
                .as_str(),
            "https://api.trakt.tv/shows/x/seasons/1/people?extended=guest_stars"
        );
    }

    #[test]
    fn unsafe_show_reference() {
        let result = trakt().seasons("../users").to_http_request();
        assert!(result.is_err());
    }
}
