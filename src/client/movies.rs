use reqwest::Method;

use super::movie_path;
use crate::{
    client::request_builder::{BaseRequestBuilderContainer, ExtendedRequestBuilder, RequestBuilder},
    model::{id::ItemId, movie::Movie, rating::RatingDistribution, stats::Stats},
};

/// Endpoints for movies. All Trakt clients implement this trait.
pub trait MoviesClient
where
    Self: Clone + Sized,
{
    /// Get a single movie. With [ExtendedInfo::Full](crate::extended::ExtendedInfo::Full), the movie includes its
    /// release date, runtime and overview.
    fn movie_summary<'a, I>(&self, movie: I) -> ExtendedRequestBuilder<Self, Movie>
    where
        I: Into<ItemId<'a>>,
    {
        ExtendedRequestBuilder::new(Method::GET, movie_path(movie), self.clone())
    }

    /// Get a movie's statistics.
    fn movie_stats<'a, I>(&self, movie: I) -> RequestBuilder<Self, Stats>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, movie_path(movie).fixed("stats"), self.clone())
    }

    /// Get a movie's rating and the distribution of its votes.
    fn movie_ratings<'a, I>(&self, movie: I) -> RequestBuilder<Self, RatingDistribution>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, movie_path(movie).fixed("ratings"), self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::request_builder::{
            tests::{client, FakeTransport},
            BaseRequestBuilder, WithExtendedInfo,
        },
        extended::ExtendedInfo,
    };

    #[test]
    fn movie_paths() {
        let client = client(FakeTransport::new(200, "{}"));

        let summary = client
            .movie_summary("tron-legacy-2010")
            .extended([ExtendedInfo::Full, ExtendedInfo::Metadata])
            .to_http_request()
            .unwrap();
        assert_eq!(
            summary.url.as_str(),
            "https://api.trakt.tv/movies/tron-legacy-2010?extended=full,metadata"
        );

        assert_eq!(client.movie_stats(12601u64).to_http_request().unwrap().url.path(), "/movies/12601/stats");
        assert_eq!(client.movie_ratings(12601u64).to_http_request().unwrap().url.path(), "/movies/12601/ratings");
    }
}
