use reqwest::Method;

use super::show_path;
use crate::{
    client::request_builder::{
        BaseRequestBuilderContainer, ExtendedRequestBuilder, ProgressRequestBuilder, RequestBuilder,
    },
    model::{
        id::ItemId, progress::ShowWatchedProgress, rating::RatingDistribution, show::Show, stats::Stats,
    },
};

/// Endpoints for shows. All Trakt clients implement this trait.
pub trait ShowsClient
where
    Self: Clone + Sized,
{
    /// Get a single show.
    fn show_summary<'a, I>(&self, show: I) -> ExtendedRequestBuilder<Self, Show>
    where
        I: Into<ItemId<'a>>,
    {
        ExtendedRequestBuilder::new(Method::GET, show_path(show), self.clone())
    }

    /// Get the authorized user's watched progress for a show: the number of aired and watched episodes, per season and
    /// in total, and the next episode to watch.
    ///
    /// This endpoint requires authorization.
    fn show_watched_progress<'a, I>(&self, show: I) -> ProgressRequestBuilder<Self, ShowWatchedProgress>
    where
        I: Into<ItemId<'a>>,
    {
        ProgressRequestBuilder::new(Method::GET, show_path(show).fixed("progress/watched"), self.clone()).authorized()
    }

    /// Get a show's statistics.
    fn show_stats<'a, I>(&self, show: I) -> RequestBuilder<Self, Stats>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, show_path(show).fixed("stats"), self.clone())
    }

    /// Get a show's rating and the distribution of its votes.
    fn show_ratings<'a, I>(&self, show: I) -> RequestBuilder<Self, RatingDistribution>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, show_path(show).fixed("ratings"), self.clone())
    }
}
