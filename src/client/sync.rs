use reqwest::Method;

use super::{
    path::RequestPath, SYNC_LAST_ACTIVITIES_ENDPOINT, SYNC_WATCHED_MOVIES_ENDPOINT, SYNC_WATCHED_SHOWS_ENDPOINT,
};
use crate::{
    client::request_builder::{BaseRequestBuilderContainer, ExtendedRequestBuilder, RequestBuilder},
    model::{
        activity::LastActivities,
        watched::{WatchedMovie, WatchedShow},
    },
};

/// Endpoints for syncing the authorized user's history. Every endpoint requires authorization. All Trakt clients
/// implement this trait.
pub trait SyncClient
where
    Self: Clone + Sized,
{
    /// Get when each kind of the user's data last changed. Compare these to locally cached values to find out what
    /// needs to be synced.
    fn last_activities(&self) -> RequestBuilder<Self, LastActivities> {
        RequestBuilder::new(Method::GET, RequestPath::new(SYNC_LAST_ACTIVITIES_ENDPOINT), self.clone()).authorized()
    }

    /// Get every show the user has watched, with the watched seasons and episodes. With
    /// [ExtendedInfo::NoSeasons](crate::extended::ExtendedInfo::NoSeasons), the seasons are left out.
    fn watched_shows(&self) -> ExtendedRequestBuilder<Self, Vec<WatchedShow>> {
        ExtendedRequestBuilder::new(Method::GET, RequestPath::new(SYNC_WATCHED_SHOWS_ENDPOINT), self.clone())
            .authorized()
    }

    /// Get every movie the user has watched.
    fn watched_movies(&self) -> ExtendedRequestBuilder<Self, Vec<WatchedMovie>> {
        ExtendedRequestBuilder::new(Method::GET, RequestPath::new(SYNC_WATCHED_MOVIES_ENDPOINT), self.clone())
            .authorized()
    }
}
