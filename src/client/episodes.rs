use reqwest::Method;

use super::episode_path;
use crate::{
    client::request_builder::{
        BaseRequestBuilderContainer, ExtendedRequestBuilder, ListsRequestBuilder, PaginatedRequestBuilder,
        RequestBuilder,
    },
    model::{
        comment::Comment,
        episode::{Episode, EpisodeTranslation},
        id::ItemId,
        list::TraktList,
        page::Page,
        people::CastAndCrew,
        rating::RatingDistribution,
        stats::Stats,
        user::User,
    },
};

/// Endpoints for single episodes of a show. None of them require authorization. All Trakt clients implement this
/// trait.
///
/// Episodes are referred to by their show (see [ItemId]), their season number and their episode number within the
/// season.
pub trait EpisodesClient
where
    Self: Clone + Sized,
{
    /// Get a single episode.
    fn episode_summary<'a, I>(&self, show: I, season: u32, episode: u32) -> ExtendedRequestBuilder<Self, Episode>
    where
        I: Into<ItemId<'a>>,
    {
        ExtendedRequestBuilder::new(Method::GET, episode_path(show, season, episode), self.clone())
    }

    /// Get the translations of an episode's title and overview. Without a language, all translations are returned.
    ///
    /// The language is a two-letter language code.
    fn episode_translations<'a, I>(
        &self,
        show: I,
        season: u32,
        episode: u32,
        language: Option<&str>,
    ) -> RequestBuilder<Self, Vec<EpisodeTranslation>>
    where
        I: Into<ItemId<'a>>,
    {
        let mut path = episode_path(show, season, episode).fixed("translations");
        if let Some(language) = language {
            path = path.segment(language.to_owned());
        }

        RequestBuilder::new(Method::GET, path, self.clone())
    }

    /// Get the top level comments of an episode, most recent first.
    fn episode_comments<'a, I>(
        &self,
        show: I,
        season: u32,
        episode: u32,
    ) -> PaginatedRequestBuilder<Self, Vec<Comment>, Page<Comment>>
    where
        I: Into<ItemId<'a>>,
    {
        PaginatedRequestBuilder::new(
            Method::GET,
            episode_path(show, season, episode).fixed("comments"),
            self.clone(),
        )
    }

    /// Get the lists that contain an episode. Without a list type, Trakt returns personal lists sorted by popularity.
    fn lists_containing_episode<'a, I>(
        &self,
        show: I,
        season: u32,
        episode: u32,
    ) -> ListsRequestBuilder<Self, Vec<TraktList>, Page<TraktList>>
    where
        I: Into<ItemId<'a>>,
    {
        ListsRequestBuilder::new(Method::GET, episode_path(show, season, episode).fixed("lists"), self.clone())
    }

    /// Get an episode's rating and the distribution of its votes.
    fn episode_ratings<'a, I>(&self, show: I, season: u32, episode: u32) -> RequestBuilder<Self, RatingDistribution>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, episode_path(show, season, episode).fixed("ratings"), self.clone())
    }

    /// Get an episode's statistics.
    fn episode_stats<'a, I>(&self, show: I, season: u32, episode: u32) -> RequestBuilder<Self, Stats>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, episode_path(show, season, episode).fixed("stats"), self.clone())
    }

    /// Get the users watching an episode right now.
    fn episode_watching<'a, I>(&self, show: I, season: u32, episode: u32) -> RequestBuilder<Self, Vec<User>>
    where
        I: Into<ItemId<'a>>,
    {
        RequestBuilder::new(Method::GET, episode_path(show, season, episode).fixed("watching"), self.clone())
    }

    /// Get the cast and crew of an episode. Guest stars are included with
    /// [ExtendedInfo::GuestStars](crate::extended::ExtendedInfo::GuestStars).
    fn episode_people<'a, I>(&self, show: I, season: u32, episode: u32) -> ExtendedRequestBuilder<Self, CastAndCrew>
    where
        I: Into<ItemId<'a>>,
    {
        ExtendedRequestBuilder::new(Method::GET, episode_path(show, season, episode).fixed("people"), self.clone())
    }
}
