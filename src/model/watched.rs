//! Watch history: shows and movies a user has watched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{movie::Movie, show::Show, Identifiable};

/// A show the user has started watching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedShow {
    /// The total number of plays of episodes of this show.
    pub plays: u64,
    /// The last time the user watched the show. The user may set a custom date in the past, so this can't be used for
    /// syncing.
    pub last_watched_at: Option<DateTime<Utc>>,
    /// The last time the show was updated. Use this to determine if a full sync of the show is needed.
    pub last_updated_at: Option<DateTime<Utc>>,
    /// When the show's progress was last reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_at: Option<DateTime<Utc>>,
    pub show: Show,
    /// Absent when requested with [ExtendedInfo::NoSeasons](crate::extended::ExtendedInfo::NoSeasons).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<WatchedSeason>>,
}

/// A season of a [WatchedShow].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedSeason {
    pub number: u32,
    pub episodes: Vec<WatchedEpisode>,
}

/// An episode of a [WatchedSeason].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedEpisode {
    pub number: u32,
    pub plays: u64,
    pub last_watched_at: Option<DateTime<Utc>>,
}

/// A movie the user has watched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    pub plays: u64,
    pub last_watched_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
    pub movie: Movie,
}

impl WatchedShow {
    pub fn new(
        plays: u64,
        last_watched_at: Option<DateTime<Utc>>,
        last_updated_at: Option<DateTime<Utc>>,
        show: Show,
        seasons: Option<Vec<WatchedSeason>>,
    ) -> Self {
        Self {
            plays,
            last_watched_at,
            last_updated_at,
            reset_at: None,
            show,
            seasons,
        }
    }
}

impl Identifiable for WatchedShow {
    fn id(&self) -> u64 {
        self.show.id()
    }
}

impl Identifiable for WatchedSeason {
    fn id(&self) -> u64 {
        self.number.into()
    }
}

impl Identifiable for WatchedEpisode {
    fn id(&self) -> u64 {
        self.number.into()
    }
}

impl Identifiable for WatchedMovie {
    fn id(&self) -> u64 {
        self.movie.id()
    }
}
