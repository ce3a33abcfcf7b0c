//! A user's watched progress of a show.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::episode::Episode;

/// Watched progress of a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowWatchedProgress {
    /// Number of episodes that have aired.
    pub aired: u32,
    /// Number of episodes that have been watched.
    pub completed: u32,
    pub last_watched_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_at: Option<DateTime<Utc>>,
    pub seasons: Vec<SeasonWatchedProgress>,
    pub next_episode: Option<Episode>,
}

/// Watched progress of a season in a [ShowWatchedProgress].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWatchedProgress {
    pub number: u32,
    pub aired: u32,
    pub completed: u32,
    pub title: Option<String>,
    pub episodes: Vec<EpisodeWatchedProgress>,
}

/// Watched progress of an episode in a [SeasonWatchedProgress].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeWatchedProgress {
    pub number: u32,
    pub completed: bool,
    pub last_watched_at: Option<DateTime<Utc>>,
}

impl ShowWatchedProgress {
    /// Whether every aired episode has been watched.
    pub fn is_completed(&self) -> bool {
        self.completed >= self.aired
    }
}
