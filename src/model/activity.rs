//! Timestamps of a user's latest activities, used to decide what needs to be synced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastActivities {
    pub all: DateTime<Utc>,
    pub movies: MovieActivities,
    pub episodes: EpisodeActivities,
    pub shows: ShowActivities,
    pub seasons: SeasonActivities,
    pub comments: CommentActivities,
    pub lists: ListActivities,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieActivities {
    pub watched_at: DateTime<Utc>,
    pub collected_at: DateTime<Utc>,
    pub rated_at: DateTime<Utc>,
    pub watchlisted_at: DateTime<Utc>,
    pub commented_at: DateTime<Utc>,
    pub paused_at: DateTime<Utc>,
    pub hidden_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeActivities {
    pub watched_at: DateTime<Utc>,
    pub collected_at: DateTime<Utc>,
    pub rated_at: DateTime<Utc>,
    pub watchlisted_at: DateTime<Utc>,
    pub commented_at: DateTime<Utc>,
    pub paused_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowActivities {
    pub rated_at: DateTime<Utc>,
    pub watchlisted_at: DateTime<Utc>,
    pub commented_at: DateTime<Utc>,
    pub hidden_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonActivities {
    pub rated_at: DateTime<Utc>,
    pub watchlisted_at: DateTime<Utc>,
    pub commented_at: DateTime<Utc>,
    pub hidden_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentActivities {
    pub liked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListActivities {
    pub liked_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub commented_at: DateTime<Utc>,
}
