//! Everything related to seasons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{episode::Episode, id::SeasonIds, Identifiable};

/// A season of a show.
///
/// The episodes are present only when requested with [ExtendedInfo::Episodes](crate::extended::ExtendedInfo::Episodes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub number: u32,
    pub ids: SeasonIds,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aired_episodes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_aired: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<Episode>>,
}

impl Season {
    /// Create a season with only its minimal fields set.
    pub fn new(number: u32, ids: SeasonIds) -> Self {
        Self {
            number,
            ids,
            rating: None,
            votes: None,
            episode_count: None,
            aired_episodes: None,
            title: None,
            overview: None,
            first_aired: None,
            episodes: None,
        }
    }

    /// Whether this is the specials season, numbered 0.
    pub fn is_specials(&self) -> bool {
        self.number == 0
    }
}

impl Identifiable for Season {
    fn id(&self) -> u64 {
        self.ids.trakt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_season_with_episodes() {
        let json = r#"{
            "number": 1,
            "ids": {"trakt": 3950, "tvdb": 364731, "tmdb": 3624},
            "episodes": [
                {"season": 1, "number": 1, "title": "Winter Is Coming", "ids": {"trakt": 73640}},
                {"season": 1, "number": 2, "title": "The Kingsroad", "ids": {"trakt": 73641}}
            ]
        }"#;
        let season: Season = serde_json::from_str(json).unwrap();

        assert_eq!(season.id(), 3950);
        assert!(!season.is_specials());
        assert_eq!(season.episodes.as_ref().map(Vec::len), Some(2));
        assert_eq!(season.episode_count, None);
    }

    #[test]
    fn min_season_round_trips() {
        let json = r#"{"number":0,"ids":{"trakt":1}}"#;
        let season: Season = serde_json::from_str(json).unwrap();

        assert!(season.is_specials());
        assert_eq!(serde_json::to_string(&season).unwrap(), json);
    }
}
