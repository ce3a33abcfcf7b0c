//! Everything related to episodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{id::EpisodeIds, Identifiable};

/// An episode of a show's season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub season: u32,
    pub number: u32,
    pub title: Option<String>,
    pub ids: EpisodeIds,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u64>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// `None` if the air date is unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_translations: Option<Vec<String>>,
}

/// An episode's title and overview in some language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeTranslation {
    pub title: Option<String>,
    pub overview: Option<String>,
    /// Two-letter language code.
    pub language: String,
}

impl Episode {
    /// Create an episode with only its minimal fields set.
    pub fn new(season: u32, number: u32, title: Option<String>, ids: EpisodeIds) -> Self {
        Self {
            season,
            number,
            title,
            ids,
            overview: None,
            rating: None,
            votes: None,
            runtime: None,
            first_aired: None,
            updated_at: None,
            available_translations: None,
        }
    }
}

impl Identifiable for Episode {
    fn id(&self) -> u64 {
        self.ids.trakt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_min_episode() {
        let json = r#"{"season": 1, "number": 1, "title": "Winter Is Coming",
            "ids": {"trakt": 73640, "tvdb": 3254641, "imdb": "tt1480055", "tmdb": 63056, "tvrage": null}}"#;
        let episode: Episode = serde_json::from_str(json).unwrap();

        assert_eq!(episode.id(), 73640);
        assert_eq!(episode.title.as_deref(), Some("Winter Is Coming"));
        assert_eq!(episode.ids.tvrage, None);
        assert_eq!(episode.first_aired, None);
    }

    #[test]
    fn null_first_aired_is_absent() {
        let json = r#"{"season": 9, "number": 1, "title": null, "ids": {"trakt": 1},
            "first_aired": null, "runtime": 58}"#;
        let episode: Episode = serde_json::from_str(json).unwrap();

        assert_eq!(episode.first_aired, None);
        assert_eq!(episode.runtime, Some(58));
    }

    #[test]
    fn missing_season_number_fails() {
        let json = r#"{"number": 1, "title": null, "ids": {"trakt": 1}}"#;
        assert!(serde_json::from_str::<Episode>(json).is_err());
    }

    #[test]
    fn translation() {
        let json = r#"{"title": "Le Trône de fer", "overview": null, "language": "fr"}"#;
        let translation: EpisodeTranslation = serde_json::from_str(json).unwrap();

        assert_eq!(translation.language, "fr");
        assert_eq!(translation.overview, None);
    }
}
