//! Everything related to shows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{id::ShowIds, Identifiable};

/// A show. The title, year and IDs are always present; everything else is present only when requested with
/// [ExtendedInfo::Full](crate::extended::ExtendedInfo::Full).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub title: String,
    pub year: Option<u32>,
    pub ids: ShowIds,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airs: Option<Airs>,
    /// Runtime of an episode in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ShowStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_translations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aired_episodes: Option<u32>,
}

/// When a show airs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// A show's production status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowStatus {
    #[serde(rename = "returning series")]
    ReturningSeries,
    Continuing,
    #[serde(rename = "in production")]
    InProduction,
    Planned,
    Upcoming,
    Pilot,
    Canceled,
    Ended,
}

impl Show {
    /// Create a show with only its minimal fields set.
    pub fn new<S>(title: S, year: Option<u32>, ids: ShowIds) -> Self
    where
        S: Into<String>,
    {
        Self {
            title: title.into(),
            year,
            ids,
            overview: None,
            first_aired: None,
            airs: None,
            runtime: None,
            certification: None,
            network: None,
            country: None,
            trailer: None,
            homepage: None,
            status: None,
            rating: None,
            votes: None,
            updated_at: None,
            language: None,
            available_translations: None,
            genres: None,
            aired_episodes: None,
        }
    }
}

impl Identifiable for Show {
    fn id(&self) -> u64 {
        self.ids.trakt
    }
}
