//! Everything related to movies.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{id::MovieIds, Identifiable};

/// A movie. The title, year and IDs are always present; everything else is present only when requested with
/// [ExtendedInfo::Full](crate::extended::ExtendedInfo::Full).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: Option<u32>,
    pub ids: MovieIds,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<NaiveDate>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
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
    pub certification: Option<String>,
}

impl Movie {
    /// Create a movie with only its minimal fields set.
    pub fn new<S>(title: S, year: Option<u32>, ids: MovieIds) -> Self
    where
        S: Into<String>,
    {
        Self {
            title: title.into(),
            year,
            ids,
            tagline: None,
            overview: None,
            released: None,
            runtime: None,
            country: None,
            trailer: None,
            homepage: None,
            rating: None,
            votes: None,
            updated_at: None,
            language: None,
            available_translations: None,
            genres: None,
            certification: None,
        }
    }
}

impl Identifiable for Movie {
    fn id(&self) -> u64 {
        self.ids.trakt
    }
}
