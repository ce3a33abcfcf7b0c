//! The cast and crew of a season or an episode.
//!
//! Crew members are grouped by department. Guest stars are only included when requested with
//! [ExtendedInfo::GuestStars](crate::extended::ExtendedInfo::GuestStars).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{id::PersonIds, Identifiable};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CastAndCrew {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_stars: Option<Vec<CastMember>>,
    #[serde(default)]
    pub crew: Crew,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub characters: Vec<String>,
    /// How many episodes of the show the person appears in. Present only for shows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub jobs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
    pub person: Person,
}

/// Crew members by department. Trakt omits departments without members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Crew {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub production: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub art: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crew: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", rename = "costume & make-up")]
    pub costume_and_make_up: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directing: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub writing: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sound: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub camera: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", rename = "visual effects")]
    pub visual_effects: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lighting: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editing: Vec<CrewMember>,
}

/// A person. The name and IDs are always present; the rest only with
/// [ExtendedInfo::Full](crate::extended::ExtendedInfo::Full).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub ids: PersonIds,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Crew {
    /// Iterate over every crew member in every department.
    pub fn members(&self) -> impl Iterator<Item = &CrewMember> {
        [
            &self.production,
            &self.art,
            &self.crew,
            &self.costume_and_make_up,
            &self.directing,
            &self.writing,
            &self.sound,
            &self.camera,
            &self.visual_effects,
            &self.lighting,
            &self.editing,
        ]
        .into_iter()
        .flatten()
    }
}

impl Identifiable for Person {
    fn id(&self) -> u64 {
        self.ids.trakt
    }
}
