use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Joins extended info levels into the comma-separated form the `extended` query parameter takes. The levels are kept
/// in the given order and duplicates are not removed.
pub trait ToExtendedString
where
    Self: IntoIterator<Item = ExtendedInfo>,
{
    fn to_extended_string(self) -> String;
}

/// Levels of detail that may be requested from endpoints supporting extended info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtendedInfo {
    /// Least amount of info. This is the default.
    Min,
    /// All information, excluding images.
    Full,
    /// Collection only. Additional video and audio info.
    Metadata,
    /// All seasons and episodes.
    Episodes,
    /// Watched shows without seasons.
    #[serde(rename = "noseasons")]
    NoSeasons,
    /// Guest stars for the show, season and episode `people` endpoints.
    GuestStars,
}

impl ExtendedInfo {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtendedInfo::Min => "min",
            ExtendedInfo::Full => "full",
            ExtendedInfo::Metadata => "metadata",
            ExtendedInfo::Episodes => "episodes",
            ExtendedInfo::NoSeasons => "noseasons",
            ExtendedInfo::GuestStars => "guest_stars",
        }
    }
}

impl Display for ExtendedInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<I> ToExtendedString for I
where
    I: IntoIterator<Item = ExtendedInfo>,
{
    fn to_extended_string(self) -> String {
        self.into_iter()
            .map(ExtendedInfo::as_str)
            .collect::<Vec<&str>>()
            .join(",")
    }
}
