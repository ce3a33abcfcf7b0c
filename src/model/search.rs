//! Results of ID lookups.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{episode::Episode, list::TraktList, movie::Movie, people::Person, show::Show};

/// The kinds of items a search may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Movie,
    Show,
    Episode,
    Person,
    List,
}

/// A single search result. Which of the item fields is present depends on `result_type`; episode results carry their
/// show as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub result_type: SearchType,
    /// Relevance of the result. Always null for ID lookups.
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<Episode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<TraktList>,
}

impl SearchType {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Movie => "movie",
            SearchType::Show => "show",
            SearchType::Episode => "episode",
            SearchType::Person => "person",
            SearchType::List => "list",
        }
    }
}

impl Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join search types into the comma-separated format Trakt expects.
pub(crate) fn join_search_types<I>(types: I) -> String
where
    I: IntoIterator<Item = SearchType>,
{
    types.into_iter().map(SearchType::as_str).collect::<Vec<_>>().join(",")
}
