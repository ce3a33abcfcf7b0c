//! User lists and the filters used when asking which lists contain an item.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{id::ListIds, user::User, Identifiable};

/// A personal or official list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraktList {
    pub name: String,
    pub description: Option<String>,
    pub privacy: ListPrivacy,
    pub display_numbers: bool,
    pub allow_comments: bool,
    pub sort_by: String,
    pub sort_how: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub item_count: u64,
    pub comment_count: u64,
    pub likes: u64,
    pub ids: ListIds,
    /// Absent for official lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListPrivacy {
    Private,
    Friends,
    Public,
}

/// Which kind of lists to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListType {
    All,
    /// Lists made by users. Trakt uses this when no type is given.
    #[default]
    Personal,
    Official,
    Watchlists,
}

/// How to sort the returned lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSortType {
    Popular,
    Likes,
    Comments,
    Items,
    Added,
    Updated,
}

impl Identifiable for TraktList {
    fn id(&self) -> u64 {
        self.ids.trakt
    }
}

impl ListType {
    pub fn as_str(self) -> &'static str {
        match self {
            ListType::All => "all",
            ListType::Personal => "personal",
            ListType::Official => "official",
            ListType::Watchlists => "watchlists",
        }
    }
}

impl ListSortType {
    pub fn as_str(self) -> &'static str {
        match self {
            ListSortType::Popular => "popular",
            ListSortType::Likes => "likes",
            ListSortType::Comments => "comments",
            ListSortType::Items => "items",
            ListSortType::Added => "added",
            ListSortType::Updated => "updated",
        }
    }
}

impl Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for ListSortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_official_list() {
        let json = r#"{
            "name": "Star Wars in machete order",
            "description": null,
            "privacy": "public",
            "display_numbers": true,
            "allow_comments": true,
            "sort_by": "rank",
            "sort_how": "asc",
            "created_at": "2014-10-11T17:00:54.000Z",
            "updated_at": "2014-10-11T17:00:54.000Z",
            "item_count": 5,
            "comment_count": 0,
            "likes": 0,
            "ids": {"trakt": 55, "slug": "star-wars-in-machete-order"}
        }"#;
        let list: TraktList = serde_json::from_str(json).unwrap();

        assert_eq!(list.id(), 55);
        assert_eq!(list.privacy, ListPrivacy::Public);
        assert!(list.user.is_none());
    }

    #[test]
    fn filter_path_segments() {
        assert_eq!(ListType::default().to_string(), "personal");
        assert_eq!(ListType::Watchlists.as_str(), "watchlists");
        assert_eq!(ListSortType::Updated.to_string(), "updated");
    }
}
