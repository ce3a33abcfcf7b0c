//! The authorized user's account settings.

use serde::{Deserialize, Serialize};

use super::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountSettings {
    pub user: User,
    pub connections: Connections,
    pub account: Account,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_text: Option<SharingText>,
    pub limits: Limits,
}

/// Which social media accounts the user has connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connections {
    pub facebook: bool,
    pub twitter: bool,
    pub google: bool,
    pub tumblr: bool,
    pub medium: bool,
    pub slack: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub time_24hr: Option<bool>,
    pub cover_image: Option<String>,
}

/// Templates for the text shared to connected accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SharingText {
    pub watching: Option<String>,
    pub watched: Option<String>,
    pub rated: Option<String>,
}

/// Limits of the user's account tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Limits {
    pub list: ListLimits,
    pub watchlist: ListLimits,
    pub recommendations: ListLimits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListLimits {
    /// How many lists the user may have. Absent for single-list limits such as the watchlist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    pub item_count: u64,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const ACCOUNT_SETTINGS: &str = r#"{
        "user": {"username": "justin", "private": false, "name": "Justin Nemeth", "vip": true, "vip_ep": false,
            "ids": {"slug": "justin"}},
        "account": {"timezone": "America/Los_Angeles", "date_format": "mdy", "time_24hr": false,
            "cover_image": "https://walter.trakt.tv/images/movies/000/001/545/fanarts/original/0abb604492.jpg"},
        "connections": {"facebook": true, "twitter": true, "google": true, "tumblr": false, "medium": false,
            "slack": false},
        "sharing_text": {"watching": "I'm watching [item]", "watched": "I just watched [item]", "rated": null},
        "limits": {
            "list": {"count": 2, "item_count": 100},
            "watchlist": {"item_count": 100},
            "recommendations": {"item_count": 50}
        }
    }"#;

    #[test]
    fn deserialize_account_settings() {
        let settings: AccountSettings = serde_json::from_str(ACCOUNT_SETTINGS).unwrap();

        assert_eq!(settings.user.username, "justin");
        assert_eq!(settings.account.time_24hr, Some(false));
        assert!(settings.connections.facebook);
        assert_eq!(settings.limits.list.count, Some(2));
        assert_eq!(settings.limits.watchlist.count, None);
        assert_eq!(settings.sharing_text.and_then(|text| text.rated), None);
    }

    #[test]
    fn sharing_text_may_be_absent() {
        let mut value: serde_json::Value = serde_json::from_str(ACCOUNT_SETTINGS).unwrap();
        value.as_object_mut().unwrap().remove("sharing_text");

        let settings: AccountSettings = serde_json::from_value(value).unwrap();
        assert!(settings.sharing_text.is_none());
    }
}
