//! Everything related to users.

use serde::{Deserialize, Serialize};

use super::id::UserIds;

/// A Trakt user. Private users only expose their username and IDs to others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub private: bool,
    pub name: Option<String>,
    pub vip: Option<bool>,
    pub vip_ep: Option<bool>,
    pub ids: UserIds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_user() {
        let json = r#"{"username":"sean","private":false,"name":"Sean Rudford","vip":true,"vip_ep":false,
            "ids":{"slug":"sean"}}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.username, "sean");
        assert_eq!(user.ids.slug, "sean");
        assert_eq!(user.vip, Some(true));
    }

    #[test]
    fn private_user_has_null_details() {
        let json = r#"{"username":"x","private":true,"name":null,"vip":null,"vip_ep":null,"ids":{"slug":"x"}}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert!(user.private);
        assert_eq!(user.name, None);
    }
}
