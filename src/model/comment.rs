//! Comments and replies on shows, seasons, episodes, movies and lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{user::User, Identifiable};

/// A comment or a reply. Replies carry the ID of the comment they reply to in `parent_id`; top-level comments have it
/// set to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub parent_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub comment: String,
    pub spoiler: bool,
    pub review: bool,
    pub replies: u64,
    pub likes: u64,
    /// The rating the commenter gave to the commented item, if any.
    pub user_rating: Option<u8>,
    pub user: User,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id != 0
    }
}

impl Identifiable for Comment {
    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_reply() {
        let json = r#"{
            "id": 8,
            "parent_id": 1,
            "created_at": "2011-03-25T22:35:17.000Z",
            "updated_at": "2011-03-25T22:35:17.000Z",
            "comment": "Great show!",
            "spoiler": false,
            "review": false,
            "replies": 1,
            "likes": 0,
            "user_rating": 8,
            "user": {"username": "sean", "private": false, "name": "Sean Rudford", "vip": true, "vip_ep": false,
                "ids": {"slug": "sean"}}
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();

        assert_eq!(comment.id(), 8);
        assert!(comment.is_reply());
        assert_eq!(comment.user_rating, Some(8));
    }
}
