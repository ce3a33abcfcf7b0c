pub mod activity;
pub mod comment;
pub mod episode;
pub mod id;
pub mod list;
pub mod movie;
pub mod page;
pub mod people;
pub mod progress;
pub mod rating;
pub mod search;
pub mod season;
pub mod settings;
pub mod show;
pub mod stats;
pub mod user;
pub mod watched;

use serde::{Deserialize, Serialize};

/// Objects that have an identity derived from their IDs.
pub trait Identifiable {
    /// Returns the object's identity. For media objects this is their Trakt ID.
    fn id(&self) -> u64;
}

/// A page number and a page size for endpoints that support pagination. Trakt numbers pages starting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}
