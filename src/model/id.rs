//! Identifier bundles and item references.
//!
//! # Identifier bundles
//!
//! Every media object Trakt returns carries an `ids` object that cross-references the item in other catalogs. The
//! bundles ([ShowIds], [SeasonIds], [EpisodeIds], [MovieIds], [ListIds], [PersonIds]) always carry Trakt's own numeric
//! ID in `trakt`. The other IDs are present only when Trakt knows them.
//!
//! # Referring to items in requests
//!
//! Most endpoints accept a Trakt numeric ID, a Trakt slug or an IMDB ID in the request path. [ItemId] is that
//! reference. It converts from integers and strings:
//!
//! ```
//! # use ferrotrakt::model::id::ItemId;
//! let by_trakt_id = ItemId::from(1390);
//! let by_slug = ItemId::from("game-of-thrones");
//! let by_imdb_id = ItemId::from("tt0944947");
//!
//! assert_eq!(by_trakt_id.as_path_segment(), "1390");
//! assert!(matches!(by_imdb_id, ItemId::Imdb(_)));
//! ```
//!
//! The string forms are not validated when constructed. A request whose item reference cannot be safely embedded in
//! the request path fails with [InvalidRequest::UnsafePathSegment](crate::error::InvalidRequest::UnsafePathSegment)
//! before anything is sent.
//!
//! [LookupId] refers to an item by one of its IDs in any catalog for the
//! [`id_lookup`-function](crate::client::SearchClient::id_lookup).

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// Trakt's own numeric ID.
pub type TraktId = u64;

/// IDs of a show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowIds {
    pub trakt: TraktId,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvrage: Option<u64>,
}

/// IDs of a season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonIds {
    pub trakt: TraktId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvrage: Option<u64>,
}

/// IDs of an episode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeIds {
    pub trakt: TraktId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvrage: Option<u64>,
}

/// IDs of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieIds {
    pub trakt: TraktId,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u64>,
}

/// IDs of a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListIds {
    pub trakt: TraktId,
    pub slug: String,
}

/// IDs of a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonIds {
    pub trakt: TraktId,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvrage: Option<u64>,
}

/// IDs of a user. Users are identified by their slug only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIds {
    pub slug: String,
}

impl ShowIds {
    pub fn new<S>(trakt: TraktId, slug: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            trakt,
            slug: slug.into(),
            tvdb: None,
            imdb: None,
            tmdb: None,
            tvrage: None,
        }
    }
}

impl SeasonIds {
    pub fn new(trakt: TraktId) -> Self {
        Self {
            trakt,
            tvdb: None,
            tmdb: None,
            tvrage: None,
        }
    }
}

impl EpisodeIds {
    pub fn new(trakt: TraktId) -> Self {
        Self {
            trakt,
            tvdb: None,
            imdb: None,
            tmdb: None,
            tvrage: None,
        }
    }
}

impl MovieIds {
    pub fn new<S>(trakt: TraktId, slug: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            trakt,
            slug: slug.into(),
            imdb: None,
            tmdb: None,
        }
    }
}

/// A reference to a show or a movie in a request path: a Trakt ID, a Trakt slug or an IMDB ID.
///
/// See the [module-level docs](self) for how these are constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId<'a> {
    Trakt(TraktId),
    Slug(Cow<'a, str>),
    Imdb(Cow<'a, str>),
}

impl<'a> ItemId<'a> {
    /// Returns this reference the way it appears in a request path.
    pub fn as_path_segment(&self) -> Cow<'_, str> {
        match self {
            ItemId::Trakt(id) => Cow::Owned(id.to_string()),
            ItemId::Slug(slug) => Cow::Borrowed(slug),
            ItemId::Imdb(imdb) => Cow::Borrowed(imdb),
        }
    }

    /// Returns a new ItemId that clones the value from this ItemId and owns it.
    pub fn as_owned(&self) -> ItemId<'static> {
        match self {
            ItemId::Trakt(id) => ItemId::Trakt(*id),
            ItemId::Slug(slug) => ItemId::Slug(Cow::Owned(slug.to_string())),
            ItemId::Imdb(imdb) => ItemId::Imdb(Cow::Owned(imdb.to_string())),
        }
    }
}

fn looks_like_imdb_id(value: &str) -> bool {
    value
        .strip_prefix("tt")
        .map(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

impl From<TraktId> for ItemId<'static> {
    fn from(id: TraktId) -> Self {
        ItemId::Trakt(id)
    }
}

impl<'a> From<Cow<'a, str>> for ItemId<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        if looks_like_imdb_id(&value) {
            ItemId::Imdb(value)
        } else {
            ItemId::Slug(value)
        }
    }
}

impl<'a> From<&'a str> for ItemId<'a> {
    fn from(value: &'a str) -> Self {
        Cow::Borrowed(value).into()
    }
}

impl From<String> for ItemId<'static> {
    fn from(value: String) -> Self {
        Cow::<'static, str>::Owned(value).into()
    }
}

impl<'a> From<&'a ShowIds> for ItemId<'static> {
    fn from(ids: &'a ShowIds) -> Self {
        ItemId::Trakt(ids.trakt)
    }
}

impl<'a> From<&'a MovieIds> for ItemId<'static> {
    fn from(ids: &'a MovieIds) -> Self {
        ItemId::Trakt(ids.trakt)
    }
}

impl fmt::Display for ItemId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path_segment())
    }
}

/// An ID in some catalog, used to look up the Trakt item it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupId {
    Trakt(TraktId),
    Imdb(String),
    Tmdb(u64),
    Tvdb(u64),
    TvRage(u64),
}

impl LookupId {
    /// The ID type's name in the lookup request path.
    pub fn id_type(&self) -> &'static str {
        match self {
            LookupId::Trakt(_) => "trakt",
            LookupId::Imdb(_) => "imdb",
            LookupId::Tmdb(_) => "tmdb",
            LookupId::Tvdb(_) => "tvdb",
            LookupId::TvRage(_) => "tvrage",
        }
    }

    /// The ID's value in the lookup request path.
    pub fn value(&self) -> Cow<'_, str> {
        match self {
            LookupId::Imdb(id) => Cow::Borrowed(id),
            LookupId::Trakt(id) | LookupId::Tmdb(id) | LookupId::Tvdb(id) | LookupId::TvRage(id) => {
                Cow::Owned(id.to_string())
            }
        }
    }
}
