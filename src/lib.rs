//! A wrapper for the [Trakt.tv API](https://trakt.docs.apiary.io/).
//!
//! Requests are built with [TraktClient](client::TraktClient)'s endpoint functions, which return request builders. The
//! builders may be configured further, for example with [extended info](extended::ExtendedInfo) or
//! [pagination](model::Pagination), before being sent either asynchronously or blocking. Responses are decoded into
//! the types in [model]. Every failure is reported as an [Error].
//!
//! Endpoints that act on a user's data require an OAuth access token, given to the client with
//! [TraktClientBuilder::access_token](client::TraktClientBuilder::access_token) or a
//! [CredentialProvider](client::CredentialProvider). Obtaining the token is left to the application.
//!
//! # Crate features
//!
//! - `async` (default): send requests asynchronously with [reqwest::Client].
//! - `sync`: send requests blocking with [reqwest::blocking::Client].
//! - `native-tls` (default) and `rustls-tls`: the TLS implementation reqwest uses.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> ferrotrakt::Result<()> {
//! use ferrotrakt::prelude::*;
//!
//! let client = TraktClientBuilder::new("client id").build_async()?;
//! let comments = client
//!     .season_comments("game-of-thrones", 1)
//!     .pagination(Pagination::new(1, 10))
//!     .send_async()
//!     .await?;
//!
//! for comment in &comments {
//!     println!("{}: {}", comment.user.username, comment.comment);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod extended;
pub mod model;
pub mod status;

pub use crate::error::{Error, Result};

/// Contains all the traits required to use the client and its request builders, and the most commonly needed types.
pub mod prelude {
    #[cfg(feature = "async")]
    pub use crate::client::AsyncRequestBuilder;
    #[cfg(feature = "sync")]
    pub use crate::client::SyncRequestBuilder;
    pub use crate::{
        client::{
            BaseRequestBuilder, CommentsClient, EpisodesClient, MoviesClient, SearchClient, SeasonsClient,
            ShowsClient, SyncClient, TraktClientBuilder, UsersClient, WithExtendedInfo, WithPagination,
        },
        extended::ExtendedInfo,
        model::{
            id::{ItemId, LookupId},
            Identifiable, Pagination,
        },
    };
}

mod private {
    pub trait Sealed {}
}
