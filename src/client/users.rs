use reqwest::Method;

use super::{path::RequestPath, USERS_SETTINGS_ENDPOINT};
use crate::{
    client::request_builder::{BaseRequestBuilderContainer, RequestBuilder},
    model::settings::AccountSettings,
};

/// Endpoints for users. All Trakt clients implement this trait.
pub trait UsersClient
where
    Self: Clone + Sized,
{
    /// Get the authorized user's profile, their connected accounts, account settings and limits.
    ///
    /// This endpoint requires authorization.
    fn account_settings(&self) -> RequestBuilder<Self, AccountSettings> {
        RequestBuilder::new(Method::GET, RequestPath::new(USERS_SETTINGS_ENDPOINT), self.clone()).authorized()
    }
}
