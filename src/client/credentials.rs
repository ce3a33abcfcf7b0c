//! Access tokens for endpoints that require authorization.
//!
//! The client never acquires or refreshes tokens itself. It asks its [CredentialProvider] for the current token each
//! time it builds an authorized request, so a provider may swap the token at any time.

use std::{
    fmt,
    sync::{PoisonError, RwLock},
};

/// Supplies the OAuth access token for authorized requests.
pub trait CredentialProvider: fmt::Debug + Send + Sync {
    /// Returns the current access token, or `None` if there is none.
    fn access_token(&self) -> Option<String>;
}

/// An in-memory access token that may be replaced or cleared at runtime.
#[derive(Default)]
pub struct AccessToken {
    token: RwLock<Option<String>>,
}

impl AccessToken {
    pub fn new<S>(token: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Replace the stored token.
    pub fn set<S>(&self, token: S)
    where
        S: Into<String>,
    {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Remove the stored token. Authorized requests fail until a new one is set.
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl CredentialProvider for AccessToken {
    fn access_token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let present = self.token.read().unwrap_or_else(PoisonError::into_inner).is_some();

        f.debug_struct("AccessToken")
            .field("token", if present { &"<redacted>" } else { &"<none>" })
            .finish()
    }
}
