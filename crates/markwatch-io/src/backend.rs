//! Where the admin page sends user mutations.

use markwatch_core::users::demo_users;
use markwatch_core::{AdminBackend, ApiReply, NewUser, RemoteError, RoleUpdate, UserId, UserRecord};

use crate::api::ApiClient;

/// User-table backend chosen by [`AdminBackend`].
///
/// `InMemory` answers immediately with the replies the server would
/// give, so the same settle functions apply to both.
#[derive(Debug, Clone, PartialEq)]
pub enum UserBackend {
    Remote(ApiClient),
    InMemory,
}

impl UserBackend {
    #[must_use]
    pub fn new(kind: AdminBackend, base: &str) -> Self {
        match kind {
            AdminBackend::Remote => Self::Remote(ApiClient::new(base)),
            AdminBackend::InMemory => Self::InMemory,
        }
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// # Errors
    ///
    /// Returns [`RemoteError`] if the remote listing fails.
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn load(&self) -> Result<Vec<UserRecord>, RemoteError> {
        match self {
            Self::Remote(api) => api.list_users().await,
            Self::InMemory => Ok(demo_users()),
        }
    }

    /// # Errors
    ///
    /// Returns [`RemoteError`] if the remote call fails.
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn add(&self, user: &NewUser) -> Result<ApiReply, RemoteError> {
        match self {
            Self::Remote(api) => api.add_user(user).await,
            Self::InMemory => Ok(ApiReply::ok("User added successfully!")),
        }
    }

    /// # Errors
    ///
    /// Returns [`RemoteError`] if the remote call fails.
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn delete(&self, id: UserId) -> Result<ApiReply, RemoteError> {
        match self {
            Self::Remote(api) => api.delete_user(id).await,
            Self::InMemory => Ok(ApiReply::ok("User deleted successfully!")),
        }
    }

    /// # Errors
    ///
    /// Returns [`RemoteError`] if the remote call fails.
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn update_role(&self, update: RoleUpdate) -> Result<ApiReply, RemoteError> {
        match self {
            Self::Remote(api) => api.update_role(update).await,
            Self::InMemory => Ok(ApiReply::ok(format!("Role updated to {}", update.role))),
        }
    }
}
