//! Wire payloads and endpoint paths of the backend API.
//!
//! The transport itself lives in `markwatch-io`; this module only fixes
//! the JSON shapes so flows can be tested without a network.

use serde::{Deserialize, Serialize};

use crate::types::{Role, UserId};

/// Shown when a remote call fails without a usable server message.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Endpoint paths, relative to the API base URL.
pub mod paths {
    use crate::types::UserId;

    pub const LIST_USERS: &str = "/api/users";
    pub const ADD_USER: &str = "/api/users/add";
    pub const UPDATE_ROLE: &str = "/api/users/update_role";
    pub const IMAGE_SEARCH: &str = "/api/image_search";
    pub const TEXT_SEARCH: &str = "/api/text_search";
    pub const LOGOUT: &str = "/logout";
    pub const SIGN_IN: &str = "/signin";

    #[must_use]
    pub fn delete_user(id: UserId) -> String {
        format!("/api/users/delete/{id}")
    }

    #[must_use]
    pub fn logo(trademark_id: u64) -> String {
        format!("/logo/{trademark_id}")
    }
}

/// `{success, message}` envelope returned by every mutating endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReply {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ApiReply {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn refused(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Server message, or `fallback` when the server sent none.
    #[must_use]
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.message.trim().is_empty() {
            fallback
        } else {
            &self.message
        }
    }
}

/// Body of `POST /api/users/add`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of `POST /api/users/update_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub user_id: UserId,
    pub role: Role,
}

/// Body of `POST /api/text_search`; also the text fields of the
/// multipart image search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextSearch {
    pub words: String,
    pub class_filter: String,
}

/// One trademark in a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrademarkHit {
    pub id: u64,
    #[serde(default)]
    pub has_logo: bool,
    #[serde(default)]
    pub class_indices: Option<String>,
    pub serial_number: String,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Passed through as the server formats it.
    #[serde(default)]
    pub registration_date: Option<String>,
}

impl TrademarkHit {
    /// Path of the logo image, when the trademark has one.
    #[must_use]
    pub fn logo_path(&self) -> Option<String> {
        self.has_logo.then(|| paths::logo(self.id))
    }
}

/// A remote call that did not produce a usable reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The request never completed (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status. `message` is the server's `message`
    /// field when the body carried one.
    #[error("server returned status {status}")]
    Status { status: u16, message: Option<String> },

    /// The body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Text to show the user: the server's own message when present,
    /// else [`GENERIC_FAILURE`].
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Status {
                message: Some(m), ..
            } if !m.trim().is_empty() => m,
            _ => GENERIC_FAILURE,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reply_decodes_without_message() {
        let reply: Result<ApiReply, _> = serde_json::from_str(r#"{"success": true}"#);
        assert_eq!(reply.ok(), Some(ApiReply::ok("")));
    }

    #[test]
    fn role_update_uses_snake_case_fields() {
        let body = serde_json::to_value(RoleUpdate {
            user_id: UserId(7),
            role: Role::Admin,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"user_id": 7, "role": "Admin"}));
    }

    #[test]
    fn hit_decodes_server_row() {
        let json = r#"{
            "id": 3, "has_logo": true, "class_indices": "9, 42",
            "serial_number": "TM2024001", "applicant_name": "Acme",
            "description": null, "registration_date": "Tue, 05 Mar 2024 00:00:00 GMT"
        }"#;
        let hit: TrademarkHit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.logo_path().as_deref(), Some("/logo/3"));
        assert!(hit.description.is_none());
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = RemoteError::Status {
            status: 409,
            message: Some("Email already exists".into()),
        };
        assert_eq!(err.user_message(), "Email already exists");
        assert_eq!(
            RemoteError::Transport("offline".into()).user_message(),
            GENERIC_FAILURE
        );
        let blank = RemoteError::Status {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(blank.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn delete_path_embeds_id() {
        assert_eq!(paths::delete_user(UserId(12)), "/api/users/delete/12");
    }
}
