//! HTTP client for the backend API.
//!
//! Uses `reqwest`, which is backed by `fetch` on `wasm32`. Bodies are
//! read as text and decoded here so every failure maps onto a
//! [`RemoteError`] the flows in `markwatch-core` understand.

use markwatch_core::api::{TextSearch, paths};
use markwatch_core::{ApiReply, NewUser, RemoteError, RoleUpdate, TrademarkHit, UserId, UserRecord};
use serde::de::DeserializeOwned;

/// Client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl ApiClient {
    /// `base` is an absolute URL such as `https://host:5000`; a trailing
    /// slash is ignored.
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// `GET /api/users`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure, non-success status,
    /// or an undecodable body.
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteError> {
        let request = self.http.get(self.url(paths::LIST_USERS));
        self.send(request).await
    }

    /// `POST /api/users/add`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::list_users`].
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn add_user(&self, user: &NewUser) -> Result<ApiReply, RemoteError> {
        let request = self.http.post(self.url(paths::ADD_USER)).json(user);
        self.send(request).await
    }

    /// `DELETE /api/users/delete/{id}`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::list_users`].
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn delete_user(&self, id: UserId) -> Result<ApiReply, RemoteError> {
        let request = self.http.delete(self.url(&paths::delete_user(id)));
        self.send(request).await
    }

    /// `POST /api/users/update_role`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::list_users`].
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn update_role(&self, update: RoleUpdate) -> Result<ApiReply, RemoteError> {
        let request = self.http.post(self.url(paths::UPDATE_ROLE)).json(&update);
        self.send(request).await
    }

    /// `POST /api/text_search`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::list_users`].
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn text_search(&self, query: &TextSearch) -> Result<Vec<TrademarkHit>, RemoteError> {
        let request = self.http.post(self.url(paths::TEXT_SEARCH)).json(query);
        self.send(request).await
    }

    /// `POST /api/image_search` as multipart with fields `image`,
    /// `words` and `class_filter`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::list_users`]. An unusable MIME type is a
    /// [`RemoteError::Transport`].
    #[allow(clippy::future_not_send)] // WASM is single-threaded
    pub async fn image_search(
        &self,
        image: Vec<u8>,
        file_name: String,
        mime_type: &str,
        query: &TextSearch,
    ) -> Result<Vec<TrademarkHit>, RemoteError> {
        let mut part = reqwest::multipart::Part::bytes(image).file_name(file_name);
        if !mime_type.is_empty() {
            part = part.mime_str(mime_type).map_err(transport)?;
        }
        let form = reqwest::multipart::Form::new()
            .part("image", part)
            .text("words", query.words.clone())
            .text("class_filter", query.class_filter.clone());
        let request = self.http.post(self.url(paths::IMAGE_SEARCH)).multipart(form);
        self.send(request).await
    }

    #[allow(clippy::future_not_send)] // WASM is single-threaded
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, RemoteError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.text().await.map_err(transport)?;
        let outcome = decode_body(status, &body);
        match &outcome {
            Ok(_) => tracing::info!(%url, status, "api call succeeded"),
            Err(e) => tracing::error!(%url, status, error = %e, "api call failed"),
        }
        outcome
    }
}

fn transport(err: reqwest::Error) -> RemoteError {
    tracing::error!(error = %err, "api request failed");
    RemoteError::Transport(err.to_string())
}

/// Map a status and body onto a decoded value or a [`RemoteError`].
///
/// A non-success body is still searched for a `message` field so the
/// server's explanation reaches the user.
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, RemoteError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiReply>(body)
            .ok()
            .map(|r| r.message)
            .filter(|m| !m.trim().is_empty());
        return Err(RemoteError::Status { status, message });
    }
    serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))
}
