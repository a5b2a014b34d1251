//! # HTTP client for the shelf service
//!
//! [`ShelfClient`] is a typed client for the backend's versioned REST API.
//! One method per registered route:
//!
//! | Method | Route |
//! |--------|-------|
//! | [`list_shelves`](ShelfClient::list_shelves) | `GET /v1/shelves` |
//! | [`get_shelf`](ShelfClient::get_shelf) | `GET /v1/shelves/{shelfId}` |
//! | [`create_shelf`](ShelfClient::create_shelf) | `POST /v1/shelves` |
//! | [`update_shelf`](ShelfClient::update_shelf) | `PUT /v1/shelves/{shelfId}` |
//! | [`delete_shelf`](ShelfClient::delete_shelf) | `DELETE /v1/shelves/{shelfId}` |
//! | [`list_sections`](ShelfClient::list_sections) | `GET /v1/sections?shelfId=` |
//! | [`create_section`](ShelfClient::create_section) | `POST /v1/sections` |
//! | [`update_section`](ShelfClient::update_section) | `PUT /v1/sections/{sectionId}` |
//! | [`delete_section`](ShelfClient::delete_section) | `DELETE /v1/sections/{sectionId}` |
//! | [`list_links`](ShelfClient::list_links) | `GET /v1/links?shelfId=` |
//! | [`create_link`](ShelfClient::create_link) | `POST /v1/links` |
//! | [`update_link`](ShelfClient::update_link) | `PUT /v1/links/{linkId}` |
//! | [`delete_link`](ShelfClient::delete_link) | `DELETE /v1/links/{linkId}` |
//!
//! The client also implements [`store::ShelfApi`], so it plugs directly
//! into a [`store::ShelfStore`].
//!
//! Non-2xx responses are mapped to [`ApiError`], carrying the server's
//! `{"message": …}` body when one is present and the HTTP status text
//! otherwise.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use store::{Shelf, ShelfApi, ShelfBase};

use crate::error::ApiError;
use crate::models::{ApiMessage, Link, LinkBase, Section, SectionBase};
use crate::settings::Settings;

/// Typed client for the shelf service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ShelfClient {
    client: reqwest::Client,
    base_url: String,
}

impl ShelfClient {
    /// Create a client against the given base URL with default transport
    /// settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Create a client from loaded [`Settings`].
    pub fn from_settings(settings: &Settings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: normalize_base_url(settings.api.url.clone()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // Shelves

    pub async fn list_shelves(&self) -> Result<Vec<Shelf>, ApiError> {
        let response = self.client.get(self.url("/v1/shelves")).send().await?;
        decode(response).await
    }

    pub async fn get_shelf(&self, shelf_id: &str) -> Result<Shelf, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/v1/shelves/{shelf_id}")))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_shelf(&self, shelf: &ShelfBase) -> Result<Shelf, ApiError> {
        let response = self
            .client
            .post(self.url("/v1/shelves"))
            .json(shelf)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_shelf(
        &self,
        shelf_id: &str,
        shelf: &ShelfBase,
    ) -> Result<Shelf, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/v1/shelves/{shelf_id}")))
            .json(shelf)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_shelf(&self, shelf_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/v1/shelves/{shelf_id}")))
            .send()
            .await?;
        no_content(response).await
    }

    // Sections

    /// List the sections of a shelf.
    pub async fn list_sections(&self, shelf_id: &str) -> Result<Vec<Section>, ApiError> {
        let response = self
            .client
            .get(self.url("/v1/sections"))
            .query(&[("shelfId", shelf_id)])
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_section(&self, section: &SectionBase) -> Result<Section, ApiError> {
        let response = self
            .client
            .post(self.url("/v1/sections"))
            .json(section)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_section(
        &self,
        section_id: &str,
        section: &SectionBase,
    ) -> Result<Section, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/v1/sections/{section_id}")))
            .json(section)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_section(&self, section_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/v1/sections/{section_id}")))
            .send()
            .await?;
        no_content(response).await
    }

    // Links

    /// List the links of a shelf, across all its sections.
    pub async fn list_links(&self, shelf_id: &str) -> Result<Vec<Link>, ApiError> {
        let response = self
            .client
            .get(self.url("/v1/links"))
            .query(&[("shelfId", shelf_id)])
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_link(&self, link: &LinkBase) -> Result<Link, ApiError> {
        let response = self
            .client
            .post(self.url("/v1/links"))
            .json(link)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_link(&self, link_id: &str, link: &LinkBase) -> Result<Link, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/v1/links/{link_id}")))
            .json(link)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_link(&self, link_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/v1/links/{link_id}")))
            .send()
            .await?;
        no_content(response).await
    }
}

impl ShelfApi for ShelfClient {
    type Error = ApiError;

    async fn list_shelves(&self) -> Result<Vec<Shelf>, ApiError> {
        ShelfClient::list_shelves(self).await
    }

    async fn create_shelf(&self, shelf: ShelfBase) -> Result<Shelf, ApiError> {
        ShelfClient::create_shelf(self, &shelf).await
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Decode a 2xx JSON body, or map the response to an [`ApiError`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    Err(status_error(status, response.json().await.ok()))
}

/// Accept any 2xx with or without a body (deletes return 204).
async fn no_content(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(status_error(status, response.json().await.ok()))
}

fn status_error(status: StatusCode, body: Option<ApiMessage>) -> ApiError {
    let message = body.map(|m| m.message).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });
    tracing::warn!(%status, "shelf service error: {message}");
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> Option<ApiMessage> {
        Some(ApiMessage {
            message: text.to_string(),
        })
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ShelfClient::new("http://localhost:8080/");
        assert_eq!(client.url("/v1/shelves"), "http://localhost:8080/v1/shelves");

        let client = ShelfClient::new("http://localhost:8080");
        assert_eq!(client.url("/v1/shelves"), "http://localhost:8080/v1/shelves");
    }

    #[test]
    fn test_status_error_mapping() {
        let err = status_error(StatusCode::NOT_FOUND, message("no such shelf"));
        assert!(matches!(err, ApiError::NotFound(m) if m == "no such shelf"));

        let err = status_error(StatusCode::UNAUTHORIZED, None);
        assert!(matches!(err, ApiError::Unauthorized));

        let err = status_error(StatusCode::BAD_REQUEST, message("failed to create shelf"));
        assert!(
            matches!(err, ApiError::Status { status: 400, message } if message == "failed to create shelf")
        );
    }

    #[test]
    fn test_status_error_falls_back_to_status_text() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert!(
            matches!(err, ApiError::Status { status: 500, message } if message == "Internal Server Error")
        );
    }
}
