// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the notification REST endpoints.

use crate::domain::notification::{Notification, NotificationId};
use crate::error::ApiError;
use crate::state::Filter;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, COOKIE};
use reqwest::{Method, Response, StatusCode, Url};
use serde::Deserialize;

/// Collection path, relative to the server base URL.
pub const NOTIFICATIONS_PATH: &str = "api/v1/notifications";

const USER_AGENT: &str = concat!("IcedBell/", env!("CARGO_PKG_VERSION"));

/// Where the API lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Server root, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Raw `Cookie` header value carrying the session (e.g. `SESSION=abc`).
    pub session_cookie: Option<String>,
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>, session_cookie: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session_cookie,
        }
    }

    /// Parses the base URL, forcing a trailing slash so relative joins keep
    /// any path prefix (`https://host/app/` + `api/...`).
    pub fn base(&self) -> Result<Url, ApiError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(raw));
        }
        Ok(url)
    }

    /// Resolves a site path such as `/login` against the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        self.base()?
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnreadCountResponse {
    unread_count: u64,
}

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    collection: Url,
}

impl ApiClient {
    pub fn new(endpoint: &Endpoint) -> Result<Self, ApiError> {
        let collection = endpoint.resolve(NOTIFICATIONS_PATH)?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = endpoint.session_cookie.as_deref().filter(|c| !c.is_empty()) {
            let mut value = HeaderValue::from_str(cookie)
                .map_err(|e| ApiError::Setup(format!("invalid session cookie: {e}")))?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;

        Ok(Self { http, collection })
    }

    /// `GET /api/v1/notifications/unread-count`
    pub async fn unread_count(&self) -> Result<u64, ApiError> {
        let url = self.member(&["unread-count"])?;
        let response = self.send(Method::GET, url).await?;
        let body: UnreadCountResponse = response
            .json()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;
        Ok(body.unread_count)
    }

    /// `GET /api/v1/notifications[?unread=true]`
    pub async fn list(&self, filter: Filter) -> Result<Vec<Notification>, ApiError> {
        let mut url = self.collection.clone();
        if filter.unread_only() {
            url.query_pairs_mut().append_pair("unread", "true");
        }
        let response = self.send(Method::GET, url).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))
    }

    /// `PUT /api/v1/notifications/{id}/read`
    pub async fn mark_read(&self, id: &NotificationId) -> Result<(), ApiError> {
        let url = self.member(&[id.as_str(), "read"])?;
        self.send(Method::PUT, url).await.map(drop)
    }

    /// `PUT /api/v1/notifications/read-all`
    pub async fn mark_all_read(&self) -> Result<(), ApiError> {
        let url = self.member(&["read-all"])?;
        self.send(Method::PUT, url).await.map(drop)
    }

    /// `DELETE /api/v1/notifications/{id}`
    pub async fn delete(&self, id: &NotificationId) -> Result<(), ApiError> {
        let url = self.member(&[id.as_str()])?;
        self.send(Method::DELETE, url).await.map(drop)
    }

    /// Opens `GET /api/v1/notifications/stream` and returns the live response.
    pub async fn open_stream(&self) -> Result<Response, ApiError> {
        let url = self.member(&["stream"])?;
        let path = url.path().to_string();
        tracing::debug!(%path, "opening notification stream");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "text/event-stream")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;
        check_status(response, path)
    }

    /// Builds `collection/segment/...`, percent-encoding each segment.
    fn member(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.collection.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, method: Method, url: Url) -> Result<Response, ApiError> {
        let path = url.path().to_string();
        tracing::debug!(%method, %path, "notification api request");

        let response = self
            .http
            .request(method, url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;
        check_status(response, path)
    }
}

fn check_status(response: Response, path: String) -> Result<Response, ApiError> {
    match response.status() {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        status if status.is_success() => Ok(response),
        status => Err(ApiError::Status {
            status: status.as_u16(),
            path,
        }),
    }
}
