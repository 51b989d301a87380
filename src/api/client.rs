//! Request builders for the bookmark REST API.
//!
//! [`ApiClient`] maps each domain operation to an [`ApiRequest`] against a
//! fixed base URL. It performs no I/O, keeps no state between calls, and does
//! no validation: the backend owns all of that.

use super::request::{ApiOp, ApiRequest, HttpMethod};
use crate::domain::{BookmarkPayload, Result, ZmarksError};
use std::collections::BTreeMap;

/// Base URL of the bookmark API.
pub const API_BASE: &str = "http://localhost:8082/api";

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Builds requests for the bookmark API.
///
/// # Examples
///
/// ```
/// use zmarks::api::{ApiClient, HttpMethod};
///
/// let client = ApiClient::default();
/// let request = client.search("rust lang", 0, 10);
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(
///     request.url,
///     "http://localhost:8082/api/bookmarks/search?keyword=rust%20lang&page=0&size=10"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl ApiClient {
    /// Creates a client for the given base URL (without trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL requests are built against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /bookmarks?page&size`
    #[must_use]
    pub fn list_all(&self, page: u32, size: u32) -> ApiRequest {
        self.get(
            ApiOp::ListAll { page, size },
            format!("/bookmarks?page={page}&size={size}"),
        )
    }

    /// `GET /bookmarks/{id}`
    #[must_use]
    pub fn get_by_id(&self, id: i64) -> ApiRequest {
        self.get(ApiOp::GetById { id }, format!("/bookmarks/{id}"))
    }

    /// `POST /bookmarks` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ZmarksError::Encode`] if the payload cannot be serialized.
    pub fn create(&self, payload: &BookmarkPayload) -> Result<ApiRequest> {
        self.with_json(ApiOp::Create, HttpMethod::Post, "/bookmarks".to_string(), payload)
    }

    /// `PUT /bookmarks/{id}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ZmarksError::Encode`] if the payload cannot be serialized.
    pub fn update(&self, id: i64, payload: &BookmarkPayload) -> Result<ApiRequest> {
        self.with_json(
            ApiOp::Update { id },
            HttpMethod::Put,
            format!("/bookmarks/{id}"),
            payload,
        )
    }

    /// `DELETE /bookmarks/{id}`
    #[must_use]
    pub fn remove(&self, id: i64) -> ApiRequest {
        ApiRequest {
            op: ApiOp::Remove { id },
            method: HttpMethod::Delete,
            url: self.url(&format!("/bookmarks/{id}")),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// `GET /bookmarks/search?keyword=..&page&size`, keyword URL-encoded.
    #[must_use]
    pub fn search(&self, keyword: &str, page: u32, size: u32) -> ApiRequest {
        self.get(
            ApiOp::Search {
                keyword: keyword.to_string(),
                page,
                size,
            },
            format!(
                "/bookmarks/search?keyword={}&page={page}&size={size}",
                urlencoding::encode(keyword)
            ),
        )
    }

    /// `GET /bookmarks/tag/{tag}?page&size`, tag URL-encoded.
    #[must_use]
    pub fn by_tag(&self, tag: &str, page: u32, size: u32) -> ApiRequest {
        self.get(
            ApiOp::ByTag {
                tag: tag.to_string(),
                page,
                size,
            },
            format!(
                "/bookmarks/tag/{}?page={page}&size={size}",
                urlencoding::encode(tag)
            ),
        )
    }

    /// `GET /tags`
    #[must_use]
    pub fn list_tags(&self) -> ApiRequest {
        self.get(ApiOp::ListTags, "/tags".to_string())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get(&self, op: ApiOp, path: String) -> ApiRequest {
        ApiRequest {
            op,
            method: HttpMethod::Get,
            url: self.url(&path),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    fn with_json(
        &self,
        op: ApiOp,
        method: HttpMethod,
        path: String,
        payload: &BookmarkPayload,
    ) -> Result<ApiRequest> {
        let body = serde_json::to_vec(payload).map_err(ZmarksError::Encode)?;
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Ok(ApiRequest {
            op,
            method,
            url: self.url(&path),
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://api.test/api")
    }

    #[test]
    fn list_all_uses_page_and_size() {
        let request = client().list_all(0, DEFAULT_PAGE_SIZE);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://api.test/api/bookmarks?page=0&size=10");
        assert_eq!(request.op, ApiOp::ListAll { page: 0, size: 10 });
        assert!(request.body.is_empty());
    }

    #[test]
    fn single_bookmark_paths() {
        let c = client();
        assert_eq!(c.get_by_id(42).url, "http://api.test/api/bookmarks/42");
        let remove = c.remove(42);
        assert_eq!(remove.method, HttpMethod::Delete);
        assert_eq!(remove.url, "http://api.test/api/bookmarks/42");
        assert!(remove.headers.is_empty());
    }

    #[test]
    fn create_and_update_send_json() {
        let payload = BookmarkPayload {
            url: "https://rust-lang.org".to_string(),
            title: "Rust".to_string(),
            description: "home".to_string(),
            tag_names: vec!["lang".to_string()],
        };

        let create = client().create(&payload).unwrap();
        assert_eq!(create.method, HttpMethod::Post);
        assert_eq!(create.url, "http://api.test/api/bookmarks");
        assert_eq!(
            create.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        let sent: BookmarkPayload = serde_json::from_slice(&create.body).unwrap();
        assert_eq!(sent, payload);

        let update = client().update(3, &payload).unwrap();
        assert_eq!(update.method, HttpMethod::Put);
        assert_eq!(update.url, "http://api.test/api/bookmarks/3");
        assert_eq!(update.op, ApiOp::Update { id: 3 });
    }

    #[test]
    fn search_and_tag_are_url_encoded() {
        let search = client().search("c++ & rust", 1, 20);
        assert_eq!(
            search.url,
            "http://api.test/api/bookmarks/search?keyword=c%2B%2B%20%26%20rust&page=1&size=20"
        );

        let by_tag = client().by_tag("dev/ops", 0, 10);
        assert_eq!(
            by_tag.url,
            "http://api.test/api/bookmarks/tag/dev%2Fops?page=0&size=10"
        );
    }

    #[test]
    fn tags_endpoint() {
        let request = client().list_tags();
        assert_eq!(request.url, "http://api.test/api/tags");
        assert_eq!(request.op.name(), "list_tags");
    }

    #[test]
    fn default_client_targets_fixed_base() {
        assert_eq!(ApiClient::default().base_url(), API_BASE);
    }
}
