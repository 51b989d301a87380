//! Bookmark and tag domain models.
//!
//! These types mirror the JSON shapes served by the bookmark API. The client
//! only ever holds transient copies: every list fetch replaces the previous
//! one wholesale.

use serde::{Deserialize, Deserializer, Serialize};

/// Display format for bookmark timestamps ("Jan 5, 2024").
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Deserializes `null` as the type's default value.
///
/// The backend occasionally serializes empty collections and strings as
/// `null`; the client treats those the same as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A saved URL record.
///
/// Owned by the backend; `id` is server-assigned. `tag_names` preserves the
/// server's order and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_names: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Bookmark {
    /// Returns the creation date formatted for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use zmarks::domain::Bookmark;
    ///
    /// let bookmark: Bookmark = serde_json::from_str(
    ///     r#"{"id":1,"url":"https://a.dev","title":"A","tagNames":[],"createdAt":"2024-01-05T10:20:30"}"#,
    /// ).unwrap();
    /// assert_eq!(bookmark.display_date(), "Jan 5, 2024");
    /// ```
    #[must_use]
    pub fn display_date(&self) -> String {
        format_timestamp(&self.created_at)
    }

    /// Returns the description if it is present and not blank.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// A named label that can be attached to many bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Request body for creating or updating a bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkPayload {
    pub url: String,
    pub title: String,
    pub description: String,
    pub tag_names: Vec<String>,
}

/// A page of results wrapped in the backend's paged envelope.
///
/// Only `content` matters for display. The metadata fields drive page
/// navigation and default to zero when the server omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<T>,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

impl<T> Page<T> {
    /// Extracts the pagination metadata.
    #[must_use]
    pub fn info(&self) -> PageInfo {
        PageInfo {
            number: self.number,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
        }
    }
}

/// Pagination metadata of the currently displayed page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based page number.
    pub number: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl PageInfo {
    /// Whether a page after the current one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    /// Whether a page before the current one exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 0
    }
}

/// Formats a backend timestamp as a short date.
///
/// Accepts RFC 3339 timestamps, offset-less `LocalDateTime` strings (with or
/// without fractional seconds) and plain dates. Anything else is returned
/// unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DATE_FORMAT).to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DATE_FORMAT).to_string();
    }
    if let Ok(parsed) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}
