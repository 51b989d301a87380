//! Response decoding.
//!
//! The host hands back a status code and a raw body for every request. Bodies
//! are parsed as JSON into the shape the operation expects without looking at
//! the status; a body that does not parse is an error, a body that parses into
//! the wrong data is passed through as-is.

use super::request::ApiOp;
use crate::domain::{Bookmark, Page, Result, Tag, ZmarksError};
use serde::de::DeserializeOwned;

/// Successfully decoded response of an API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply {
    /// `list_all`, `search`, `by_tag`.
    Page(Page<Bookmark>),
    /// `get_by_id`, `create`, `update`.
    Bookmark(Bookmark),
    /// `remove`.
    Removed,
    /// `list_tags`.
    Tags(Vec<Tag>),
}

impl ApiOp {
    /// Decodes a response body for this operation.
    ///
    /// # Errors
    ///
    /// - [`ZmarksError::Decode`] if the body is not the expected JSON shape
    /// - [`ZmarksError::Transport`] if a `remove` did not get a 2xx status
    ///
    /// # Examples
    ///
    /// ```
    /// use zmarks::api::{ApiOp, ApiReply};
    ///
    /// let reply = ApiOp::ListTags.decode(200, br#"[{"id":1,"name":"rust"}]"#).unwrap();
    /// assert!(matches!(reply, ApiReply::Tags(tags) if tags.len() == 1));
    /// ```
    pub fn decode(&self, status: u16, body: &[u8]) -> Result<ApiReply> {
        match self {
            Self::ListAll { .. } | Self::Search { .. } | Self::ByTag { .. } => {
                self.parse::<Page<Bookmark>>(body).map(ApiReply::Page)
            }
            Self::GetById { .. } | Self::Create | Self::Update { .. } => {
                self.parse::<Bookmark>(body).map(ApiReply::Bookmark)
            }
            Self::ListTags => self
                .parse::<Option<Vec<Tag>>>(body)
                .map(|tags| ApiReply::Tags(tags.unwrap_or_default())),
            Self::Remove { .. } => {
                if (200..300).contains(&status) {
                    Ok(ApiReply::Removed)
                } else {
                    Err(ZmarksError::Transport {
                        status,
                        message: String::from_utf8_lossy(body).into_owned(),
                    })
                }
            }
        }
    }

    fn parse<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T> {
        serde_json::from_slice(body).map_err(|source| ZmarksError::Decode {
            operation: self.name(),
            source,
        })
    }
}
