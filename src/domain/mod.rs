//! Domain layer for the zmarks plugin.
//!
//! Holds the bookmark data model and the crate-wide error type, independent of
//! Zellij APIs and rendering concerns.
//!
//! - [`error`]: Error types and result alias
//! - [`bookmark`]: Bookmark, tag, payload and paged envelope models

pub mod bookmark;
pub mod error;

pub use bookmark::{format_timestamp, Bookmark, BookmarkPayload, Page, PageInfo, Tag};
pub use error::{Result, ZmarksError};
