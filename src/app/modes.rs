//! State machine types for filtering, focus and dialogs.
//!
//! The displayed list is governed by exactly one [`FilterMode`]. Dialogs are
//! split into the create/edit [`Modal`] and the read-only [`Overlay`]s, and
//! [`Focus`] decides which part of the main screen receives typed keys.
//!
//! # Example
//!
//! ```rust
//! use zmarks::app::modes::{FilterMode, Modal};
//!
//! let filter = FilterMode::Tag("rust".to_string());
//! assert_eq!(filter.active_tag(), Some("rust"));
//! assert_eq!(Modal::Closed.is_open(), false);
//! ```

use crate::domain::Bookmark;

/// What governs the displayed bookmark list.
///
/// Entering one mode replaces the other, so a keyword search and a tag filter
/// can never be active at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Unfiltered listing.
    #[default]
    None,
    /// Results of a keyword search (already trimmed).
    Keyword(String),
    /// Bookmarks carrying the given tag.
    Tag(String),
}

impl FilterMode {
    /// Name of the active tag filter, if any.
    #[must_use]
    pub fn active_tag(&self) -> Option<&str> {
        match self {
            Self::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Active search keyword, if any.
    #[must_use]
    pub fn active_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }
}

/// Create/edit dialog state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    /// Creating a new bookmark.
    Create,
    /// Editing an existing bookmark.
    Edit(Bookmark),
}

impl Modal {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Read-only dialogs drawn over the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    /// Waiting for the user to confirm deleting a bookmark.
    ConfirmDelete(Bookmark),
    /// Full details of a bookmark fetched by id.
    Detail(Bookmark),
}

/// Part of the main screen receiving keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Navigating the bookmark list.
    #[default]
    List,
    /// Typing into the search input.
    SearchInput,
    /// Moving between tag chips.
    TagBar,
}

/// Input fields of the bookmark form, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Url,
    Title,
    Description,
    Tags,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [Self; 4] = [Self::Url, Self::Title, Self::Description, Self::Tags];

    /// The next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Url => Self::Title,
            Self::Title => Self::Description,
            Self::Description => Self::Tags,
            Self::Tags => Self::Url,
        }
    }

    /// The previous field, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Url => Self::Tags,
            Self::Title => Self::Url,
            Self::Description => Self::Title,
            Self::Tags => Self::Description,
        }
    }

    /// Field label shown in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Title => "Title",
            Self::Description => "Description (optional)",
            Self::Tags => "Tags (comma separated)",
        }
    }
}
