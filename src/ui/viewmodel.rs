//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel` and consumed
//! by the renderer. They hold display-ready strings and flags only; nothing in
//! here knows about requests or filters.
//!
//! # Example
//!
//! ```rust
//! use zmarks::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, SearchBarInfo, TagBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         title: "Rust".to_string(),
//!         url: "https://rust-lang.org".to_string(),
//!         tags: "lang".to_string(),
//!         date: "Jan 5, 2024".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(0, 2)],
//!     }],
//!     selected_index: 0,
//!     header: HeaderInfo { title: " Bookmarks (1) ".to_string() },
//!     search_bar: SearchBarInfo { query: String::new(), is_focused: false },
//!     tag_bar: TagBarInfo { chips: vec![], is_focused: false },
//!     footer: FooterInfo { keybindings: "q: quit".to_string(), page: String::new(), status: None },
//!     empty_state: None,
//!     dialog: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows of the visible window of the bookmark list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub tag_bar: TagBarInfo,
    pub footer: FooterInfo,

    /// Replaces the table when loading or when there is nothing to show.
    pub empty_state: Option<EmptyState>,

    /// Dialog drawn over everything else.
    pub dialog: Option<Dialog>,
}

/// One bookmark row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,
    pub url: String,
    /// Tag names joined for display.
    pub tags: String,
    /// Formatted creation date.
    pub date: String,
    pub is_selected: bool,

    /// Character ranges of `title` matching the active search keyword.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub is_focused: bool,
}

/// Row of tag chips used for filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBarInfo {
    pub chips: Vec<TagChip>,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub name: String,
    /// The list is currently filtered by this tag.
    pub is_active: bool,
    /// The tag bar cursor is on this chip.
    pub is_cursor: bool,
}

/// Footer with keybinding hints, page position and the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
    /// Page indicator such as "Page 2 of 5", empty when there is one page.
    pub page: String,
    pub status: Option<StatusLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// Centered message shown instead of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Dialogs drawn over the main screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Form(FormView),
    Confirm(ConfirmView),
    Detail(DetailView),
}

/// Create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    pub fields: Vec<FormFieldView>,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: String,
    pub value: String,
    pub is_active: bool,
}

/// Delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmView {
    pub message: String,
    pub hint: String,
}

/// Read-only bookmark details as label/value rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub rows: Vec<(String, String)>,
    pub hint: String,
}
