//! Event handling and state transitions.
//!
//! [`handle_event`] is the only way state changes. The plugin shim turns key
//! presses, permission results and web responses into [`Event`]s, and
//! executes the [`Action`]s returned here.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `PermissionDenied`
//! - **Navigation**: `KeyDown`, `KeyUp`, `TagLeft`, `TagRight`, `NextPage`, `PrevPage`
//! - **Focus**: `FocusSearch`, `FocusTags`, `FocusList`, `Escape`
//! - **Input**: `Char`, `Backspace`, `NextField`, `PrevField`
//! - **Commands**: `SubmitSearch`, `ToggleTag`, `Reload`, `OpenCreate`, `OpenEdit`,
//!   `SubmitForm`, `RequestDelete`, `ConfirmDelete`, `CancelDelete`, `ShowDetail`
//! - **Network**: `ApiResponse`
//!
//! # Example
//!
//! ```rust
//! use zmarks::app::{handle_event, AppState, Event};
//! use zmarks::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 10);
//! let (render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(render);
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), zmarks::ZmarksError>(())
//! ```

use super::actions::Action;
use super::modes::{Focus, Overlay};
use super::state::AppState;
use crate::api::RequestId;
use crate::domain::{Result, ZmarksError};

/// Events triggered by user input, the host, or web responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Web access was granted: performs the initial combined load.
    Mount,
    /// Web access was refused; nothing can be loaded.
    PermissionDenied,

    /// Moves the selection down (wraps).
    KeyDown,
    /// Moves the selection up (wraps).
    KeyUp,
    TagLeft,
    TagRight,
    NextPage,
    PrevPage,

    FocusSearch,
    FocusTags,
    FocusList,

    /// Backs out of the innermost dialog or focus.
    Escape,

    /// Typed character for the search input or the form.
    Char(char),
    Backspace,
    NextField,
    PrevField,

    /// Searches for the trimmed search input.
    SubmitSearch,
    /// Toggles the tag under the tag bar cursor.
    ToggleTag,
    /// Clears any filter and reloads bookmarks and tags.
    Reload,

    OpenCreate,
    OpenEdit,
    SubmitForm,

    RequestDelete,
    ConfirmDelete,
    CancelDelete,

    ShowDetail,

    /// Hides the plugin pane.
    CloseFocus,

    /// Result of a request previously issued through [`Action::Send`].
    ApiResponse {
        id: RequestId,
        status: u16,
        body: Vec<u8>,
    },
}

impl Event {
    /// Short name for spans and logs, without payloads.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::PermissionDenied => "permission_denied",
            Self::KeyDown => "key_down",
            Self::KeyUp => "key_up",
            Self::TagLeft => "tag_left",
            Self::TagRight => "tag_right",
            Self::NextPage => "next_page",
            Self::PrevPage => "prev_page",
            Self::FocusSearch => "focus_search",
            Self::FocusTags => "focus_tags",
            Self::FocusList => "focus_list",
            Self::Escape => "escape",
            Self::Char(_) => "char",
            Self::Backspace => "backspace",
            Self::NextField => "next_field",
            Self::PrevField => "prev_field",
            Self::SubmitSearch => "submit_search",
            Self::ToggleTag => "toggle_tag",
            Self::Reload => "reload",
            Self::OpenCreate => "open_create",
            Self::OpenEdit => "open_edit",
            Self::SubmitForm => "submit_form",
            Self::RequestDelete => "request_delete",
            Self::ConfirmDelete => "confirm_delete",
            Self::CancelDelete => "cancel_delete",
            Self::ShowDetail => "show_detail",
            Self::CloseFocus => "close_focus",
            Self::ApiResponse { .. } => "api_response",
        }
    }
}

/// Processes an event and returns whether to re-render plus the actions to run.
///
/// # Errors
///
/// Returns [`ZmarksError::Encode`] if a form submit cannot be serialized.
/// State is left as it was before the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::Mount => {
            tracing::info!("web access granted, loading bookmarks");
            Ok((true, state.begin_reload()))
        }
        Event::PermissionDenied => {
            tracing::warn!("web access denied");
            state.record_failure(
                "permission",
                &ZmarksError::Config("web access permission denied".to_string()),
            );
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::TagLeft => {
            state.move_tag_cursor_left();
            Ok((true, vec![]))
        }
        Event::TagRight => {
            state.move_tag_cursor_right();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let actions = state.change_page(true);
            Ok((!actions.is_empty(), actions))
        }
        Event::PrevPage => {
            let actions = state.change_page(false);
            Ok((!actions.is_empty(), actions))
        }
        Event::FocusSearch => {
            state.focus = Focus::SearchInput;
            Ok((true, vec![]))
        }
        Event::FocusTags => {
            state.focus = Focus::TagBar;
            Ok((true, vec![]))
        }
        Event::FocusList => {
            state.focus = Focus::List;
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.overlay != Overlay::None {
                state.overlay = Overlay::None;
            } else if state.modal.is_open() {
                tracing::debug!("form closed without saving");
                state.close_modal();
            } else if state.focus != Focus::List {
                state.focus = Focus::List;
            } else {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let changed = state.push_char(*c);
            tracing::trace!(char = %c, changed, "character typed");
            Ok((changed, vec![]))
        }
        Event::Backspace => Ok((state.pop_char(), vec![])),
        Event::NextField => {
            if !state.modal.is_open() {
                return Ok((false, vec![]));
            }
            state.form.focus_next();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            if !state.modal.is_open() {
                return Ok((false, vec![]));
            }
            state.form.focus_previous();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            tracing::debug!(query = %state.search_input, "search submitted");
            state.focus = Focus::List;
            Ok((true, state.begin_search()))
        }
        Event::ToggleTag => {
            let actions = state.toggle_tag_at_cursor();
            Ok((!actions.is_empty(), actions))
        }
        Event::Reload => Ok((true, state.begin_reload())),
        Event::OpenCreate => {
            state.open_create();
            Ok((true, vec![]))
        }
        Event::OpenEdit => Ok((state.open_edit(), vec![])),
        Event::SubmitForm => {
            let actions = state.submit_form()?;
            Ok((!actions.is_empty(), actions))
        }
        Event::RequestDelete => Ok((state.request_delete(), vec![])),
        Event::ConfirmDelete => Ok((true, state.confirm_delete())),
        Event::CancelDelete => {
            tracing::debug!("delete declined");
            state.cancel_delete();
            Ok((true, vec![]))
        }
        Event::ShowDetail => Ok((false, state.show_detail())),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ApiResponse { id, status, body } => {
            Ok((true, state.apply_response(*id, *status, body)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{FilterMode, Modal};
    use crate::ui::Theme;

    #[test]
    fn escape_unwinds_innermost_first() {
        let mut state = AppState::new(Theme::default(), 10);
        state.focus = Focus::SearchInput;
        state.open_create();

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.modal, Modal::Closed);
        assert_eq!(state.focus, Focus::SearchInput);

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.focus, Focus::List);

        let (render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn close_focus_hides_the_pane() {
        let mut state = AppState::new(Theme::default(), 10);
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn permission_denied_is_reported() {
        let mut state = AppState::new(Theme::default(), 10);
        handle_event(&mut state, &Event::PermissionDenied).unwrap();
        assert_eq!(
            state.last_failure.as_ref().map(|f| f.operation),
            Some("permission")
        );
    }

    #[test]
    fn toggle_without_tags_does_nothing() {
        let mut state = AppState::new(Theme::default(), 10);
        let (render, actions) = handle_event(&mut state, &Event::ToggleTag).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.filter, FilterMode::None);
    }

    #[test]
    fn form_typing_and_field_navigation() {
        let mut state = AppState::new(Theme::default(), 10);
        handle_event(&mut state, &Event::OpenCreate).unwrap();
        for c in "https://x.dev".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::NextField).unwrap();
        handle_event(&mut state, &Event::Char('X')).unwrap();
        handle_event(&mut state, &Event::PrevField).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();

        assert_eq!(state.form.url, "https://x.de");
        assert_eq!(state.form.title, "X");
        assert!(state.search_input.is_empty());
    }
}
