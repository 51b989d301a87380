//! Zellij plugin entry point.
//!
//! A thin shim between Zellij and the zmarks library: it turns host events
//! into [`Event`]s, feeds them to [`handle_event`], and performs the returned
//! [`Action`]s with host commands.
//!
//! # Lifecycle
//!
//! 1. **Load**: parse config, start tracing, build `AppState`, request
//!    `WebAccess`, subscribe to events
//! 2. **Permission granted**: `Event::Mount` issues the first combined load
//! 3. **Update**: keys and web results go through `handle_event`
//! 4. **Render**: delegated to `zmarks::ui::render`
//!
//! # Requests
//!
//! `Action::Send` becomes a `web_request` whose context map carries the
//! request id, the operation name and the issuing span's trace context. The
//! host echoes that map back in `WebRequestResult`, which becomes
//! `Event::ApiResponse`.
//!
//! # Keybindings
//!
//! List:
//! - `j`/`Down`/`Ctrl+n`, `k`/`Up`/`Ctrl+p`: move selection
//! - `Enter`: show details
//! - `/`: search, `t`/`Tab`: tag bar
//! - `a`: add, `e`: edit, `d`: delete
//! - `r`: reload, `]`/`[`: next/previous page
//! - `q`: hide, `Esc`: nothing
//!
//! Search input: type, `Enter` search, `Tab` tag bar, `Esc` back to the list.
//!
//! Tag bar: `h`/`l`/arrows move, `Enter`/`Space` toggle, `Tab` list, `/` search.
//!
//! Form: type, `Tab`/`Down` next field, `Up` previous, `Enter` save, `Esc` cancel.
//!
//! Delete confirmation: `y`/`Enter` delete, `n`/`Esc` keep.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zmarks::api::{ApiRequest, HttpMethod, RequestId};
use zmarks::app::{Focus, Overlay};
use zmarks::observability::TraceContext;
use zmarks::{handle_event, Action, AppState, Config, Event};

register_plugin!(State);

/// `web_request` context key holding the [`RequestId`].
const REQUEST_ID_KEY: &str = "request_id";

/// `web_request` context key holding the operation name, for logs only.
const OPERATION_KEY: &str = "operation";

struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zmarks::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zmarks::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(?config, "parsed configuration");

        self.app = zmarks::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin loaded, waiting for web access");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        // Must be attached before the update span opens so it becomes its parent.
        let _remote_parent = Self::remote_parent(&event);

        let event_name = Self::event_name(&event);
        let _guard = tracing::debug_span!(
            "plugin_update",
            otel.name = %format!("plugin_update::{event_name}"),
            event_type = %event_name
        )
        .entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::Mount,
                PermissionStatus::Denied => Event::PermissionDenied,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zmarks::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn remote_parent(event: &zellij_tile::prelude::Event) -> Option<opentelemetry::ContextGuard> {
        let zellij_tile::prelude::Event::WebRequestResult(_, _, _, context) = event else {
            return None;
        };
        TraceContext::extract(context)?.attach()
    }

    fn map_web_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let id = match context.get(REQUEST_ID_KEY).map(|raw| raw.parse::<RequestId>()) {
            Some(Ok(id)) => id,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "web result with malformed request id");
                return None;
            }
            None => {
                tracing::debug!("web result without request id, ignoring");
                return None;
            }
        };

        tracing::debug!(
            request_id = %id,
            operation = context.get(OPERATION_KEY).map_or("unknown", String::as_str),
            status,
            body_len = body.len(),
            "web request completed"
        );
        Some(Event::ApiResponse { id, status, body })
    }

    /// Maps a key press to an event according to what currently has input.
    ///
    /// Dialogs capture all keys; otherwise the focused widget decides.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        match self.app.overlay {
            Overlay::ConfirmDelete(_) => return Self::confirm_key(key),
            Overlay::Detail(_) => return Self::detail_key(key),
            Overlay::None => {}
        }
        if self.app.modal.is_open() {
            return Self::form_key(key);
        }
        match self.app.focus {
            Focus::SearchInput => Self::search_key(key),
            Focus::TagBar => Self::tag_bar_key(key),
            Focus::List => Self::list_key(key),
        }
    }

    fn confirm_key(key: &KeyWithModifier) -> Option<Event> {
        match key.bare_key {
            BareKey::Char('y' | 'Y') | BareKey::Enter => Some(Event::ConfirmDelete),
            BareKey::Char('n' | 'N') | BareKey::Esc => Some(Event::CancelDelete),
            _ => None,
        }
    }

    fn detail_key(key: &KeyWithModifier) -> Option<Event> {
        match key.bare_key {
            BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::Escape),
            _ => None,
        }
    }

    fn form_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Enter => Event::SubmitForm,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if is_typed(key) => Event::Char(c),
            _ => return None,
        })
    }

    fn search_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Enter => Event::SubmitSearch,
            BareKey::Esc => Event::Escape,
            BareKey::Tab => Event::FocusTags,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if is_typed(key) => Event::Char(c),
            _ => return None,
        })
    }

    fn tag_bar_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Left | BareKey::Char('h') => Event::TagLeft,
            BareKey::Right | BareKey::Char('l') => Event::TagRight,
            BareKey::Enter | BareKey::Char(' ') => Event::ToggleTag,
            BareKey::Tab => Event::FocusList,
            BareKey::Char('/') => Event::FocusSearch,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn list_key(key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::ShowDetail,
            BareKey::Char('/') => Event::FocusSearch,
            BareKey::Tab | BareKey::Char('t') => Event::FocusTags,
            BareKey::Char('a') => Event::OpenCreate,
            BareKey::Char('e') => Event::OpenEdit,
            BareKey::Char('d') => Event::RequestDelete,
            BareKey::Char('r') => Event::Reload,
            BareKey::Char(']') => Event::NextPage,
            BareKey::Char('[') => Event::PrevPage,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::Send { id, request } => Self::send(id, request),
        }
    }

    fn send(id: RequestId, request: ApiRequest) {
        let operation = request.op.name();
        let _guard = tracing::debug_span!(
            "web_request",
            otel.name = %format!("web_request::{operation}"),
            request_id = %id,
            method = ?request.method,
            url = %request.url
        )
        .entered();

        let mut context = BTreeMap::new();
        context.insert(REQUEST_ID_KEY.to_string(), id.to_string());
        context.insert(OPERATION_KEY.to_string(), operation.to_string());
        if let Some(trace) = TraceContext::from_current() {
            trace.inject(&mut context);
        }

        let verb = match request.method {
            HttpMethod::Get => HttpVerb::Get,
            HttpMethod::Post => HttpVerb::Post,
            HttpMethod::Put => HttpVerb::Put,
            HttpMethod::Delete => HttpVerb::Delete,
        };

        web_request(&request.url, verb, request.headers, request.body, context);
    }
}

/// Printable input: shift is allowed, ctrl and alt chords are not.
fn is_typed(key: &KeyWithModifier) -> bool {
    !key.key_modifiers.contains(&KeyModifier::Ctrl) && !key.key_modifiers.contains(&KeyModifier::Alt)
}
