//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the API/UI layers.
//!
//! ```text
//! Key / Web Result → Event → handle_event → AppState → Actions → web_request
//!                                 ↑                                  │
//!                                 └──────────── ApiResponse ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Draft state of the create/edit form
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Filter, focus and dialog state machine types
//! - [`state`]: Central state container and request bookkeeping
//! - `view`: View model computation for the renderer

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;
mod view;

pub use actions::Action;
pub use form::BookmarkForm;
pub use handler::{handle_event, Event};
pub use modes::{FilterMode, Focus, FormField, Modal, Overlay};
pub use state::{AppState, Failure, PendingRequest, Purpose};
