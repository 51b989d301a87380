//! Side effects returned by the event handler.
//!
//! The handler never talks to the host directly. It returns [`Action`]s and
//! the plugin shim executes them in order after each event.
//!
//! # Example
//!
//! ```rust
//! use zmarks::api::{ApiClient, RequestId};
//! use zmarks::app::Action;
//!
//! let action = Action::Send {
//!     id: RequestId(1),
//!     request: ApiClient::default().list_tags(),
//! };
//! assert!(matches!(action, Action::Send { .. }));
//! ```

use crate::api::{ApiRequest, RequestId};

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP request through the host.
    ///
    /// The id must be attached to the request context so the result can be
    /// routed back as [`Event::ApiResponse`](super::Event::ApiResponse).
    Send {
        /// Identifier the response will carry.
        id: RequestId,
        /// Request to perform.
        request: ApiRequest,
    },
}
