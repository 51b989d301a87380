//! Client for the bookmark REST API.
//!
//! The plugin runs inside Zellij's WASM sandbox, so HTTP goes through the
//! host's `web_request` command and results come back later as events. This
//! module is the pure part of that exchange:
//!
//! - [`client`]: builds [`ApiRequest`]s for each operation
//! - [`request`]: request descriptors and identifiers
//! - [`response`]: decodes `(status, body)` pairs into [`ApiReply`]

pub mod client;
pub mod request;
pub mod response;

pub use client::{ApiClient, API_BASE, DEFAULT_PAGE_SIZE};
pub use request::{ApiOp, ApiRequest, HttpMethod, RequestId};
pub use response::ApiReply;
