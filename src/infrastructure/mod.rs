//! Sandbox filesystem helpers.
//!
//! Inside Zellij's WASM sandbox the host filesystem is reachable under
//! `/host`, which stands in for the directory Zellij was started from
//! (usually `$HOME`).

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, HOST_ROOT};
