//! zmarks: a Zellij plugin for browsing and editing bookmarks stored behind a
//! REST API.
//!
//! - Paged bookmark list with keyword search and tag filtering
//! - Create, edit, delete (with confirmation) and a detail view
//! - Requests go through the host's `web_request`; results arrive as events
//! - Catppuccin themes or a custom TOML theme
//! - OpenTelemetry traces written to a local file

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, web results
//! └─────────────────────────────────────────────────────┘
//!                        │ Event            ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, filter / dialog state            │
//! │  - Request bookkeeping and stale-response drop      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ API Layer (api/)      │   │ UI Layer (ui/)        │
//! │ - Request builders    │   │ - Components          │
//! │ - Response decoding   │   │ - Theming             │
//! └───────────────────────┘   └───────────────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and Infrastructure (paths)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zmarks.wasm" {
//!         theme "catppuccin-latte"
//!         page_size "20"
//!         trace_level "zmarks=debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zmarks::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//!
//! // One request for the first page, one for the tags.
//! assert!(actions.iter().all(|a| matches!(a, Action::Send { .. })));
//! assert!(state.loading);
//! # Ok::<(), zmarks::ZmarksError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use api::{ApiClient, DEFAULT_PAGE_SIZE};
pub use app::{handle_event, Action, AppState, Event, FilterMode};
pub use domain::{Bookmark, Result, Tag, ZmarksError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration from the KDL `plugin { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme: `catppuccin-mocha` (default), `-latte`, `-frappe`,
    /// `-macchiato`. Ignored when `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme; `~` resolves inside the sandbox.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for traces. Default `info`.
    pub trace_level: Option<String>,

    /// Bookmarks per page, at least 1.
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Reads the plugin configuration map, falling back to defaults for
    /// missing or invalid values.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zmarks::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-frappe".to_string());
    /// map.insert("page_size".to_string(), "25".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
    /// assert_eq!(config.page_size, 25);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let page_size = config.get("page_size").map_or(DEFAULT_PAGE_SIZE, |raw| {
            match raw.trim().parse::<u32>() {
                Ok(size) if size >= 1 => size,
                _ => {
                    tracing::warn!(page_size = %raw, "invalid page_size, using default");
                    DEFAULT_PAGE_SIZE
                }
            }
        });

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            page_size,
        }
    }

    /// Resolves the configured theme, falling back to the default palette.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(file) = &self.theme_file {
            let path = infrastructure::expand_tilde(file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name
            .as_deref()
            .map_or_else(Theme::default, |name| {
                Theme::from_name(name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %name, "unknown theme, using default");
                    Theme::default()
                })
            })
    }
}

/// Creates the application state for `config`.
///
/// Nothing is fetched yet: the first load is triggered by [`Event::Mount`]
/// once web access has been granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(page_size = config.page_size, "initializing zmarks");
    AppState::new(config.load_theme(), config.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn zero_or_garbage_page_size_falls_back() {
        for raw in ["0", "-3", "ten", ""] {
            let config = Config::from_zellij(&map(&[("page_size", raw)]));
            assert_eq!(config.page_size, DEFAULT_PAGE_SIZE, "page_size {raw:?}");
        }
    }

    #[test]
    fn blank_options_are_unset() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "")]));
        assert_eq!(config.theme_name, None);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn missing_theme_file_uses_default_theme() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, Theme::default().name);
    }

    #[test]
    fn named_theme_is_loaded() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_ne!(config.load_theme().name, Theme::default().name);
    }

    #[test]
    fn initialize_applies_page_size() {
        let config = Config {
            page_size: 3,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.page_size(), 3);
        assert!(state.bookmarks.is_empty());
        assert!(!state.loading);
    }
}
