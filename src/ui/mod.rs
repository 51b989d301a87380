//! Terminal user interface.
//!
//! The UI layer is declarative: state is turned into a view model, and the
//! view model into ANSI-styled output.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Component renderers and layout constants
//! - [`helpers`]: Cursor positioning, truncation and highlighting
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Dialog, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, TagBarInfo, UIViewModel,
};
