//! Top-level rendering entry point.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from `AppState`, then
//! hand it to the component renderers.
//!
//! # Example
//!
//! ```rust
//! use zmarks::app::AppState;
//! use zmarks::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default(), 10);
//! render(&state, 24, 80);
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; Zellij
/// does that before each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if rows < components::CHROME_ROWS {
        crate::ui::helpers::position_cursor(1, 1);
        print!("{}", crate::ui::helpers::truncate("Pane too small", cols));
        return;
    }
    components::render_screen(vm, theme, cols, rows);
}
