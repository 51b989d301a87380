//! Composable UI component renderers.
//!
//! Each component prints one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the current listing and count
//! - [`search`]: Search input box
//! - [`tags`]: Tag chips used as filters
//! - [`table`]: Bookmark list (TITLE, TAGS, CREATED, URL)
//! - [`empty`]: Message shown instead of the table
//! - [`footer`]: Keybinding hints, page indicator and status line
//! - [`dialog`]: Form, delete confirmation and detail boxes
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Tag Bar]
//! [Border]
//! [Table Headers]
//! [Table Rows / Empty State]
//! [Border]
//! [Footer]
//! [Status Line]
//! ```

mod dialog;
mod empty;
mod footer;
mod header;
mod search;
mod table;
mod tags;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use dialog::render_dialog;
use empty::render_empty_state;
use footer::{render_footer, render_status_line};
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};
use tags::render_tag_bar;

/// Rows taken by everything except the table body.
pub const CHROME_ROWS: usize = 12;

/// Width of the TITLE column.
pub const TITLE_COLUMN_WIDTH: usize = 32;

/// Width of the TAGS column.
pub const TAGS_COLUMN_WIDTH: usize = 20;

/// Width of the CREATED column.
pub const DATE_COLUMN_WIDTH: usize = 13;

/// Spaces between columns.
pub const COLUMN_GAP: usize = 2;

/// Width taken by every column except URL, including gaps.
pub const FIXED_COLUMNS_WIDTH: usize =
    TITLE_COLUMN_WIDTH + TAGS_COLUMN_WIDTH + DATE_COLUMN_WIDTH + 3 * COLUMN_GAP;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole screen, then any open dialog on top of it.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_tag_bar(current_row, &vm.tag_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let status_row = rows;
    let footer_row = rows.saturating_sub(1);
    let border_row = rows.saturating_sub(2);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
    render_status_line(status_row, vm.footer.status.as_ref(), theme, cols);

    if let Some(dialog) = &vm.dialog {
        render_dialog(dialog, theme, cols, rows);
    }
}
