//! Table component renderer.
//!
//! Renders the bookmark list as four columns: TITLE, TAGS, CREATED and URL.
//! URL takes whatever width is left.

use super::{COLUMN_GAP, DATE_COLUMN_WIDTH, TAGS_COLUMN_WIDTH, TITLE_COLUMN_WIDTH};
use crate::ui::helpers::{self, padding_for, position_cursor, print_column};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the column headings and returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let gap = " ".repeat(COLUMN_GAP);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let line = format!(
        "{:<title$}{gap}{:<tags$}{gap}{:<date$}{gap}URL",
        "TITLE",
        "TAGS",
        "CREATED",
        title = TITLE_COLUMN_WIDTH,
        tags = TAGS_COLUMN_WIDTH,
        date = DATE_COLUMN_WIDTH,
    );
    print!("{line}");
    print!("{}", " ".repeat(padding_for(&line, cols)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row` and returns the row after the last.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one bookmark row.
///
/// Selected rows get the selection colors across the full width, which also
/// suppresses match highlighting and per-column colors.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let gap = " ".repeat(COLUMN_GAP);
    let set_color = |color: &str| {
        if !item.is_selected {
            print!("{}", Theme::fg(color));
        }
    };

    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(padding_for(&item.title, TITLE_COLUMN_WIDTH)));
    print!("{gap}");

    set_color(&theme.colors.tag_fg);
    print_column(&item.tags, TAGS_COLUMN_WIDTH);
    print!("{gap}");

    set_color(&theme.colors.text_dim);
    print_column(&item.date, DATE_COLUMN_WIDTH);
    print!("{gap}");

    set_color(&theme.colors.url_fg);
    print!("{}", item.url);

    let line_len = super::FIXED_COLUMNS_WIDTH + item.url.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
