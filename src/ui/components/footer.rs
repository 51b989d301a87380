//! Footer and status line renderers.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, StatusLine};

/// Renders keybinding hints on the left and the page indicator on the right.
///
/// Hints are truncated first when the line is too narrow for both.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let page_len = footer.page.chars().count();
    let hint_width = cols.saturating_sub(page_len + 2);
    let hints = truncate(&footer.keybindings, hint_width);
    let hints_len = hints.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {hints}");
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(hints_len + page_len + 2))
    );
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", footer.page);
    print!(" ");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the status line: progress in the normal color, failures in red.
///
/// An empty line is printed when there is nothing to report.
pub fn render_status_line(row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let Some(status) = status else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let color = if status.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.text_dim
    };
    let text = truncate(&status.text, cols.saturating_sub(1));

    print!("{}", Theme::fg(color));
    print!(" {text}");
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(text.chars().count() + 1))
    );
    print!("{}", Theme::reset());
    row + 1
}
