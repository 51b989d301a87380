//! Tag bar component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TagBarInfo, TagChip};

/// Renders the tag chips on a single line and returns the next row.
///
/// The active filter chip is drawn inverted, the cursor chip (only while the
/// bar has focus) uses the selection colors. Chips that do not fit are cut
/// off with a trailing `…`.
pub fn render_tag_bar(row: usize, bar: &TagBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let label = " Tags: ";
    let label_color = if bar.is_focused {
        &theme.colors.focus_border
    } else {
        &theme.colors.text_dim
    };
    print!("{}{label}{}", Theme::fg(label_color), Theme::reset());
    let mut used = label.chars().count();

    if bar.chips.is_empty() {
        let none = "(none)";
        print!("{}{none}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        used += none.len();
    }

    for chip in &bar.chips {
        let text = format!(" {} ", chip.name);
        let width = text.chars().count() + 1;
        if used + width + 1 > cols {
            print!("{}…{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
            used += 1;
            break;
        }
        render_chip(&text, chip, theme);
        print!(" ");
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

fn render_chip(text: &str, chip: &TagChip, theme: &Theme) {
    if chip.is_cursor {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else if chip.is_active {
        print!("{}", Theme::fg(&theme.colors.tag_active_fg));
        print!("{}", Theme::bg(&theme.colors.tag_active_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.tag_fg));
    }
    if chip.is_active {
        print!("{}", Theme::bold());
    }
    print!("{text}");
    print!("{}", Theme::reset());
}
