//! Shared rendering utilities.
//!
//! Low-level helpers used by several components: cursor positioning, width
//! handling in characters rather than bytes, and match highlighting with
//! proper ANSI reset handling.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
///
/// # Examples
///
/// ```
/// use zmarks::ui::helpers::truncate;
///
/// assert_eq!(truncate("bookmarks", 20), "bookmarks");
/// assert_eq!(truncate("bookmarks", 7), "book...");
/// assert_eq!(truncate("bookmarks", 2), "bo");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Number of spaces needed to pad `text` to `width` characters.
#[must_use]
pub fn padding_for(text: &str, width: usize) -> usize {
    width.saturating_sub(text.chars().count())
}

/// Prints `text` left-aligned in a column of `width` characters.
pub fn print_column(text: &str, width: usize) {
    print!("{text}{}", " ".repeat(padding_for(text, width)));
}

/// Prints `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices with exclusive end. Selected
/// rows are printed plain so the highlight does not fight the selection
/// background.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("", 0), "");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn padding_uses_character_width() {
        assert_eq!(padding_for("ü", 3), 2);
        assert_eq!(padding_for("toolong", 3), 0);
    }
}
