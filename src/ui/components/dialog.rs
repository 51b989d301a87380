//! Dialog box renderer for the form, delete confirmation and detail view.
//!
//! Dialogs are drawn last, as a framed box centered over the main screen.

use crate::ui::helpers::{padding_for, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmView, DetailView, Dialog, FormView};

/// Widest a dialog box gets, frame included.
const MAX_DIALOG_WIDTH: usize = 72;

/// Width of the label column in the detail view.
const DETAIL_LABEL_WIDTH: usize = 13;

/// A line inside a dialog, with its color.
struct Line {
    text: String,
    color: String,
    is_highlighted: bool,
}

impl Line {
    fn new(text: impl Into<String>, color: &str) -> Self {
        Self {
            text: text.into(),
            color: color.to_string(),
            is_highlighted: false,
        }
    }
}

pub fn render_dialog(dialog: &Dialog, theme: &Theme, cols: usize, rows: usize) {
    let (title, lines) = match dialog {
        Dialog::Form(form) => form_lines(form, theme),
        Dialog::Confirm(confirm) => confirm_lines(confirm, theme),
        Dialog::Detail(detail) => detail_lines(detail, theme),
    };
    render_box(&title, &lines, theme, cols, rows);
}

fn form_lines(form: &FormView, theme: &Theme) -> (String, Vec<Line>) {
    let mut lines = vec![Line::new("", &theme.colors.text_normal)];
    for field in &form.fields {
        let marker = if field.is_active { "▸" } else { " " };
        let label_color = if field.is_active {
            &theme.colors.focus_border
        } else {
            &theme.colors.text_dim
        };
        lines.push(Line::new(format!("{marker} {}", field.label), label_color));

        let cursor = if field.is_active { "_" } else { "" };
        let mut value = Line::new(
            format!("  {}{cursor}", field.value),
            &theme.colors.text_normal,
        );
        value.is_highlighted = field.is_active;
        lines.push(value);
        lines.push(Line::new("", &theme.colors.text_normal));
    }
    lines.push(Line::new(form.hint.clone(), &theme.colors.text_dim));
    (form.title.clone(), lines)
}

fn confirm_lines(confirm: &ConfirmView, theme: &Theme) -> (String, Vec<Line>) {
    let lines = vec![
        Line::new("", &theme.colors.text_normal),
        Line::new(confirm.message.clone(), &theme.colors.error_fg),
        Line::new("", &theme.colors.text_normal),
        Line::new(confirm.hint.clone(), &theme.colors.text_dim),
    ];
    ("Confirm".to_string(), lines)
}

fn detail_lines(detail: &DetailView, theme: &Theme) -> (String, Vec<Line>) {
    let mut lines = vec![Line::new("", &theme.colors.text_normal)];
    for (label, value) in &detail.rows {
        let color = if label == "URL" {
            &theme.colors.url_fg
        } else {
            &theme.colors.text_normal
        };
        lines.push(Line::new(
            format!("{label:<width$}{value}", width = DETAIL_LABEL_WIDTH),
            color,
        ));
    }
    lines.push(Line::new("", &theme.colors.text_normal));
    lines.push(Line::new(detail.hint.clone(), &theme.colors.text_dim));
    (detail.title.clone(), lines)
}

/// Draws a framed box centered on the screen.
///
/// Lines longer than the box are truncated; boxes taller than the screen lose
/// their last lines.
fn render_box(title: &str, lines: &[Line], theme: &Theme, cols: usize, rows: usize) {
    let width = MAX_DIALOG_WIDTH.min(cols.saturating_sub(4));
    let inner = width.saturating_sub(2);
    if inner < 4 {
        return;
    }
    let height = (lines.len() + 2).min(rows);
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = cols.saturating_sub(width) / 2 + 1;
    let frame = Theme::fg(&theme.colors.dialog_border);

    let heading = truncate(&format!(" {title} "), inner.saturating_sub(2));
    position_cursor(top, left);
    print!("{frame}┌─{}{heading}{}", Theme::bold(), Theme::reset());
    print!(
        "{frame}{}┐{}",
        "─".repeat(inner.saturating_sub(heading.chars().count() + 1)),
        Theme::reset()
    );

    for (offset, line) in lines.iter().take(height.saturating_sub(2)).enumerate() {
        let text = truncate(&format!(" {}", line.text), inner);
        position_cursor(top + 1 + offset, left);
        print!("{frame}│{}", Theme::reset());
        if line.is_highlighted {
            print!("{}", Theme::bg(&theme.colors.border));
        }
        print!("{}{text}", Theme::fg(&line.color));
        print!("{}", " ".repeat(padding_for(&text, inner)));
        print!("{}{frame}│{}", Theme::reset(), Theme::reset());
    }

    position_cursor(top + height.saturating_sub(1), left);
    print!("{frame}└{}┘{}", "─".repeat(inner), Theme::reset());
}
