//! View model computation.
//!
//! Turns an [`AppState`] snapshot into a [`UIViewModel`] for the renderer:
//! windowing of the bookmark list around the selection, keyword match
//! highlighting in titles, and the text of every dialog.

use super::modes::{FilterMode, Focus, FormField, Modal, Overlay};
use super::state::AppState;
use crate::domain::{format_timestamp, Bookmark};
use crate::ui::components::{CHROME_ROWS, FIXED_COLUMNS_WIDTH, TAGS_COLUMN_WIDTH, TITLE_COLUMN_WIDTH};
use crate::ui::helpers::truncate;
use crate::ui::viewmodel::{
    ConfirmView, DetailView, Dialog, DisplayItem, EmptyState, FooterInfo, FormFieldView, FormView,
    HeaderInfo, SearchBarInfo, StatusLine, TagBarInfo, TagChip, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

impl AppState {
    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// # Windowing
    ///
    /// The visible window is centered on the selection and shifted back when
    /// it would run past the end of the list, so the screen stays full.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zmarks::app::AppState;
    /// use zmarks::ui::Theme;
    ///
    /// let state = AppState::new(Theme::default(), 10);
    /// let vm = state.compute_viewmodel(24, 80);
    /// assert!(vm.display_items.is_empty());
    /// assert!(vm.empty_state.is_some());
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let (display_items, selected_index) = self.compute_display_items(rows, cols);

        UIViewModel {
            display_items,
            selected_index,
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search_input.clone(),
                is_focused: self.focus == Focus::SearchInput && !self.modal.is_open(),
            },
            tag_bar: self.compute_tag_bar(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            dialog: self.compute_dialog(),
        }
    }

    fn compute_display_items(&self, rows: usize, cols: usize) -> (Vec<DisplayItem>, usize) {
        if self.bookmarks.is_empty() {
            return (vec![], 0);
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS);
        let url_width = cols.saturating_sub(FIXED_COLUMNS_WIDTH);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.bookmarks.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.bookmarks.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = self
            .filter
            .active_keyword()
            .map(|keyword| (SkimMatcherV2::default().ignore_case(), keyword));

        let items = self.bookmarks[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, bookmark)| {
                let is_selected = visible_start + offset == self.selected_index;
                Self::compute_display_item(bookmark, is_selected, url_width, matcher.as_ref())
            })
            .collect();

        (items, self.selected_index.saturating_sub(visible_start))
    }

    fn compute_display_item(
        bookmark: &Bookmark,
        is_selected: bool,
        url_width: usize,
        matcher: Option<&(SkimMatcherV2, &str)>,
    ) -> DisplayItem {
        let title = truncate(&bookmark.title, TITLE_COLUMN_WIDTH);
        let visible_chars = title.chars().count();

        let highlight_ranges = matcher.map_or_else(Vec::new, |(m, keyword)| {
            highlight_ranges(&bookmark.title, keyword, m)
                .into_iter()
                .filter(|&(start, _)| start < visible_chars)
                .map(|(start, end)| (start, end.min(visible_chars)))
                .collect()
        });

        DisplayItem {
            title,
            url: truncate(&bookmark.url, url_width),
            tags: truncate(&bookmark.tag_names.join(", "), TAGS_COLUMN_WIDTH),
            date: bookmark.display_date(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let total = self.page.total_elements;
        let title = match &self.filter {
            FilterMode::None => format!(" Bookmarks ({total}) "),
            FilterMode::Keyword(keyword) => format!(" Search: \"{keyword}\" ({total}) "),
            FilterMode::Tag(tag) => format!(" Tag: {tag} ({total}) "),
        };
        HeaderInfo { title }
    }

    fn compute_tag_bar(&self) -> TagBarInfo {
        let active = self.filter.active_tag();
        let is_focused = self.focus == Focus::TagBar && !self.modal.is_open();
        let chips = self
            .tags
            .iter()
            .enumerate()
            .map(|(idx, tag)| TagChip {
                name: tag.name.clone(),
                is_active: active == Some(tag.name.as_str()),
                is_cursor: is_focused && idx == self.tag_cursor,
            })
            .collect();
        TagBarInfo { chips, is_focused }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::List => {
                "j/k: move  Enter: details  a: add  e: edit  d: delete  /: search  t: tags  [/]: page  r: reload  q: quit"
            }
            Focus::SearchInput => "Type to search  Enter: search  Tab: tags  Esc: back",
            Focus::TagBar => "h/l: move  Enter: toggle filter  Tab: list  Esc: back",
        }
        .to_string();

        let page = if self.page.total_pages > 1 {
            format!("Page {} of {}", self.page.number + 1, self.page.total_pages)
        } else {
            String::new()
        };

        let status = if self.loading {
            Some(StatusLine {
                text: "Loading...".to_string(),
                is_error: false,
            })
        } else {
            self.last_failure.as_ref().map(|failure| StatusLine {
                text: failure.to_string(),
                is_error: true,
            })
        };

        FooterInfo {
            keybindings,
            page,
            status,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.bookmarks.is_empty() {
            return None;
        }
        let (message, subtitle) = if self.loading {
            ("Loading bookmarks...".to_string(), String::new())
        } else {
            match &self.filter {
                FilterMode::None => (
                    "No bookmarks yet".to_string(),
                    "Press 'a' to add one".to_string(),
                ),
                FilterMode::Keyword(keyword) => (
                    format!("No bookmarks match \"{keyword}\""),
                    "Clear the search and press Enter to show everything".to_string(),
                ),
                FilterMode::Tag(tag) => (
                    format!("No bookmarks tagged {tag}"),
                    "Toggle the tag again to clear the filter".to_string(),
                ),
            }
        };
        Some(EmptyState { message, subtitle })
    }

    fn compute_dialog(&self) -> Option<Dialog> {
        let form_title = match &self.modal {
            Modal::Closed => None,
            Modal::Create => Some("New bookmark".to_string()),
            Modal::Edit(bookmark) => Some(format!("Edit \"{}\"", bookmark.title)),
        };
        if let Some(title) = form_title {
            let fields = FormField::ALL
                .iter()
                .map(|&field| FormFieldView {
                    label: field.label().to_string(),
                    value: self.form.value(field).to_string(),
                    is_active: field == self.form.active,
                })
                .collect();
            return Some(Dialog::Form(FormView {
                title,
                fields,
                hint: "Tab: next field  Enter: save  Esc: cancel".to_string(),
            }));
        }

        match &self.overlay {
            Overlay::None => None,
            Overlay::ConfirmDelete(bookmark) => Some(Dialog::Confirm(ConfirmView {
                message: format!("Delete \"{}\"?", bookmark.title),
                hint: "y: delete  n: cancel".to_string(),
            })),
            Overlay::Detail(bookmark) => Some(Dialog::Detail(detail_view(bookmark))),
        }
    }
}

fn detail_view(bookmark: &Bookmark) -> DetailView {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    let tags = if bookmark.tag_names.is_empty() {
        None
    } else {
        Some(bookmark.tag_names.join(", "))
    };

    DetailView {
        title: bookmark.title.clone(),
        rows: vec![
            ("URL".to_string(), bookmark.url.clone()),
            (
                "Description".to_string(),
                or_dash(bookmark.description_text().map(String::from)),
            ),
            ("Tags".to_string(), or_dash(tags)),
            ("Created".to_string(), bookmark.display_date()),
            (
                "Updated".to_string(),
                or_dash(bookmark.updated_at.as_deref().map(format_timestamp)),
            ),
            ("ID".to_string(), bookmark.id.to_string()),
        ],
        hint: "Esc: close".to_string(),
    }
}

/// Character ranges of `text` matched by `pattern`, coalesced into runs.
fn highlight_ranges(text: &str, pattern: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, pattern) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
