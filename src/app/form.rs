//! Draft state of the create/edit form.
//!
//! The form keeps tags as the single comma-separated string the user types.
//! It is split into a tag list only when the form is turned into a payload.

use super::modes::FormField;
use crate::domain::{Bookmark, BookmarkPayload};

/// Transient draft edited in the bookmark modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkForm {
    pub url: String,
    pub title: String,
    pub description: String,
    /// Comma-joined tag names as typed.
    pub tag_names: String,
    /// Field receiving keystrokes.
    pub active: FormField,
}

impl BookmarkForm {
    /// Pre-fills a form from an existing bookmark.
    ///
    /// # Examples
    ///
    /// ```
    /// use zmarks::app::BookmarkForm;
    /// use zmarks::domain::Bookmark;
    ///
    /// let bookmark: Bookmark = serde_json::from_str(
    ///     r#"{"id":1,"url":"https://a.dev","title":"A","tagNames":["x","y"]}"#,
    /// ).unwrap();
    /// assert_eq!(BookmarkForm::from_bookmark(&bookmark).tag_names, "x, y");
    /// ```
    #[must_use]
    pub fn from_bookmark(bookmark: &Bookmark) -> Self {
        Self {
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            description: bookmark.description.clone().unwrap_or_default(),
            tag_names: join_tag_names(&bookmark.tag_names),
            active: FormField::Url,
        }
    }

    /// Converts the draft into a request payload.
    #[must_use]
    pub fn to_payload(&self) -> BookmarkPayload {
        BookmarkPayload {
            url: self.url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            tag_names: parse_tag_names(&self.tag_names),
        }
    }

    /// Text of the given field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Url => &self.url,
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Tags => &self.tag_names,
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            FormField::Url => &mut self.url,
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Tags => &mut self.tag_names,
        }
    }

    /// Appends a character to the active field.
    pub fn push_char(&mut self, c: char) {
        self.active_value_mut().push(c);
    }

    /// Removes the last character of the active field.
    pub fn pop_char(&mut self) {
        self.active_value_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.active = self.active.next();
    }

    pub fn focus_previous(&mut self) {
        self.active = self.active.previous();
    }
}

/// Splits a comma-separated tag string.
///
/// Pieces are trimmed and empty ones dropped; order and duplicates are kept.
///
/// # Examples
///
/// ```
/// use zmarks::app::form::parse_tag_names;
///
/// assert_eq!(parse_tag_names("a, b ,, c"), vec!["a", "b", "c"]);
/// assert!(parse_tag_names("").is_empty());
/// ```
#[must_use]
pub fn parse_tag_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Joins tag names the way the form displays them.
#[must_use]
pub fn join_tag_names(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_duplicates() {
        assert_eq!(parse_tag_names(" b,a , b"), vec!["b", "a", "b"]);
        assert!(parse_tag_names(" , ,").is_empty());
    }

    #[test]
    fn empty_create_form_has_no_tags() {
        let form = BookmarkForm {
            url: "https://a.dev".to_string(),
            title: "A".to_string(),
            ..BookmarkForm::default()
        };
        let payload = form.to_payload();
        assert!(payload.tag_names.is_empty());
        assert_eq!(payload.description, "");
    }

    #[test]
    fn edit_prefill_handles_missing_description() {
        let bookmark = Bookmark {
            id: 3,
            url: "https://x.dev".to_string(),
            title: "X".to_string(),
            description: None,
            tag_names: vec!["x".to_string(), "y".to_string()],
            created_at: String::new(),
            updated_at: None,
        };
        let form = BookmarkForm::from_bookmark(&bookmark);
        assert_eq!(form.description, "");
        assert_eq!(form.tag_names, "x, y");
        assert_eq!(form.to_payload().tag_names, bookmark.tag_names);
    }

    #[test]
    fn typing_edits_the_active_field() {
        let mut form = BookmarkForm::default();
        form.push_char('h');
        form.focus_next();
        form.push_char('T');
        form.push_char('x');
        form.pop_char();
        form.focus_previous();
        form.push_char('i');
        assert_eq!(form.url, "hi");
        assert_eq!(form.title, "T");
        assert_eq!(form.value(FormField::Title), "T");
    }
}
