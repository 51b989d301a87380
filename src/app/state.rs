//! Application state and the transitions that drive it.
//!
//! [`AppState`] is the single source of truth for everything on screen. It is
//! only mutated by the event handler, and every network round-trip goes
//! through it twice: once when a request is issued (returning an
//! [`Action::Send`]) and once when the response comes back through
//! [`AppState::apply_response`].
//!
//! # Request bookkeeping
//!
//! Each request gets a fresh [`RequestId`] and is remembered together with its
//! [`Purpose`]. List-producing requests also carry the generation that was
//! current when they were issued; a response whose generation has since been
//! superseded is dropped, so an older list can never overwrite a newer one.
//!
//! The initial load (and every reload) issues two requests, the first page of
//! bookmarks and the tag list, and only updates the display once both have
//! succeeded. If either fails, the whole load fails and the partial result is
//! discarded. A list fetch issued while a load is in flight supersedes only
//! its bookmark half: the tag list is still applied when it arrives.
//!
//! A list fetch commits its filter only once its page is displayed, so a
//! failed search leaves the previous filter in place.
//!
//! # Example
//!
//! ```rust
//! use zmarks::app::{Action, AppState};
//! use zmarks::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 10);
//! let actions = state.begin_reload();
//! assert_eq!(actions.len(), 2);
//! assert!(state.loading);
//! ```

use super::actions::Action;
use super::form::BookmarkForm;
use super::modes::{FilterMode, Focus, Modal, Overlay};
use crate::api::{ApiClient, ApiOp, ApiReply, ApiRequest, RequestId};
use crate::domain::{Bookmark, Page, PageInfo, Result, Tag, ZmarksError};
use crate::ui::theme::Theme;
use std::collections::HashMap;
use std::fmt;

/// A failed operation, shown in the status line until the next success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Name of the API operation that failed.
    pub operation: &'static str,
    pub message: String,
}

impl Failure {
    fn new(operation: &'static str, error: &ZmarksError) -> Self {
        Self {
            operation,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.message)
    }
}

/// Why a request was issued, which decides what its response does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purpose {
    /// Half of a combined bookmarks + tags load.
    Load { generation: u64 },
    /// A single list fetch (search, tag filter, page change). `filter`
    /// becomes current once the page arrives.
    List { generation: u64, filter: FilterMode },
    /// Create or update from the form.
    Save,
    Delete,
    /// Fetching a bookmark for the detail overlay.
    Detail,
}

/// A request that has been issued and not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub op: ApiOp,
    pub purpose: Purpose,
}

/// Partial results of a combined load.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CombinedLoad {
    generation: u64,
    page: Option<Page<Bookmark>>,
    tags: Option<Vec<Tag>>,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bookmarks of the current page, replaced wholesale on every list fetch.
    pub bookmarks: Vec<Bookmark>,

    /// All known tags, refreshed by every combined load.
    pub tags: Vec<Tag>,

    /// Pagination metadata of the displayed page.
    pub page: PageInfo,

    /// Whether a list-producing fetch is in flight.
    pub loading: bool,

    /// Text typed into the search input. Kept across filter changes.
    pub search_input: String,

    pub filter: FilterMode,
    pub focus: Focus,
    pub modal: Modal,

    /// Draft edited while the modal is open.
    pub form: BookmarkForm,

    pub overlay: Overlay,

    /// Zero-based index into `bookmarks`.
    pub selected_index: usize,

    /// Zero-based index into `tags` for the tag bar.
    pub tag_cursor: usize,

    pub last_failure: Option<Failure>,

    pub theme: Theme,

    client: ApiClient,
    page_size: u32,
    next_request_id: u64,
    generation: u64,
    pending: HashMap<RequestId, PendingRequest>,
    load: Option<CombinedLoad>,
}

impl AppState {
    /// Creates an empty state using the default API client.
    ///
    /// A `page_size` of zero is treated as one.
    #[must_use]
    pub fn new(theme: Theme, page_size: u32) -> Self {
        Self::with_client(ApiClient::default(), theme, page_size)
    }

    /// Creates an empty state that builds requests with `client`.
    #[must_use]
    pub fn with_client(client: ApiClient, theme: Theme, page_size: u32) -> Self {
        Self {
            bookmarks: Vec::new(),
            tags: Vec::new(),
            page: PageInfo::default(),
            loading: false,
            search_input: String::new(),
            filter: FilterMode::None,
            focus: Focus::List,
            modal: Modal::Closed,
            form: BookmarkForm::default(),
            overlay: Overlay::None,
            selected_index: 0,
            tag_cursor: 0,
            last_failure: None,
            theme,
            client,
            page_size: page_size.max(1),
            next_request_id: 0,
            generation: 0,
            pending: HashMap::new(),
            load: None,
        }
    }

    /// Page size used for list fetches.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Generation of the most recent list-producing fetch.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Requests issued and not yet answered.
    #[must_use]
    pub const fn pending(&self) -> &HashMap<RequestId, PendingRequest> {
        &self.pending
    }

    /// The bookmark under the selection cursor, if any.
    #[must_use]
    pub fn selected_bookmark(&self) -> Option<&Bookmark> {
        self.bookmarks.get(self.selected_index)
    }

    /// The tag under the tag bar cursor, if any.
    #[must_use]
    pub fn tag_at_cursor(&self) -> Option<&Tag> {
        self.tags.get(self.tag_cursor)
    }

    /// Moves the selection down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.bookmarks.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.bookmarks.len();
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.bookmarks.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.bookmarks.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    pub fn move_tag_cursor_right(&mut self) {
        if self.tags.is_empty() {
            return;
        }
        self.tag_cursor = (self.tag_cursor + 1) % self.tags.len();
    }

    pub fn move_tag_cursor_left(&mut self) {
        if self.tags.is_empty() {
            return;
        }
        if self.tag_cursor == 0 {
            self.tag_cursor = self.tags.len() - 1;
        } else {
            self.tag_cursor -= 1;
        }
    }

    /// Routes a typed character to the form or the search input.
    ///
    /// Returns whether anything changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.modal.is_open() {
            self.form.push_char(c);
            true
        } else if self.focus == Focus::SearchInput {
            self.search_input.push(c);
            true
        } else {
            false
        }
    }

    /// Removes the last character from the form or the search input.
    pub fn pop_char(&mut self) -> bool {
        if self.modal.is_open() {
            self.form.pop_char();
            true
        } else if self.focus == Focus::SearchInput {
            self.search_input.pop();
            true
        } else {
            false
        }
    }

    /// Reloads the first unfiltered page together with the tag list.
    ///
    /// Clears the filter so the highlighted tag chip always matches the list.
    pub fn begin_reload(&mut self) -> Vec<Action> {
        let generation = self.bump_generation();
        self.filter = FilterMode::None;
        self.loading = true;
        self.load = Some(CombinedLoad {
            generation,
            page: None,
            tags: None,
        });

        tracing::debug!(generation, "starting combined load");

        let bookmarks = self.client.list_all(0, self.page_size);
        let tags = self.client.list_tags();
        vec![
            self.dispatch(bookmarks, Purpose::Load { generation }),
            self.dispatch(tags, Purpose::Load { generation }),
        ]
    }

    /// Searches for the trimmed search input.
    ///
    /// An empty or whitespace-only input is the same as a reload. The keyword
    /// replaces any tag filter once its results arrive.
    pub fn begin_search(&mut self) -> Vec<Action> {
        let keyword = self.search_input.trim();
        if keyword.is_empty() {
            tracing::debug!("empty search, reloading");
            return self.begin_reload();
        }
        let filter = FilterMode::Keyword(keyword.to_string());
        self.begin_list(filter, 0)
    }

    /// Toggles the tag filter for `name`.
    ///
    /// Toggling the active tag reloads unfiltered; any other tag replaces the
    /// current filter right away, before its page arrives. The search input is
    /// left untouched either way.
    pub fn toggle_tag(&mut self, name: &str) -> Vec<Action> {
        if self.filter.active_tag() == Some(name) {
            tracing::debug!(tag = %name, "clearing tag filter");
            return self.begin_reload();
        }
        self.filter = FilterMode::Tag(name.to_string());
        self.begin_list(self.filter.clone(), 0)
    }

    /// Toggles the tag under the tag bar cursor.
    pub fn toggle_tag_at_cursor(&mut self) -> Vec<Action> {
        match self.tag_at_cursor().map(|tag| tag.name.clone()) {
            Some(name) => self.toggle_tag(&name),
            None => vec![],
        }
    }

    /// Fetches the next (`forward`) or previous page of the current listing.
    ///
    /// Does nothing when already on the last or first page.
    pub fn change_page(&mut self, forward: bool) -> Vec<Action> {
        let target = if forward {
            if !self.page.has_next() {
                return vec![];
            }
            self.page.number + 1
        } else {
            if !self.page.has_previous() {
                return vec![];
            }
            self.page.number - 1
        };
        tracing::debug!(page = target, filter = ?self.filter, "changing page");
        self.begin_list(self.filter.clone(), target)
    }

    /// Opens the modal with an empty form.
    pub fn open_create(&mut self) {
        self.form = BookmarkForm::default();
        self.modal = Modal::Create;
    }

    /// Opens the modal pre-filled from the selected bookmark.
    ///
    /// Returns `false` if nothing is selected.
    pub fn open_edit(&mut self) -> bool {
        let Some(bookmark) = self.selected_bookmark().cloned() else {
            return false;
        };
        self.form = BookmarkForm::from_bookmark(&bookmark);
        self.modal = Modal::Edit(bookmark);
        true
    }

    /// Closes the modal and discards the draft.
    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.form = BookmarkForm::default();
    }

    /// Sends the draft as a create or update.
    ///
    /// Ignored while a previous submit is still in flight.
    ///
    /// # Errors
    ///
    /// Returns [`ZmarksError::Encode`] if the payload cannot be serialized.
    pub fn submit_form(&mut self) -> Result<Vec<Action>> {
        if self.pending.values().any(|p| p.purpose == Purpose::Save) {
            tracing::debug!("save already in flight");
            return Ok(vec![]);
        }

        let payload = self.form.to_payload();
        let request = match &self.modal {
            Modal::Closed => return Ok(vec![]),
            Modal::Create => self.client.create(&payload)?,
            Modal::Edit(bookmark) => self.client.update(bookmark.id, &payload)?,
        };
        Ok(vec![self.dispatch(request, Purpose::Save)])
    }

    /// Asks for confirmation before deleting the selected bookmark.
    pub fn request_delete(&mut self) -> bool {
        let Some(bookmark) = self.selected_bookmark().cloned() else {
            return false;
        };
        self.overlay = Overlay::ConfirmDelete(bookmark);
        true
    }

    /// Deletes the bookmark awaiting confirmation.
    pub fn confirm_delete(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.overlay) {
            Overlay::ConfirmDelete(bookmark) => {
                tracing::debug!(id = bookmark.id, "delete confirmed");
                let request = self.client.remove(bookmark.id);
                vec![self.dispatch(request, Purpose::Delete)]
            }
            other => {
                self.overlay = other;
                vec![]
            }
        }
    }

    /// Declines the pending deletion without any network call.
    pub fn cancel_delete(&mut self) {
        if matches!(self.overlay, Overlay::ConfirmDelete(_)) {
            self.overlay = Overlay::None;
        }
    }

    /// Fetches the selected bookmark for the detail overlay.
    pub fn show_detail(&mut self) -> Vec<Action> {
        let Some(id) = self.selected_bookmark().map(|b| b.id) else {
            return vec![];
        };
        let request = self.client.get_by_id(id);
        vec![self.dispatch(request, Purpose::Detail)]
    }

    /// Records a failure that did not come from a response.
    pub fn record_failure(&mut self, operation: &'static str, error: &ZmarksError) {
        tracing::warn!(operation, error = %error, "operation failed");
        self.last_failure = Some(Failure::new(operation, error));
    }

    /// Applies the response to a previously issued request.
    ///
    /// Responses to unknown requests are ignored. Returns follow-up requests,
    /// such as the reload after a successful save or delete.
    pub fn apply_response(&mut self, id: RequestId, status: u16, body: &[u8]) -> Vec<Action> {
        let Some(pending) = self.pending.remove(&id) else {
            tracing::debug!(request_id = %id, "response for unknown request");
            return vec![];
        };

        let operation = pending.op.name();
        let result = pending.op.decode(status, body);

        tracing::debug!(
            request_id = %id,
            operation,
            status,
            ok = result.is_ok(),
            purpose = ?pending.purpose,
            "response received"
        );

        match pending.purpose {
            Purpose::Load { generation } => {
                self.apply_load(generation, &pending.op, result);
                vec![]
            }
            Purpose::List { generation, filter } => {
                self.apply_list(generation, filter, operation, result);
                vec![]
            }
            Purpose::Save => self.apply_save(operation, result),
            Purpose::Delete => self.apply_delete(operation, result),
            Purpose::Detail => {
                self.apply_detail(operation, result);
                vec![]
            }
        }
    }

    fn bump_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn dispatch(&mut self, request: ApiRequest, purpose: Purpose) -> Action {
        self.next_request_id += 1;
        let id = RequestId(self.next_request_id);
        tracing::debug!(
            request_id = %id,
            operation = request.op.name(),
            url = %request.url,
            ?purpose,
            "dispatching request"
        );
        self.pending.insert(
            id,
            PendingRequest {
                op: request.op.clone(),
                purpose,
            },
        );
        Action::Send { id, request }
    }

    /// Issues a single list fetch for `filter`, committed when it succeeds.
    ///
    /// A combined load still in flight keeps its generation, which is how
    /// [`Self::apply_load`] tells that its bookmark half was superseded.
    fn begin_list(&mut self, filter: FilterMode, page: u32) -> Vec<Action> {
        let generation = self.bump_generation();
        self.loading = true;

        let request = match &filter {
            FilterMode::None => self.client.list_all(page, self.page_size),
            FilterMode::Keyword(keyword) => self.client.search(keyword, page, self.page_size),
            FilterMode::Tag(tag) => self.client.by_tag(tag, page, self.page_size),
        };
        vec![self.dispatch(request, Purpose::List { generation, filter })]
    }

    fn is_stale(&self, generation: u64, operation: &'static str) -> bool {
        if generation == self.generation {
            return false;
        }
        tracing::debug!(
            operation,
            generation,
            current = self.generation,
            "dropping stale response"
        );
        true
    }

    fn apply_load(&mut self, generation: u64, op: &ApiOp, result: Result<ApiReply>) {
        let operation = op.name();
        if !self.load.as_ref().is_some_and(|l| l.generation == generation) {
            tracing::debug!(operation, generation, "combined load already settled");
            return;
        }
        if generation != self.generation {
            self.apply_superseded_load(op, result);
            return;
        }

        let reply = match result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(operation, error = %err, "combined load failed");
                self.load = None;
                self.loading = false;
                self.last_failure = Some(Failure::new(operation, &err));
                return;
            }
        };

        let Some(load) = self.load.as_mut() else {
            return;
        };
        match reply {
            ApiReply::Page(page) => load.page = Some(page),
            ApiReply::Tags(tags) => load.tags = Some(tags),
            ApiReply::Bookmark(_) | ApiReply::Removed => {
                tracing::warn!(operation, "unexpected reply during load");
                return;
            }
        }

        if load.page.is_none() || load.tags.is_none() {
            return;
        }
        if let Some(CombinedLoad {
            page: Some(page),
            tags: Some(tags),
            ..
        }) = self.load.take()
        {
            tracing::debug!(
                bookmarks = page.content.len(),
                tags = tags.len(),
                "combined load complete"
            );
            self.replace_page(page);
            self.set_tags(tags);
            self.loading = false;
            self.last_failure = None;
        }
    }

    /// A later list fetch owns the bookmark list and the loading flag; only
    /// the tag half still matters.
    fn apply_superseded_load(&mut self, op: &ApiOp, result: Result<ApiReply>) {
        let operation = op.name();
        if op.is_listing() {
            tracing::debug!(operation, ok = result.is_ok(), "dropping superseded bookmark page");
            // The tag half may have arrived before the load was superseded.
            if let Some(tags) = self.load.as_mut().and_then(|l| l.tags.take()) {
                self.load = None;
                self.set_tags(tags);
            }
            return;
        }

        self.load = None;
        match result {
            Ok(ApiReply::Tags(tags)) => {
                tracing::debug!(tags = tags.len(), "tags applied after superseded load");
                self.set_tags(tags);
            }
            Ok(_) => tracing::warn!(operation, "unexpected reply during load"),
            Err(err) => {
                tracing::error!(operation, error = %err, "tag fetch failed");
                self.last_failure = Some(Failure::new(operation, &err));
            }
        }
    }

    fn apply_list(
        &mut self,
        generation: u64,
        filter: FilterMode,
        operation: &'static str,
        result: Result<ApiReply>,
    ) {
        if self.is_stale(generation, operation) {
            return;
        }
        self.loading = false;
        match result {
            Ok(ApiReply::Page(page)) => {
                tracing::debug!(operation, bookmarks = page.content.len(), ?filter, "list replaced");
                self.replace_page(page);
                self.filter = filter;
                self.last_failure = None;
            }
            Ok(_) => tracing::warn!(operation, "unexpected reply for list"),
            Err(err) => {
                tracing::error!(operation, error = %err, "list fetch failed");
                self.last_failure = Some(Failure::new(operation, &err));
            }
        }
    }

    fn apply_save(&mut self, operation: &'static str, result: Result<ApiReply>) -> Vec<Action> {
        match result {
            Ok(ApiReply::Bookmark(bookmark)) => {
                tracing::info!(id = bookmark.id, operation, "bookmark saved");
                self.close_modal();
                self.last_failure = None;
                self.begin_reload()
            }
            Ok(_) => {
                tracing::warn!(operation, "unexpected reply for save");
                vec![]
            }
            Err(err) => {
                tracing::error!(operation, error = %err, "save failed");
                self.last_failure = Some(Failure::new(operation, &err));
                vec![]
            }
        }
    }

    fn apply_delete(&mut self, operation: &'static str, result: Result<ApiReply>) -> Vec<Action> {
        match result {
            Ok(ApiReply::Removed) => {
                tracing::info!(operation, "bookmark deleted");
                self.last_failure = None;
                self.begin_reload()
            }
            Ok(_) => {
                tracing::warn!(operation, "unexpected reply for delete");
                vec![]
            }
            Err(err) => {
                tracing::error!(operation, error = %err, "delete failed");
                self.last_failure = Some(Failure::new(operation, &err));
                vec![]
            }
        }
    }

    fn apply_detail(&mut self, operation: &'static str, result: Result<ApiReply>) {
        match result {
            Ok(ApiReply::Bookmark(bookmark)) => {
                if self.modal.is_open() || self.overlay != Overlay::None {
                    tracing::debug!(id = bookmark.id, "detail arrived while a dialog is open");
                    return;
                }
                self.overlay = Overlay::Detail(bookmark);
            }
            Ok(_) => tracing::warn!(operation, "unexpected reply for detail"),
            Err(err) => {
                tracing::error!(operation, error = %err, "detail fetch failed");
                self.last_failure = Some(Failure::new(operation, &err));
            }
        }
    }

    fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
        self.tag_cursor = self.tag_cursor.min(self.tags.len().saturating_sub(1));
    }

    fn replace_page(&mut self, page: Page<Bookmark>) {
        self.page = page.info();
        self.bookmarks = page.content;
        if self.bookmarks.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.bookmarks.len() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::with_client(ApiClient::new("http://api.test"), Theme::default(), 10)
    }

    fn sent(actions: &[Action]) -> Vec<(RequestId, ApiRequest)> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Send { id, request } => Some((*id, request.clone())),
                Action::CloseFocus => None,
            })
            .collect()
    }

    const PAGE: &[u8] = br#"{"content":[
        {"id":1,"url":"https://a.dev","title":"A","tagNames":["x"]},
        {"id":2,"url":"https://b.dev","title":"B","tagNames":[]}
    ],"number":0,"totalPages":3,"totalElements":25}"#;

    #[test]
    fn combined_load_waits_for_both_halves() {
        let mut s = state();
        let requests = sent(&s.begin_reload());
        assert_eq!(requests.len(), 2);

        s.apply_response(requests[1].0, 200, br#"[{"id":1,"name":"x"}]"#);
        assert!(s.loading);
        assert!(s.tags.is_empty());

        s.apply_response(requests[0].0, 200, PAGE);
        assert!(!s.loading);
        assert_eq!(s.bookmarks.len(), 2);
        assert_eq!(s.tags.len(), 1);
        assert_eq!(s.page.total_pages, 3);
        assert!(s.pending().is_empty());
    }

    #[test]
    fn failed_half_discards_the_other() {
        let mut s = state();
        let requests = sent(&s.begin_reload());

        s.apply_response(requests[0].0, 400, b"connection refused");
        assert!(!s.loading);
        assert_eq!(
            s.last_failure.as_ref().map(|f| f.operation),
            Some("list_all")
        );

        s.apply_response(requests[1].0, 200, br#"[{"id":1,"name":"x"}]"#);
        assert!(s.tags.is_empty());
        assert!(s.bookmarks.is_empty());
    }

    #[test]
    fn tags_received_before_a_search_still_apply() {
        let mut s = state();
        let load = sent(&s.begin_reload());
        s.apply_response(load[1].0, 200, br#"[{"id":1,"name":"x"},{"id":2,"name":"y"}]"#);

        s.search_input = "a".to_string();
        let search = sent(&s.begin_search());
        s.apply_response(load[0].0, 200, PAGE);
        assert_eq!(s.tags.len(), 2);
        assert!(s.bookmarks.is_empty());
        assert!(s.loading);

        s.apply_response(search[0].0, 200, PAGE);
        assert!(!s.loading);
        assert_eq!(s.filter, FilterMode::Keyword("a".to_string()));
    }

    #[test]
    fn superseded_load_tag_failure_is_recorded() {
        let mut s = state();
        let load = sent(&s.begin_reload());
        sent(&s.toggle_tag("x"));

        s.apply_response(load[1].0, 400, b"connection refused");
        assert_eq!(
            s.last_failure.as_ref().map(|f| f.operation),
            Some("list_tags")
        );
        assert!(s.loading);
    }

    #[test]
    fn failed_search_keeps_previous_filter() {
        let mut s = state();
        s.filter = FilterMode::Tag("x".to_string());
        s.search_input = "zz".to_string();
        let search = sent(&s.begin_search());
        assert_eq!(s.filter, FilterMode::Tag("x".to_string()));

        s.apply_response(search[0].0, 400, b"error sending request");
        assert_eq!(s.filter, FilterMode::Tag("x".to_string()));
        assert!(!s.loading);
        assert_eq!(s.last_failure.as_ref().map(|f| f.operation), Some("search"));
    }

    #[test]
    fn page_navigation_is_bounded() {
        let mut s = state();
        assert!(s.change_page(false).is_empty());
        assert!(s.change_page(true).is_empty());

        s.page = PageInfo {
            number: 2,
            total_pages: 3,
            total_elements: 25,
        };
        assert!(s.change_page(true).is_empty());

        let requests = sent(&s.change_page(false));
        assert_eq!(requests[0].1.op, ApiOp::ListAll { page: 1, size: 10 });
    }

    #[test]
    fn paging_keeps_the_active_filter() {
        let mut s = state();
        s.filter = FilterMode::Tag("rust".to_string());
        s.page = PageInfo {
            number: 0,
            total_pages: 2,
            total_elements: 12,
        };
        let requests = sent(&s.change_page(true));
        assert_eq!(
            requests[0].1.op,
            ApiOp::ByTag {
                tag: "rust".to_string(),
                page: 1,
                size: 10
            }
        );
    }

    #[test]
    fn detail_opens_overlay() {
        let mut s = state();
        s.bookmarks = vec![Bookmark {
            id: 4,
            url: "https://d.dev".to_string(),
            title: "D".to_string(),
            description: None,
            tag_names: vec![],
            created_at: String::new(),
            updated_at: None,
        }];
        let requests = sent(&s.show_detail());
        assert_eq!(requests[0].1.op, ApiOp::GetById { id: 4 });

        s.apply_response(
            requests[0].0,
            200,
            br#"{"id":4,"url":"https://d.dev","title":"D","description":"notes"}"#,
        );
        match &s.overlay {
            Overlay::Detail(bookmark) => assert_eq!(bookmark.description_text(), Some("notes")),
            other => panic!("unexpected overlay {other:?}"),
        }
    }

    #[test]
    fn second_submit_waits_for_the_first() {
        let mut s = state();
        s.open_create();
        assert_eq!(s.submit_form().unwrap().len(), 1);
        assert!(s.submit_form().unwrap().is_empty());
    }

    #[test]
    fn typing_goes_nowhere_from_the_list() {
        let mut s = state();
        assert!(!s.push_char('x'));
        s.focus = Focus::SearchInput;
        assert!(s.push_char('x'));
        assert_eq!(s.search_input, "x");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(AppState::new(Theme::default(), 0).page_size(), 1);
    }
}
