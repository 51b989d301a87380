//! End-to-end flows through the public event API with canned responses.

use zmarks::api::{ApiClient, HttpMethod, RequestId};
use zmarks::app::{Focus, Modal, Overlay};
use zmarks::{handle_event, Action, AppState, Event, FilterMode, Theme};

const BASE: &str = "http://api.test";

const TWO_BOOKMARKS: &str = r#"{"content":[
    {"id":1,"url":"https://doc.rust-lang.org","title":"Rust Docs","description":"std","tagNames":["rust"],"createdAt":"2024-03-01T09:00:00"},
    {"id":2,"url":"https://zellij.dev","title":"Zellij","description":null,"tagNames":[],"createdAt":"2024-03-02T09:00:00"}
],"number":0,"size":10,"totalElements":2,"totalPages":1}"#;

const TAGS: &str = r#"[{"id":1,"name":"rust"},{"id":2,"name":"terminal"}]"#;

fn state() -> AppState {
    AppState::with_client(ApiClient::new(BASE), Theme::default(), 10)
}

fn send(state: &mut AppState, event: Event) -> Vec<(RequestId, HttpMethod, String, Vec<u8>)> {
    let (_, actions) = handle_event(state, &event).unwrap();
    actions
        .into_iter()
        .filter_map(|action| match action {
            Action::Send { id, request } => {
                Some((id, request.method, request.url, request.body))
            }
            Action::CloseFocus => None,
        })
        .collect()
}

fn respond(
    state: &mut AppState,
    id: RequestId,
    status: u16,
    body: &str,
) -> Vec<(RequestId, HttpMethod, String, Vec<u8>)> {
    send(
        state,
        Event::ApiResponse {
            id,
            status,
            body: body.as_bytes().to_vec(),
        },
    )
}

/// Answers a combined load: bookmarks with `page`, tags with [`TAGS`].
fn answer_load(state: &mut AppState, requests: &[(RequestId, HttpMethod, String, Vec<u8>)], page: &str) {
    assert_eq!(requests.len(), 2);
    for (id, _, url, _) in requests {
        let body = if url.ends_with("/tags") { TAGS } else { page };
        respond(state, *id, 200, body);
    }
}

fn mounted() -> AppState {
    let mut s = state();
    let requests = send(&mut s, Event::Mount);
    answer_load(&mut s, &requests, TWO_BOOKMARKS);
    s
}

fn page(ids: &[i64], number: u32, total_pages: u32) -> String {
    let content: Vec<String> = ids
        .iter()
        .map(|id| format!(r#"{{"id":{id},"url":"https://{id}.dev","title":"Item {id}","tagNames":[]}}"#))
        .collect();
    format!(
        r#"{{"content":[{}],"number":{number},"totalPages":{total_pages},"totalElements":{}}}"#,
        content.join(","),
        u64::from(total_pages) * 10
    )
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
}

#[test]
fn initial_load_shows_bookmarks_and_tags() {
    let mut s = state();
    let requests = send(&mut s, Event::Mount);
    let urls: Vec<&str> = requests.iter().map(|(_, _, url, _)| url.as_str()).collect();
    assert!(urls.contains(&"http://api.test/bookmarks?page=0&size=10"));
    assert!(urls.contains(&"http://api.test/tags"));
    assert!(s.loading);

    answer_load(&mut s, &requests, TWO_BOOKMARKS);

    assert!(!s.loading);
    assert_eq!(s.tags.len(), 2);
    let vm = s.compute_viewmodel(30, 120);
    let titles: Vec<&str> = vm.display_items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Rust Docs", "Zellij"]);
    assert!(vm.empty_state.is_none());
}

#[test]
fn failed_load_clears_loading_and_reports() {
    let mut s = state();
    let requests = send(&mut s, Event::Mount);
    for (id, _, url, _) in &requests {
        if url.ends_with("/tags") {
            respond(&mut s, *id, 400, "error sending request: connection refused");
        } else {
            respond(&mut s, *id, 200, TWO_BOOKMARKS);
        }
    }

    assert!(!s.loading);
    assert!(s.bookmarks.is_empty());
    let failure = s.last_failure.as_ref().unwrap();
    assert_eq!(failure.operation, "list_tags");
}

#[test]
fn search_replaces_tag_filter() {
    let mut s = mounted();
    send(&mut s, Event::FocusTags);
    let tag_requests = send(&mut s, Event::ToggleTag);
    assert_eq!(tag_requests[0].2, "http://api.test/bookmarks/tag/rust?page=0&size=10");
    assert_eq!(s.filter, FilterMode::Tag("rust".to_string()));

    send(&mut s, Event::FocusSearch);
    type_text(&mut s, "  zellij tips ");
    let requests = send(&mut s, Event::SubmitSearch);

    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].2,
        "http://api.test/bookmarks/search?keyword=zellij%20tips&page=0&size=10"
    );
    assert_eq!(s.filter, FilterMode::Tag("rust".to_string()));
    assert_eq!(s.focus, Focus::List);

    respond(&mut s, requests[0].0, 200, &page(&[2], 0, 1));
    assert_eq!(s.bookmarks.len(), 1);
    assert_eq!(s.filter, FilterMode::Keyword("zellij tips".to_string()));
    assert!(s.compute_viewmodel(30, 120).tag_bar.chips.iter().all(|c| !c.is_active));
}

#[test]
fn blank_search_reloads_everything() {
    let mut s = mounted();
    send(&mut s, Event::FocusSearch);
    type_text(&mut s, "   ");
    let requests = send(&mut s, Event::SubmitSearch);

    let mut urls: Vec<String> = requests.into_iter().map(|(_, _, url, _)| url).collect();
    urls.sort();
    assert_eq!(
        urls,
        [
            "http://api.test/bookmarks?page=0&size=10",
            "http://api.test/tags"
        ]
    );
    assert_eq!(s.filter, FilterMode::None);
}

#[test]
fn toggling_a_tag_twice_returns_to_all() {
    let mut s = mounted();
    send(&mut s, Event::FocusTags);

    let first = send(&mut s, Event::ToggleTag);
    respond(&mut s, first[0].0, 200, &page(&[1], 0, 1));
    assert_eq!(s.filter, FilterMode::Tag("rust".to_string()));

    let second = send(&mut s, Event::ToggleTag);
    assert_eq!(second.len(), 2);
    answer_load(&mut s, &second, TWO_BOOKMARKS);

    assert_eq!(s.filter, FilterMode::None);
    assert_eq!(s.bookmarks.len(), 2);
}

#[test]
fn saving_closes_form_and_reloads_unfiltered() {
    let mut s = mounted();
    send(&mut s, Event::FocusTags);
    let filtered = send(&mut s, Event::ToggleTag);
    respond(&mut s, filtered[0].0, 200, &page(&[1], 0, 1));
    send(&mut s, Event::FocusList);

    send(&mut s, Event::OpenCreate);
    type_text(&mut s, "https://serde.rs");
    send(&mut s, Event::NextField);
    type_text(&mut s, "Serde");
    let requests = send(&mut s, Event::SubmitForm);

    assert_eq!(requests.len(), 1);
    let (id, method, url, body) = &requests[0];
    assert_eq!(*method, HttpMethod::Post);
    assert_eq!(url, "http://api.test/bookmarks");
    let payload: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(payload["url"], "https://serde.rs");
    assert_eq!(payload["tagNames"], serde_json::json!([]));

    let reload = respond(
        &mut s,
        *id,
        201,
        r#"{"id":3,"url":"https://serde.rs","title":"Serde","tagNames":[]}"#,
    );

    assert_eq!(s.modal, Modal::Closed);
    assert_eq!(s.filter, FilterMode::None);
    let mut urls: Vec<&str> = reload.iter().map(|(_, _, url, _)| url.as_str()).collect();
    urls.sort_unstable();
    assert_eq!(
        urls,
        [
            "http://api.test/bookmarks?page=0&size=10",
            "http://api.test/tags"
        ]
    );
}

#[test]
fn editing_sends_put_with_prefilled_tags() {
    let mut s = mounted();
    send(&mut s, Event::OpenEdit);
    assert_eq!(s.form.tag_names, "rust");

    let requests = send(&mut s, Event::SubmitForm);
    let (_, method, url, body) = &requests[0];
    assert_eq!(*method, HttpMethod::Put);
    assert_eq!(url, "http://api.test/bookmarks/1");
    let payload: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(payload["tagNames"], serde_json::json!(["rust"]));
}

#[test]
fn failed_save_keeps_the_form_open() {
    let mut s = mounted();
    send(&mut s, Event::OpenCreate);
    type_text(&mut s, "https://x.dev");
    let requests = send(&mut s, Event::SubmitForm);

    let follow_up = respond(&mut s, requests[0].0, 400, "Validation failed");

    assert!(follow_up.is_empty());
    assert_eq!(s.modal, Modal::Create);
    assert_eq!(s.form.url, "https://x.dev");
    assert_eq!(s.last_failure.as_ref().unwrap().operation, "create");
}

#[test]
fn declined_delete_sends_nothing() {
    let mut s = mounted();
    send(&mut s, Event::KeyDown);

    assert!(send(&mut s, Event::RequestDelete).is_empty());
    assert!(matches!(s.overlay, Overlay::ConfirmDelete(ref b) if b.id == 2));
    assert!(send(&mut s, Event::CancelDelete).is_empty());

    assert_eq!(s.overlay, Overlay::None);
    assert_eq!(s.bookmarks.len(), 2);
    assert!(s.pending().is_empty());
}

#[test]
fn confirmed_delete_reloads() {
    let mut s = mounted();
    send(&mut s, Event::RequestDelete);
    let requests = send(&mut s, Event::ConfirmDelete);

    let (id, method, url, _) = &requests[0];
    assert_eq!(*method, HttpMethod::Delete);
    assert_eq!(url, "http://api.test/bookmarks/1");

    let reload = respond(&mut s, *id, 204, "");
    assert_eq!(reload.len(), 2);
    assert_eq!(s.overlay, Overlay::None);
}

#[test]
fn stale_list_never_replaces_newer_one() {
    let mut s = mounted();
    send(&mut s, Event::FocusTags);
    let older = send(&mut s, Event::ToggleTag);

    send(&mut s, Event::FocusSearch);
    type_text(&mut s, "zellij");
    let newer = send(&mut s, Event::SubmitSearch);

    respond(&mut s, newer[0].0, 200, &page(&[2], 0, 1));
    respond(&mut s, older[0].0, 200, &page(&[7, 8, 9], 0, 1));

    let ids: Vec<i64> = s.bookmarks.iter().map(|b| b.id).collect();
    assert_eq!(ids, [2]);
    assert_eq!(s.filter, FilterMode::Keyword("zellij".to_string()));
    assert!(!s.loading);
}

#[test]
fn paging_stays_in_bounds() {
    let mut s = state();
    let requests = send(&mut s, Event::Mount);
    answer_load(&mut s, &requests, &page(&[1, 2], 0, 2));

    assert!(send(&mut s, Event::PrevPage).is_empty());

    let next = send(&mut s, Event::NextPage);
    assert_eq!(next[0].2, "http://api.test/bookmarks?page=1&size=10");
    respond(&mut s, next[0].0, 200, &page(&[11], 1, 2));
    assert_eq!(s.page.number, 1);

    assert!(send(&mut s, Event::NextPage).is_empty());
    assert_eq!(s.compute_viewmodel(30, 120).footer.page, "Page 2 of 2");
}

#[test]
fn detail_view_opens_from_selection() {
    let mut s = mounted();
    let requests = send(&mut s, Event::ShowDetail);
    assert_eq!(requests[0].2, "http://api.test/bookmarks/1");

    respond(
        &mut s,
        requests[0].0,
        200,
        r#"{"id":1,"url":"https://doc.rust-lang.org","title":"Rust Docs","tagNames":["rust"],"createdAt":"2024-03-01T09:00:00","updatedAt":"2024-04-01T09:00:00"}"#,
    );
    assert!(matches!(s.overlay, Overlay::Detail(ref b) if b.id == 1));

    send(&mut s, Event::Escape);
    assert_eq!(s.overlay, Overlay::None);
}

#[test]
fn failed_search_leaves_tag_filter_and_list() {
    let mut s = mounted();
    send(&mut s, Event::FocusTags);
    let filtered = send(&mut s, Event::ToggleTag);
    respond(&mut s, filtered[0].0, 200, &page(&[1], 0, 1));

    send(&mut s, Event::FocusSearch);
    type_text(&mut s, "zz");
    let search = send(&mut s, Event::SubmitSearch);
    respond(&mut s, search[0].0, 400, "error sending request: connection refused");

    assert!(!s.loading);
    assert_eq!(s.filter, FilterMode::Tag("rust".to_string()));
    assert_eq!(s.search_input, "zz");
    let ids: Vec<i64> = s.bookmarks.iter().map(|b| b.id).collect();
    assert_eq!(ids, [1]);

    let vm = s.compute_viewmodel(30, 120);
    assert_eq!(vm.header.title, " Tag: rust (10) ");
    let active: Vec<&str> = vm
        .tag_bar
        .chips
        .iter()
        .filter(|c| c.is_active)
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(active, ["rust"]);
    assert!(vm.footer.status.is_some_and(|status| status.is_error));
}

#[test]
fn failed_tag_fetch_keeps_the_list() {
    let mut s = mounted();
    send(&mut s, Event::FocusTags);
    let filtered = send(&mut s, Event::ToggleTag);
    respond(&mut s, filtered[0].0, 400, "error sending request: timed out");

    assert!(!s.loading);
    assert_eq!(s.bookmarks.len(), 2);
    assert_eq!(s.tags.len(), 2);
    assert_eq!(s.last_failure.as_ref().unwrap().operation, "by_tag");
}

#[test]
fn search_during_initial_load_still_fills_tag_bar() {
    let mut s = state();
    let load = send(&mut s, Event::Mount);

    send(&mut s, Event::FocusSearch);
    type_text(&mut s, "rust");
    let search = send(&mut s, Event::SubmitSearch);
    assert_eq!(search.len(), 1);

    answer_load(&mut s, &load, TWO_BOOKMARKS);
    assert_eq!(s.tags.len(), 2);
    assert!(s.bookmarks.is_empty());
    assert!(s.loading);

    respond(&mut s, search[0].0, 200, &page(&[1], 0, 1));
    assert!(!s.loading);
    assert_eq!(s.tags.len(), 2);
    let ids: Vec<i64> = s.bookmarks.iter().map(|b| b.id).collect();
    assert_eq!(ids, [1]);
    assert_eq!(s.filter, FilterMode::Keyword("rust".to_string()));
}
