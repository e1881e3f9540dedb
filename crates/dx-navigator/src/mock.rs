//! Test doubles for [`PageFetcher`] and [`Browser`].

use std::cell::RefCell;
use std::collections::HashMap;

use url::Url;

use crate::browser::Browser;
use crate::error::NetworkError;
use crate::fetch::PageFetcher;

/// In-memory fetcher serving canned pages by path.
///
/// Paths without a page answer with HTTP 404.
#[derive(Debug, Default)]
pub struct MockFetcher {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl MockFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `path`.
    #[must_use]
    pub fn with_page(mut self, path: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(path.into(), html.into());
        self
    }

    /// Paths requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageFetcher for MockFetcher {
    fn fetch(&self, url: &Url) -> Result<String, NetworkError> {
        self.requests.borrow_mut().push(url.path().to_owned());
        self.pages
            .get(url.path())
            .cloned()
            .ok_or_else(|| NetworkError::HttpResponse {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// A browser operation recorded by [`RecordingBrowser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    PushState { url: String, title: String },
    NavigateFull(String),
    ScrollToTop,
    ScrollToAnchor(String),
}

/// Browser that records every requested operation.
#[derive(Debug, Default)]
pub struct RecordingBrowser {
    pub events: Vec<BrowserEvent>,
}

impl RecordingBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Browser for RecordingBrowser {
    fn push_state(&mut self, url: &str, title: &str) {
        self.events.push(BrowserEvent::PushState {
            url: url.to_owned(),
            title: title.to_owned(),
        });
    }

    fn navigate_full(&mut self, url: &str) {
        self.events.push(BrowserEvent::NavigateFull(url.to_owned()));
    }

    fn scroll_to_top(&mut self) {
        self.events.push(BrowserEvent::ScrollToTop);
    }

    fn scroll_to_anchor(&mut self, anchor: &str) {
        self.events.push(BrowserEvent::ScrollToAnchor(anchor.to_owned()));
    }
}
