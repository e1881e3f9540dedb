//! Browser side effects the navigator asks for.

/// History and viewport operations of the hosting browser.
pub trait Browser {
    /// Push a history entry for `url` with the given title.
    fn push_state(&mut self, url: &str, title: &str);

    /// Abandon in-page navigation and load `url` the ordinary way.
    fn navigate_full(&mut self, url: &str);

    fn scroll_to_top(&mut self);

    /// Scroll to the element targeted by `anchor` (including the `#`).
    fn scroll_to_anchor(&mut self, anchor: &str);
}
