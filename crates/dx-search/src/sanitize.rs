//! Highlight sanitization for hit titles and snippets.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ammonia::Builder;

/// Keeps `<mark>` and nothing else: no attributes, script and style
/// contents dropped, other tags unwrapped to their text.
static HIGHLIGHT: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut b = Builder::new();
    b.tags(HashSet::from(["mark"]));
    b.generic_attributes(HashSet::new());
    b.tag_attributes(HashMap::new());
    b.clean_content_tags(HashSet::from(["script", "style"]));
    b
});

static PLAIN: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut b = Builder::empty();
    b.clean_content_tags(HashSet::from(["script", "style"]));
    b
});

/// Sanitize backend HTML, allowing only `<mark>` highlights.
#[must_use]
pub fn sanitize_highlight(html: &str) -> String {
    HIGHLIGHT.clean(html).to_string()
}

/// Reduce backend HTML to plain text for terminal output.
#[must_use]
pub fn to_plain_text(html: &str) -> String {
    PLAIN
        .clean(html)
        .to_string()
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
