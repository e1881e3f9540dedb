//! Extraction of swappable regions from a fetched page.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::PageError;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Parsed selectors for the content and sidebar regions.
#[derive(Debug, Clone)]
pub struct FragmentSelectors {
    content: Selector,
    sidebar: Selector,
}

impl FragmentSelectors {
    /// Parse the region selectors.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Selector`] if either selector is invalid.
    pub fn new(content: &str, sidebar: &str) -> Result<Self, PageError> {
        Ok(Self {
            content: parse(content)?,
            sidebar: parse(sidebar)?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector, PageError> {
    Selector::parse(selector).map_err(|e| PageError::selector(selector, e))
}

/// Regions pulled out of a fetched document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFragments {
    /// Document title, `None` if the page has no non-empty `<title>`.
    pub title: Option<String>,
    /// Inner HTML of the first content match.
    pub content: String,
    /// Inner HTML of the first sidebar match.
    pub sidebar: String,
}

/// Extract title, content and sidebar from a full HTML document.
///
/// # Errors
///
/// Returns [`PageError::MissingFragment`] when the content or sidebar
/// region is absent. A missing title is not an error.
pub fn extract_fragments(html: &str, selectors: &FragmentSelectors) -> Result<PageFragments, PageError> {
    let document = Html::parse_document(html);

    let content = document
        .select(&selectors.content)
        .next()
        .ok_or(PageError::MissingFragment { region: "content" })?
        .inner_html();
    let sidebar = document
        .select(&selectors.sidebar)
        .next()
        .ok_or(PageError::MissingFragment { region: "sidebar" })?
        .inner_html();

    let title = document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .filter(|t| !t.is_empty());

    Ok(PageFragments {
        title,
        content,
        sidebar,
    })
}
