//! Owned model of the swappable page regions.

use dx_dsn::ConnectionString;

use crate::error::PageError;
use crate::fragment::{FragmentSelectors, PageFragments, extract_fragments};
use crate::sync::sync_placeholders;
use crate::tagger::tag_placeholders;

/// Markup shown in the content region while a page is being fetched.
pub const LOADING_INDICATOR: &str = r#"<div class="loading"><div class="loading-indicator"></div></div>"#;

/// The page regions that in-page navigation swaps.
///
/// Content transformations ([`retag`](Self::retag), [`sync`](Self::sync))
/// are all-or-nothing: on error the previous content is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    /// Inner HTML of the content region.
    pub content: String,
    /// Inner HTML of the sidebar region.
    pub sidebar: String,
    /// Document title.
    pub title: String,
    /// Whether the credential bar (project picker) is shown.
    pub credential_bar_visible: bool,
    /// Whether the loading indicator currently occupies the content region.
    pub loading: bool,
}

impl PageView {
    /// Build a view from a full HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingFragment`] if the document lacks the
    /// content or sidebar region.
    pub fn from_document(html: &str, selectors: &FragmentSelectors) -> Result<Self, PageError> {
        let mut view = Self::default();
        view.install(extract_fragments(html, selectors)?);
        Ok(view)
    }

    /// Replace the content with the loading indicator and hide the bar.
    pub fn show_loading(&mut self) {
        self.content = LOADING_INDICATOR.to_owned();
        self.loading = true;
        self.credential_bar_visible = false;
    }

    /// Swap in freshly fetched regions. A page without a title keeps the
    /// current one.
    pub fn install(&mut self, fragments: PageFragments) {
        self.content = fragments.content;
        self.sidebar = fragments.sidebar;
        if let Some(title) = fragments.title {
            self.title = title;
        }
        self.loading = false;
    }

    /// Tag sentinel tokens in the content region.
    ///
    /// # Errors
    ///
    /// Returns the tagging error; content is left unchanged.
    pub fn retag(&mut self, code_selector: &str) -> Result<(), PageError> {
        self.content = tag_placeholders(&self.content, code_selector)?;
        Ok(())
    }

    /// Render `dsn` into the tagged placeholders of the content region.
    ///
    /// # Errors
    ///
    /// Returns the rewrite error; content is left unchanged.
    pub fn sync(&mut self, dsn: Option<&ConnectionString>) -> Result<(), PageError> {
        self.content = sync_placeholders(&self.content, dsn)?;
        Ok(())
    }

    pub fn show_credential_bar(&mut self) {
        self.credential_bar_visible = true;
    }

    pub fn hide_credential_bar(&mut self) {
        self.credential_bar_visible = false;
    }
}
