//! The page controller wiring view, selector and navigator together.

use dx_config::{DocVariant, PageConfig};
use dx_page::{FragmentSelectors, PageError, PageView, absolutize_links, extract_fragments};
use dx_selector::{ProjectSelector, SelectorError, Transition};
use url::Url;

use crate::browser::Browser;
use crate::error::{NavigatorError, NetworkError};
use crate::fetch::PageFetcher;
use crate::navigator::{LinkTarget, Navigation, Navigator, Step};

/// Page handling settings, usually taken from the `[page]` and `[site]`
/// config sections.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub fragments: FragmentSelectors,
    pub code_selector: String,
    pub doc_variant: DocVariant,
    pub rewrite_links: bool,
}

impl ControllerOptions {
    /// Build options from config.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Selector`] if a region selector is invalid.
    pub fn from_config(page: &PageConfig, doc_variant: DocVariant) -> Result<Self, PageError> {
        Ok(Self {
            fragments: FragmentSelectors::new(&page.content_selector, &page.sidebar_selector)?,
            code_selector: page.code_selector.clone(),
            doc_variant,
            rewrite_links: page.rewrite_links,
        })
    }
}

/// Owns the page view and reacts to link activations, history navigation
/// and project selection.
///
/// Credentials are attached once the account has loaded; until then
/// placeholders stay as they are and the credential bar is hidden.
pub struct PageController<F: PageFetcher, B: Browser> {
    fetcher: F,
    browser: B,
    view: PageView,
    /// The view as it was before the loading indicator replaced it.
    pre_fetch: Option<PageView>,
    navigator: Navigator,
    selector: Option<ProjectSelector>,
    options: ControllerOptions,
}

impl<F: PageFetcher, B: Browser> PageController<F, B> {
    #[must_use]
    pub fn new(fetcher: F, browser: B, view: PageView, navigator: Navigator, options: ControllerOptions) -> Self {
        Self {
            fetcher,
            browser,
            view,
            pre_fetch: None,
            navigator,
            selector: None,
            options,
        }
    }

    /// Create a controller for the document at `current_path` on `site`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::Page`] if the document lacks the content or
    /// sidebar region.
    pub fn load(
        fetcher: F,
        browser: B,
        site: Url,
        current_path: &str,
        document: &str,
        options: ControllerOptions,
    ) -> Result<Self, NavigatorError> {
        let page_url = site.join(current_path)?;
        let mut view = PageView::from_document(document, &options.fragments)?;
        if options.rewrite_links {
            view.content = absolutize_links(&view.content, &page_url)?;
            view.sidebar = absolutize_links(&view.sidebar, &page_url)?;
        }
        let navigator = Navigator::new(site, current_path);
        Ok(Self::new(fetcher, browser, view, navigator, options))
    }

    #[must_use]
    pub fn view(&self) -> &PageView {
        &self.view
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn selector(&self) -> Option<&ProjectSelector> {
        self.selector.as_ref()
    }

    #[must_use]
    pub fn browser(&self) -> &B {
        &self.browser
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Tag the page, restore the remembered project and render it.
    pub fn attach_credentials(&mut self, mut selector: ProjectSelector) {
        if let Err(e) = self.view.retag(&self.options.code_selector) {
            tracing::warn!(error = %e, "Could not tag placeholders");
        }
        selector.restore();
        self.selector = Some(selector);
        self.refresh_bar();
        self.sync_view();
    }

    /// Select a project by account id and re-render on change.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownProject`] if no such project is loaded.
    pub fn select_project(&mut self, id: u64) -> Result<Transition, SelectorError> {
        let transition = self
            .selector
            .as_mut()
            .ok_or_else(|| SelectorError::UnknownProject(id.to_string()))?
            .select_id(id)?;
        if transition == Transition::Changed {
            self.sync_view();
        }
        Ok(transition)
    }

    /// Select a project by raw connection string and re-render on change.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownProject`] if no such project is loaded.
    pub fn select_dsn(&mut self, dsn: &str) -> Result<Transition, SelectorError> {
        let transition = self
            .selector
            .as_mut()
            .ok_or_else(|| SelectorError::UnknownProject(dsn.to_owned()))?
            .select_dsn(dsn)?;
        if transition == Transition::Changed {
            self.sync_view();
        }
        Ok(transition)
    }

    /// Handle activation of a link. Returns `false` when the link is left to
    /// the browser.
    pub fn activate_link(&mut self, href: &str) -> bool {
        match self.navigator.classify(href) {
            LinkTarget::Internal(nav) => {
                self.navigate(nav);
                true
            }
            LinkTarget::External => false,
        }
    }

    /// Handle back/forward to `path`.
    pub fn popstate(&mut self, path: &str, hash: Option<&str>) {
        let hash = hash.filter(|h| !h.is_empty()).map(str::to_owned);
        self.navigate(Navigation::pop(path, hash));
    }

    /// Navigate and fetch synchronously through the fetcher.
    pub fn navigate(&mut self, nav: Navigation) {
        let Some(nav) = self.begin_navigation(nav) else {
            return;
        };
        let result = match self.navigator.url_for(&nav.path) {
            Ok(url) => self.fetcher.fetch(&url),
            Err(e) => {
                tracing::warn!(path = %nav.path, error = %e, "Invalid navigation target");
                self.fall_back(&nav.path);
                return;
            }
        };
        self.complete_navigation(&nav.path, result);
    }

    /// Start a navigation. Returns the navigation whose path must be fetched
    /// and passed to [`complete_navigation`](Self::complete_navigation), or
    /// `None` when nothing needs fetching.
    pub fn begin_navigation(&mut self, nav: Navigation) -> Option<Navigation> {
        self.browser.scroll_to_top();
        match self.navigator.begin(nav) {
            Step::Fetch(nav) => {
                if self.pre_fetch.is_none() {
                    self.pre_fetch = Some(self.view.clone());
                }
                self.view.show_loading();
                Some(nav)
            }
            Step::Jump(nav) => {
                self.restore_pre_fetch();
                self.finish(&nav);
                None
            }
            Step::Ignore => None,
        }
    }

    /// Finish the fetch for `path`. Results for anything but the in-flight
    /// target are dropped.
    pub fn complete_navigation(&mut self, path: &str, result: Result<String, NetworkError>) {
        let Some(nav) = self.navigator.in_flight(path).cloned() else {
            tracing::debug!(path, "Dropping stale page");
            return;
        };

        let html = match result {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(path, error = %e, "Page fetch failed");
                self.fall_back(path);
                return;
            }
        };

        if let Err(e) = self.install(&nav, &html) {
            tracing::warn!(path, error = %e, "Could not install fetched page");
            self.fall_back(path);
            return;
        }

        self.navigator.complete(path);
        self.pre_fetch = None;
        self.finish(&nav);
    }

    /// Put back the page a superseded fetch had replaced with the loading
    /// indicator.
    fn restore_pre_fetch(&mut self) {
        let Some(view) = self.pre_fetch.take() else {
            return;
        };
        tracing::debug!("Restoring page after superseded fetch");
        self.view = view;
        self.refresh_bar();
        self.sync_view();
    }

    fn install(&mut self, nav: &Navigation, html: &str) -> Result<(), PageError> {
        let mut fragments = extract_fragments(html, &self.options.fragments)?;
        if self.options.rewrite_links {
            let page_url = self.navigator.url_for(&nav.path)?;
            fragments.content = absolutize_links(&fragments.content, &page_url)?;
            fragments.sidebar = absolutize_links(&fragments.sidebar, &page_url)?;
        }

        let mut next = self.view.clone();
        next.install(fragments);
        next.retag(&self.options.code_selector)?;
        next.sync(self.active_dsn().as_ref())?;
        self.view = next;
        self.refresh_bar();
        Ok(())
    }

    fn finish(&mut self, nav: &Navigation) {
        if nav.push_state {
            self.browser.push_state(&nav.full_target(), &self.view.title);
        }
        if let Some(hash) = &nav.hash {
            self.browser.scroll_to_anchor(hash);
        }
    }

    fn fall_back(&mut self, path: &str) {
        let Some(target) = self.navigator.fail(path) else {
            return;
        };
        let url = match self.navigator.url_for(&target) {
            Ok(url) => url.to_string(),
            Err(_) => target,
        };
        self.browser.navigate_full(&url);
    }

    fn active_dsn(&self) -> Option<dx_dsn::ConnectionString> {
        self.selector
            .as_ref()
            .and_then(ProjectSelector::active_connection_string)
    }

    fn sync_view(&mut self) {
        let dsn = self.active_dsn();
        if let Err(e) = self.view.sync(dsn.as_ref()) {
            tracing::warn!(error = %e, "Could not render credentials");
        }
    }

    fn refresh_bar(&mut self) {
        let visible = self
            .selector
            .as_ref()
            .is_some_and(|s| s.bar_visible(self.options.doc_variant));
        if visible {
            self.view.show_credential_bar();
        } else {
            self.view.hide_credential_bar();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::mock::{BrowserEvent, MockFetcher, RecordingBrowser};
    use dx_page::LOADING_INDICATOR;
    use dx_selector::Project;
    use dx_store::{MemoryStore, StateStore};
    use pretty_assertions::assert_eq;

    fn page(title: &str, body: &str) -> String {
        format!(
            r#"<html><head><title>{title}</title></head><body>
<div class="sidebar"><a href="guide/">Guide</a></div>
<div class="page-content">{body}</div>
</body></html>"#
        )
    }

    fn options(variant: DocVariant) -> ControllerOptions {
        ControllerOptions::from_config(&PageConfig::default(), variant).unwrap()
    }

    fn controller(fetcher: MockFetcher, variant: DocVariant) -> PageController<MockFetcher, RecordingBrowser> {
        PageController::load(
            fetcher,
            RecordingBrowser::new(),
            Url::parse("https://docs.example.com/").unwrap(),
            "/start/",
            &page("Start", "<pre>dsn = ___DSN___</pre>"),
            options(variant),
        )
        .unwrap()
    }

    fn selector() -> ProjectSelector {
        let projects = vec![
            Project {
                id: Some(1),
                dsn: "https://one:s1@ingest.example.com/1".to_owned(),
                name: "team / one".to_owned(),
                group: "org".to_owned(),
            },
            Project {
                id: Some(2),
                dsn: "https://two:s2@ingest.example.com/2".to_owned(),
                name: "team / two".to_owned(),
                group: "org".to_owned(),
            },
        ];
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        ProjectSelector::new(projects, store, "dsnid")
    }

    #[test]
    fn test_load_absolutizes_links() {
        let ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        assert_eq!(
            ctl.view().sidebar,
            r#"<a href="https://docs.example.com/start/guide/">Guide</a>"#
        );
        assert!(!ctl.view().credential_bar_visible);
    }

    #[test]
    fn test_attach_credentials_renders_first_project() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        ctl.attach_credentials(selector());
        assert!(ctl.view().content.contains("one:s1"));
        assert!(ctl.view().credential_bar_visible);
    }

    #[test]
    fn test_attach_credentials_self_hosted_hides_bar() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::SelfHosted);
        ctl.attach_credentials(selector());
        assert!(!ctl.view().credential_bar_visible);
        assert!(ctl.view().content.contains("one:s1"));
    }

    #[test]
    fn test_select_project_rerenders() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        ctl.attach_credentials(selector());
        assert_eq!(ctl.select_project(2).unwrap(), Transition::Changed);
        assert!(ctl.view().content.contains("two:s2"));
        assert!(!ctl.view().content.contains("one:s1"));
        assert_eq!(ctl.select_project(2).unwrap(), Transition::Unchanged);
    }

    #[test]
    fn test_select_before_account_loaded() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        assert!(ctl.select_project(1).is_err());
    }

    #[test]
    fn test_internal_link_swaps_content() {
        let fetcher = MockFetcher::new().with_page("/next/", page("Next", "<code>___PROJECT_ID___</code>"));
        let mut ctl = controller(fetcher, DocVariant::Hosted);
        ctl.attach_credentials(selector());

        assert!(ctl.activate_link("/next/#setup"));

        let view = ctl.view();
        assert_eq!(view.title, "Next");
        assert_eq!(
            view.content,
            r#"<code><span class="rewrite-dsn" data-value="project-id">1</span></code>"#
        );
        assert_eq!(view.sidebar, r#"<a href="https://docs.example.com/next/guide/">Guide</a>"#);
        assert!(view.credential_bar_visible);
        assert!(!view.loading);
        assert_eq!(ctl.navigator().current_path(), "/next/");
        assert_eq!(
            ctl.browser().events,
            vec![
                BrowserEvent::ScrollToTop,
                BrowserEvent::PushState {
                    url: "/next/#setup".to_owned(),
                    title: "Next".to_owned(),
                },
                BrowserEvent::ScrollToAnchor("#setup".to_owned()),
            ]
        );
    }

    #[test]
    fn test_missing_content_falls_back_to_full_load() {
        let fetcher = MockFetcher::new().with_page("/broken/", r#"<div class="sidebar"></div>"#);
        let mut ctl = controller(fetcher, DocVariant::Hosted);

        ctl.activate_link("/broken/");

        assert_eq!(
            ctl.browser().events,
            vec![
                BrowserEvent::ScrollToTop,
                BrowserEvent::NavigateFull("https://docs.example.com/broken/".to_owned()),
            ]
        );
    }

    #[test]
    fn test_fetch_error_falls_back_to_full_load() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        ctl.activate_link("/missing/");
        assert_eq!(
            ctl.browser().events.last(),
            Some(&BrowserEvent::NavigateFull("https://docs.example.com/missing/".to_owned()))
        );
        assert_eq!(ctl.fetcher().requests(), vec!["/missing/".to_owned()]);
    }

    #[test]
    fn test_same_path_jumps_without_fetch() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        assert!(ctl.activate_link("#usage"));
        assert!(ctl.fetcher().requests().is_empty());
        assert_eq!(
            ctl.browser().events,
            vec![
                BrowserEvent::ScrollToTop,
                BrowserEvent::PushState {
                    url: "/start/#usage".to_owned(),
                    title: "Start".to_owned(),
                },
                BrowserEvent::ScrollToAnchor("#usage".to_owned()),
            ]
        );
    }

    #[test]
    fn test_popstate_never_pushes() {
        let fetcher = MockFetcher::new().with_page("/back/", page("Back", "<p>b</p>"));
        let mut ctl = controller(fetcher, DocVariant::Hosted);
        ctl.popstate("/back/", Some(""));
        assert_eq!(ctl.view().title, "Back");
        assert_eq!(ctl.browser().events, vec![BrowserEvent::ScrollToTop]);
    }

    #[test]
    fn test_external_link_left_to_browser() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        assert!(!ctl.activate_link("https://blog.example.com/post/"));
        assert!(ctl.browser().events.is_empty());
    }

    #[test]
    fn test_stale_completion_dropped() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        ctl.attach_credentials(selector());

        let first = ctl.begin_navigation(Navigation::link("/a/", None)).unwrap();
        assert!(ctl.view().loading);
        assert_eq!(ctl.view().content, LOADING_INDICATOR);
        assert!(!ctl.view().credential_bar_visible);

        let second = ctl.begin_navigation(Navigation::link("/b/", None)).unwrap();
        ctl.complete_navigation(&first.path, Ok(page("A", "<p>a</p>")));
        assert!(ctl.view().loading);

        ctl.complete_navigation(&second.path, Ok(page("B", "<p>b</p>")));
        assert_eq!(ctl.view().title, "B");
        assert_eq!(ctl.navigator().current_path(), "/b/");
    }

    #[test]
    fn test_back_to_current_page_during_fetch_restores_view() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        ctl.attach_credentials(selector());
        let before = ctl.view().clone();

        let link = ctl.begin_navigation(Navigation::link("/a/", None)).unwrap();
        assert!(ctl.view().loading);
        assert_eq!(ctl.begin_navigation(Navigation::pop("/start/", None)), None);

        assert_eq!(ctl.view(), &before);
        ctl.complete_navigation(&link.path, Ok(page("A", "<p>a</p>")));
        assert_eq!(ctl.view(), &before);
        assert!(!ctl.view().loading);
        assert!(ctl.view().credential_bar_visible);
        assert_eq!(ctl.navigator().current_path(), "/start/");
    }

    #[test]
    fn test_restored_view_renders_project_selected_while_loading() {
        let mut ctl = controller(MockFetcher::new(), DocVariant::Hosted);
        ctl.attach_credentials(selector());

        ctl.begin_navigation(Navigation::link("/a/", None)).unwrap();
        ctl.begin_navigation(Navigation::link("/b/", None)).unwrap();
        assert_eq!(ctl.select_project(2).unwrap(), Transition::Changed);
        ctl.begin_navigation(Navigation::link("/start/", Some("#top".to_owned())));

        assert!(!ctl.view().loading);
        assert!(ctl.view().content.contains("two:s2"));
        assert!(!ctl.view().content.contains("one:s1"));
    }
}
