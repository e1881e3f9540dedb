//! Search widget state and rendering.

use std::fmt::Write;

use dx_config::SearchConfig;
use dx_dsn::escape_html;

use crate::backend::{SearchBackend, SearchError};
use crate::model::{Hit, SearchResult};
use crate::sanitize::sanitize_highlight;

/// Markup shown until the first response arrives.
pub const SEARCH_LOADING: &str = r#"<div class="sgs-loading"></div>"#;

/// A query issued by [`SearchWidget::input`]; hand it back with the
/// response to [`SearchWidget::receive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub query: String,
}

/// State of the search box and its result panel.
///
/// Each keystroke issues a numbered [`Ticket`]. Responses replace the
/// result set wholesale, but only if they answer a newer ticket than the
/// one currently shown, so a slow response never overwrites a fresher one.
#[derive(Debug, Clone)]
pub struct SearchWidget {
    sites: Vec<String>,
    max_hits: usize,
    query: String,
    results: Vec<SearchResult>,
    focused: bool,
    show_offsite: bool,
    loading: bool,
    issued: u64,
    shown: Option<u64>,
}

impl SearchWidget {
    /// Create a widget querying `sites`; the first site is the home site.
    #[must_use]
    pub fn new(sites: Vec<String>, max_hits: usize) -> Self {
        Self {
            sites,
            max_hits,
            query: String::new(),
            results: Vec::new(),
            focused: false,
            show_offsite: false,
            loading: true,
            issued: 0,
            shown: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.sites.clone(), config.max_hits)
    }

    #[must_use]
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The query changed. Returns the ticket to run against the backend.
    pub fn input(&mut self, query: &str) -> Ticket {
        self.query = query.to_owned();
        self.issued += 1;
        Ticket {
            seq: self.issued,
            query: self.query.clone(),
        }
    }

    /// A response for `ticket` arrived. Returns whether it was applied.
    pub fn receive(&mut self, ticket: &Ticket, results: Vec<SearchResult>) -> bool {
        if self.shown.is_some_and(|shown| shown >= ticket.seq) {
            tracing::debug!(seq = ticket.seq, query = %ticket.query, "Discarding stale search response");
            return false;
        }
        self.shown = Some(ticket.seq);
        self.loading = false;
        self.results = results;
        true
    }

    /// Run `query` against `backend` and apply the response.
    ///
    /// # Errors
    ///
    /// Returns the backend error; the previous results stay in place.
    pub fn search<B: SearchBackend + ?Sized>(&mut self, backend: &B, query: &str) -> Result<(), SearchError> {
        let ticket = self.input(query);
        let results = backend.query(&ticket.query, &self.sites)?;
        self.receive(&ticket, results);
        Ok(())
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// A pointer went down somewhere in the document. Presses outside the
    /// widget collapse the panel.
    pub fn on_document_pointer(&mut self, inside_widget: bool) {
        if !inside_widget {
            self.focused = false;
        }
    }

    /// Show results from every site, not just the home site.
    pub fn expand_offsite(&mut self) {
        self.show_offsite = true;
    }

    /// Hits across all sites, before the per-site limit.
    #[must_use]
    pub fn total_hits(&self) -> usize {
        self.results.iter().map(|r| r.hits.len()).sum()
    }

    /// Whether the result panel is open.
    #[must_use]
    pub fn panel_open(&self) -> bool {
        !self.query.is_empty() && self.focused
    }

    /// Site groups currently expanded, each with its hits cut to the limit.
    #[must_use]
    pub fn expanded_results(&self) -> Vec<(&SearchResult, &[Hit])> {
        self.results
            .iter()
            .enumerate()
            .filter(|(i, _)| *i == 0 || self.show_offsite)
            .map(|(_, r)| (r, &r.hits[..r.hits.len().min(self.max_hits)]))
            .collect()
    }

    fn is_home(&self, site: &str) -> bool {
        self.sites.first().is_some_and(|home| home == site)
    }

    /// Render the result panel. Empty when the panel is closed.
    #[must_use]
    pub fn render(&self) -> String {
        if !self.panel_open() {
            return String::new();
        }

        let query = escape_html(&self.query);
        let mut out = String::from(r#"<div class="sgs-search-results">"#);

        if self.loading {
            out.push_str(SEARCH_LOADING);
        } else if self.total_hits() == 0 {
            let _ = write!(out, r#"<div class="sgs-hit-empty-state">No results for <em>{query}</em></div>"#);
        } else {
            out.push_str(r#"<div class="sgs-search-results-scroll-container">"#);
            for (result, hits) in self.expanded_results() {
                let home = self.is_home(&result.site);
                if !home {
                    let _ = write!(
                        out,
                        r#"<h4 class="sgs-site-result-heading">From {}</h4>"#,
                        escape_html(&result.name)
                    );
                }
                out.push_str(if home {
                    r#"<ul class="sgs-hit-list">"#
                } else {
                    r#"<ul class="sgs-hit-list sgs-offsite">"#
                });
                if hits.is_empty() {
                    let _ = write!(
                        out,
                        r#"<li class="sgs-hit-item sgs-hit-empty-state">No results for <em>{query}</em></li>"#
                    );
                }
                for hit in hits {
                    render_hit(&mut out, hit);
                }
                out.push_str("</ul>");
            }
            out.push_str("</div>");

            if !self.show_offsite {
                let _ = write!(
                    out,
                    r#"<div class="sgs-expand-results"><button class="sgs-expand-results-button">Search <em>{query}</em> across all sites</button></div>"#
                );
            }
        }

        out.push_str("</div>");
        out
    }
}

fn render_hit(out: &mut String, hit: &Hit) {
    let _ = write!(out, r#"<li class="sgs-hit-item"><a href="{}">"#, escape_html(&hit.url));
    if let Some(title) = &hit.title {
        let _ = write!(out, "<h6><span>{}</span></h6>", sanitize_highlight(title));
    }
    if let Some(text) = &hit.text {
        let _ = write!(out, "<span>{}</span>", sanitize_highlight(text));
    }
    if let Some(context) = &hit.context {
        out.push_str(r#"<div class="sgs-hit-context">"#);
        if let Some(left) = &context.context1 {
            let _ = write!(out, r#"<div class="sgs-hit-context-left">{}</div>"#, escape_html(left));
        }
        if let Some(right) = &context.context2 {
            let _ = write!(out, r#"<div class="sgs-hit-context-right">{}</div>"#, escape_html(right));
        }
        out.push_str("</div>");
    }
    out.push_str("</a></li>");
}
