//! `dx search` command implementation.

use std::path::Path;

use clap::Args;
use dx_config::CliSettings;
use dx_search::{Hit, HttpSearchBackend, SearchWidget, to_plain_text};

use super::load_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Search query.
    query: String,

    /// Include results from every site, not just the home site.
    #[arg(long)]
    all: bool,

    /// Print the result panel markup instead of a text listing.
    #[arg(long)]
    html: bool,

    /// Search backend endpoint (overrides config).
    #[arg(long, env = "DX_SEARCH_ENDPOINT")]
    endpoint: Option<String>,
}

impl SearchArgs {
    /// Execute the search command.
    ///
    /// # Errors
    ///
    /// Returns an error if no endpoint is configured or the backend fails.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            search_endpoint: self.endpoint.clone(),
            ..Default::default()
        };
        let config = load_config(config_path, &settings)?;
        let endpoint = config.require_search_endpoint()?;

        let backend = HttpSearchBackend::from_config(endpoint, &config.http);
        let mut widget = SearchWidget::from_config(&config.search);
        widget.focus();
        widget.search(&backend, &self.query)?;
        if self.all {
            widget.expand_offsite();
        }

        if self.html {
            output.print(&widget.render());
            return Ok(());
        }

        if widget.total_hits() == 0 {
            output.warning(&format!("No results for \"{}\"", self.query));
            return Ok(());
        }

        for (result, hits) in widget.expanded_results() {
            output.highlight(&format!("From {}", result.name));
            if hits.is_empty() {
                output.muted(&format!("  No results for \"{}\"", self.query));
            }
            for hit in hits {
                output.print(&format_hit(hit));
            }
        }

        if !self.all && widget.results().len() > 1 {
            output.muted("Use --all to include results from every site");
        }
        Ok(())
    }
}

fn format_hit(hit: &Hit) -> String {
    let title = hit
        .title
        .as_deref()
        .map_or_else(|| hit.url.clone(), to_plain_text);
    let mut line = format!("  {title}\n    {}", hit.url);

    if let Some(context) = &hit.context {
        let crumbs: Vec<&str> = [&context.context1, &context.context2]
            .into_iter()
            .filter_map(Option::as_deref)
            .collect();
        if !crumbs.is_empty() {
            line.push_str(&format!("\n    {}", crumbs.join(" > ")));
        }
    }
    line
}
