//! `dx browse` command implementation.

use std::path::Path;

use clap::Args;
use dx_config::CliSettings;
use dx_navigator::{Browser, ControllerOptions, PageController, PageFetcher, UreqFetcher};
use url::Url;

use super::{AccountArgs, load_config, load_projects};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the browse command.
#[derive(Args)]
pub(crate) struct BrowseArgs {
    /// Link to follow, as it appears on the starting page.
    path: String,

    /// Page to start from.
    #[arg(long, default_value = "/")]
    from: String,

    /// Documentation site base URL (overrides config).
    #[arg(long, env = "DX_BASE_URL")]
    base_url: Option<String>,

    #[command(flatten)]
    account: AccountArgs,
}

impl BrowseArgs {
    /// Execute the browse command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the starting page
    /// cannot be loaded.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            base_url: self.base_url.clone(),
            ..self.account.settings()
        };
        let config = load_config(config_path, &settings)?;

        if !self.from.starts_with('/') {
            return Err(CliError::Validation(format!(
                "--from must be an absolute path, got {:?}",
                self.from
            )));
        }

        let site = Url::parse(&config.site.base_url)?;
        let fetcher = UreqFetcher::from_config(&config.http);
        let document = fetcher.fetch(&site.join(&self.from)?)?;
        let options = ControllerOptions::from_config(&config.page, config.site.doc_variant)?;

        let mut controller = PageController::load(
            fetcher,
            TerminalBrowser::default(),
            site,
            &self.from,
            &document,
            options,
        )?;
        let (_, selector) = load_projects(&config);
        controller.attach_credentials(selector);

        if !controller.activate_link(&self.path) {
            output.warning(&format!(
                "{} is on another site, a browser would open it directly",
                self.path
            ));
            return Ok(());
        }

        if let Some(url) = &controller.browser().full_load {
            output.warning(&format!("In-page navigation failed, full page load of {url}"));
            return Ok(());
        }

        let view = controller.view();
        output.success(&format!(
            "Navigated to {}",
            controller.navigator().current_path()
        ));
        output.info(&format!("Title: {}", view.title));
        if let Some(entry) = controller.browser().history.last() {
            output.muted(&format!("History: {entry}"));
        }
        if let Some(project) = controller.selector().and_then(|s| s.active()) {
            output.info(&format!("Credentials: {}", project.name));
        }
        if !view.credential_bar_visible {
            output.muted("Credential bar hidden");
        }
        output.print(&view.content);
        Ok(())
    }
}

/// Browser stand-in that records history changes and a requested full load.
#[derive(Debug, Default)]
struct TerminalBrowser {
    history: Vec<String>,
    full_load: Option<String>,
}

impl Browser for TerminalBrowser {
    fn push_state(&mut self, url: &str, title: &str) {
        tracing::info!(url, title, "History entry");
        self.history.push(url.to_owned());
    }

    fn navigate_full(&mut self, url: &str) {
        self.full_load = Some(url.to_owned());
    }

    fn scroll_to_top(&mut self) {
        tracing::debug!("Scroll to top");
    }

    fn scroll_to_anchor(&mut self, anchor: &str) {
        tracing::debug!(anchor, "Scroll to anchor");
    }
}
