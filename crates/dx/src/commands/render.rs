//! `dx render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use dx_dsn::ConnectionString;
use dx_page::{sync_placeholders, tag_placeholders};

use super::{AccountArgs, load_config, load_projects};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// HTML file containing sentinel tokens.
    input: PathBuf,

    /// Write the rendered HTML here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render with this connection string instead of the selected project.
    #[arg(long)]
    dsn: Option<String>,

    #[command(flatten)]
    account: AccountArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the config, input file or connection string is
    /// invalid, or the output cannot be written.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let config = load_config(config_path, &self.account.settings())?;

        let html = std::fs::read_to_string(&self.input)?;
        let tagged = tag_placeholders(&html, &config.page.code_selector)?;

        let dsn = match &self.dsn {
            Some(raw) => Some(ConnectionString::parse(raw)?),
            None => {
                let (_, mut selector) = load_projects(&config);
                selector.restore();
                if let Some(project) = selector.active() {
                    output.info(&format!("Rendering for {}", project.name));
                }
                selector.active_connection_string()
            }
        };
        if dsn.is_none() {
            output.warning("No usable connection string, placeholders left as tokens");
        }

        let rendered = sync_placeholders(&tagged, dsn.as_ref())?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.print(&rendered),
        }
        Ok(())
    }
}
