//! `dx projects` and `dx select` command implementations.

use std::path::Path;

use clap::Args;
use dx_selector::{Project, Transition};

use super::{AccountArgs, load_config, load_projects};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the projects command.
#[derive(Args)]
pub(crate) struct ProjectsArgs {
    #[command(flatten)]
    account: AccountArgs,
}

impl ProjectsArgs {
    /// Execute the projects command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let config = load_config(config_path, &self.account.settings())?;

        let (user, mut selector) = load_projects(&config);
        selector.restore();

        if user.is_authenticated {
            output.muted(&format!(
                "Signed in{}",
                user.name.map(|n| format!(" as {n}")).unwrap_or_default()
            ));
        } else {
            output.muted("Not signed in");
        }

        let active = selector.active();
        for group in selector.groups() {
            output.highlight(group.name);
            for project in group.projects {
                output.print(&format_project(project, active == Some(project)));
            }
        }

        if !selector.bar_visible(config.site.doc_variant) {
            output.muted("Credential bar is hidden for this documentation variant");
        }
        Ok(())
    }
}

/// Arguments for the select command.
#[derive(Args)]
pub(crate) struct SelectArgs {
    /// Project id to render credentials for.
    id: u64,

    #[command(flatten)]
    account: AccountArgs,
}

impl SelectArgs {
    /// Execute the select command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the project is
    /// unknown.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let config = load_config(config_path, &self.account.settings())?;

        let (_, mut selector) = load_projects(&config);
        selector.restore();

        let transition = selector.select_id(self.id)?;
        let name = selector.active().map(|p| p.name.as_str()).unwrap_or_default();
        match transition {
            Transition::Changed => output.success(&format!("Selected {name}")),
            Transition::Unchanged => output.info(&format!("{name} is already selected")),
        }
        Ok(())
    }
}

fn format_project(project: &Project, active: bool) -> String {
    let marker = if active { '*' } else { ' ' };
    let id = project
        .id
        .map_or_else(|| "-".to_owned(), |id| id.to_string());
    format!("  {marker} {id:>8}  {}", project.name)
}
