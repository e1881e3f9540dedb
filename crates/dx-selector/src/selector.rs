//! The active project and its persistence.

use std::sync::Arc;

use dx_config::DocVariant;
use dx_dsn::ConnectionString;
use dx_store::{StateStore, StateStoreExt};

use crate::error::SelectorError;
use crate::project::Project;

/// Outcome of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A different project is now active; placeholders must be re-rendered.
    Changed,
    /// The active project did not change.
    Unchanged,
}

/// Projects sharing a group, in load order.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectGroup<'a> {
    pub name: &'a str,
    pub projects: Vec<&'a Project>,
}

/// Holds the loaded projects and which one is active.
///
/// Starts with nothing selected. Every change of the active project writes
/// its id to the store under `storage_key`, except for the id-less
/// placeholder project.
pub struct ProjectSelector {
    projects: Vec<Project>,
    active: Option<usize>,
    store: Arc<dyn StateStore>,
    storage_key: String,
}

impl ProjectSelector {
    #[must_use]
    pub fn new(projects: Vec<Project>, store: Arc<dyn StateStore>, storage_key: impl Into<String>) -> Self {
        Self {
            projects,
            active: None,
            store,
            storage_key: storage_key.into(),
        }
    }

    /// Select the remembered project, or the first one if nothing usable is
    /// remembered.
    pub fn restore(&mut self) -> Transition {
        let remembered = self.store.get_parsed::<u64>(&self.storage_key);
        let index = remembered
            .and_then(|id| self.projects.iter().position(|p| p.id == Some(id)))
            .or_else(|| (!self.projects.is_empty()).then_some(0));

        match index {
            Some(index) => {
                if remembered.is_some() && self.projects[index].id != remembered {
                    tracing::debug!(id = ?remembered, "Remembered project no longer exists");
                }
                self.activate(index)
            }
            None => Transition::Unchanged,
        }
    }

    /// Select the project with the given account id.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownProject`] if no project has this id.
    pub fn select_id(&mut self, id: u64) -> Result<Transition, SelectorError> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == Some(id))
            .ok_or_else(|| SelectorError::UnknownProject(id.to_string()))?;
        Ok(self.activate(index))
    }

    /// Select the project with the given raw connection string, the value a
    /// picker option carries.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownProject`] if no project has this
    /// connection string.
    pub fn select_dsn(&mut self, dsn: &str) -> Result<Transition, SelectorError> {
        let index = self
            .projects
            .iter()
            .position(|p| p.dsn == dsn)
            .ok_or_else(|| SelectorError::UnknownProject(dsn.to_owned()))?;
        Ok(self.activate(index))
    }

    fn activate(&mut self, index: usize) -> Transition {
        if self.active == Some(index) {
            return Transition::Unchanged;
        }
        self.active = Some(index);

        let project = &self.projects[index];
        if let Some(id) = project.id {
            self.store.set_display(&self.storage_key, &id);
        }
        tracing::info!(project = %project.name, id = ?project.id, "Selected project");
        Transition::Changed
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn active(&self) -> Option<&Project> {
        self.active.map(|i| &self.projects[i])
    }

    /// Projects grouped by `group`, groups in order of first appearance.
    #[must_use]
    pub fn groups(&self) -> Vec<ProjectGroup<'_>> {
        let mut groups: Vec<ProjectGroup<'_>> = Vec::new();
        for project in &self.projects {
            match groups.iter_mut().find(|g| g.name == project.group) {
                Some(group) => group.projects.push(project),
                None => groups.push(ProjectGroup {
                    name: &project.group,
                    projects: vec![project],
                }),
            }
        }
        groups
    }

    /// Parsed connection string of the active project.
    ///
    /// `None` when nothing is selected or the connection string is
    /// malformed; placeholders are then left as they are.
    #[must_use]
    pub fn active_connection_string(&self) -> Option<ConnectionString> {
        let project = self.active()?;
        match ConnectionString::parse(&project.dsn) {
            Ok(dsn) => Some(dsn),
            Err(e) => {
                tracing::warn!(error = %e, project = %project.name, "Active project has a malformed DSN");
                None
            }
        }
    }

    /// Whether the credential bar should be shown for this doc variant.
    #[must_use]
    pub fn bar_visible(&self, variant: DocVariant) -> bool {
        !self.projects.is_empty() && variant == DocVariant::Hosted
    }
}
