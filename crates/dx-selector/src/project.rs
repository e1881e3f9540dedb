//! Project and user records.

use dx_config::CredentialsConfig;
use serde::Deserialize;

/// A selectable project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Account-side id. `None` for the placeholder project.
    pub id: Option<u64>,
    /// Raw connection string.
    pub dsn: String,
    /// Display name, `"{team} / {project}"` for account projects.
    pub name: String,
    /// Option group, the organization for account projects.
    pub group: String,
}

impl Project {
    /// The example project shown when no account projects are available.
    #[must_use]
    pub fn placeholder(config: &CredentialsConfig) -> Self {
        Self {
            id: None,
            dsn: config.placeholder_dsn.clone(),
            name: config.placeholder_name.clone(),
            group: config.placeholder_group.clone(),
        }
    }
}

/// The signed-in user as reported by the account endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub is_authenticated: bool,
    pub avatar_url: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// One project as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectRecord {
    id: u64,
    dsn: String,
    team_name: String,
    project_name: String,
    organization_name: String,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: Some(record.id),
            dsn: record.dsn,
            name: format!("{} / {}", record.team_name, record.project_name),
            group: record.organization_name,
        }
    }
}

/// Body of `GET {api_url}/user/`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UserResponse {
    pub(crate) user: User,
    pub(crate) projects: Vec<ProjectRecord>,
}
