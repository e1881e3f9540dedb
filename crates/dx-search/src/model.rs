//! Search result model as returned by the backend.

use serde::{Deserialize, Serialize};

/// Hits from one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Site identifier, e.g. `docs`.
    pub site: String,
    /// Human-readable site name.
    pub name: String,
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// A single search hit.
///
/// `title` and `text` are HTML that may contain `<mark>` highlights and are
/// sanitized before rendering. Context strings are plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<HitContext>,
}

/// Breadcrumb-like context shown under a hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context2: Option<String>,
}
