//! Navigation state machine.
//!
//! ```text
//! Idle(current) --begin(other path)--> Fetching(target) --complete--> Idle(target)
//!                                                       \--fail----> FullLoad(target)
//! Idle(current) --begin(same path)---> Idle(current)   (jump)
//! ```
//!
//! A later `begin` supersedes an in-flight fetch. Completions and failures
//! for anything but the in-flight target are ignored.

use url::Url;

/// A requested in-page navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Target path, e.g. `/platforms/python/`.
    pub path: String,
    /// In-page anchor including the `#`.
    pub hash: Option<String>,
    /// Whether a history entry is pushed when the navigation finishes.
    pub push_state: bool,
}

impl Navigation {
    /// Navigation triggered by activating a link.
    #[must_use]
    pub fn link(path: impl Into<String>, hash: Option<String>) -> Self {
        Self {
            path: path.into(),
            hash,
            push_state: true,
        }
    }

    /// Navigation triggered by back/forward; never pushes history.
    #[must_use]
    pub fn pop(path: impl Into<String>, hash: Option<String>) -> Self {
        Self {
            path: path.into(),
            hash,
            push_state: false,
        }
    }

    /// Path followed by the anchor, if any.
    #[must_use]
    pub fn full_target(&self) -> String {
        match &self.hash {
            Some(hash) => format!("{}{hash}", self.path),
            None => self.path.clone(),
        }
    }
}

/// Where the navigator is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    Idle {
        current: String,
    },
    Fetching {
        /// Path shown before the fetch started.
        current: String,
        target: Navigation,
    },
    /// In-page navigation was abandoned for an ordinary page load.
    FullLoad {
        target: String,
    },
}

/// What the caller has to do after [`Navigator::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Fetch the target path and report back with `complete` or `fail`.
    Fetch(Navigation),
    /// Same page: only history and anchor handling are needed.
    Jump(Navigation),
    /// The navigator already handed over to a full page load.
    Ignore,
}

/// Classification of an activated link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Internal(Navigation),
    /// Different origin or unparseable; left to the browser.
    External,
}

/// Tracks the current path and the in-flight fetch.
#[derive(Debug, Clone)]
pub struct Navigator {
    site: Url,
    state: NavState,
}

impl Navigator {
    /// Create a navigator for a site, currently showing `current_path`.
    #[must_use]
    pub fn new(site: Url, current_path: impl Into<String>) -> Self {
        Self {
            site,
            state: NavState::Idle {
                current: current_path.into(),
            },
        }
    }

    #[must_use]
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// The path currently shown. During a fetch this is still the old path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        match &self.state {
            NavState::Idle { current } | NavState::Fetching { current, .. } => current,
            NavState::FullLoad { target } => target,
        }
    }

    /// Absolute URL of `path` on this site.
    ///
    /// # Errors
    ///
    /// Returns the parse error for paths that cannot be joined to the site URL.
    pub fn url_for(&self, path: &str) -> Result<Url, url::ParseError> {
        self.site.join(path)
    }

    /// Decide whether `href`, found on the current page, is handled in-page.
    ///
    /// Only the path and anchor of internal links are kept.
    #[must_use]
    pub fn classify(&self, href: &str) -> LinkTarget {
        let Ok(resolved) = self
            .url_for(self.current_path())
            .and_then(|here| here.join(href))
        else {
            return LinkTarget::External;
        };

        if resolved.origin() != self.site.origin() {
            return LinkTarget::External;
        }

        let hash = resolved
            .fragment()
            .filter(|f| !f.is_empty())
            .map(|f| format!("#{f}"));
        LinkTarget::Internal(Navigation::link(resolved.path(), hash))
    }

    /// Start navigating to `nav`.
    pub fn begin(&mut self, nav: Navigation) -> Step {
        let current = match &self.state {
            NavState::FullLoad { .. } => return Step::Ignore,
            NavState::Idle { current } | NavState::Fetching { current, .. } => current.clone(),
        };

        if nav.path == current {
            tracing::debug!(to = %nav.full_target(), "Jumping");
            self.state = NavState::Idle { current };
            return Step::Jump(nav);
        }

        tracing::info!(to = %nav.full_target(), "Fetching content");
        self.state = NavState::Fetching {
            current,
            target: nav.clone(),
        };
        Step::Fetch(nav)
    }

    /// The fetch for `path` succeeded and its content is installed.
    ///
    /// Returns the finished navigation, or `None` when `path` is not the
    /// in-flight target.
    pub fn complete(&mut self, path: &str) -> Option<Navigation> {
        let target = self.take_in_flight(path)?;
        self.state = NavState::Idle {
            current: target.path.clone(),
        };
        Some(target)
    }

    /// The fetch or install for `path` failed.
    ///
    /// Returns the path to load the ordinary way, or `None` when `path` is
    /// not the in-flight target.
    pub fn fail(&mut self, path: &str) -> Option<String> {
        let target = self.take_in_flight(path)?;
        self.state = NavState::FullLoad {
            target: target.path.clone(),
        };
        Some(target.path)
    }

    /// The in-flight navigation, if it targets `path`.
    #[must_use]
    pub fn in_flight(&self, path: &str) -> Option<&Navigation> {
        match &self.state {
            NavState::Fetching { target, .. } if target.path == path => Some(target),
            _ => None,
        }
    }

    fn take_in_flight(&self, path: &str) -> Option<Navigation> {
        let target = self.in_flight(path).cloned();
        if target.is_none() {
            tracing::debug!(path, "Ignoring stale navigation result");
        }
        target
    }
}
