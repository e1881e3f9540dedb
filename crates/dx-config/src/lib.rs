//! Configuration management for dx.
//!
//! Parses `dx.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base_url`
//! - `account.api_url`
//! - `account.session_cookie`
//! - `search.endpoint`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override documentation site base URL.
    pub base_url: Option<String>,
    /// Override account API URL.
    pub api_url: Option<String>,
    /// Override account session cookie.
    pub session_cookie: Option<String>,
    /// Override search endpoint.
    pub search_endpoint: Option<String>,
    /// Override state directory.
    pub state_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "dx.toml";

/// Upper bound for `search.max_hits`.
const MAX_HITS_LIMIT: usize = 100;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation site configuration.
    pub site: SiteConfig,
    /// Account API configuration.
    pub account: AccountConfig,
    /// Credential selector configuration.
    pub credentials: CredentialsConfig,
    /// Page structure configuration.
    pub page: PageConfig,
    /// Federated search configuration.
    pub search: SearchConfig,
    /// HTTP client configuration.
    pub http: HttpConfig,
    /// State configuration (paths are relative strings from TOML).
    state: StateConfigRaw,

    /// Resolved state configuration (set after loading).
    #[serde(skip)]
    pub state_resolved: StateConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Which flavor of the documentation is being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DocVariant {
    /// Documentation for the hosted service; credentials are shown.
    #[default]
    Hosted,
    /// Documentation for self-hosted installs; the credential bar stays hidden.
    SelfHosted,
}

/// Documentation site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL pages are fetched from.
    pub base_url: String,
    /// Documentation variant.
    pub doc_variant: DocVariant,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_owned(),
            doc_variant: DocVariant::Hosted,
        }
    }
}

/// Account API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Base URL of the account API (the user endpoint is `{api_url}/user/`).
    pub api_url: String,
    /// Session cookie sent with the credentialed account request.
    pub session_cookie: Option<String>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            api_url: "https://www.example.com/docs/api".to_owned(),
            session_cookie: None,
        }
    }
}

/// Credential selector configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Key under which the selected project id is persisted.
    pub storage_key: String,
    /// Connection string of the placeholder project shown without an account.
    pub placeholder_dsn: String,
    /// Display name of the placeholder project.
    pub placeholder_name: String,
    /// Group of the placeholder project.
    pub placeholder_group: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            storage_key: "dsnid".to_owned(),
            placeholder_dsn: "https://<key>:<secret>@app.example.com/<project>".to_owned(),
            placeholder_name: "Example DSN".to_owned(),
            placeholder_group: "Example".to_owned(),
        }
    }
}

/// Page structure configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// CSS selector of the content region.
    pub content_selector: String,
    /// CSS selector of the sidebar region.
    pub sidebar_selector: String,
    /// CSS selector of elements whose text may hold sentinel tokens.
    pub code_selector: String,
    /// Rewrite relative links in fetched content to absolute URLs.
    pub rewrite_links: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            content_selector: ".page-content".to_owned(),
            sidebar_selector: ".sidebar".to_owned(),
            code_selector: "pre, code".to_owned(),
            rewrite_links: true,
        }
    }
}

/// Federated search configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search backend endpoint. Search is disabled when unset.
    pub endpoint: Option<String>,
    /// Site identifiers to query; the first one is the home site.
    pub sites: Vec<String>,
    /// Maximum hits rendered per site.
    pub max_hits: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            sites: ["docs", "help-center", "develop", "blog"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            max_hits: 10,
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct HttpConfig {
    /// Global request timeout in seconds. No timeout when unset.
    pub timeout_secs: Option<u64>,
}

/// Raw state configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StateConfigRaw {
    backend: StateBackend,
    dir: Option<String>,
}

/// Where the selected project is remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StateBackend {
    /// One file per key under the state directory.
    #[default]
    File,
    /// Nothing is remembered between runs.
    None,
}

/// Resolved state configuration with absolute paths.
#[derive(Debug, Default)]
pub struct StateConfig {
    pub backend: StateBackend,
    /// Directory holding persisted UI state.
    pub dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`account.session_cookie`").
        field: String,
        /// Error message (e.g., "${`DX_SESSION`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `dx.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
        if let Some(api_url) = &settings.api_url {
            self.account.api_url.clone_from(api_url);
        }
        if let Some(cookie) = &settings.session_cookie {
            self.account.session_cookie = Some(cookie.clone());
        }
        if let Some(endpoint) = &settings.search_endpoint {
            self.search.endpoint = Some(endpoint.clone());
        }
        if let Some(state_dir) = &settings.state_dir {
            self.state_resolved.dir.clone_from(state_dir);
        }
    }

    /// Get the validated search endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no endpoint is configured.
    pub fn require_search_endpoint(&self) -> Result<&str, ConfigError> {
        self.search.endpoint.as_deref().ok_or_else(|| {
            ConfigError::Validation("search.endpoint required for search".into())
        })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        discover_from(current)
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            account: AccountConfig::default(),
            credentials: CredentialsConfig::default(),
            page: PageConfig::default(),
            search: SearchConfig::default(),
            http: HttpConfig::default(),
            state: StateConfigRaw::default(),
            state_resolved: StateConfig {
                backend: StateBackend::default(),
                dir: base.join(".dx").join("state"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_urls()?;
        self.validate_credentials()?;
        self.validate_page()?;
        self.validate_search()?;
        Ok(())
    }

    fn validate_urls(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.base_url, "site.base_url")?;
        require_http_url(&self.site.base_url, "site.base_url")?;
        require_non_empty(&self.account.api_url, "account.api_url")?;
        require_http_url(&self.account.api_url, "account.api_url")?;
        Ok(())
    }

    fn validate_credentials(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.credentials.storage_key, "credentials.storage_key")?;
        if self.credentials.storage_key.contains(['=', ';', '/']) {
            return Err(ConfigError::Validation(
                "credentials.storage_key cannot contain '=', ';' or '/'".to_owned(),
            ));
        }
        require_non_empty(
            &self.credentials.placeholder_dsn,
            "credentials.placeholder_dsn",
        )?;
        Ok(())
    }

    fn validate_page(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.page.content_selector, "page.content_selector")?;
        require_non_empty(&self.page.sidebar_selector, "page.sidebar_selector")?;
        require_non_empty(&self.page.code_selector, "page.code_selector")?;
        Ok(())
    }

    fn validate_search(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = &self.search.endpoint {
            require_non_empty(endpoint, "search.endpoint")?;
            require_http_url(endpoint, "search.endpoint")?;
        }
        if self.search.sites.is_empty() {
            return Err(ConfigError::Validation(
                "search.sites must list at least one site".to_owned(),
            ));
        }
        if let Some(site) = self.search.sites.iter().find(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "search.sites contains an empty site identifier: {site:?}"
            )));
        }
        if self.search.max_hits == 0 {
            return Err(ConfigError::Validation(
                "search.max_hits must be greater than 0".to_owned(),
            ));
        }
        if self.search.max_hits > MAX_HITS_LIMIT {
            return Err(ConfigError::Validation(format!(
                "search.max_hits cannot exceed {MAX_HITS_LIMIT}"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        self.account.api_url = expand::expand_env(&self.account.api_url, "account.api_url")?;

        if let Some(ref cookie) = self.account.session_cookie {
            let expanded = expand::expand_env(cookie, "account.session_cookie")?;
            // An empty expansion (e.g. `${DX_SESSION:-}`) means no cookie.
            self.account.session_cookie = Some(expanded).filter(|c| !c.is_empty());
        }

        if let Some(ref endpoint) = self.search.endpoint {
            self.search.endpoint = Some(expand::expand_env(endpoint, "search.endpoint")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.state_resolved = StateConfig {
            backend: self.state.backend,
            dir: match self.state.dir.as_deref() {
                Some(dir) => config_dir.join(dir),
                None => config_dir.join(".dx").join("state"),
            },
        };
    }
}

/// Walk from `start` up through its parents looking for `dx.toml`.
fn discover_from(mut current: PathBuf) -> Option<PathBuf> {
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.site.doc_variant, DocVariant::Hosted);
        assert_eq!(config.credentials.storage_key, "dsnid");
        assert_eq!(config.page.content_selector, ".page-content");
        assert_eq!(config.page.sidebar_selector, ".sidebar");
        assert_eq!(config.page.code_selector, "pre, code");
        assert_eq!(
            config.search.sites,
            vec!["docs", "help-center", "develop", "blog"]
        );
        assert_eq!(config.search.max_hits, 10);
        assert!(config.search.endpoint.is_none());
        assert!(config.http.timeout_secs.is_none());
        assert_eq!(config.state_resolved.dir, PathBuf::from("/test/.dx/state"));
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.account.api_url, "https://www.example.com/docs/api");
        assert_eq!(config.search.max_hits, 10);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
base_url = "https://docs.example.com"
doc_variant = "self-hosted"

[account]
api_url = "https://app.example.com/docs/api"
session_cookie = "session=abc"

[credentials]
storage_key = "projectid"
placeholder_dsn = "https://k:s@ingest.example.com/1"

[page]
content_selector = "main"
sidebar_selector = "nav"
code_selector = "div.highlight pre, code"
rewrite_links = false

[search]
endpoint = "https://search.example.com/query"
sites = ["docs", "blog"]
max_hits = 5

[http]
timeout_secs = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.base_url, "https://docs.example.com");
        assert_eq!(config.site.doc_variant, DocVariant::SelfHosted);
        assert_eq!(config.account.session_cookie.as_deref(), Some("session=abc"));
        assert_eq!(config.credentials.storage_key, "projectid");
        assert_eq!(config.credentials.placeholder_name, "Example DSN");
        assert_eq!(config.page.code_selector, "div.highlight pre, code");
        assert!(!config.page.rewrite_links);
        assert_eq!(config.search.sites, vec!["docs", "blog"]);
        assert_eq!(config.search.max_hits, 5);
        assert_eq!(config.http.timeout_secs, Some(10));
    }

    #[test]
    fn test_resolve_state_dir() {
        let toml = r#"
[state]
dir = "var/state"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(config.state_resolved.dir, PathBuf::from("/project/var/state"));
        assert_eq!(config.state_resolved.backend, StateBackend::File);
    }

    #[test]
    fn test_resolve_state_backend_none() {
        let toml = r#"
[state]
backend = "none"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(config.state_resolved.backend, StateBackend::None);
    }

    #[test]
    fn test_unknown_state_backend_rejected() {
        let toml = r#"
[state]
backend = "cookie"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_resolve_default_state_dir() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.state_resolved.dir,
            PathBuf::from("/project/.dx/state")
        );
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[search]\nendpoint = \"https://search.example.com\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.config_path, Some(path));
        assert_eq!(
            config.require_search_endpoint().unwrap(),
            "https://search.example.com"
        );
        assert_eq!(config.state_resolved.dir, tmp.path().join(".dx/state"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/dx.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILENAME), "").unwrap();
        let nested = tmp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            discover_from(nested),
            Some(tmp.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            api_url: Some("https://staging.example.com/api".to_owned()),
            search_endpoint: Some("https://search.example.com".to_owned()),
            state_dir: Some(PathBuf::from("/tmp/state")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.account.api_url, "https://staging.example.com/api");
        assert_eq!(
            config.search.endpoint.as_deref(),
            Some("https://search.example.com")
        );
        assert_eq!(config.state_resolved.dir, PathBuf::from("/tmp/state"));
        assert_eq!(config.site.base_url, "http://127.0.0.1:8000"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.base_url, before.site.base_url);
        assert_eq!(config.account.api_url, before.account.api_url);
        assert_eq!(config.state_resolved.dir, before.state_resolved.dir);
    }

    #[test]
    fn test_require_search_endpoint_missing() {
        let config = Config::default_with_base(Path::new("/test"));
        let err = config.require_search_endpoint().unwrap_err();
        assert!(err.to_string().contains("search.endpoint"));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DX_TEST_SEARCH_URL", "https://search.test.com");
            std::env::remove_var("DX_TEST_SESSION_UNSET");
        }

        let toml = r#"
[account]
session_cookie = "${DX_TEST_SESSION_UNSET:-}"

[search]
endpoint = "${DX_TEST_SEARCH_URL}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(
            config.search.endpoint.as_deref(),
            Some("https://search.test.com")
        );
        assert_eq!(config.account.session_cookie, None);

        unsafe {
            std::env::remove_var("DX_TEST_SEARCH_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DX_MISSING_VAR_CONFIG_TEST");
        }

        let toml = r#"
[account]
api_url = "${DX_MISSING_VAR_CONFIG_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DX_MISSING_VAR_CONFIG_TEST"));
        assert!(err.to_string().contains("account.api_url"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_url = "ftp://docs.example.com".to_owned();
        assert_validation_error(&config, &["site.base_url", "http"]);
    }

    #[test]
    fn test_validate_api_url_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.account.api_url = String::new();
        assert_validation_error(&config, &["account.api_url", "empty"]);
    }

    #[test]
    fn test_validate_storage_key_reserved_characters() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.credentials.storage_key = "dsn=id".to_owned();
        assert_validation_error(&config, &["credentials.storage_key"]);
    }

    #[test]
    fn test_validate_empty_selector() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.page.sidebar_selector = "  ".to_owned();
        assert_validation_error(&config, &["page.sidebar_selector", "empty"]);
    }

    #[test]
    fn test_validate_search_endpoint_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.search.endpoint = Some("search.example.com".to_owned());
        assert_validation_error(&config, &["search.endpoint", "http"]);
    }

    #[test]
    fn test_validate_search_sites_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.search.sites.clear();
        assert_validation_error(&config, &["search.sites"]);
    }

    #[test]
    fn test_validate_max_hits_bounds() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.search.max_hits = 0;
        assert_validation_error(&config, &["max_hits", "greater than 0"]);

        config.search.max_hits = 1000;
        assert_validation_error(&config, &["max_hits", "100"]);
    }
}
