//! Sentinel placeholder kinds.

use std::fmt;

/// The kind of credential a sentinel token stands for.
///
/// Each kind has a literal token content authors write into code samples
/// (e.g. `___PUBLIC_KEY___`) and a markup name stored on the wrapper element
/// (e.g. `public-key`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// Full DSN including the secret key.
    Dsn,
    /// DSN without the secret key.
    PublicDsn,
    /// Public key only.
    PublicKey,
    /// Secret key only.
    SecretKey,
    /// Scheme and host of the ingestion API.
    ApiUrl,
    /// Numeric project id.
    ProjectId,
}

impl PlaceholderKind {
    /// All kinds, in token declaration order.
    pub const ALL: [Self; 6] = [
        Self::Dsn,
        Self::PublicDsn,
        Self::PublicKey,
        Self::SecretKey,
        Self::ApiUrl,
        Self::ProjectId,
    ];

    /// Sentinel token as written in documentation sources.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Dsn => "___DSN___",
            Self::PublicDsn => "___PUBLIC_DSN___",
            Self::PublicKey => "___PUBLIC_KEY___",
            Self::SecretKey => "___SECRET_KEY___",
            Self::ApiUrl => "___API_URL___",
            Self::ProjectId => "___PROJECT_ID___",
        }
    }

    /// Name stored in the wrapper's `data-value` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dsn => "dsn",
            Self::PublicDsn => "dsn-public",
            Self::PublicKey => "public-key",
            Self::SecretKey => "secret-key",
            Self::ApiUrl => "api-url",
            Self::ProjectId => "project-id",
        }
    }

    /// Look up a kind by its sentinel token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token() == token)
    }

    /// Look up a kind by its markup name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup() {
        assert_eq!(
            PlaceholderKind::from_token("___PUBLIC_DSN___"),
            Some(PlaceholderKind::PublicDsn)
        );
        assert_eq!(PlaceholderKind::from_token("___ORG_SLUG___"), None);
        assert_eq!(PlaceholderKind::from_token("DSN"), None);
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(
            PlaceholderKind::from_name("secret-key"),
            Some(PlaceholderKind::SecretKey)
        );
        assert_eq!(PlaceholderKind::from_name("secret_key"), None);
    }

    #[test]
    fn test_tokens_and_names_are_unique() {
        for a in PlaceholderKind::ALL {
            for b in PlaceholderKind::ALL {
                if a != b {
                    assert_ne!(a.token(), b.token());
                    assert_ne!(a.as_str(), b.as_str());
                }
            }
        }
    }
}
