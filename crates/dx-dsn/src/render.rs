//! Credential markup for placeholder kinds.

use crate::connection::ConnectionString;
use crate::escape::escape_html;
use crate::kind::PlaceholderKind;

/// Render a DSN as markup.
///
/// With `public_only` the secret key and the `dsn-auth` wrapper are left out
/// entirely, so the output never contains the secret.
#[must_use]
pub fn dsn_to_html(dsn: &ConnectionString, public_only: bool) -> String {
    let auth = if public_only {
        escape_html(&dsn.public_key)
    } else {
        format!(
            r#"<span class="dsn-auth" title="Copy paste includes key and secret.">{}:{}</span>"#,
            escape_html(&dsn.public_key),
            escape_html(&dsn.secret_key)
        )
    };

    format!(
        r#"<span class="dsn">{}{auth}@{}{}</span>"#,
        escape_html(&dsn.scheme),
        escape_html(&dsn.host),
        escape_html(&dsn.path_section)
    )
}

/// Render the markup that replaces a placeholder of the given kind.
#[must_use]
pub fn render_placeholder(dsn: &ConnectionString, kind: PlaceholderKind) -> String {
    match kind {
        PlaceholderKind::Dsn => dsn_to_html(dsn, false),
        PlaceholderKind::PublicDsn => dsn_to_html(dsn, true),
        PlaceholderKind::PublicKey => escape_html(&dsn.public_key),
        PlaceholderKind::SecretKey => format!(
            r#"<span class="dsn-secret-key">{}</span>"#,
            escape_html(&dsn.secret_key)
        ),
        PlaceholderKind::ApiUrl => escape_html(&dsn.api_url()),
        PlaceholderKind::ProjectId => dsn.project_id.to_string(),
    }
}
