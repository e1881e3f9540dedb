//! Absolute link rewriting for swapped content.

use lol_html::{Settings, element};
use url::Url;

use crate::error::PageError;
use crate::rewrite;

/// Rewrite every `a[href]` in `html` to an absolute URL resolved against `base`.
///
/// Fragment-only links (`#section`) stay relative so they keep pointing into
/// the current page. Hrefs that cannot be resolved are left as they are.
///
/// # Errors
///
/// Returns [`PageError::Rewrite`] if the HTML cannot be processed.
pub fn absolutize_links(html: &str, base: &Url) -> Result<String, PageError> {
    rewrite::run(
        html,
        Settings {
            element_content_handlers: vec![element!("a[href]", |el| {
                let Some(href) = el.get_attribute("href") else {
                    return Ok(());
                };
                if href.starts_with('#') {
                    return Ok(());
                }
                match base.join(&href) {
                    Ok(absolute) => el.set_attribute("href", absolute.as_str())?,
                    Err(e) => tracing::debug!(href = %href, error = %e, "Leaving unresolvable link"),
                }
                Ok(())
            })],
            ..Settings::default()
        },
    )
}
