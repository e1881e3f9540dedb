//! Rendering active credentials into tagged placeholders.

use std::cell::Cell;

use dx_dsn::{ConnectionString, PlaceholderKind, render_placeholder};
use lol_html::html_content::ContentType;
use lol_html::{Settings, element};

use crate::error::PageError;
use crate::rewrite;
use crate::tagger::WRAPPER_SELECTOR;

/// Replace the contents of every placeholder wrapper in `html` with markup
/// for `dsn`.
///
/// Without a connection string this is a no-op and the current contents
/// stay in place. Wrappers with an unknown `data-value` are skipped. The
/// wrappers themselves are kept, so syncing again with a different project
/// re-renders them.
///
/// # Errors
///
/// Returns [`PageError::Rewrite`] if the HTML cannot be processed.
pub fn sync_placeholders(html: &str, dsn: Option<&ConnectionString>) -> Result<String, PageError> {
    let Some(dsn) = dsn else {
        tracing::debug!("No active connection string, leaving placeholders as they are");
        return Ok(html.to_owned());
    };

    let rendered = Cell::new(0_usize);
    let output = rewrite::run(
        html,
        Settings {
            element_content_handlers: vec![element!(WRAPPER_SELECTOR, |el| {
                let kind = el
                    .get_attribute("data-value")
                    .as_deref()
                    .and_then(PlaceholderKind::from_name);
                if let Some(kind) = kind {
                    el.set_inner_content(&render_placeholder(dsn, kind), ContentType::Html);
                    rendered.set(rendered.get() + 1);
                }
                Ok(())
            })],
            ..Settings::default()
        },
    )?;

    tracing::debug!(count = rendered.get(), project_id = dsn.project_id, "Rendered placeholders");
    Ok(output)
}
