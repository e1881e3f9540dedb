//! Shared driver for streaming rewrites.

use lol_html::{HtmlRewriter, Settings};

use crate::error::PageError;

/// Run `html` through a rewriter configured with `settings`.
pub(crate) fn run(html: &str, settings: Settings<'_, '_>) -> Result<String, PageError> {
    let mut output = Vec::with_capacity(html.len());
    let mut rewriter = HtmlRewriter::new(settings, |c: &[u8]| output.extend_from_slice(c));
    rewriter.write(html.as_bytes())?;
    rewriter.end()?;
    Ok(String::from_utf8(output)?)
}

/// Check that `selector` is something the rewriter accepts.
///
/// The handler macros panic on invalid selectors, so configured selectors
/// are checked before they reach them.
pub(crate) fn validate_selector(selector: &str) -> Result<(), PageError> {
    selector
        .parse::<lol_html::Selector>()
        .map(drop)
        .map_err(|e| PageError::selector(selector, e))
}
