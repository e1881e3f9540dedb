//! Sentinel token tagging.
//!
//! Code samples carry literal tokens such as `___SECRET_KEY___`. Tagging wraps
//! each known token in
//!
//! ```text
//! <span class="rewrite-dsn" data-value="secret-key">___SECRET_KEY___</span>
//! ```
//!
//! so it can be re-rendered every time the active project changes. The token
//! text stays inside the wrapper until [`sync_placeholders`](crate::sync_placeholders)
//! replaces it.

use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;
use std::sync::LazyLock;

use dx_dsn::PlaceholderKind;
use lol_html::html_content::{ContentType, Element};
use lol_html::{Settings, doc_text, element};
use regex::{Captures, Regex};

use crate::error::PageError;
use crate::rewrite;

/// Class carried by every placeholder wrapper.
pub const WRAPPER_CLASS: &str = "rewrite-dsn";

/// Selector matching placeholder wrappers.
pub(crate) const WRAPPER_SELECTOR: &str = "span.rewrite-dsn";

/// The known sentinel tokens as alternatives.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = PlaceholderKind::ALL
        .iter()
        .map(|kind| regex::escape(kind.token()))
        .collect();
    Regex::new(&alternatives.join("|")).unwrap()
});

/// Wrap sentinel tokens found in text inside elements matching `code_selector`.
///
/// Text that is already inside a placeholder wrapper is left alone, so
/// tagging is idempotent. Token-shaped strings that are not one of the known
/// placeholder kinds are left untouched.
///
/// # Errors
///
/// Returns [`PageError::Selector`] for an invalid `code_selector` and
/// [`PageError::Rewrite`] if the HTML cannot be processed.
pub fn tag_placeholders(html: &str, code_selector: &str) -> Result<String, PageError> {
    rewrite::validate_selector(code_selector)?;

    let code_depth = Rc::new(Cell::new(0_usize));
    let wrapper_depth = Rc::new(Cell::new(0_usize));
    let tagged = Cell::new(0_usize);
    let mut pending = String::new();

    let output = rewrite::run(
        html,
        Settings {
            element_content_handlers: vec![
                element!(code_selector, |el| track_depth(el, &code_depth)),
                element!(WRAPPER_SELECTOR, |el| track_depth(el, &wrapper_depth)),
            ],
            document_content_handlers: vec![doc_text!(|t| {
                if code_depth.get() == 0 || wrapper_depth.get() > 0 {
                    return Ok(());
                }

                // A text node may arrive in several chunks; tokens can straddle them.
                pending.push_str(t.as_str());
                if t.last_in_text_node() {
                    let (text, count) = wrap_tokens(&pending);
                    tagged.set(tagged.get() + count);
                    t.replace(&text, ContentType::Html);
                    pending.clear();
                } else {
                    t.remove();
                }
                Ok(())
            })],
            ..Settings::default()
        },
    )?;

    tracing::debug!(count = tagged.get(), "Tagged placeholders");
    Ok(output)
}

/// Count how deep the rewriter is inside elements matched by one selector.
fn track_depth(
    el: &mut Element<'_, '_>,
    depth: &Rc<Cell<usize>>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    // Void and self-closing elements have no content to track.
    let Some(handlers) = el.end_tag_handlers() else {
        return Ok(());
    };
    depth.set(depth.get() + 1);
    let depth = Rc::clone(depth);
    handlers.push(Box::new(move |_end| {
        depth.set(depth.get().saturating_sub(1));
        Ok(())
    }));
    Ok(())
}

/// Wrap every known token in `text` (raw HTML text). Returns the new text and
/// the number of wrappers inserted.
fn wrap_tokens(text: &str) -> (String, usize) {
    let mut count = 0;
    let wrapped = TOKEN_RE.replace_all(text, |caps: &Captures<'_>| {
        let token = &caps[0];
        let Some(kind) = PlaceholderKind::from_token(token) else {
            return token.to_owned();
        };
        count += 1;
        format!(r#"<span class="{WRAPPER_CLASS}" data-value="{kind}">{token}</span>"#)
    });
    (wrapped.into_owned(), count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CODE: &str = "pre, code";

    #[test]
    fn test_tag_single_token() {
        let html = r#"<pre>Sentry.init({ dsn: "___DSN___" })</pre>"#;
        assert_eq!(
            tag_placeholders(html, CODE).unwrap(),
            r#"<pre>Sentry.init({ dsn: "<span class="rewrite-dsn" data-value="dsn">___DSN___</span>" })</pre>"#
        );
    }

    #[test]
    fn test_tag_all_kinds() {
        let html = "<code>___DSN___ ___PUBLIC_DSN___ ___PUBLIC_KEY___ ___SECRET_KEY___ ___API_URL___ ___PROJECT_ID___</code>";
        let tagged = tag_placeholders(html, CODE).unwrap();
        for kind in PlaceholderKind::ALL {
            assert!(
                tagged.contains(&format!(
                    r#"<span class="rewrite-dsn" data-value="{kind}">{}</span>"#,
                    kind.token()
                )),
                "missing {kind} in {tagged}"
            );
        }
    }

    #[test]
    fn test_tag_is_idempotent() {
        let html = r#"<div class="highlight"><pre><code>curl ___API_URL___/api/___PROJECT_ID___/store/ -u ___PUBLIC_KEY___:___SECRET_KEY___</code></pre></div>"#;
        let once = tag_placeholders(html, CODE).unwrap();
        let twice = tag_placeholders(&once, CODE).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tag_ignores_text_outside_code() {
        let html = "<p>Use ___DSN___ here</p><pre>___DSN___</pre>";
        let tagged = tag_placeholders(html, CODE).unwrap();
        assert!(tagged.starts_with("<p>Use ___DSN___ here</p>"));
        assert!(tagged.contains(r#"<pre><span class="rewrite-dsn" data-value="dsn">___DSN___</span></pre>"#));
    }

    #[test]
    fn test_tag_leaves_unknown_tokens() {
        let html = "<code>___ORG_SLUG___ and ___DSN___</code>";
        assert_eq!(
            tag_placeholders(html, CODE).unwrap(),
            r#"<code>___ORG_SLUG___ and <span class="rewrite-dsn" data-value="dsn">___DSN___</span></code>"#
        );
    }

    #[test]
    fn test_tag_token_sharing_underscores_with_unknown() {
        let html = "<code>___FOO___DSN___</code>";
        assert_eq!(
            tag_placeholders(html, CODE).unwrap(),
            r#"<code>___FOO<span class="rewrite-dsn" data-value="dsn">___DSN___</span></code>"#
        );
    }

    #[test]
    fn test_tag_inside_nested_markup() {
        let html = r#"<pre><span class="s">"___PUBLIC_DSN___"</span></pre>"#;
        assert_eq!(
            tag_placeholders(html, CODE).unwrap(),
            r#"<pre><span class="s">"<span class="rewrite-dsn" data-value="dsn-public">___PUBLIC_DSN___</span>"</span></pre>"#
        );
    }

    #[test]
    fn test_tag_after_code_closes() {
        let html = "<code>a</code><p>___DSN___</p>";
        assert_eq!(tag_placeholders(html, CODE).unwrap(), html);
    }

    #[test]
    fn test_tag_custom_selector() {
        let html = r#"<div class="highlight"><pre>___DSN___</pre></div><pre>___DSN___</pre>"#;
        let tagged = tag_placeholders(html, "div.highlight pre").unwrap();
        assert_eq!(tagged.matches("rewrite-dsn").count(), 1);
    }

    #[test]
    fn test_tag_invalid_selector() {
        let err = tag_placeholders("<pre></pre>", "pre[").unwrap_err();
        assert!(matches!(err, PageError::Selector { .. }));
    }

    #[test]
    fn test_wrap_tokens_counts() {
        let (text, count) = wrap_tokens("___DSN___ ___NOPE___ ___SECRET_KEY___");
        assert_eq!(count, 2);
        assert!(text.contains("___NOPE___"));
    }
}
