/// Escape text for interpolation into HTML.
///
/// Replaces `&`, `<`, `>` and `"` with their entities. `&` is replaced first
/// so entities produced by later replacements are not escaped again.
///
/// # Examples
///
/// ```
/// use dx_dsn::escape_html;
///
/// assert_eq!(escape_html("<a & b>"), "&lt;a &amp; b&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
