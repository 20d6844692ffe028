//! HTML escaping of raw input.

/// Escape `&`, `<`, `"` and `'` as HTML entities.
///
/// `>` is kept as is: it starts blockquote lines, and without a `<` it can
/// never open a tag. Must run exactly once, before any markup is read.
///
/// ```
/// use ashes_markup_engine::escape_html;
///
/// assert_eq!(escape_html("> a < b & c"), "> a &lt; b &amp; c");
/// ```
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for (i, piece) in raw.split('>').enumerate() {
        if i > 0 {
            escaped.push('>');
        }
        html_escape::encode_quoted_attribute_to_string(piece, &mut escaped);
    }
    escaped
}
