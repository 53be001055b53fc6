/// What: Strip a trailing `//` or `#` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text (right of `=`).
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - `//` only starts a comment at the beginning or after whitespace, so URLs survive.
/// - A value that itself starts with `#` keeps its first `#`; only a later one
///   starts a comment.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if s.starts_with("//") {
        return "";
    }
    if let Some(i) = s.find(" //").or_else(|| s.find("\t//")) {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// Interpret common truthy spellings (`true`, `1`, `yes`, `on`).
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Split a config line into a normalized key and its comment-free value.
///
/// Returns `None` for blank lines, comments, and lines without `=`.
pub(crate) fn split_key_value(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val.trim())))
}
