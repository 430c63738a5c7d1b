//! Backslash escaping for echoing untrusted input inside messages.

const ESCAPE_CHAR: char = '\\';
const ESCAPED_CHARS: [char; 3] = ['"', '\'', '\\'];

/// Adds a backslash before every `"`, `'` and `\` character.
///
/// # Example
/// ```
/// use roman_semver::escape::escape;
/// assert_eq!(escape("ab\"c"), "ab\\\"c");
/// ```
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if ESCAPED_CHARS.contains(&c) {
            result.push(ESCAPE_CHAR);
        }
        result.push(c);
    }
    result
}

/// Strips one level of backslash escaping. The opposite of [`escape`].
///
/// A trailing lone backslash is dropped.
pub fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHAR {
            if let Some(next) = chars.next() {
                result.push(next);
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Wraps the escaped string in double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape(s))
}
