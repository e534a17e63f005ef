//! POSIX shell quoting for values substituted into recipes.

/// Quote `value` so a POSIX shell reads it back as exactly one word.
///
/// Words made only of characters with no special meaning to the shell are returned
/// unchanged; anything else is wrapped in single quotes, with embedded single quotes
/// written as `'\''`. The empty string becomes `''`.
///
/// ```rust
/// use pkgcrate::utils::shell::quote;
///
/// assert_eq!(quote("ripgrep"), "ripgrep");
/// assert_eq!(quote("fast grep"), "'fast grep'");
/// assert_eq!(quote("it's"), r"'it'\''s'");
/// ```
pub fn quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }

    if value.chars().all(is_safe) {
        return value.to_string();
    }

    format!("'{}'", value.replace('\'', r"'\''"))
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}
