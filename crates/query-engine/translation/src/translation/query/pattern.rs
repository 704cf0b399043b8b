//! LIKE patterns for the string matching operators.

/// Characters with a meaning inside a LIKE pattern, and their escaped form.
/// The backslash is the escape character itself, so it is escaped as well.
const LIKE_ESCAPES: [(char, &str); 3] = [('\\', "\\\\"), ('%', "\\%"), ('_', "\\_")];

/// Escape LIKE metacharacters so the value only matches itself.
///
/// This is a single pass over the input, so an escape inserted for one character
/// is never escaped again.
pub fn escape_like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match LIKE_ESCAPES.iter().find(|(special, _)| *special == c) {
            Some((_, replacement)) => escaped.push_str(replacement),
            None => escaped.push(c),
        }
    }
    escaped
}

/// Where the matched value sits inside the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternAnchor {
    Prefix,
    Suffix,
    Contains,
}

impl PatternAnchor {
    /// Escape the value and add the wildcards for this anchor.
    pub fn pattern(self, value: &str) -> String {
        let escaped = escape_like_pattern(value);
        match self {
            PatternAnchor::Prefix => format!("{escaped}%"),
            PatternAnchor::Suffix => format!("%{escaped}"),
            PatternAnchor::Contains => format!("%{escaped}%"),
        }
    }
}
