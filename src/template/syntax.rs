//! Line-level template syntax.

/// Opens a block that is never turned into questions.
pub(crate) const IGNORE_START: &str = "{start IGNORE_IN_PROMPT}";
/// Closes a block opened by `IGNORE_START`.
pub(crate) const IGNORE_END: &str = "{end IGNORE_IN_PROMPT}";

/// One template line, trimmed and classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    IgnoreStart,
    IgnoreEnd,
    Comment(&'a str),
    /// `NAME=value`; `value` is everything after the first `=`.
    Assignment { name: &'a str, value: &'a str },
    Other,
}

/// What the right-hand side of an assignment declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Declaration<'a> {
    /// `NAME=` with nothing after it.
    Bare,
    /// `NAME={...}`, carrying the raw JSON settings.
    WithSettings(&'a str),
    /// `NAME=literal`, never prompted.
    Hardcoded,
}

pub(crate) fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return Line::Blank;
    }
    if line.contains(IGNORE_START) {
        return Line::IgnoreStart;
    }
    if line.contains(IGNORE_END) {
        return Line::IgnoreEnd;
    }
    if line.starts_with('#') {
        return Line::Comment(line);
    }

    match line.split_once('=') {
        Some((name, value)) if is_variable_name(name) => Line::Assignment { name, value },
        _ => Line::Other,
    }
}

/// Names are word characters and whitespace.
fn is_variable_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace())
}

/// Classify the value of an assignment. A single whitespace character may
/// separate `=` from the settings object.
pub(crate) fn declaration(value: &str) -> Declaration<'_> {
    let mut chars = value.chars();
    let rest = match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => value,
    };

    if rest.is_empty() {
        Declaration::Bare
    } else if rest.starts_with('{') && rest.ends_with('}') {
        Declaration::WithSettings(rest)
    } else {
        Declaration::Hardcoded
    }
}
