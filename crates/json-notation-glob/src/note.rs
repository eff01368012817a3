//! Single path tokens ("notes") of a glob notation.

use std::fmt;

/// One token of a tokenized glob or path.
///
/// `Identifier` and `QuotedKey` are both object keys; they only differ in how
/// they were written (`a` vs `['a']`). Key comparison ignores that difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    /// Bare key: `name`, `$_id`.
    Identifier(String),
    /// Bracketed key, stored without quotes: `['a.b']` holds `a.b`.
    QuotedKey(String),
    /// Array item: `[3]`.
    Index(usize),
    /// Any array item: `[*]`.
    ArrayWildcard,
    /// Any object key: `*`.
    ObjectWildcard,
}

impl Note {
    /// Key text for object-key notes.
    pub fn key(&self) -> Option<&str> {
        match self {
            Note::Identifier(name) | Note::QuotedKey(name) => Some(name),
            _ => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Note::Index(i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Note::ArrayWildcard | Note::ObjectWildcard)
    }

    /// `[N]` or `[*]`.
    pub fn is_array_form(&self) -> bool {
        matches!(self, Note::Index(_) | Note::ArrayWildcard)
    }

    /// Whether this note is rendered with brackets (and thus takes no
    /// preceding dot when joined).
    pub(crate) fn is_bracketed(&self) -> bool {
        match self {
            Note::Identifier(_) | Note::ObjectWildcard => false,
            Note::QuotedKey(key) => !is_identifier(key),
            Note::Index(_) | Note::ArrayWildcard => true,
        }
    }
}

/// Semantic equality: same kind and same value, with both key syntaxes
/// treated as one kind.
pub fn notes_equal(a: &Note, b: &Note) -> bool {
    match (a, b) {
        (Note::Index(x), Note::Index(y)) => x == y,
        (Note::ArrayWildcard, Note::ArrayWildcard) => true,
        (Note::ObjectWildcard, Note::ObjectWildcard) => true,
        _ => match (a.key(), b.key()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Whether `name` can be written as a bare identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::Identifier(name) => f.write_str(name),
            Note::QuotedKey(key) if is_identifier(key) => f.write_str(key),
            Note::QuotedKey(key) => {
                let quote = ['\'', '"', '`']
                    .into_iter()
                    .find(|q| !key.contains(&format!("{q}]")))
                    .unwrap_or('\'');
                write!(f, "[{quote}{key}{quote}]")
            }
            Note::Index(i) => write!(f, "[{i}]"),
            Note::ArrayWildcard => f.write_str("[*]"),
            Note::ObjectWildcard => f.write_str("*"),
        }
    }
}

/// Join notes into notation text: `a`, `b`, `[0]` gives `a.b[0]`.
pub fn join_notes(notes: &[Note]) -> String {
    let mut out = String::new();
    for (i, note) in notes.iter().enumerate() {
        if i > 0 && !note.is_bracketed() {
            out.push('.');
        }
        out.push_str(&note.to_string());
    }
    out
}
