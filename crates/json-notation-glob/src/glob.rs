//! The `Glob` value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{GlobError, InvalidReason};
use crate::note::{join_notes, Note};
use crate::parser::GlobParser;
use crate::relation::{covers, Relation};

/// A signed glob notation such as `car.*`, `!users[*].password` or
/// `['a.b'][0]`.
///
/// Identity (equality, hashing) is the canonical text, so `a['b']` and `a.b`
/// are the same glob.
#[derive(Debug, Clone)]
pub struct Glob {
    source: String,
    negated: bool,
    notes: Vec<Note>,
    text: String,
}

/// Root container shape a glob addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

impl Glob {
    /// Parse a glob; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, GlobError> {
        let source = input.trim();
        let (negated, body) = match source.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, source),
        };
        if negated && body.is_empty() {
            return Err(GlobError::invalid(source, InvalidReason::BareNegation));
        }
        let notes = GlobParser::parse(body).map_err(|reason| GlobError::invalid(source, reason))?;
        Ok(Self::build(source.to_string(), negated, notes))
    }

    /// Parse a list of globs, failing on the first invalid one.
    pub fn parse_list<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Self>, GlobError> {
        inputs.iter().map(|s| Self::parse(s.as_ref())).collect()
    }

    /// Build a glob from already tokenized notes.
    ///
    /// `notes` must not be empty.
    pub fn from_notes(negated: bool, notes: Vec<Note>) -> Self {
        let mut source = String::new();
        if negated {
            source.push('!');
        }
        source.push_str(&join_notes(&notes));
        Self::build(source, negated, notes)
    }

    fn build(source: String, negated: bool, notes: Vec<Note>) -> Self {
        let mut text = String::new();
        if negated {
            text.push('!');
        }
        text.push_str(&join_notes(&notes));
        Self {
            source,
            negated,
            notes,
            text,
        }
    }

    /// The trimmed text this glob was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Canonical text, including the `!` marker.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Canonical text without the `!` marker.
    pub fn absolute_str(&self) -> &str {
        if self.negated {
            &self.text[1..]
        } else {
            &self.text
        }
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn depth(&self) -> usize {
        self.notes.len()
    }

    pub fn last(&self) -> Option<&Note> {
        self.notes.last()
    }

    pub fn shape(&self) -> Shape {
        match self.notes.first() {
            Some(note) if note.is_array_form() => Shape::Array,
            _ => Shape::Object,
        }
    }

    pub fn is_array_rooted(&self) -> bool {
        self.shape() == Shape::Array
    }

    /// A lone `*` or `[*]`, with either sign.
    pub fn is_wildcard(&self) -> bool {
        self.notes.len() == 1 && self.notes[0].is_wildcard()
    }

    /// `!*` or `![*]`: exclude everything.
    pub fn is_negate_all(&self) -> bool {
        self.negated && self.is_wildcard()
    }

    pub fn wildcard_count(&self) -> usize {
        self.notes.iter().filter(|n| n.is_wildcard()).count()
    }

    pub fn has_wildcard(&self) -> bool {
        self.notes.iter().any(Note::is_wildcard)
    }

    /// Same path without the negation marker.
    pub fn absolute(&self) -> Self {
        if self.negated {
            Self::from_notes(false, self.notes.clone())
        } else {
            self.clone()
        }
    }

    /// Same path with the opposite sign.
    pub fn inverted(&self) -> Self {
        Self::from_notes(!self.negated, self.notes.clone())
    }

    /// Sign-stripped glob without its last note; `None` at the root level.
    pub fn parent(&self) -> Option<Self> {
        if self.notes.len() < 2 {
            return None;
        }
        Some(Self::from_notes(
            false,
            self.notes[..self.notes.len() - 1].to_vec(),
        ))
    }

    /// Trailing wildcards are redundant on a positive glob (`x.*` includes
    /// the same as `x`), so they are dropped, keeping at least one note.
    /// Negated globs are returned unchanged: `!x.*` empties `x`, `!x` removes
    /// it.
    pub fn normalized(&self) -> Self {
        if self.negated {
            return self.clone();
        }
        let mut len = self.notes.len();
        while len > 1 && self.notes[len - 1].is_wildcard() {
            len -= 1;
        }
        if len == self.notes.len() {
            return self.clone();
        }
        Self::from_notes(false, self.notes[..len].to_vec())
    }

    /// Whether this glob covers the concrete path given as notes.
    pub fn test(&self, path: &[Note]) -> bool {
        if path.is_empty() {
            return false;
        }
        let target = Self::from_notes(false, path.to_vec());
        covers(self, &target, Relation::Cover)
    }
}

impl PartialEq for Glob {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Glob {}

impl Hash for Glob {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Glob {
    type Err = GlobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Glob {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
