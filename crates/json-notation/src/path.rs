//! Concrete (wildcard-free) document paths.

use std::fmt;
use std::str::FromStr;

use json_notation_glob::{join_notes, GlobError, GlobParser, Note};

use crate::error::NotationError;

/// One step of a concrete path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Key(String),
    Index(usize),
}

impl Step {
    /// `None` for wildcard notes.
    pub fn from_note(note: &Note) -> Option<Self> {
        match note {
            Note::Identifier(key) | Note::QuotedKey(key) => Some(Step::Key(key.clone())),
            Note::Index(i) => Some(Step::Index(*i)),
            Note::ArrayWildcard | Note::ObjectWildcard => None,
        }
    }

    pub fn to_note(&self) -> Note {
        match self {
            Step::Key(key) => Note::QuotedKey(key.clone()),
            Step::Index(i) => Note::Index(*i),
        }
    }
}

/// A path such as `car.brand`, `users[2]['e-mail']`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Step>);

impl Path {
    /// Parse path notation. Wildcards and the `!` marker are rejected.
    pub fn parse(input: &str) -> Result<Self, NotationError> {
        let input = input.trim();
        let notes = GlobParser::parse(input).map_err(|reason| GlobError::InvalidPattern {
            pattern: input.to_string(),
            reason,
        })?;
        notes
            .iter()
            .map(Step::from_note)
            .collect::<Option<Vec<_>>>()
            .map(Path)
            .ok_or_else(|| NotationError::WildcardInPath(input.to_string()))
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, step: Step) {
        self.0.push(step);
    }

    pub fn to_notes(&self) -> Vec<Note> {
        self.0.iter().map(Step::to_note).collect()
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Path(steps)
    }
}

impl FromStr for Path {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_notes(&self.to_notes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let path = Path::parse("users[2]['e-mail']").unwrap();
        assert_eq!(
            path.steps(),
            [
                Step::Key("users".into()),
                Step::Index(2),
                Step::Key("e-mail".into())
            ]
        );
        assert_eq!(path.to_string(), "users[2]['e-mail']");
        assert_eq!(Path::parse("a['b']").unwrap().to_string(), "a.b");
    }

    #[test]
    fn test_wildcards_are_rejected() {
        assert!(matches!(
            Path::parse("a.*"),
            Err(NotationError::WildcardInPath(p)) if p == "a.*"
        ));
        assert!(matches!(
            Path::parse("[*]"),
            Err(NotationError::WildcardInPath(_))
        ));
    }

    #[test]
    fn test_malformed_paths_are_invalid_patterns() {
        assert!(matches!(
            Path::parse("!a"),
            Err(NotationError::Glob(GlobError::InvalidPattern { .. }))
        ));
        assert!(matches!(
            Path::parse("a..b"),
            Err(NotationError::Glob(GlobError::InvalidPattern { .. }))
        ));
    }
}
