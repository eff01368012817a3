//! Covering relations between notes and between whole globs.

use crate::glob::Glob;
use crate::note::{notes_equal, Note};

/// Which per-note predicate a glob relation is lifted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `a` covers `b`: every path `b` matches is matched by `a`.
    Cover,
    /// Symmetric relaxation: notes are compatible either way and a missing
    /// note on either side is compatible (`[2][1]` matches `[2]`).
    Match,
}

/// Whether note `a` covers note `b`. An absent note is never covered and
/// never covers.
pub fn note_covers(a: Option<&Note>, b: Option<&Note>) -> bool {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    match a {
        Note::ObjectWildcard => !b.is_array_form(),
        Note::ArrayWildcard => b.is_array_form(),
        _ if b.is_wildcard() => false,
        _ => notes_equal(a, b),
    }
}

pub fn note_matches(a: Option<&Note>, b: Option<&Note>) -> bool {
    match (a, b) {
        (Some(_), Some(_)) => note_covers(a, b) || note_covers(b, a),
        _ => true,
    }
}

/// Whether glob `a` covers glob `b` (signs are ignored, except that a
/// negated glob deeper than `b` never covers it in [`Relation::Cover`] mode:
/// `!x.*.*` does not cover `x.*`).
///
/// Callers are expected to pass normalized globs.
pub fn covers(a: &Glob, b: &Glob, relation: Relation) -> bool {
    let notes_a = a.notes();
    let notes_b = b.notes();

    if relation == Relation::Cover && a.is_negated() && notes_a.len() > notes_b.len() {
        return false;
    }

    let predicate: fn(Option<&Note>, Option<&Note>) -> bool = match relation {
        Relation::Cover => note_covers,
        Relation::Match => note_matches,
    };

    notes_a
        .iter()
        .enumerate()
        .all(|(i, note)| predicate(Some(note), notes_b.get(i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glob(s: &str) -> Glob {
        Glob::parse(s).unwrap()
    }

    #[test]
    fn test_note_covers() {
        let key = Note::Identifier("a".into());
        assert!(note_covers(Some(&Note::ObjectWildcard), Some(&key)));
        assert!(note_covers(Some(&Note::ObjectWildcard), Some(&Note::ObjectWildcard)));
        assert!(!note_covers(Some(&Note::ObjectWildcard), Some(&Note::Index(1))));
        assert!(note_covers(Some(&Note::ArrayWildcard), Some(&Note::Index(1))));
        assert!(note_covers(Some(&Note::ArrayWildcard), Some(&Note::ArrayWildcard)));
        assert!(!note_covers(Some(&Note::ArrayWildcard), Some(&key)));
        assert!(!note_covers(Some(&key), Some(&Note::ObjectWildcard)));
        assert!(note_covers(Some(&key), Some(&Note::QuotedKey("a".into()))));
        assert!(!note_covers(Some(&key), None));
        assert!(!note_covers(None, Some(&key)));
    }

    #[test]
    fn test_note_matches() {
        let key = Note::Identifier("a".into());
        assert!(note_matches(Some(&key), None));
        assert!(note_matches(None, Some(&Note::Index(1))));
        assert!(note_matches(Some(&key), Some(&Note::ObjectWildcard)));
        assert!(note_matches(Some(&Note::ObjectWildcard), Some(&key)));
        assert!(!note_matches(Some(&key), Some(&Note::Identifier("b".into()))));
    }

    #[test]
    fn test_prefix_covers_descendants() {
        assert!(covers(&glob("a.b"), &glob("a.b.c"), Relation::Cover));
        assert!(!covers(&glob("a.b.c"), &glob("a.b"), Relation::Cover));
        assert!(covers(&glob("*"), &glob("a.b"), Relation::Cover));
        assert!(covers(&glob("a.*"), &glob("a.b"), Relation::Cover));
        assert!(!covers(&glob("a.b"), &glob("a.*"), Relation::Cover));
        assert!(covers(&glob("[*]"), &glob("[3].x"), Relation::Cover));
        assert!(!covers(&glob("*"), &glob("[3]"), Relation::Cover));
    }

    #[test]
    fn test_sign_is_ignored_except_for_deeper_negation() {
        assert!(covers(&glob("!a"), &glob("a.b"), Relation::Cover));
        assert!(covers(&glob("a"), &glob("!a.*"), Relation::Cover));
        assert!(!covers(&glob("!a.*"), &glob("a"), Relation::Cover));
        assert!(covers(&glob("!x.*"), &glob("!x.*.*"), Relation::Cover));
        assert!(!covers(&glob("!x.*.*"), &glob("!x.*"), Relation::Cover));
    }

    #[test]
    fn test_match_relation_is_prefix_tolerant() {
        assert!(covers(&glob("[2][1]"), &glob("[2]"), Relation::Match));
        assert!(covers(&glob("[2]"), &glob("[2][1]"), Relation::Match));
        assert!(covers(&glob("a.b"), &glob("*.b"), Relation::Match));
        assert!(!covers(&glob("a.b"), &glob("a.c"), Relation::Match));
    }
}
