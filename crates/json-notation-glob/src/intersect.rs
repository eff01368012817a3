//! Intersection of two globs that do not cover each other.

use crate::glob::Glob;
use crate::mode::Mode;
use crate::note::notes_equal;

/// Glob describing the paths matched by both `a` and `b`, or `None` when
/// they share no path.
///
/// Position by position: equal notes are kept, a wildcard yields to the
/// other side, and a note missing on one side yields to the present one.
/// Two different literal notes mean there is no intersection.
///
/// Sign: in [`Mode::Strict`] the result is negated if either input is. In
/// [`Mode::Lenient`] it is negated if both are, or if the strictly deeper
/// input is negated (`!a.b.c` against `*.b` gives `!a.b.c`).
pub fn intersect(a: &Glob, b: &Glob, mode: Mode) -> Option<Glob> {
    let a = a.normalized();
    let b = b.normalized();
    let notes_a = a.notes();
    let notes_b = b.notes();

    let negated = match mode {
        Mode::Strict => a.is_negated() || b.is_negated(),
        Mode::Lenient => {
            (a.is_negated() && b.is_negated())
                || (notes_a.len() > notes_b.len() && a.is_negated())
                || (notes_b.len() > notes_a.len() && b.is_negated())
        }
    };

    let len = notes_a.len().max(notes_b.len());
    let mut notes = Vec::with_capacity(len);
    for i in 0..len {
        let note = match (notes_a.get(i), notes_b.get(i)) {
            (Some(x), Some(y)) if notes_equal(x, y) => x,
            (Some(x), Some(y)) if x.is_wildcard() => y,
            (Some(x), Some(y)) if y.is_wildcard() => x,
            (Some(x), None) | (None, Some(x)) => x,
            _ => return None,
        };
        notes.push(note.clone());
    }

    if notes.is_empty() {
        return None;
    }
    Some(Glob::from_notes(negated, notes).normalized())
}
