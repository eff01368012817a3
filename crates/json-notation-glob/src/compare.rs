//! Ordering of a normalized glob set.

use std::cmp::Ordering;

use crate::glob::Glob;
use crate::note::Note;
use crate::relation::{covers, Relation};

/// Order in which globs are listed and applied.
///
/// Shallower globs come first, then globs with fewer wildcards, then
/// positive before negated, then sign-stripped canonical text. Negated
/// sibling array items (`![0]`, `![2]`) are ordered by descending index so
/// removing one never shifts another.
pub fn compare(a: &Glob, b: &Glob) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if !a.is_negated() && !b.is_negated() && a.is_wildcard() && b.is_wildcard() {
        return Ordering::Equal;
    }

    let by_depth = a.depth().cmp(&b.depth());
    if by_depth != Ordering::Equal {
        return by_depth;
    }

    if let Some(order) = compare_negated_siblings(a, b) {
        return order;
    }

    a.wildcard_count()
        .cmp(&b.wildcard_count())
        .then_with(|| a.is_negated().cmp(&b.is_negated()))
        .then_with(|| a.absolute_str().cmp(b.absolute_str()))
}

// Descending index for two same-depth negated globs ending in different
// indices under compatible parents.
fn compare_negated_siblings(a: &Glob, b: &Glob) -> Option<Ordering> {
    if !a.is_negated() || !b.is_negated() {
        return None;
    }
    let (ia, ib) = match (a.last(), b.last()) {
        (Some(Note::Index(ia)), Some(Note::Index(ib))) if ia != ib => (*ia, *ib),
        _ => return None,
    };
    let siblings = match (a.parent(), b.parent()) {
        (None, None) => true,
        (Some(pa), Some(pb)) => covers(&pa, &pb, Relation::Match),
        _ => false,
    };
    if siblings {
        Some(ib.cmp(&ia))
    } else {
        None
    }
}

/// Sort globs with [`compare`].
///
/// Uses an insertion sort: it is stable, and it tolerates the negated
/// sibling rule not being transitive across unrelated parents.
pub fn sort(globs: &mut [Glob]) {
    insertion_sort_by(globs, compare);
}

fn insertion_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && compare(&arr[j - 1], &arr[j]) == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
