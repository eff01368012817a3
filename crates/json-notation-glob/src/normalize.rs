//! Reduction of a glob list to a minimal, non-conflicting, ordered set.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::compare::sort;
use crate::error::GlobError;
use crate::glob::{Glob, Shape};
use crate::intersect::intersect;
use crate::mode::Mode;
use crate::relation::{covers, Relation};
use crate::trace::{trace_dropped, trace_intersection, trace_normalized, trace_round};

/// Upper bound on normalization rounds. Every round either derives an
/// intersection never seen before or shrinks the working list, so real
/// inputs settle in a handful.
pub const MAX_ROUNDS: usize = 128;

/// Normalize `globs` under `mode`.
///
/// Duplicates, redundant globs and exact `x`/`!x` pairs are removed,
/// intersections of conflicting globs are added, and the result is ordered
/// with [`compare`](fn@crate::compare). Normalizing the output again yields the
/// same set.
///
/// # Errors
///
/// [`GlobError::RootShapeConflict`] when object- and array-rooted globs are
/// mixed. [`GlobError::Diverged`] only if [`MAX_ROUNDS`] is exhausted.
pub fn normalize(globs: &[Glob], mode: Mode) -> Result<Vec<Glob>, GlobError> {
    let mut input = globs.to_vec();
    // Texts of every intersection derived so far, across all rounds. One that
    // was derived and later dropped as redundant is never derived again.
    let mut derived: HashSet<String> = HashSet::new();

    for round in 0..MAX_ROUNDS {
        let working = prepare(&input, mode)?;
        trace_round(round, working.len());

        match Pass::new(working, mode).run(&mut derived) {
            Outcome::Done(mut globs) => {
                sort(&mut globs);
                trace_normalized(round + 1, globs.len());
                return Ok(globs);
            }
            Outcome::Next(next) => input = next,
        }
    }

    Err(GlobError::Diverged { rounds: MAX_ROUNDS })
}

/// Normalized, ordered and de-duplicated working list for one round.
fn prepare(input: &[Glob], mode: Mode) -> Result<Vec<Glob>, GlobError> {
    let mut globs: Vec<Glob> = input.iter().map(Glob::normalized).collect();
    check_root_shape(&globs)?;

    globs.sort_by(|a, b| {
        let sign = if mode.is_strict() {
            b.is_negated().cmp(&a.is_negated())
        } else {
            a.is_negated().cmp(&b.is_negated())
        };
        sign.then_with(|| b.as_str().len().cmp(&a.as_str().len()))
    });

    let unique: IndexSet<Glob> = globs.into_iter().collect();
    Ok(unique.into_iter().collect())
}

fn check_root_shape(globs: &[Glob]) -> Result<(), GlobError> {
    let object = globs.iter().find(|g| g.shape() == Shape::Object);
    let array = globs.iter().find(|g| g.shape() == Shape::Array);
    match (object, array) {
        (Some(object), Some(array)) => Err(GlobError::RootShapeConflict {
            object: object.as_str().to_string(),
            array: array.as_str().to_string(),
        }),
        _ => Ok(()),
    }
}

fn state_of(globs: &[Glob]) -> Vec<String> {
    let mut state: Vec<String> = globs.iter().map(|g| g.as_str().to_string()).collect();
    state.sort();
    state
}

enum Outcome {
    Done(Vec<Glob>),
    Next(Vec<Glob>),
}

/// One classification round over a prepared working list.
struct Pass {
    mode: Mode,
    working: Vec<Glob>,
    /// Working list minus positives that have an exact negated twin.
    globs: Vec<Glob>,
    /// `covered[i][j]`: `globs[i]` covers `globs[j]`.
    covered: Vec<Vec<bool>>,
}

impl Pass {
    fn new(working: Vec<Glob>, mode: Mode) -> Self {
        let globs: Vec<Glob> = {
            let texts: HashSet<&str> = working.iter().map(Glob::as_str).collect();
            working
                .iter()
                .filter(|g| {
                    let twin = !g.is_negated() && texts.contains(g.inverted().as_str());
                    if twin {
                        trace_dropped(g.as_str(), "negated_twin");
                    }
                    !twin
                })
                .cloned()
                .collect()
        };

        let covered = globs
            .iter()
            .map(|a| globs.iter().map(|b| covers(a, b, Relation::Cover)).collect())
            .collect();

        Self {
            mode,
            working,
            globs,
            covered,
        }
    }

    fn run(self, derived: &mut HashSet<String>) -> Outcome {
        match self.working.len() {
            0 => return Outcome::Done(Vec::new()),
            1 => {
                let glob = &self.working[0];
                if glob.is_negated() {
                    trace_dropped(glob.as_str(), "lone_negation");
                    return Outcome::Done(Vec::new());
                }
                return Outcome::Done(self.working);
            }
            _ => {}
        }

        if self.mode.is_strict() && self.working.iter().any(Glob::is_negate_all) {
            return Outcome::Done(Vec::new());
        }

        let pending = self.intersections(derived);
        let keep = match self.mode {
            Mode::Strict => self.retain_strict(),
            Mode::Lenient => self.retain_lenient(),
        };

        let mut retained = Vec::with_capacity(self.globs.len() + pending.len());
        for (glob, keep) in self.globs.iter().zip(keep) {
            if keep {
                retained.push(glob.clone());
            } else {
                trace_dropped(glob.as_str(), "redundant");
            }
        }

        if !pending.is_empty() {
            retained.extend(pending);
            return Outcome::Next(retained);
        }

        if state_of(&retained) == state_of(&self.working) {
            Outcome::Done(retained)
        } else {
            Outcome::Next(retained)
        }
    }

    fn intersections(&self, derived: &mut HashSet<String>) -> Vec<Glob> {
        let texts: HashSet<&str> = self.working.iter().map(Glob::as_str).collect();
        let mut pending = Vec::new();

        for (i, a) in self.globs.iter().enumerate() {
            for (j, b) in self.globs.iter().enumerate().skip(i + 1) {
                if a.is_negated() == b.is_negated() || self.covered[i][j] || self.covered[j][i] {
                    continue;
                }
                let Some(glob) = intersect(a, b, self.mode) else {
                    continue;
                };
                if texts.contains(glob.as_str()) || texts.contains(glob.inverted().as_str()) {
                    continue;
                }
                if !derived.insert(glob.as_str().to_string()) {
                    continue;
                }
                trace_intersection(a.as_str(), b.as_str(), glob.as_str());
                pending.push(glob);
            }
        }

        pending
    }

    fn others(&self, i: usize) -> impl Iterator<Item = (usize, &Glob)> + '_ {
        self.globs.iter().enumerate().filter(move |(j, _)| *j != i)
    }

    fn covered_by_negated(&self, i: usize) -> bool {
        self.others(i)
            .any(|(j, g)| g.is_negated() && self.covered[j][i])
    }

    fn retain_strict(&self) -> Vec<bool> {
        let related: Vec<bool> = (0..self.globs.len())
            .map(|i| {
                self.globs[i].is_negated()
                    && self
                        .others(i)
                        .any(|(j, g)| !g.is_negated() && (self.covered[i][j] || self.covered[j][i]))
            })
            .collect();

        (0..self.globs.len())
            .map(|i| {
                if self.globs[i].is_negated() {
                    related[i] && !self.covered_by_negated(i)
                } else {
                    let covers_positive = self
                        .others(i)
                        .any(|(j, g)| !g.is_negated() && self.covered[i][j]);
                    let covered_by_positive = self
                        .others(i)
                        .any(|(j, g)| !g.is_negated() && self.covered[j][i]);
                    (covers_positive || !covered_by_positive) && !self.covered_by_negated(i)
                }
            })
            .collect()
    }

    fn retain_lenient(&self) -> Vec<bool> {
        let qualifies: Vec<bool> = (0..self.globs.len())
            .map(|i| {
                self.globs[i].is_negated()
                    && self
                        .others(i)
                        .any(|(j, g)| !g.is_negated() && self.covered[j][i])
            })
            .collect();

        (0..self.globs.len())
            .map(|i| {
                if self.globs[i].is_negated() {
                    qualifies[i] && !self.covered_by_negated(i)
                } else {
                    let covered_by_qualifying = self
                        .others(i)
                        .any(|(j, _)| qualifies[j] && self.covered[j][i]);
                    let covered_by_positive = self
                        .others(i)
                        .any(|(j, g)| !g.is_negated() && self.covered[j][i]);
                    covered_by_qualifying || !covered_by_positive
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &[&str], mode: Mode) -> Vec<String> {
        let globs = Glob::parse_list(input).unwrap();
        normalize(&globs, mode)
            .unwrap()
            .iter()
            .map(|g| g.to_string())
            .collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(norm(&[], Mode::Lenient).is_empty());
        assert_eq!(norm(&["a.b"], Mode::Strict), ["a.b"]);
        assert!(norm(&["!x"], Mode::Lenient).is_empty());
        assert!(norm(&["!x"], Mode::Strict).is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(norm(&["a", "a", "['a']"], Mode::Lenient), ["a"]);
        assert_eq!(norm(&["x.*", "x"], Mode::Strict), ["x"]);
    }

    #[test]
    fn test_exact_negation_absorbs_positive() {
        assert_eq!(norm(&["*", "a", "!a"], Mode::Lenient), ["!a", "*"]);
        assert_eq!(norm(&["*", "a", "!a"], Mode::Strict), ["!a", "*"]);
        assert!(norm(&["a", "!a"], Mode::Lenient).is_empty());
    }

    #[test]
    fn test_strict_negate_all_empties() {
        assert!(norm(&["a", "b.c", "!*"], Mode::Strict).is_empty());
        assert!(norm(&["[0]", "![*]"], Mode::Strict).is_empty());
    }

    #[test]
    fn test_lenient_unrelated_negation_dropped() {
        assert_eq!(norm(&["a", "!*"], Mode::Lenient), ["a"]);
        assert_eq!(norm(&["a", "!b"], Mode::Lenient), ["a"]);
    }

    #[test]
    fn test_covered_positive_dropped() {
        assert_eq!(norm(&["a.b", "a.b.c"], Mode::Strict), ["a.b"]);
        assert_eq!(norm(&["*", "a", "b.c"], Mode::Lenient), ["*"]);
    }

    #[test]
    fn test_deeper_negation_dropped() {
        assert!(norm(&["!a.b", "!a.b.c"], Mode::Strict).is_empty());
        assert_eq!(norm(&["a", "!a.b", "!a.b.c"], Mode::Strict), ["a", "!a.b"]);
        assert_eq!(norm(&["a", "!a.b", "!a.b.c"], Mode::Lenient), ["a", "!a.b"]);
    }

    #[test]
    fn test_strict_intersection() {
        assert_eq!(
            norm(&["*.name", "!admin.*"], Mode::Strict),
            ["!admin.name", "*.name"]
        );
    }

    #[test]
    fn test_lenient_reinclusion_survives() {
        assert_eq!(
            norm(&["*", "!access", "access.clients"], Mode::Lenient),
            ["!access", "*", "access.clients"]
        );
        // strict: the negation wins over the deeper positive
        assert_eq!(
            norm(&["*", "!access", "access.clients"], Mode::Strict),
            ["!access", "*"]
        );
    }

    #[test]
    fn test_dropped_intersection_not_derived_again() {
        // `!a.b` is derived, then dropped under `!a.*`
        assert_eq!(norm(&["*.b", "!a.*", "a[*]"], Mode::Strict), ["a", "*.b", "!a.*"]);
        assert_eq!(
            norm(&["*.b", "!a.*", "a[*]"], Mode::Lenient),
            ["a", "a.b", "*.b", "!a.*"]
        );
        let globs = Glob::parse_list(&["!*.*[1]", "!*.b.b", "*[*][*]", "!*[1]", "b[1]"]).unwrap();
        assert!(normalize(&globs, Mode::Lenient).is_ok());
    }

    #[test]
    fn test_negation_covered_by_any_negation_dropped() {
        assert_eq!(norm(&["*.b", "!a", "!a.b"], Mode::Strict), ["*.b"]);
        assert_eq!(norm(&["a.b", "!a", "!a.b.c"], Mode::Lenient), ["a.b"]);
    }

    #[test]
    fn test_array_siblings_descend() {
        assert_eq!(norm(&["[*]", "![0]", "![2]"], Mode::Lenient), ["![2]", "![0]", "[*]"]);
    }

    #[test]
    fn test_root_shape_conflict() {
        let globs = Glob::parse_list(&["![0]", "![2]", "a"]).unwrap();
        assert_eq!(
            normalize(&globs, Mode::Lenient),
            Err(GlobError::RootShapeConflict {
                object: "a".into(),
                array: "![0]".into(),
            })
        );
    }

    #[test]
    fn test_idempotent_on_examples() {
        for input in [
            &["dog", "car", "!car.brand"][..],
            &["*", "!avatar", "!access"],
            &["*.name", "!admin.*", "users[*].id"],
            &["*", "!access.owner", "!avatar"],
        ] {
            for mode in [Mode::Strict, Mode::Lenient] {
                let once = norm(input, mode);
                let refs: Vec<&str> = once.iter().map(String::as_str).collect();
                let twice = norm(&refs, mode);
                let a: HashSet<_> = once.iter().collect();
                let b: HashSet<_> = twice.iter().collect();
                assert_eq!(a, b, "{input:?} in {mode:?}");
            }
        }
    }
}
