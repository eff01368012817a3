//! Application of a normalized glob set to a document.

use json_notation_glob::{covers, Glob, Note, Relation, Shape};
use serde_json::{Map, Value};

use crate::document::{get_at, get_at_mut, is_empty_container, remove_at, set_at, ValueKind};
use crate::error::NotationError;
use crate::path::Step;
use crate::trace::{trace_reincluded, trace_rule, trace_seeded};

/// Apply `globs`, already normalized and ordered, to `source`.
///
/// The result has the same root kind as `source`. Rules run in order, each
/// acting on the result built so far: inclusions copy values out of
/// `source`, exclusions delete from the result.
///
/// # Errors
///
/// [`NotationError::ScalarRoot`] when `source` is neither an object nor an
/// array.
pub fn apply(source: &Value, globs: &[Glob]) -> Result<Value, NotationError> {
    let root = match source {
        Value::Object(_) => Shape::Object,
        Value::Array(_) => Shape::Array,
        _ => return Err(NotationError::ScalarRoot),
    };

    let mut applier = Applier::new(source, empty(root));
    if globs.is_empty() || (globs.len() == 1 && globs[0].is_negate_all()) {
        return Ok(applier.result);
    }

    // `*` / `[*]` includes the whole document: start from a copy and let
    // the other rules narrow it.
    let seed = globs
        .iter()
        .position(|g| !g.is_negated() && g.is_wildcard() && g.shape() == root);
    if let Some(i) = seed {
        trace_seeded(globs[i].as_str());
        applier.result = source.clone();
    }

    for (i, glob) in globs.iter().enumerate() {
        if seed == Some(i) {
            continue;
        }
        if glob.is_negated() {
            applier.exclude(glob);
        } else {
            applier.include(glob);
        }
    }

    Ok(applier.result)
}

fn empty(shape: Shape) -> Value {
    match shape {
        Shape::Object => Value::Object(Map::new()),
        Shape::Array => Value::Array(Vec::new()),
    }
}

struct Applier<'a> {
    source: &'a Value,
    result: Value,
    inclusions: Vec<&'a Glob>,
    exclusions: Vec<&'a Glob>,
}

impl<'a> Applier<'a> {
    fn new(source: &'a Value, result: Value) -> Self {
        Self {
            source,
            result,
            inclusions: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    fn include(&mut self, glob: &'a Glob) {
        let copied = self.copy_from_source(glob);
        trace_rule(glob.as_str(), false, copied);
        self.inclusions.push(glob);
    }

    // Paths already excluded by a rule of the same depth are skipped: with
    // `!access` applied, `*` copies every key but `access`.
    fn copy_from_source(&mut self, glob: &Glob) -> usize {
        let mut copied = 0;
        for path in expand(self.source, glob.notes()) {
            if self.is_excluded(&path) {
                continue;
            }
            if let Some(value) = get_at(self.source, &path) {
                set_at(&mut self.result, &path, value.clone());
                copied += 1;
            }
        }
        copied
    }

    fn is_excluded(&self, path: &[Step]) -> bool {
        let notes: Vec<Note> = path.iter().map(Step::to_note).collect();
        self.exclusions
            .iter()
            .any(|glob| glob.depth() == path.len() && glob.test(&notes))
    }

    fn exclude(&mut self, glob: &'a Glob) {
        let (anchor, subtree) = split_subtree(glob);

        // Highest sibling indices go first so earlier removals never shift
        // later targets.
        let mut paths = expand(&self.result, anchor);
        paths.reverse();
        for path in &paths {
            match subtree {
                Some(shape) => {
                    if let Some(target) = get_at_mut(&mut self.result, path) {
                        if ValueKind::of(Some(&*target)) == kind_of(shape) {
                            *target = empty(shape);
                        }
                    }
                }
                None => {
                    if remove_at(&mut self.result, path).is_some() {
                        self.prune(path);
                    }
                }
            }
        }
        trace_rule(glob.as_str(), true, paths.len());

        // A narrower inclusion at the same depth that this exclusion covers
        // was kept on purpose; give its paths back.
        let covered: Vec<&Glob> = self
            .inclusions
            .iter()
            .copied()
            .filter(|inclusion| {
                inclusion.depth() == glob.depth() && covers(glob, inclusion, Relation::Cover)
            })
            .collect();
        for inclusion in covered {
            trace_reincluded(glob.as_str(), inclusion.as_str());
            self.copy_from_source(inclusion);
        }

        self.exclusions.push(glob);
    }

    /// Remove ancestors of `path` left empty by a removal, never the root.
    fn prune(&mut self, path: &[Step]) {
        for len in (1..path.len()).rev() {
            let ancestor = &path[..len];
            match get_at(&self.result, ancestor) {
                Some(value) if is_empty_container(value) => {
                    remove_at(&mut self.result, ancestor);
                }
                _ => break,
            }
        }
    }
}

/// A trailing `.*` / `[*]` on an exclusion targets the contents of a
/// container: the container itself is kept, emptied.
fn split_subtree(glob: &Glob) -> (&[Note], Option<Shape>) {
    let notes = glob.notes();
    match notes.split_last() {
        Some((Note::ObjectWildcard, anchor)) => (anchor, Some(Shape::Object)),
        Some((Note::ArrayWildcard, anchor)) => (anchor, Some(Shape::Array)),
        _ => (notes, None),
    }
}

fn kind_of(shape: Shape) -> ValueKind {
    match shape {
        Shape::Object => ValueKind::Object,
        Shape::Array => ValueKind::Array,
    }
}

/// Concrete paths in `value` matched by `notes`, in document order.
fn expand(value: &Value, notes: &[Note]) -> Vec<Vec<Step>> {
    let mut out = Vec::new();
    walk(value, notes, &mut Vec::new(), &mut out);
    out
}

fn walk(value: &Value, notes: &[Note], prefix: &mut Vec<Step>, out: &mut Vec<Vec<Step>>) {
    let Some((note, rest)) = notes.split_first() else {
        out.push(prefix.clone());
        return;
    };

    let mut visit = |step: Step, child: &Value, out: &mut Vec<Vec<Step>>| {
        prefix.push(step);
        walk(child, rest, prefix, out);
        prefix.pop();
    };

    match (note, value) {
        (Note::ObjectWildcard, Value::Object(map)) => {
            for (key, child) in map {
                visit(Step::Key(key.clone()), child, out);
            }
        }
        (Note::ArrayWildcard, Value::Array(items)) => {
            for (i, child) in items.iter().enumerate() {
                visit(Step::Index(i), child, out);
            }
        }
        (Note::Index(i), Value::Array(items)) => {
            if let Some(child) = items.get(*i) {
                visit(Step::Index(*i), child, out);
            }
        }
        (note, Value::Object(map)) => {
            if let Some(key) = note.key() {
                if let Some(child) = map.get(key) {
                    visit(Step::Key(key.to_string()), child, out);
                }
            }
        }
        _ => {}
    }
}
