//! Reading and writing JSON values at concrete paths.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::NotationError;
use crate::options::FilterOptions;
use crate::path::{Path, Step};
use crate::source::filter;

/// Container type of a value, or its absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Array,
    Scalar,
    Absent,
}

impl ValueKind {
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Object(_)) => ValueKind::Object,
            Some(Value::Array(_)) => ValueKind::Array,
            Some(_) => ValueKind::Scalar,
            None => ValueKind::Absent,
        }
    }
}

/// Get a value from a JSON document by path.
pub fn get_at<'a>(doc: &'a Value, path: &[Step]) -> Option<&'a Value> {
    let mut current = doc;
    for step in path {
        current = match (current, step) {
            (Value::Object(map), Step::Key(key)) => map.get(key)?,
            (Value::Array(items), Step::Index(i)) => items.get(*i)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_at_mut<'a>(doc: &'a mut Value, path: &[Step]) -> Option<&'a mut Value> {
    let mut current = doc;
    for step in path {
        current = match (current, step) {
            (Value::Object(map), Step::Key(key)) => map.get_mut(key)?,
            (Value::Array(items), Step::Index(i)) => items.get_mut(*i)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Set `value` at `path`, replacing whatever is there.
///
/// Missing or mistyped intermediate containers are replaced by an object or
/// an array as the next step requires; arrays are padded with `null` up to
/// the addressed index. An empty path replaces the whole document.
pub fn set_at(doc: &mut Value, path: &[Step], value: Value) {
    let mut current = doc;
    for step in path {
        current = slot(current, step);
    }
    *current = value;
}

fn slot<'a>(container: &'a mut Value, step: &Step) -> &'a mut Value {
    match step {
        Step::Key(key) => {
            if !container.is_object() {
                *container = Value::Object(Map::new());
            }
            &mut container[key.as_str()]
        }
        Step::Index(i) => {
            if !container.is_array() {
                *container = Value::Array(Vec::new());
            }
            if let Value::Array(items) = container {
                if items.len() <= *i {
                    items.resize(*i + 1, Value::Null);
                }
            }
            &mut container[*i]
        }
    }
}

/// Remove the value at `path`, returning it. Array items after it shift
/// down. Absent paths and the empty path are a no-op.
pub fn remove_at(doc: &mut Value, path: &[Step]) -> Option<Value> {
    let (last, parent_path) = path.split_last()?;
    match (get_at_mut(doc, parent_path)?, last) {
        (Value::Object(map), Step::Key(key)) => map.shift_remove(key),
        (Value::Array(items), Step::Index(i)) if *i < items.len() => Some(items.remove(*i)),
        _ => None,
    }
}

/// Whether `value` is an object or array without entries.
pub fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// A JSON document addressed with notation paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Notation {
    value: Value,
}

impl Notation {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, NotationError> {
        Ok(Self::new(serde_json::from_slice(bytes)?))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn get(&self, path: &str) -> Result<Option<&Value>, NotationError> {
        let path = Path::parse(path)?;
        Ok(get_at(&self.value, path.steps()))
    }

    pub fn has(&self, path: &str) -> Result<bool, NotationError> {
        Ok(self.get(path)?.is_some())
    }

    pub fn kind_of(&self, path: &str) -> Result<ValueKind, NotationError> {
        Ok(ValueKind::of(self.get(path)?))
    }

    pub fn set(&mut self, path: &str, value: Value) -> Result<&mut Self, NotationError> {
        let path = Path::parse(path)?;
        set_at(&mut self.value, path.steps(), value);
        Ok(self)
    }

    pub fn remove(&mut self, path: &str) -> Result<Option<Value>, NotationError> {
        let path = Path::parse(path)?;
        Ok(remove_at(&mut self.value, path.steps()))
    }

    /// Paths of all leaves in document order. Scalars and empty containers
    /// are leaves.
    pub fn notations(&self) -> Vec<Path> {
        let mut out = Vec::new();
        collect_leaves(&self.value, &Path::default(), &mut out);
        out
    }

    /// Filter this document with include/exclude globs.
    pub fn filter<S: AsRef<str>>(
        &self,
        globs: &[S],
        options: &FilterOptions,
    ) -> Result<Notation, NotationError> {
        filter(&self.value, globs, options).map(Self::new)
    }
}

impl FromStr for Notation {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(serde_json::from_str(s)?))
    }
}

impl From<Value> for Notation {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

fn collect_leaves(value: &Value, prefix: &Path, out: &mut Vec<Path>) {
    let children: Vec<(Step, &Value)> = match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (Step::Key(k.clone()), v))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (Step::Index(i), v))
            .collect(),
        _ => Vec::new(),
    };

    if children.is_empty() {
        if !prefix.is_empty() {
            out.push(prefix.clone());
        }
        return;
    }

    for (step, child) in children {
        let mut path = prefix.clone();
        path.push(step);
        collect_leaves(child, &path, out);
    }
}
