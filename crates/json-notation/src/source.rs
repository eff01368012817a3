//! Filter entry point over the supported document encodings.

use json_notation_glob::{normalize, Glob};
use serde_json::Value;

use crate::error::NotationError;
use crate::filter::apply;
use crate::options::FilterOptions;

/// A document that can be filtered. Raw text and bytes are decoded as JSON
/// and the result is encoded back the same way.
pub trait FilterSource {
    type Output;

    /// Apply an already normalized glob set.
    fn filter_normalized(self, globs: &[Glob]) -> Result<Self::Output, NotationError>;
}

impl FilterSource for &Value {
    type Output = Value;

    fn filter_normalized(self, globs: &[Glob]) -> Result<Value, NotationError> {
        apply(self, globs)
    }
}

impl FilterSource for Value {
    type Output = Value;

    fn filter_normalized(self, globs: &[Glob]) -> Result<Value, NotationError> {
        apply(&self, globs)
    }
}

impl FilterSource for &str {
    type Output = String;

    fn filter_normalized(self, globs: &[Glob]) -> Result<String, NotationError> {
        let doc: Value = serde_json::from_str(self)?;
        Ok(serde_json::to_string(&apply(&doc, globs)?)?)
    }
}

impl FilterSource for String {
    type Output = String;

    fn filter_normalized(self, globs: &[Glob]) -> Result<String, NotationError> {
        self.as_str().filter_normalized(globs)
    }
}

impl FilterSource for &[u8] {
    type Output = Vec<u8>;

    fn filter_normalized(self, globs: &[Glob]) -> Result<Vec<u8>, NotationError> {
        let doc: Value = serde_json::from_slice(self)?;
        Ok(serde_json::to_vec(&apply(&doc, globs)?)?)
    }
}

impl FilterSource for Vec<u8> {
    type Output = Vec<u8>;

    fn filter_normalized(self, globs: &[Glob]) -> Result<Vec<u8>, NotationError> {
        self.as_slice().filter_normalized(globs)
    }
}

/// Filter `source` with include/exclude glob strings.
///
/// Globs are parsed before the document is decoded, so an invalid glob is
/// reported even for undecodable input.
///
/// ```
/// use json_notation::{filter, FilterOptions};
/// use serde_json::json;
///
/// let doc = json!({"car": {"brand": "Dodge", "model": "Charger"}, "dog": {"breed": "Akita"}});
/// let out = filter(&doc, &["dog", "car", "!car.brand"], &FilterOptions::default()).unwrap();
/// assert_eq!(out, json!({"car": {"model": "Charger"}, "dog": {"breed": "Akita"}}));
/// ```
pub fn filter<T, S>(source: T, globs: &[S], options: &FilterOptions) -> Result<T::Output, NotationError>
where
    T: FilterSource,
    S: AsRef<str>,
{
    let globs = Glob::parse_list(globs)?;
    let normalized = normalize(&globs, options.mode)?;
    source.filter_normalized(&normalized)
}
