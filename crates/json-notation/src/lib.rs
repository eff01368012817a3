//! Filter JSON documents with include/exclude glob notations.
//!
//! Globs are normalized with [`json_notation_glob`] and then applied rule by
//! rule: inclusions copy values out of the source document, exclusions remove
//! them from the result.
//!
//! # Example
//!
//! ```
//! use json_notation::{FilterOptions, Notation};
//! use serde_json::json;
//!
//! let doc = Notation::new(json!({
//!     "name": "John",
//!     "avatar": "x.png",
//!     "access": {"owner": "me", "clients": ["a", "b"]}
//! }));
//!
//! let out = doc
//!     .filter(&["*", "!access.owner", "!avatar"], &FilterOptions::default())
//!     .unwrap();
//! assert_eq!(
//!     out.value(),
//!     &json!({"name": "John", "access": {"clients": ["a", "b"]}})
//! );
//! assert_eq!(out.get("access.clients[1]").unwrap(), Some(&json!("b")));
//! ```

mod error;
pub use error::NotationError;

mod options;
pub use options::FilterOptions;

mod path;
pub use path::{Path, Step};

mod document;
pub use document::{get_at, get_at_mut, remove_at, set_at, Notation, ValueKind};

mod filter;
pub use filter::apply;

mod source;
pub use source::{filter, FilterSource};

mod trace;

pub use json_notation_glob::{normalize, Glob, GlobError, Mode};
