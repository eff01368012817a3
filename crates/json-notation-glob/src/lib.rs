//! Glob notation for JSON documents.
//!
//! A glob such as `users[*].name` or `!car.brand` selects (or, with the `!`
//! marker, excludes) paths in a JSON document. This crate tokenizes globs,
//! relates them to each other and normalizes a list of include/exclude globs
//! into a minimal, ordered set that a filter can apply rule by rule.
//!
//! # Example
//!
//! ```
//! use json_notation_glob::{normalize, Glob, Mode};
//!
//! let globs = Glob::parse_list(&["*", "a", "!a"]).unwrap();
//!
//! let lenient = normalize(&globs, Mode::Lenient).unwrap();
//! let texts: Vec<&str> = lenient.iter().map(Glob::as_str).collect();
//! assert_eq!(texts, ["!a", "*"]);
//!
//! let strict = normalize(&Glob::parse_list(&["*.name", "!admin.*"]).unwrap(), Mode::Strict).unwrap();
//! let texts: Vec<&str> = strict.iter().map(Glob::as_str).collect();
//! assert_eq!(texts, ["!admin.name", "*.name"]);
//! ```

mod error;
pub use error::{GlobError, InvalidReason};

mod note;
pub use note::{is_identifier, join_notes, notes_equal, Note};

mod parser;
pub use parser::GlobParser;

mod glob;
pub use glob::{Glob, Shape};

mod relation;
pub use relation::{covers, note_covers, note_matches, Relation};

mod mode;
pub use mode::Mode;

mod intersect;
pub use intersect::intersect;

mod compare;
pub use compare::{compare, sort};

mod normalize;
pub use normalize::{normalize, MAX_ROUNDS};

mod trace;
