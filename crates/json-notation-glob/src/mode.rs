//! Conflict-resolution mode shared by normalization and filtering.

use serde::{Deserialize, Serialize};

/// How conflicting include/exclude globs are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Negation dominates: a positive glob covered by a negated one is
    /// dropped, and `!*` / `![*]` empties the whole set.
    #[serde(alias = "restrictive")]
    Strict,
    /// Positive coverage dominates: a positive glob inside an excluded
    /// subtree re-includes it; negated globs only survive inside something
    /// that is included.
    #[default]
    Lenient,
}

impl Mode {
    pub fn is_strict(self) -> bool {
        self == Mode::Strict
    }
}
