use json_notation_glob::Mode;
use serde::{Deserialize, Serialize};

/// Filter policy. Deserializes from configuration with every field optional:
///
/// ```toml
/// mode = "strict"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub mode: Mode,
}

impl FilterOptions {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(Mode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(Mode::Lenient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(FilterOptions::default(), FilterOptions::lenient());
        let opts: FilterOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.mode, Mode::Lenient);
    }

    #[test]
    fn test_mode_from_json() {
        let opts: FilterOptions = serde_json::from_str(r#"{"mode":"restrictive"}"#).unwrap();
        assert_eq!(opts, FilterOptions::strict());
        assert_eq!(
            serde_json::to_string(&FilterOptions::strict()).unwrap(),
            r#"{"mode":"strict"}"#
        );
    }
}
