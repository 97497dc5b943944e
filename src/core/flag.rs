// src/core/flag.rs

use crate::constants::FLAG_PREFIX;
use std::fmt;

/// An optional global `saga_cmd` modifier such as `cores=8`, `flags=s` or `help`.
///
/// The canonical form is what ends up on the command line: empty when unset,
/// the raw text when it already starts with `--`, `--` + raw text otherwise.
/// Equality compares canonical forms, so `Flag::new("help") == "--help"`.
#[derive(Debug, Clone, Default)]
pub struct Flag(Option<String>);

impl Flag {
    /// A set flag holding `raw` as given.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Some(raw.into()))
    }

    /// The unset flag.
    pub fn none() -> Self {
        Self(None)
    }

    /// `true` whenever a raw value is present, even an empty one.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// The text as given, `None` when unset.
    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The canonical command-line token, `None` when unset.
    pub fn token(&self) -> Option<String> {
        self.0.as_deref().map(|raw| {
            if raw.starts_with(FLAG_PREFIX) {
                raw.to_string()
            } else {
                format!("{}{}", FLAG_PREFIX, raw)
            }
        })
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token().unwrap_or_default())
    }
}

impl PartialEq for Flag {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Flag {}

impl PartialEq<str> for Flag {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Flag {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<String> for Flag {
    fn eq(&self, other: &String) -> bool {
        self.to_string() == *other
    }
}

impl From<&str> for Flag {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Flag {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl<S: Into<String>> From<Option<S>> for Flag {
    fn from(raw: Option<S>) -> Self {
        Self(raw.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flag_renders_empty() {
        let flag = Flag::none();
        assert!(!flag.is_set());
        assert_eq!(flag.to_string(), "");
        assert_eq!(flag.token(), None);
        assert_eq!(flag, Flag::default());
    }

    #[test]
    fn test_prefix_is_added() {
        let flag = Flag::new("cores=8");
        assert!(flag.is_set());
        assert_eq!(flag.to_string(), "--cores=8");
        assert_eq!(flag.raw(), Some("cores=8"));
    }

    #[test]
    fn test_prefixed_flag_is_unchanged() {
        for raw in ["--help", "--cores=8", "--flags=s"] {
            assert_eq!(Flag::new(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_empty_raw_value_is_set() {
        let flag = Flag::new("");
        assert!(flag.is_set());
        assert_eq!(flag.to_string(), "--");
    }

    #[test]
    fn test_equality_uses_canonical_form() {
        assert_eq!(Flag::new("help"), Flag::new("--help"));
        assert_eq!(Flag::new("help"), "--help");
        assert_eq!(Flag::new("--version"), String::from("--version"));
        assert_ne!(Flag::new("help"), "help");
        assert_eq!(Flag::from(None::<String>), "");
    }
}
