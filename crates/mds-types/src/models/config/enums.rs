//! Configuration enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How caller-supplied values are embedded in a lookup search term.
///
/// The search term is an expression of the form `Name = '<value>'`. `Verbatim`
/// interpolates the value unchanged, so a value containing `'` can end the
/// string literal early and append its own conditions. `Escaped` doubles every
/// `'` inside the value, keeping it one literal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchTermQuoting {
    /// Interpolate the value unchanged
    Verbatim,
    /// Double embedded single quotes
    #[default]
    Escaped,
}

impl fmt::Display for SearchTermQuoting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Verbatim => write!(f, "verbatim"),
            Self::Escaped => write!(f, "escaped"),
        }
    }
}

impl SearchTermQuoting {
    /// Parse from string. Returns `None` for unknown values.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Some(Self::Verbatim),
            "escaped" => Some(Self::Escaped),
            _ => None,
        }
    }
}
