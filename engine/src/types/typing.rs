//! Single and dual typings

use std::fmt;

/// A single type or an unordered dual-type combination
///
/// Dual typings keep the order they were given in; all effectiveness math is
/// symmetric in the two components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Typing {
    Single(String),
    Dual(String, String),
}

impl Typing {
    /// Build a single typing
    pub fn single(name: impl Into<String>) -> Self {
        Typing::Single(name.into())
    }

    /// Build a dual typing
    pub fn dual(first: impl Into<String>, second: impl Into<String>) -> Self {
        Typing::Dual(first.into(), second.into())
    }

    /// Component type names, one or two of them
    pub fn components(&self) -> impl Iterator<Item = &str> {
        let pair = match self {
            Typing::Single(name) => [Some(name.as_str()), None],
            Typing::Dual(first, second) => [Some(first.as_str()), Some(second.as_str())],
        };
        pair.into_iter().flatten()
    }

    /// Whether this is a dual typing
    pub fn is_dual(&self) -> bool {
        matches!(self, Typing::Dual(..))
    }
}

impl fmt::Display for Typing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typing::Single(name) => write!(f, "{}", name),
            Typing::Dual(first, second) => write!(f, "{}/{}", first, second),
        }
    }
}

impl From<&str> for Typing {
    fn from(name: &str) -> Self {
        Typing::Single(name.to_string())
    }
}

impl From<(&str, &str)> for Typing {
    fn from((first, second): (&str, &str)) -> Self {
        Typing::Dual(first.to_string(), second.to_string())
    }
}
