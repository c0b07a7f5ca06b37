//! Argument kinds — what shape a parsed key took.

use serde::Serialize;

/// How a key appeared on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    /// Present without a value (e.g., `-v`, `--verbose`).
    Flag,
    /// Multi-character key with a value (e.g., `--name John Doe`).
    Pair,
    /// Key is not present at all.
    None,
}

impl ArgumentKind {
    pub fn is_flag(self) -> bool {
        self == ArgumentKind::Flag
    }

    pub fn is_pair(self) -> bool {
        self == ArgumentKind::Pair
    }
}

/// A single stored argument.
///
/// The value is only carried by pairs, so a flag can never hold one and a
/// pair always does (possibly the empty string).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    Flag,
    Pair(String),
}

impl Entry {
    pub fn kind(&self) -> ArgumentKind {
        match self {
            Entry::Flag => ArgumentKind::Flag,
            Entry::Pair(_) => ArgumentKind::Pair,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Entry::Flag => None,
            Entry::Pair(value) => Some(value.as_str()),
        }
    }
}
