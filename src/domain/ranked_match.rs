use std::fmt;

/// The best dictionary matches for one masked token, ordered by similarity.
///
/// May be empty when the token has no dictionary match at all; that is a
/// normal outcome reported to the user, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedMatch {
    entries: Vec<String>,
}

impl RankedMatch {
    const SEPARATOR: &'static str = " | ";

    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Human-readable form, entries joined with `" | "`.
    pub fn display(&self) -> String {
        self.entries.join(Self::SEPARATOR)
    }
}

impl fmt::Display for RankedMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
