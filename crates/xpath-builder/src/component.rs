//! Predicate clauses for a single path segment.

use std::fmt;

use crate::grammar;

/// Accumulates the bracketed clauses of one segment, e.g.
/// `[@ClassName="TestClassName"]`.
///
/// A component is handed to the configure closure of
/// [`PathBuilder::add_segment_with`](crate::PathBuilder::add_segment_with)
/// and its rendered text is merged into the path once the closure returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathComponent {
    clauses: String,
    count: usize,
}

impl PathComponent {
    /// Create a component with no clauses
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality clause: `[@name="value"]`.
    ///
    /// `value` is inserted verbatim; a `"` inside it ends up unescaped in the
    /// path.
    pub fn with_parameter(&mut self, name: &str, value: &str) -> &mut Self {
        grammar::push_equals_clause(&mut self.clauses, name, value);
        self.count += 1;
        self
    }

    /// Add a prefix clause: `[starts-with(@attribute,"value")]`
    pub fn starts_with(&mut self, attribute: &str, value: &str) -> &mut Self {
        grammar::push_starts_with_clause(&mut self.clauses, attribute, value);
        self.count += 1;
        self
    }

    /// Drop every clause added so far
    pub fn clear(&mut self) -> &mut Self {
        self.clauses.clear();
        self.count = 0;
        self
    }

    /// Clauses in the order they were added
    #[must_use]
    pub fn render(&self) -> &str {
        &self.clauses
    }

    /// Check if no clause was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of clauses added
    #[must_use]
    pub const fn clause_count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clauses)
    }
}
