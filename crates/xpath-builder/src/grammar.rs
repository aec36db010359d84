//! Path grammar helpers.
//!
//! ```text
//! Path            := ("/" Segment)*
//! Segment         := TypeName PredicateClause*
//! PredicateClause := "[@" Attr "=\"" Value "\"]"
//!                  | "[starts-with(@" Attr ",\"" Value "\")]"
//! ```
//!
//! Values are inserted verbatim. Nothing here escapes or validates input.

use std::fmt::Write;
use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::RemovalStrategy;

/// Segment with at least one bracketed clause.
const SEGMENT_WITH_PREDICATES: &str = r#"/\w+(?:\[[\w\-()@,\\"=\s#]+\])+"#;

static SEGMENT_PATTERN: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn segment_pattern() -> &'static Regex {
    SEGMENT_PATTERN
        .get_or_init(|| Regex::new(SEGMENT_WITH_PREDICATES).expect("segment pattern is valid"))
}

/// Append `/<type_name>` to `out`.
pub(crate) fn push_segment(out: &mut String, type_name: &str) {
    out.push('/');
    out.push_str(type_name);
}

/// Append `[@<name>="<value>"]` to `out`.
pub(crate) fn push_equals_clause(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, "[@{name}=\"{value}\"]");
}

/// Append `[starts-with(@<name>,"<value>")]` to `out`.
pub(crate) fn push_starts_with_clause(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, "[starts-with(@{name},\"{value}\")]");
}

/// Byte range of the segment `back()` should remove, if any.
///
/// Only segments carrying one or more clauses are candidates; a bare
/// `/TypeName` never matches.
pub(crate) fn last_removable_segment(path: &str, strategy: RemovalStrategy) -> Option<Range<usize>> {
    let last = segment_pattern().find_iter(path).last()?;
    match strategy {
        RemovalStrategy::MatchPosition => Some(last.range()),
        RemovalStrategy::LastOccurrence => {
            let text = last.as_str();
            path.rfind(text).map(|start| start..start + text.len())
        }
    }
}
