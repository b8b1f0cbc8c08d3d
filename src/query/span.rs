// src/query/span.rs
//! Year-range expansion for `year <from>-<to>`.
//!
//! Each side is read by word count, not parsed as a date:
//!
//! | words | reading              | start         | end            |
//! |-------|----------------------|---------------|----------------|
//! | 1     | `<year>`             | `1 Jan <y>`   | `28 Dec <y>`   |
//! | 2     | `<month> <year>`     | `1 <m> <y>`   | `28 <m> <y>`   |
//! | 3+    | `<day> <month> <y>`  | as written    | as written     |
//!
//! Day 28 is used for every inferred end so no month length is ever checked.
//! Spaces in the boundaries come out as `+`.

use crate::error::CompileError;

/// Marker value stored under `spanval1`.
pub const SPAN_MARKER: &str = "span";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    Year,
    MonthYear,
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

/// Both boundaries of a span, already `+`-joined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearSpan {
    pub min: String,
    pub max: String,
}

impl YearSpan {
    pub fn marker(&self) -> &'static str {
        SPAN_MARKER
    }
}

/// The word-count heuristic on its own. Callers guarantee `part` is non-blank.
pub fn boundary_kind(part: &str) -> BoundaryKind {
    match part.split_whitespace().count() {
        0 | 1 => BoundaryKind::Year,
        2 => BoundaryKind::MonthYear,
        _ => BoundaryKind::Full,
    }
}

/// Expand `"<from>-<to>"`. Exactly one hyphen, both sides non-blank.
pub fn resolve(range: &str) -> Result<YearSpan, CompileError> {
    let malformed = || CompileError::MalformedYearRange(range.trim().to_string());

    let mut sides = range.split('-');
    let (Some(min), Some(max), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(malformed());
    };
    if min.trim().is_empty() || max.trim().is_empty() {
        return Err(malformed());
    }

    Ok(YearSpan {
        min: boundary(min, Edge::Start),
        max: boundary(max, Edge::End),
    })
}

fn boundary(part: &str, edge: Edge) -> String {
    let words = part.split_whitespace().collect::<Vec<_>>().join("+");
    match (boundary_kind(part), edge) {
        (BoundaryKind::Year, Edge::Start) => join!("1+Jan+", &words),
        (BoundaryKind::Year, Edge::End) => join!("28+Dec+", &words),
        (BoundaryKind::MonthYear, Edge::Start) => join!("1+", &words),
        (BoundaryKind::MonthYear, Edge::End) => join!("28+", &words),
        (BoundaryKind::Full, _) => words,
    }
}
