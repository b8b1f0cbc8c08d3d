// src/query/mod.rs
//! # Query compiler
//!
//! Turns a terse request such as
//!
//! ```text
//! Virat Kohli, vs australia, in india, year Mar 2014-2017
//! ```
//!
//! into the `;`-separated query fragment Statsguru understands, plus the flags
//! that decide how the results page must be read back (`decode`).
//!
//! ## Pieces
//! - `directive` – segment splitting and keyword aliases (`vs`, `in`, `at`, …).
//! - `tables` – closed value enumerations (countries, venues, formats).
//! - `span` – year-range expansion into `spanmin1` / `spanmax1` boundaries.
//! - `compiler` – ties the above together; produces an immutable `CompiledQuery`.
//!
//! Compilation is pure: no I/O, no shared state, safe to call from any thread.
pub mod compiler;
pub mod directive;
pub mod span;
pub mod tables;

pub use compiler::{compile, encode_params, is_allround_query, CompiledQuery, Param, ParamMap};
pub use span::{resolve as resolve_span, BoundaryKind, YearSpan};
