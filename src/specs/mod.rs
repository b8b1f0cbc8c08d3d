// src/specs/mod.rs
//! # Page specs
//!
//! One module per remote page. Each spec knows **where the ground truth lives in
//! the HTML** of its page and how to pull it out; nothing else.
//!
//! ## What lives here
//! - **Pure HTML reading** of Statsguru pages, via the `core::html` helpers
//!   (case-insensitive tag blocks, attribute lookup, tag stripping).
//! - **Selector precedence** where the page offers more than one answer
//!   (combined-format player link before the Test-only link).
//!
//! ## What does **not** live here
//! - **Fetching** – callers hand in the page text (`core::net::PageSource`).
//! - **Query building and table decoding** – `query` and `decode`.
//! - **Formatting** – `render`.
//!
//! ## Typical call chain
//! ```text
//! runner::lookup → query::compile
//!                → specs::player_search::parse_search_page
//!                → specs::career_averages::extract_tokens
//!                → decode::decode
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against short inline fixtures that keep the
//! structure of the real pages (captions, nowrap spans, link texts).
pub mod career_averages;
pub mod player_search;
