// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod decode;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod query;
pub mod render;
pub mod runner;

pub use decode::{decode, CategorizedTable, CategoryMap, DecodedTable};
pub use error::{CompileError, DecodeError, FetchError, LookupError};
pub use query::{compile, CompiledQuery};
pub use runner::{lookup, StatsReport};
