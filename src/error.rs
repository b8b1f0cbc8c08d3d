// src/error.rs
//! Error kinds, one enum per stage of a lookup.
//!
//! Every failure is typed so the front end can pick wording per kind
//! (see `cli::user_message`) instead of a blanket "something went wrong".

use std::path::PathBuf;

use thiserror::Error;

/// Failures while compiling a request into a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("request has no player name")]
    EmptyPlayerName,

    /// Keyword is not in the alias table.
    #[error("unknown directive `{0}`")]
    UnknownDirective(String),

    /// Keyword recognised, value missing from its enumeration table.
    #[error("unknown value `{value}` for `{keyword}`")]
    UnknownValue { keyword: String, value: String },

    /// Segment without a value part (or an empty segment).
    #[error("directive `{0}` has no value")]
    MalformedDirective(String),

    /// Hyphenated year value with an empty side or more than one hyphen.
    #[error("malformed year range `{0}`")]
    MalformedYearRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty token sequence")]
    EmptyTokenSequence,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Anything that can stop a full lookup, from request text to decoded table.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no player found for `{0}`")]
    PlayerNotFound(String),

    #[error("`{name}` matches several players: {}", candidates.join(", "))]
    AmbiguousPlayer { name: String, candidates: Vec<String> },

    #[error("no career averages table at {0}")]
    MissingCareerAverages(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
