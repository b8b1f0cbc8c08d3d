// src/query/compiler.rs
use std::fmt;

use tracing::debug;
use url::form_urlencoded;

use crate::error::CompileError;

use super::directive::parse_segment;
use super::span;
use super::tables::{self, ALL_FORMATS};

/// Query keys understood by the results page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    Opposition,
    Host,
    HomeOrAway,
    Class,
    Year,
    SpanMin,
    SpanMax,
    SpanVal,
    Type,
}

impl Param {
    pub fn as_str(self) -> &'static str {
        match self {
            Param::Opposition => "opposition",
            Param::Host => "host",
            Param::HomeOrAway => "home_or_away",
            Param::Class => "class",
            Param::Year => "year",
            Param::SpanMin => "spanmin1",
            Param::SpanMax => "spanmax1",
            Param::SpanVal => "spanval1",
            Param::Type => "type",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered parameter map with unique keys.
///
/// Re-inserting a key replaces its value but keeps its original position,
/// so `year 2010, year 2011` encodes `year=2011` where the first one stood.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(Param, String)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: Param, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: Param) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: Param) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = Param> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Param, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Copy of the map with `key` left out; order of the rest is kept.
    pub fn without(&self, key: Param) -> ParamMap {
        ParamMap {
            entries: self.entries.iter().filter(|(k, _)| *k != key).cloned().collect(),
        }
    }
}

/// Result of compiling one request. Immutable; build a new one per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledQuery {
    pub player_name: String,
    pub params: ParamMap,
    /// `params` serialized for the results page, e.g. `class=11;opposition=2`.
    pub encoded: String,
    /// A `format` directive was present.
    pub class_explicit: bool,
    /// The page will return one combined table instead of a filtered/unfiltered pair.
    pub is_allround: bool,
    /// A `type` directive was present.
    pub has_type_override: bool,
}

/// Compile `"<player>, <keyword> <value>, …"`.
pub fn compile(request: &str) -> Result<CompiledQuery, CompileError> {
    let mut segments = request.split(',');
    let player_name = segments.next().unwrap_or_default().trim().to_string();
    if player_name.is_empty() {
        return Err(CompileError::EmptyPlayerName);
    }

    let mut params = ParamMap::new();
    let mut class_explicit = false;
    let mut has_type_override = false;

    for segment in segments {
        let directive = parse_segment(segment)?;
        let param = directive.param()?;

        match param {
            Param::Type => {
                has_type_override = true;
                params.insert(Param::Type, directive.value.to_lowercase());
            }
            Param::Year if directive.value.contains('-') => {
                let span = span::resolve(directive.value)?;
                params.insert(Param::SpanMin, span.min.as_str());
                params.insert(Param::SpanMax, span.max.as_str());
                params.insert(Param::SpanVal, span.marker());
            }
            Param::Year => params.insert(Param::Year, directive.value.to_lowercase()),
            _ => {
                if param == Param::Class {
                    class_explicit = true;
                }
                let value = directive.value.to_lowercase();
                let code = tables::table_for(param)
                    .and_then(|table| tables::lookup(table, &value))
                    .ok_or_else(|| CompileError::UnknownValue {
                        keyword: directive.keyword.to_string(),
                        value: directive.value.to_string(),
                    })?;
                params.insert(param, code.to_string());
            }
        }
    }

    if !class_explicit {
        params.insert(Param::Class, ALL_FORMATS.to_string());
    }

    let is_allround = is_allround_query(&params);
    let encoded = encode_params(&params);
    debug!(player = %player_name, query = %encoded, is_allround, "compiled request");

    Ok(CompiledQuery {
        player_name,
        params,
        encoded,
        class_explicit,
        is_allround,
        has_type_override,
    })
}

/// Combined-table heuristic: the only parameters are the class (default or not)
/// and at most a `type` override. Any opponent, venue or date filter makes the
/// page answer with a filtered/unfiltered pair.
pub fn is_allround_query(params: &ParamMap) -> bool {
    match params.len() {
        1 => true,
        2 => params.contains(Param::Type),
        _ => false,
    }
}

/// Form-urlencode each pair, join pairs with `;`, and keep `+` literal.
pub fn encode_params(params: &ParamMap) -> String {
    let mut ser = form_urlencoded::Serializer::new(s!());
    for (key, value) in params.iter() {
        ser.append_pair(key.as_str(), value);
    }
    ser.finish().replace('&', ";").replace("%2B", "+")
}
