// src/query/tables.rs
//! Closed enumerations for directive values. Keys are lowercase; a miss is an
//! error at the call site, never a default.

use super::compiler::Param;

/// Statsguru team codes, used for both `opposition` and `host`.
pub const COUNTRIES: &[(&str, u32)] = &[
    ("afghanistan", 40),
    ("australia", 2),
    ("bangladesh", 25),
    ("bermuda", 12),
    ("england", 1),
    ("hong kong", 19),
    ("india", 6),
    ("ireland", 29),
    ("netherlands", 15),
    ("new zealand", 5),
    ("pakistan", 7),
    ("scotland", 30),
    ("south africa", 3),
    ("sri lanka", 8),
    ("west indies", 4),
    ("zimbabwe", 9),
];

pub const VENUES: &[(&str, u32)] = &[
    ("home", 1),
    ("away", 2),
    ("neutral", 3),
];

pub const FORMATS: &[(&str, u32)] = &[
    ("tests", 1),
    ("odis", 2),
    ("t20is", 3),
    ("all", 11),
    ("test", 1),
    ("odi", 2),
    ("t20i", 3),
    ("t20", 3),
];

/// Class code for "all formats", injected when no `format` directive is given.
pub const ALL_FORMATS: u32 = 11;

/// Enumeration backing `param`, if its values are enumerated at all.
/// `year` and `type` are free text.
pub fn table_for(param: Param) -> Option<&'static [(&'static str, u32)]> {
    match param {
        Param::Opposition | Param::Host => Some(COUNTRIES),
        Param::HomeOrAway => Some(VENUES),
        Param::Class => Some(FORMATS),
        _ => None,
    }
}

pub fn lookup(table: &[(&str, u32)], value: &str) -> Option<u32> {
    table.iter().find(|(k, _)| *k == value).map(|(_, code)| *code)
}
