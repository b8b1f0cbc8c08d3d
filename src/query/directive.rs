// src/query/directive.rs
use crate::error::CompileError;

use super::compiler::Param;

/// Keyword aliases, matched after lowercasing.
pub const ALIASES: &[(&str, Param)] = &[
    ("vs", Param::Opposition),
    ("against", Param::Opposition),
    ("in", Param::Host),
    ("venue", Param::Host),
    ("at", Param::HomeOrAway),
    ("format", Param::Class),
    ("year", Param::Year),
    ("type", Param::Type),
];

/// One `keyword value…` clause, borrowed from the request text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directive<'a> {
    pub keyword: &'a str,
    pub value: &'a str,
}

impl Directive<'_> {
    /// Canonical parameter for this directive's keyword.
    pub fn param(&self) -> Result<Param, CompileError> {
        resolve_alias(self.keyword)
            .ok_or_else(|| CompileError::UnknownDirective(self.keyword.to_string()))
    }
}

pub fn resolve_alias(keyword: &str) -> Option<Param> {
    let kw = keyword.to_lowercase();
    ALIASES.iter().find(|(alias, _)| *alias == kw).map(|(_, p)| *p)
}

/// Split a segment on its first run of whitespace.
///
/// `" vs  new zealand "` → `("vs", "new zealand")`. A segment with nothing after
/// the keyword (including an empty segment) is malformed.
pub fn parse_segment(segment: &str) -> Result<Directive<'_>, CompileError> {
    let seg = segment.trim();
    let Some(split) = seg.find(char::is_whitespace) else {
        return Err(CompileError::MalformedDirective(seg.to_string()));
    };
    let keyword = &seg[..split];
    let value = seg[split..].trim_start();
    if value.is_empty() {
        return Err(CompileError::MalformedDirective(seg.to_string()));
    }
    Ok(Directive { keyword, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_whitespace_run() {
        let d = parse_segment("  vs \t new  zealand ").unwrap();
        assert_eq!(d.keyword, "vs");
        assert_eq!(d.value, "new  zealand");
    }

    #[test]
    fn keyword_without_value_is_malformed() {
        assert_eq!(parse_segment(" vs "), Err(CompileError::MalformedDirective(s!("vs"))));
        assert_eq!(parse_segment(""), Err(CompileError::MalformedDirective(s!())));
    }

    #[test]
    fn aliases_are_case_insensitive() {
        assert_eq!(resolve_alias("AGAINST"), Some(Param::Opposition));
        assert_eq!(resolve_alias("Venue"), Some(Param::Host));
        assert_eq!(resolve_alias("foo"), None);
    }
}
