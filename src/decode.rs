// src/decode.rs
//! # Career-averages table decoder
//!
//! The scraped region is one flat, reading-order run of strings: first every
//! category label, then each value column in turn. Nothing marks where one
//! column stops, so the split comes purely from the token count:
//!
//! ```text
//! allround:  [ names … | overall … ]                    width = n / 2
//! split:     [ names … | unfiltered … | filtered … ]   width = n / 3
//! ```
//!
//! Tokens past `columns * width` are dropped. The count is kept on the result
//! (`DecodedTable::dropped`) and logged, since a missing token upstream shifts
//! every later category by one.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::error::DecodeError;

/// Category name → scraped value, in page order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: Vec<(String, String)>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeated name overwrites the value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for CategoryMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut map = CategoryMap::new();
        for (k, v) in pairs {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorizedTable {
    Overall(CategoryMap),
    #[serde(untagged)]
    Split {
        unfiltered: CategoryMap,
        filtered: CategoryMap,
    },
}

impl CategorizedTable {
    /// The column a reader wants first: `filtered` when split, else `overall`.
    pub fn primary(&self) -> &CategoryMap {
        match self {
            CategorizedTable::Overall(map) => map,
            CategorizedTable::Split { filtered, .. } => filtered,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedTable {
    #[serde(flatten)]
    pub table: CategorizedTable,
    /// Trailing tokens discarded by uneven division. Serialized only when
    /// non-zero.
    #[serde(skip_serializing_if = "is_zero")]
    pub dropped: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// How a token run of length `n` is cut into columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Label column plus value columns: 2 when allround, 3 otherwise.
    pub columns: usize,
    /// Entries per column.
    pub width: usize,
    pub dropped: usize,
}

impl Geometry {
    pub fn for_len(n: usize, is_allround: bool) -> Self {
        let columns = if is_allround { 2 } else { 3 };
        let width = n / columns;
        Self { columns, width, dropped: n - columns * width }
    }

    fn column<'a>(&self, tokens: &'a [&'a str], index: usize) -> &'a [&'a str] {
        &tokens[index * self.width..(index + 1) * self.width]
    }
}

fn zip_column(names: &[&str], values: &[&str]) -> CategoryMap {
    let mut map = CategoryMap::new();
    for (name, value) in names.iter().zip(values) {
        map.insert(*name, *value);
    }
    map
}

/// Rebuild the categorized table from a flat token run.
pub fn decode<S: AsRef<str>>(tokens: &[S], is_allround: bool) -> Result<DecodedTable, DecodeError> {
    if tokens.is_empty() {
        return Err(DecodeError::EmptyTokenSequence);
    }

    let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    let geo = Geometry::for_len(tokens.len(), is_allround);
    if geo.dropped > 0 {
        warn!(
            tokens = tokens.len(),
            columns = geo.columns,
            dropped = geo.dropped,
            "token count not divisible by column count; trailing tokens ignored"
        );
    }

    let names = geo.column(&tokens, 0);
    let table = if is_allround {
        CategorizedTable::Overall(zip_column(names, geo.column(&tokens, 1)))
    } else {
        CategorizedTable::Split {
            unfiltered: zip_column(names, geo.column(&tokens, 1)),
            filtered: zip_column(names, geo.column(&tokens, 2)),
        }
    };
    debug!(categories = geo.width, is_allround, "decoded career averages");

    Ok(DecodedTable { table, dropped: geo.dropped })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_halves_and_thirds() {
        assert_eq!(Geometry::for_len(5, true), Geometry { columns: 2, width: 2, dropped: 1 });
        assert_eq!(Geometry::for_len(8, false), Geometry { columns: 3, width: 2, dropped: 2 });
        assert_eq!(Geometry::for_len(1, false), Geometry { columns: 3, width: 0, dropped: 1 });
    }

    #[test]
    fn too_short_for_one_row_gives_empty_maps() {
        let out = decode(&["A", "B"], false).unwrap();
        assert!(out.table.is_empty());
        assert_eq!(out.dropped, 2);
    }

    #[test]
    fn duplicate_category_keeps_last_value() {
        let out = decode(&["Runs", "Runs", "10", "20"], true).unwrap();
        assert_eq!(out.table, CategorizedTable::Overall(CategoryMap::from([("Runs", "20")])));
    }

    #[test]
    fn json_shapes() {
        let overall = decode(&["A", "1"], true).unwrap();
        assert_eq!(serde_json::to_string(&overall).unwrap(), r#"{"overall":{"A":"1"}}"#);

        let split = decode(&["A", "1", "2"], false).unwrap();
        assert_eq!(
            serde_json::to_string(&split).unwrap(),
            r#"{"unfiltered":{"A":"1"},"filtered":{"A":"2"}}"#
        );
    }

    #[test]
    fn json_reports_dropped_tokens() {
        let uneven = decode(&["A", "B", "1", "2", "x"], true).unwrap();
        assert_eq!(
            serde_json::to_string(&uneven).unwrap(),
            r#"{"overall":{"A":"1","B":"2"},"dropped":1}"#
        );
    }
}
