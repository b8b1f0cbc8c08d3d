// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row plus data rows as one delimited string.
pub fn rows_to_string<S: AsRef<str>>(headers: &[S], rows: &[Vec<S>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // writes into a Vec cannot fail
    let _ = write_row(&mut buf, headers, sep);
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let out = rows_to_string(&["Category", "Overall"], &[vec!["HS", "183*"], vec!["Best, inns", "3/40"]], ',');
        assert_eq!(out, "Category,Overall\nHS,183*\n\"Best, inns\",3/40\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let out = rows_to_string(&["a"], &[vec!["1,2"]], '\t');
        assert_eq!(out, "a\n1,2\n");
    }
}
