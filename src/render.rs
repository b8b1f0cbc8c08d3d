// src/render.rs
//! Turn a `StatsReport` into text for the terminal or a file.

use std::fmt::Write as _;

use crate::config::options::{OutputFormat, OutputOptions};
use crate::csv::rows_to_string;
use crate::decode::CategorizedTable;
use crate::runner::StatsReport;

pub const NO_STATS: &str = "No stats for that player could be found.";

pub fn render(report: &StatsReport, opts: &OutputOptions) -> Result<String, serde_json::Error> {
    match opts.format {
        OutputFormat::Text => Ok(render_text(report, opts)),
        OutputFormat::Json => serde_json::to_string_pretty(report).map(|s| s + "\n"),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = opts.format.delim().unwrap_or(',');
            let (headers, rows) = table_rows(&report.stats.table, opts.both_columns);
            Ok(rows_to_string(&headers, &rows, sep))
        }
    }
}

/// Header and rows for the delimited formats. Split tables show the filtered
/// column, or both columns when asked.
pub fn table_rows(table: &CategorizedTable, both: bool) -> (Vec<&str>, Vec<Vec<&str>>) {
    match table {
        CategorizedTable::Split { unfiltered, filtered } if both => (
            vec!["Category", "Unfiltered", "Filtered"],
            filtered
                .iter()
                .map(|(name, value)| vec![name, unfiltered.get(name).unwrap_or(""), value])
                .collect(),
        ),
        CategorizedTable::Split { filtered, .. } => (
            vec!["Category", "Filtered"],
            filtered.iter().map(|(name, value)| vec![name, value]).collect(),
        ),
        CategorizedTable::Overall(overall) => (
            vec!["Category", "Overall"],
            overall.iter().map(|(name, value)| vec![name, value]).collect(),
        ),
    }
}

fn render_text(report: &StatsReport, opts: &OutputOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Statistics for {}", report.player_name);
    if opts.show_url {
        let _ = writeln!(out, "{}", report.url);
    }
    out.push('\n');

    let table = &report.stats.table;
    if table.is_empty() {
        out.push_str(NO_STATS);
        out.push('\n');
        return out;
    }

    let (_, rows) = table_rows(table, opts.both_columns);
    let width = rows.iter().map(|r| r[0].chars().count()).max().unwrap_or(0);
    for row in rows {
        let _ = write!(out, "{:<width$}  ", row[0]);
        let _ = writeln!(out, "{}", row[1..].join("  /  "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    fn report(tokens: &[&str], allround: bool) -> StatsReport {
        StatsReport {
            player_name: s!("Virat Kohli"),
            url: s!("http://s/p.html"),
            stats: decode(tokens, allround).unwrap(),
        }
    }

    #[test]
    fn text_aligns_categories() {
        let r = report(&["Mat", "Runs", "10", "500"], true);
        let out = render(&r, &OutputOptions::default()).unwrap();
        assert_eq!(out, "Statistics for Virat Kohli\nhttp://s/p.html\n\nMat   10\nRuns  500\n");
    }

    #[test]
    fn text_both_columns() {
        let r = report(&["Ave", "50.1", "61.2"], false);
        let opts = OutputOptions { both_columns: true, show_url: false, ..OutputOptions::default() };
        let out = render(&r, &opts).unwrap();
        assert_eq!(out, "Statistics for Virat Kohli\n\nAve  50.1  /  61.2\n");
    }

    #[test]
    fn empty_table_says_so() {
        let r = report(&["Mat"], true);
        let out = render(&r, &OutputOptions { show_url: false, ..OutputOptions::default() }).unwrap();
        assert!(out.ends_with(&join!(NO_STATS, "\n")));
    }

    #[test]
    fn csv_split_filtered_only() {
        let r = report(&["Mat", "Runs", "100", "5000", "20", "900"], false);
        let opts = OutputOptions { format: OutputFormat::Csv, ..OutputOptions::default() };
        assert_eq!(render(&r, &opts).unwrap(), "Category,Filtered\nMat,20\nRuns,900\n");
    }

    #[test]
    fn json_report() {
        let r = report(&["Mat", "7"], true);
        let opts = OutputOptions { format: OutputFormat::Json, ..OutputOptions::default() };
        let value: serde_json::Value = serde_json::from_str(&render(&r, &opts).unwrap()).unwrap();
        assert_eq!(value["player_name"], "Virat Kohli");
        assert_eq!(value["stats"]["overall"]["Mat"], "7");
    }
}
