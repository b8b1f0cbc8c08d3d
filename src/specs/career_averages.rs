// src/specs/career_averages.rs
//! "Career averages" table on a player's results page.
//!
//! The table is read as plain text, line by line, the way it reads on screen:
//! first the category labels, then the value column(s). What comes out is the
//! flat token run `decode::decode` expects; this module never looks at column
//! structure itself.

use tracing::debug;

use crate::config::consts::{BOILERPLATE_LABELS, CAREER_CAPTION};
use crate::core::html::{next_element_ci, strip_tags, text_of, to_lower};
use crate::core::sanitize::{normalize_entities, normalize_ws};

/// Token run for the career averages table, or `None` if the page has no such
/// caption.
pub fn extract_tokens(html: &str) -> Option<Vec<String>> {
    let table = locate_table(html)?;
    let lines = flatten_lines(table);

    let mut kept: Vec<String> = lines
        .into_iter()
        .filter(|line| !BOILERPLATE_LABELS.contains(&line.as_str()))
        .collect();

    // first and last survivors are the table's own open/close tags
    if kept.len() < 2 {
        kept.clear();
    } else {
        kept.pop();
        kept.remove(0);
    }
    debug!(tokens = kept.len(), "career averages tokens");
    Some(kept)
}

/// Whole `<table …>…</table>` block enclosing the career averages caption.
fn locate_table(html: &str) -> Option<&str> {
    let lc = to_lower(html);

    let mut pos = 0usize;
    let caption_at = loop {
        let (start, end) = next_element_ci(html, &lc, "caption", pos)?;
        if text_of(&html[start..end]).contains(CAREER_CAPTION) {
            break start;
        }
        pos = end;
    };

    let table_start = lc[..caption_at].rfind("<table")?;
    let table_end = lc[caption_at..].find("</table>")? + caption_at + "</table>".len();
    Some(&html[table_start..table_end])
}

/// Reading-order lines of a table block. The root open and close tags are
/// kept verbatim as the first and last lines; every line in between has its
/// tags stripped, entities decoded and whitespace collapsed.
fn flatten_lines(table: &str) -> Vec<String> {
    let open_end = table.find('>').map_or(table.len(), |i| i + 1);
    let close_start = to_lower(table).rfind("</table>").unwrap_or(table.len()).max(open_end);

    let mut lines = vec![s!(table[..open_end].trim())];
    lines.extend(
        strip_tags(&table[open_end..close_start])
            .split('\n')
            .map(|line| normalize_ws(&normalize_entities(line))),
    );
    lines.push(s!(table[close_start..].trim()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPLIT_PAGE: &str = r#"
<html><body>
<table class="engineTable"><caption>Summary</caption><tr><td>ignore me</td></tr></table>
<table class="engineTable">
<caption>Career averages</caption>
<tr class="head">
<th>&nbsp;</th>
<th>Mat</th>
<th>Runs</th>
<th>Ave</th>
</tr>
<tr class="data1">
<td><b>unfiltered</b></td>
<td>248</td>
<td>12040</td>
<td>59.31</td>
</tr>
<tr class="data1">
<td><b>filtered</b></td>
<td>40</td>
<td>2172</td>
<td>54.30</td>
</tr>
<tr><td><a href="/profile">Profile</a></td></tr>
</table>
</body></html>
"#;

    #[test]
    fn locates_table_by_caption() {
        let table = locate_table(SPLIT_PAGE).unwrap();
        assert!(table.starts_with(r#"<table class="engineTable">"#));
        assert!(table.contains("Career averages"));
        assert!(!table.contains("ignore me"));
    }

    #[test]
    fn flatten_keeps_root_tags_as_residue() {
        let lines = flatten_lines("<table>\n<tr><td>A</td></tr>\n</table>");
        assert_eq!(lines, vec!["<table>", "", "A", "", "</table>"]);
    }

    #[test]
    fn tokens_drop_boilerplate_and_residue() {
        let tokens = extract_tokens(SPLIT_PAGE).unwrap();
        assert_eq!(
            tokens,
            vec!["Mat", "Runs", "Ave", "248", "12040", "59.31", "40", "2172", "54.30"]
        );
    }

    #[test]
    fn missing_caption_is_none() {
        assert_eq!(extract_tokens("<table><tr><td>1</td></tr></table>"), None);
    }
}
