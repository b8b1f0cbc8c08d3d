// src/specs/player_search.rs
//! Player search page (`analysis.html?search=…`).
//!
//! A unique hit shows one "Combined Test, ODI and T20I player" link (or, for
//! players with no limited-overs career, one "Test matches player" link). Several
//! hits show several such links, with the candidates' names in
//! `<span style="white-space: nowrap">` cells next to bracketed country/era notes.

use tracing::debug;

use crate::config::consts::*;
use crate::core::html::{attr_value, elements_ci, open_tag, text_of};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerMatch {
    /// Results page address (already ending in `;template=results;`).
    Found { url: String, test_only: bool },
    /// Several players share the name; candidate names in page order.
    Ambiguous(Vec<String>),
    NotFound,
}

pub fn search_url(base: &str, player_name: &str) -> String {
    join!(base, SEARCH_PATH, "?search=", &player_name.replace(' ', "+"), SEARCH_TEMPLATE)
}

pub fn parse_search_page(html: &str, base: &str) -> PlayerMatch {
    let links: Vec<(String, String)> = elements_ci(html, "a")
        .into_iter()
        .filter_map(|block| {
            let href = attr_value(open_tag(block), "href")?;
            Some((text_of(block), href))
        })
        .collect();

    let mut test_only = false;
    let mut hits: Vec<&str> = links
        .iter()
        .filter(|(text, _)| text.contains(COMBINED_PLAYER_LINK))
        .map(|(_, href)| href.as_str())
        .collect();
    if hits.is_empty() {
        hits = links
            .iter()
            .filter(|(text, _)| text == TEST_PLAYER_LINK)
            .map(|(_, href)| href.as_str())
            .collect();
        test_only = !hits.is_empty();
    }

    debug!(hits = hits.len(), test_only, "player search page");
    match hits.as_slice() {
        [] => PlayerMatch::NotFound,
        [href] => PlayerMatch::Found {
            url: join!(base, href, RESULTS_TEMPLATE),
            test_only,
        },
        _ => PlayerMatch::Ambiguous(candidate_names(html)),
    }
}

/// Names from the nowrap spans, skipping the `( … )` annotation cells.
fn candidate_names(html: &str) -> Vec<String> {
    elements_ci(html, "span")
        .into_iter()
        .filter(|block| {
            attr_value(open_tag(block), "style")
                .map(|style| style.trim().trim_end_matches(';').eq_ignore_ascii_case(CANDIDATE_SPAN_STYLE))
                .unwrap_or(false)
        })
        .map(text_of)
        .filter(|name| !name.is_empty() && !name.starts_with('(') && !name.ends_with(')'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://stats.example";

    #[test]
    fn search_url_plus_joins_name() {
        assert_eq!(
            search_url(BASE, "virat kohli"),
            "http://stats.example/stats/engine/stats/analysis.html?search=virat+kohli;template=analysis"
        );
    }

    #[test]
    fn single_combined_player() {
        let html = r#"
            <table><tr>
              <td><span style="white-space: nowrap">Virat Kohli</span></td>
              <td><a href="/ci/engine/player/253802.html?class=11;type=allround">Combined Test, ODI and T20I player</a></td>
              <td><a href="/ci/engine/player/253802.html?class=1;type=allround">Test matches player</a></td>
            </tr></table>
        "#;
        assert_eq!(
            parse_search_page(html, BASE),
            PlayerMatch::Found {
                url: s!("http://stats.example/ci/engine/player/253802.html?class=11;type=allround;template=results;"),
                test_only: false,
            }
        );
    }

    #[test]
    fn test_only_fallback() {
        let html = r#"<a href="/ci/engine/player/1.html?class=1;type=allround">Test matches player</a>"#;
        match parse_search_page(html, BASE) {
            PlayerMatch::Found { test_only, url } => {
                assert!(test_only);
                assert!(url.ends_with("class=1;type=allround;template=results;"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn several_hits_list_candidates() {
        let html = r#"
            <tr><td><span style='white-space: nowrap'>Mark Waugh</span></td>
                <td><span style='white-space: nowrap'>(Australia)</span></td>
                <td><a href="/p/1.html">Combined Test, ODI and T20I player</a></td></tr>
            <tr><td><span style='white-space: nowrap'>Steve Waugh</span></td>
                <td><span style='white-space: nowrap'>(Australia)</span></td>
                <td><a href="/p/2.html">Combined Test, ODI and T20I player</a></td></tr>
        "#;
        assert_eq!(
            parse_search_page(html, BASE),
            PlayerMatch::Ambiguous(vec![s!("Mark Waugh"), s!("Steve Waugh")])
        );
    }

    #[test]
    fn nothing_found() {
        assert_eq!(parse_search_page("<p>No matching players</p>", BASE), PlayerMatch::NotFound);
    }
}
