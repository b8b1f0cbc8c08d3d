// src/runner.rs
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::consts::{ALLROUND_CLASS_TOKEN, ALLROUND_TYPE_TOKEN, TEST_CLASS_TOKEN},
    config::options::FetchOptions,
    core::net::PageSource,
    core::sanitize::title_case,
    decode::{decode, DecodedTable},
    error::LookupError,
    progress::{Progress, Stage},
    query::{compile, encode_params, CompiledQuery, Param},
    specs::career_averages::extract_tokens,
    specs::player_search::{parse_search_page, search_url, PlayerMatch},
};

/// Everything a front end needs to show one answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    /// Player name as typed, title-cased.
    pub player_name: String,
    /// Results page the figures were read from.
    pub url: String,
    pub stats: DecodedTable,
}

/// Full lookup: request text → compiled query → player page → results page →
/// decoded table.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn lookup(
    request: &str,
    source: &dyn PageSource,
    fetch: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<StatsReport, LookupError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::COUNT);
    }

    let result = run_stages(request, source, fetch, &mut |stage: Stage| {
        if let Some(p) = progress.as_deref_mut() {
            p.stage_done(stage);
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        if let Err(e) = &result {
            p.log(&e.to_string());
        }
        p.finish();
    }
    result
}

fn run_stages(
    request: &str,
    source: &dyn PageSource,
    fetch: &FetchOptions,
    report: &mut dyn FnMut(Stage),
) -> Result<StatsReport, LookupError> {
    let query = compile(request)?;
    report(Stage::Compiled);

    let search_page = source.get(&search_url(&fetch.base_url, &query.player_name))?;
    let (player_url, test_only) = match parse_search_page(&search_page, &fetch.base_url) {
        PlayerMatch::Found { url, test_only } => (url, test_only),
        PlayerMatch::Ambiguous(candidates) => {
            return Err(LookupError::AmbiguousPlayer { name: query.player_name, candidates });
        }
        PlayerMatch::NotFound => return Err(LookupError::PlayerNotFound(query.player_name)),
    };
    report(Stage::PlayerResolved);

    let url = results_url(&player_url, test_only, &query);
    debug!(%url, test_only, "results url");
    let results_page = source.get(&url)?;
    report(Stage::ResultsFetched);

    let tokens = extract_tokens(&results_page)
        .ok_or_else(|| LookupError::MissingCareerAverages(url.clone()))?;
    let stats = decode(&tokens, query.is_allround)?;
    report(Stage::Decoded);

    info!(
        player = %query.player_name,
        categories = stats.table.primary().len(),
        dropped = stats.dropped,
        "lookup done"
    );
    Ok(StatsReport {
        player_name: title_case(&query.player_name),
        url,
        stats,
    })
}

/// Results page address for a resolved player.
///
/// - The player link carries its own default class (`class=11;`, or `class=1;`
///   for Test-only players); it is removed so the query's class wins.
/// - A `type` override replaces the link's `type=allround;`. On an allround
///   query with the default class, the class is left out too so the type
///   stands alone. A class typed with `format` is always sent.
/// - Test-only players never get `class=11`; it becomes `class=1`.
pub fn results_url(player_url: &str, test_only: bool, query: &CompiledQuery) -> String {
    let own_class = if test_only { TEST_CLASS_TOKEN } else { ALLROUND_CLASS_TOKEN };
    let mut url = player_url.replace(own_class, "");

    if query.is_allround && query.has_type_override && !query.class_explicit {
        url.push_str(&encode_params(&query.params.without(Param::Class)));
    } else {
        url.push_str(&query.encoded);
    }

    if query.has_type_override {
        url = url.replace(ALLROUND_TYPE_TOKEN, "");
    }
    if test_only {
        url = url.replace("class=11", "class=1");
    }
    url
}
