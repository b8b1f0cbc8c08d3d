// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://stats.espncricinfo.com";
pub const SEARCH_PATH: &str = "/stats/engine/stats/analysis.html";
pub const SEARCH_TEMPLATE: &str = ";template=analysis";
pub const RESULTS_TEMPLATE: &str = ";template=results;";
pub const TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("cricstat/", env!("CARGO_PKG_VERSION"));

// Player search page
pub const COMBINED_PLAYER_LINK: &str = "Combined Test, ODI and T20I player";
pub const TEST_PLAYER_LINK: &str = "Test matches player";
pub const CANDIDATE_SPAN_STYLE: &str = "white-space: nowrap";

// Results page
pub const CAREER_CAPTION: &str = "Career averages";
pub const BOILERPLATE_LABELS: &[&str] = &[
    "Career averages",
    "",
    "Profile",
    "unfiltered",
    "overall",
    "filtered",
];

// Query tokens rewritten while assembling the results URL
pub const ALLROUND_CLASS_TOKEN: &str = "class=11;";
pub const TEST_CLASS_TOKEN: &str = "class=1;";
pub const ALLROUND_TYPE_TOKEN: &str = "type=allround;";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_FILTER: &str = "cricstat=info";

pub const ABOUT: &str = "cricstat looks up cricket career averages on Statsguru.\n\
Request format: <player>, <keyword> <value>, ...\n\
Keywords: vs|against <country>, in|venue <country>, at home|away|neutral,\n\
          format tests|odis|t20is|all, year <y> or <from>-<to>, type <batting|bowling|...>\n\
Example: cricstat Virat Kohli, vs australia, year 2015-2018";
