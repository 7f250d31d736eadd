//! Endpoint URL construction.
//!
//! Every endpoint hangs off [`ClientConfig::base_url`], i.e.
//! `https://{legislature|www}.nos{deputes|senateurs}.fr`.

use cpc_types::{ClientConfig, SyntheseMonth};
use urlencoding::encode;

/// Response format suffix requested from the API.
pub const FORMAT: &str = "json";

/// Synthesis endpoint: `{base}/synthese/{YYYYMM|data}/json`.
///
/// # Example
///
/// ```
/// use cpc_fetch::url::synthese_url;
/// use cpc_types::ClientConfig;
///
/// let config = ClientConfig::default();
/// let month = "201907".parse().unwrap();
/// assert_eq!(
///     synthese_url(&config, Some(month)),
///     "https://www.nosdeputes.fr/synthese/201907/json"
/// );
/// ```
#[must_use]
pub fn synthese_url(config: &ClientConfig, month: Option<SyntheseMonth>) -> String {
    let period = month.map_or_else(|| "data".to_string(), |m| m.to_string());
    format!("{}/synthese/{period}/{FORMAT}", config.base_url())
}

/// Parliamentarian list: `{base}/{ptype}s/json`, or `{base}/{ptype}s/enmandat/json`
/// for sitting members only.
#[must_use]
pub fn parliamentarians_url(config: &ClientConfig, active_only: bool) -> String {
    let plural = config.ptype().plural();
    if active_only {
        format!("{}/{plural}/enmandat/{FORMAT}", config.base_url())
    } else {
        format!("{}/{plural}/{FORMAT}", config.base_url())
    }
}

/// Parliamentarian detail: `{base}/{slug}/json`.
#[must_use]
pub fn parliamentarian_url(config: &ClientConfig, slug: &str) -> String {
    format!("{}/{}/{FORMAT}", config.base_url(), encode(slug))
}

/// Votes of a parliamentarian: `{base}/{slug}/votes/json`.
#[must_use]
pub fn votes_url(config: &ClientConfig, slug: &str) -> String {
    format!("{}/{}/votes/{FORMAT}", config.base_url(), encode(slug))
}

/// Portrait: `{base}/{ptype}/photo/{slug}/{pixels}`.
#[must_use]
pub fn picture_url(config: &ClientConfig, slug: &str, pixels: u32) -> String {
    format!(
        "{}/{}/photo/{}/{pixels}",
        config.base_url(),
        config.ptype(),
        encode(slug)
    )
}

/// Full-text search: `{base}/recherche/{query}?page={page}&format=csv`.
///
/// The JSON flavour of this endpoint does not emit valid JSON, so CSV is
/// requested instead.
#[must_use]
pub fn full_text_search_url(config: &ClientConfig, query: &str, page: u32) -> String {
    format!(
        "{}/recherche/{}?page={page}&format=csv",
        config.base_url(),
        encode(query)
    )
}
