//! Search command implementation.

use crate::display::{Output, circonscription, print_json, truncate};
use anyhow::{Context, Result};
use cpc_lib::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct ScoredRow<'a> {
    score: i64,
    #[serde(flatten)]
    parliamentarian: &'a Parliamentarian,
}

/// Fuzzy search parliamentarians and print the ranked matches.
pub(crate) async fn search(api: &CpcApi, query: &SearchQuery, output: Output) -> Result<()> {
    let matches = api
        .search_parliamentarians_with(query)
        .await
        .with_context(|| format!("Search for '{}' failed", query.text))?;

    if output == Output::Json {
        let rows: Vec<_> = matches
            .iter()
            .map(|m| ScoredRow {
                score: m.score,
                parliamentarian: &m.parliamentarian,
            })
            .collect();
        return print_json(&rows);
    }

    if matches.is_empty() {
        println!("No match for '{}'.", query.text);
        return Ok(());
    }

    println!(
        "{:>6} {:<32} {:<28} {:<8} {:<24}",
        "SCORE", "SLUG", "NAME", "GROUP", "CIRCONSCRIPTION"
    );
    println!("{}", "-".repeat(100));

    for m in &matches {
        let p = &m.parliamentarian;
        println!(
            "{:>6} {:<32} {:<28} {:<8} {:<24}",
            m.score,
            truncate(&p.slug, 32),
            truncate(&p.display_name(), 28),
            p.groupe_sigle.as_deref().unwrap_or("-"),
            truncate(&circonscription(p), 24)
        );
    }
    Ok(())
}
