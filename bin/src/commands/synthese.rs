//! Synthese command implementation.

use crate::display::{Output, print_json, truncate};
use anyhow::{Context, Result};
use cpc_lib::prelude::*;

/// Activity counters shown in the table, with their column headers.
const COLUMNS: &[(&str, &str)] = &[
    ("semaines_presence", "WEEKS"),
    ("commission_presences", "COMM"),
    ("hemicycle_interventions", "SPEECH"),
    ("amendements_proposes", "AMEND"),
    ("rapports", "REPORTS"),
    ("questions_ecrites", "QUEST"),
];

/// Print the activity synthesis of the legislature or of one month.
pub(crate) async fn synthese(
    api: &CpcApi,
    month: Option<SyntheseMonth>,
    output: Output,
) -> Result<()> {
    let synthese = api.synthese(month).await.with_context(|| match month {
        Some(m) => format!("Failed to fetch the synthesis of {m}"),
        None => format!("Failed to fetch the synthesis of {}", api.config().legislature()),
    })?;

    if output == Output::Json {
        return print_json(&synthese.entries);
    }

    if synthese.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }

    let headers: Vec<String> = COLUMNS.iter().map(|(_, h)| format!("{h:>8}")).collect();
    println!("{:<32} {:<8} {}", "NAME", "GROUP", headers.join(""));
    println!("{}", "-".repeat(42 + 8 * COLUMNS.len()));

    for entry in &synthese.entries {
        let counters: Vec<String> = COLUMNS
            .iter()
            .map(|(key, _)| match entry.counter(key) {
                Some(n) => format!("{n:>8}"),
                None => format!("{:>8}", "-"),
            })
            .collect();
        println!(
            "{:<32} {:<8} {}",
            truncate(&entry.nom, 32),
            entry.groupe_sigle.as_deref().unwrap_or("-"),
            counters.join("")
        );
    }

    println!("\nTotal: {} entries", synthese.len());
    Ok(())
}
