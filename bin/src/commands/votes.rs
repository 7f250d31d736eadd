//! Votes command implementation.
//!
//! Fetches the votes of several parliamentarians concurrently and prints them
//! grouped by balloting, one column per parliamentarian.

use crate::display::{Output, print_json, truncate};
use anyhow::{Context, Result, bail};
use cpc_lib::prelude::*;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;

/// Fetch and print the votes of the given parliamentarians.
pub(crate) async fn votes(
    api: &CpcApi,
    slugs: &[String],
    concurrency: usize,
    output: Output,
    quiet: bool,
) -> Result<()> {
    if concurrency == 0 {
        bail!("Concurrency must be at least 1");
    }

    let progress = if quiet || slugs.len() < 2 {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(slugs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .context("Invalid progress template")?
                .progress_chars("#>-"),
        );
        pb
    };

    let results: Vec<(String, Result<Vec<Vote>>)> = futures::stream::iter(slugs)
        .map(|slug| {
            let progress = progress.clone();
            async move {
                let result = api
                    .parliamentarian_votes(slug)
                    .await
                    .with_context(|| format!("Failed to fetch votes of '{slug}'"));
                progress.set_message(slug.clone());
                progress.inc(1);
                (slug.clone(), result)
            }
        })
        .buffered(concurrency)
        .collect()
        .await;
    progress.finish_and_clear();

    let mut by_slug = BTreeMap::new();
    for (slug, result) in results {
        by_slug.insert(slug, result?);
    }

    if output == Output::Json {
        return print_json(&by_slug);
    }

    let index = BallotingIndex::from_votes(by_slug.values().flatten());
    if index.is_empty() {
        println!("No votes recorded.");
        return Ok(());
    }

    print_index(&index, slugs);
    Ok(())
}

fn print_index(index: &BallotingIndex, slugs: &[String]) {
    let header: Vec<String> = slugs.iter().map(|s| format!("{:<12}", truncate(s, 12))).collect();
    println!(
        "{:>6} {:<10} {:<50} {}",
        "NUM",
        "DATE",
        "TITLE",
        header.join(" ")
    );
    println!("{}", "-".repeat(68 + 13 * slugs.len()));

    for balloting in index.ballotings() {
        let positions: Vec<String> = slugs
            .iter()
            .map(|slug| {
                let position = index
                    .position(balloting.numero, slug)
                    .map_or("-", Position::as_str);
                format!("{position:<12}")
            })
            .collect();
        println!(
            "{:>6} {:<10} {:<50} {}",
            balloting.numero,
            balloting.date.as_deref().unwrap_or("-"),
            truncate(&balloting.titre, 50),
            positions.join(" ")
        );
    }

    println!("\nTotal: {} ballotings", index.len());
}
