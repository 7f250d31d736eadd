//! Full-text search command implementation.

use crate::display::{Output, print_json};
use anyhow::{Context, Result};
use cpc_lib::prelude::*;

/// Run a full-text search and print the hits of one result page.
pub(crate) async fn find(api: &CpcApi, query: &str, page: u32, output: Output) -> Result<()> {
    let hits = api
        .full_text_search(query, page)
        .await
        .with_context(|| format!("Full-text search for '{query}' failed"))?;

    if output == Output::Json {
        return print_json(&hits);
    }

    if hits.is_empty() {
        println!("No result for '{query}' on page {}.", page.max(1));
        return Ok(());
    }

    for (i, hit) in hits.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for (column, value) in hit.fields() {
            if !value.is_empty() {
                println!("{column:<12} {value}");
            }
        }
    }

    println!("\nPage {}: {} results", page.max(1), hits.len());
    Ok(())
}
