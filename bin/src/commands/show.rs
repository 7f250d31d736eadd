//! Show command implementation.
//!
//! Looks a parliamentarian up by slug. When the slug is unknown the argument
//! is treated as a name: a single match is shown directly, several matches
//! are offered in an interactive picker.

use crate::display::{Output, circonscription, print_json};
use anyhow::{Context, Result, bail};
use cpc_lib::prelude::*;
use inquire::Select;
use serde_json::Value;
use std::io::IsTerminal;

/// Show the full record of a parliamentarian.
pub(crate) async fn show(api: &CpcApi, slug: &str, output: Output) -> Result<()> {
    let parliamentarian = match api.parliamentarian(slug).await {
        Ok(p) => p,
        Err(e) if e.is_not_found() => {
            tracing::info!(slug, "unknown slug, searching by name");
            let chosen = pick_by_name(api, slug).await?;
            api.parliamentarian(&chosen)
                .await
                .with_context(|| format!("Failed to fetch '{chosen}'"))?
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to fetch '{slug}'")),
    };

    if output == Output::Json {
        return print_json(&parliamentarian);
    }

    print_record(&parliamentarian);
    Ok(())
}

async fn pick_by_name(api: &CpcApi, name: &str) -> Result<String> {
    let matches = api
        .search_parliamentarians(name)
        .await
        .with_context(|| format!("Search for '{name}' failed"))?;

    match matches.as_slice() {
        [] => bail!("No {} matches '{name}'", api.config().ptype()),
        [only] => Ok(only.slug.clone()),
        _ if !std::io::stdin().is_terminal() => {
            let slugs: Vec<_> = matches.iter().map(|p| p.slug.as_str()).collect();
            bail!("'{name}' is ambiguous: {}", slugs.join(", "))
        }
        _ => {
            let options: Vec<String> = matches
                .iter()
                .map(|p| format!("{} | {p}", p.slug))
                .collect();

            let selection = Select::new(&format!("Several matches for '{name}':"), options)
                .prompt()
                .context("Selection cancelled")?;

            // The slug is the first part before " | "
            let slug = selection
                .split(" | ")
                .next()
                .context("Failed to parse selection")?
                .to_string();
            Ok(slug)
        }
    }
}

fn print_record(p: &Parliamentarian) {
    println!("{}", p.display_name());
    println!("{}", "=".repeat(p.display_name().chars().count()));
    println!();
    println!("Slug:            {}", p.slug);
    if let Some(id) = p.id {
        println!("Id:              {id}");
    }
    if let Some(groupe) = &p.groupe_sigle {
        println!("Group:           {groupe}");
    }
    println!("Circonscription: {}", circonscription(p));
    if let Some(start) = p.mandate_start() {
        println!("Mandate start:   {start}");
    }
    match p.mandate_end() {
        Some(end) => println!("Mandate end:     {end}"),
        None => println!("Mandate end:     (sitting)"),
    }

    let scalars: Vec<_> = p
        .extra
        .iter()
        .filter_map(|(key, value)| scalar_text(value).map(|text| (key, text)))
        .collect();
    if !scalars.is_empty() {
        println!();
        for (key, text) in scalars {
            println!("{key:<16} {text}");
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
