//! List command implementation.

use crate::display::{Output, print_json, print_parliamentarians};
use anyhow::{Context, Result};
use cpc_lib::prelude::*;

/// List every parliamentarian of the configured legislature.
pub(crate) async fn list(api: &CpcApi, active: bool, output: Output) -> Result<()> {
    let parliamentarians = api
        .parliamentarians(active)
        .await
        .with_context(|| format!("Failed to list {}", api.config().ptype().plural()))?;

    if output == Output::Json {
        return print_json(&parliamentarians);
    }

    if parliamentarians.is_empty() {
        println!("No {} found.", api.config().ptype().plural());
        return Ok(());
    }

    print_parliamentarians(&parliamentarians);
    println!(
        "\nTotal: {} {}",
        parliamentarians.len(),
        api.config().ptype().plural()
    );
    Ok(())
}
