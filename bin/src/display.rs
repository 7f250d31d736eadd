//! Display utilities and output formatting for the cpc CLI.

use anyhow::Result;
use cpc_lib::prelude::*;
use serde::Serialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Output {
    Table,
    Json,
}

impl Output {
    pub(crate) const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Table }
    }
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Shorten a string to `max` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

/// Format the constituency column of a parliamentarian row.
pub(crate) fn circonscription(p: &Parliamentarian) -> String {
    match (&p.nom_circo, p.num_circo) {
        (Some(nom), Some(num)) => format!("{nom} ({num})"),
        (Some(nom), None) => nom.clone(),
        _ => "-".to_string(),
    }
}

/// Print a table of parliamentarians.
pub(crate) fn print_parliamentarians(rows: &[Parliamentarian]) {
    println!(
        "{:<32} {:<28} {:<8} {:<30}",
        "SLUG", "NAME", "GROUP", "CIRCONSCRIPTION"
    );
    println!("{}", "-".repeat(100));

    for p in rows {
        println!(
            "{:<32} {:<28} {:<8} {:<30}",
            truncate(&p.slug, 32),
            truncate(&p.display_name(), 28),
            p.groupe_sigle.as_deref().unwrap_or("-"),
            truncate(&circonscription(p), 30)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Mélenchon", 20), "Mélenchon");
        assert_eq!(truncate("Jean-François Copé", 10), "Jean-Fr...");
    }

    #[test]
    fn test_circonscription() {
        let mut p = Parliamentarian::new("nadine-morano", "Nadine Morano");
        assert_eq!(circonscription(&p), "-");
        p.nom_circo = Some("Meurthe-et-Moselle".into());
        p.num_circo = Some(5);
        assert_eq!(circonscription(&p), "Meurthe-et-Moselle (5)");
    }
}
