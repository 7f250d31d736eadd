//! Parliamentarian records.

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use serde_json::Value;

/// A deputy or senator, as returned by the remote API.
///
/// Only the fields shared by both bodies are typed; everything else the API
/// returns is kept in [`Parliamentarian::extra`] so schema additions survive
/// a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parliamentarian {
    /// Numeric identifier on the remote service.
    #[serde(
        default,
        deserialize_with = "deserialize_option_number_from_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u64>,
    /// Unique lookup key (e.g. `jean-luc-melenchon`).
    pub slug: String,
    /// Full display name.
    #[serde(default)]
    pub nom: String,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom_de_famille: Option<String>,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    /// `H` or `F`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexe: Option<String>,
    /// Parliamentary group acronym.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groupe_sigle: Option<String>,
    /// Constituency (deputies) or département (senators) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom_circo: Option<String>,
    /// Constituency number.
    #[serde(
        default,
        deserialize_with = "deserialize_option_number_from_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_circo: Option<u32>,
    /// Mandate start, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandat_debut: Option<String>,
    /// Mandate end, `YYYY-MM-DD`; absent while sitting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandat_fin: Option<String>,
    /// Every other field returned by the API.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Parliamentarian {
    /// Creates a minimal record with only a slug and a name.
    #[must_use]
    pub fn new(slug: impl Into<String>, nom: impl Into<String>) -> Self {
        Self {
            id: None,
            slug: slug.into(),
            nom: nom.into(),
            nom_de_famille: None,
            prenom: None,
            sexe: None,
            groupe_sigle: None,
            nom_circo: None,
            num_circo: None,
            mandat_debut: None,
            mandat_fin: None,
            extra: BTreeMap::new(),
        }
    }

    /// Returns the best available human-readable name.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        if !self.nom.is_empty() {
            return Cow::Borrowed(&self.nom);
        }
        match (&self.prenom, &self.nom_de_famille) {
            (Some(prenom), Some(famille)) => Cow::Owned(format!("{prenom} {famille}")),
            (None, Some(famille)) => Cow::Borrowed(famille),
            _ => Cow::Borrowed(&self.slug),
        }
    }

    /// Returns the mandate start date, if present and well-formed.
    #[must_use]
    pub fn mandate_start(&self) -> Option<NaiveDate> {
        parse_date(self.mandat_debut.as_deref())
    }

    /// Returns the mandate end date, if present and well-formed.
    #[must_use]
    pub fn mandate_end(&self) -> Option<NaiveDate> {
        parse_date(self.mandat_fin.as_deref())
    }

    /// Returns true if the mandate has no end date.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mandate_end().is_none()
    }

    /// Returns a field from the auxiliary map.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }

    /// Returns a field's text, looking at typed fields first, then `extra`.
    ///
    /// Numbers in `extra` are rendered; arrays and objects are not text.
    #[must_use]
    pub fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "slug" => Some(Cow::Borrowed(&self.slug)),
            "nom" => Some(self.display_name()),
            "nom_de_famille" => self.nom_de_famille.as_deref().map(Cow::Borrowed),
            "prenom" => self.prenom.as_deref().map(Cow::Borrowed),
            "groupe_sigle" => self.groupe_sigle.as_deref().map(Cow::Borrowed),
            "nom_circo" => self.nom_circo.as_deref().map(Cow::Borrowed),
            _ => match self.extra.get(field)? {
                Value::String(s) => Some(Cow::Borrowed(s)),
                Value::Number(n) => Some(Cow::Owned(n.to_string())),
                _ => None,
            },
        }
    }
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

impl std::fmt::Display for Parliamentarian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())?;
        if let Some(groupe) = &self.groupe_sigle {
            write!(f, " [{groupe}]")?;
        }
        if let Some(circo) = &self.nom_circo {
            match self.num_circo {
                Some(num) => write!(f, " {circo} ({num})")?,
                None => write!(f, " {circo}")?,
            }
        }
        Ok(())
    }
}
