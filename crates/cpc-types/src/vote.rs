//! Votes and ballotings.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_aux::field_attributes::{
    deserialize_bool_from_anything, deserialize_number_from_string,
    deserialize_option_number_from_string,
};
use serde_json::Value;

/// A parliamentarian's position in a balloting.
///
/// Values this client does not know about are kept verbatim in
/// [`Position::Other`] and serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    /// For.
    Pour,
    /// Against.
    Contre,
    /// Abstained.
    Abstention,
    /// Present but not voting (e.g. presiding the session).
    NonVotant,
    /// Any other value sent by the API.
    Other(String),
}

impl Position {
    /// Returns the wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pour => "pour",
            Self::Contre => "contre",
            Self::Abstention => "abstention",
            Self::NonVotant => "nonVotant",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Position {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pour" => Self::Pour,
            "contre" => Self::Contre,
            "abstention" => Self::Abstention,
            "nonVotant" => Self::NonVotant,
            _ => Self::Other(raw),
        }
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        match position {
            Position::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded vote event (scrutin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balloting {
    /// Balloting number, unique within a legislature.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub numero: u64,
    /// Date of the sitting, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Subject of the vote.
    #[serde(default)]
    pub titre: String,
    /// Outcome (`adopté`, `rejeté`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Balloting type (`ordinaire`, `solennel`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Number of voters.
    #[serde(
        default,
        deserialize_with = "deserialize_option_number_from_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub nombre_votants: Option<u32>,
    /// Votes for.
    #[serde(
        default,
        deserialize_with = "deserialize_option_number_from_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub nombre_pours: Option<u32>,
    /// Votes against.
    #[serde(
        default,
        deserialize_with = "deserialize_option_number_from_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub nombre_contres: Option<u32>,
    /// Abstentions.
    #[serde(
        default,
        deserialize_with = "deserialize_option_number_from_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub nombre_abstentions: Option<u32>,
    /// Every other field returned by the API.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Balloting {
    /// Returns the sitting date, if present and well-formed.
    #[must_use]
    pub fn sitting_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Returns true if the outcome is `adopté`.
    #[must_use]
    pub fn is_adopted(&self) -> bool {
        self.sort
            .as_deref()
            .is_some_and(|s| s.to_lowercase().starts_with("adopt"))
    }
}

impl std::fmt::Display for Balloting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const MAX_TITLE_CHARS: usize = 50;
        let title: String = self.titre.chars().take(MAX_TITLE_CHARS).collect();
        write!(f, "({}) '{}'", self.numero, title)?;
        if let Some(sort) = &self.sort {
            write!(f, " [{sort}]")?;
        }
        Ok(())
    }
}

/// One parliamentarian's vote in one balloting.
///
/// The parliamentarian is referenced by slug and the balloting by number;
/// [`Vote::balloting`] is the snapshot the API embedded in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    /// The balloting this vote belongs to.
    #[serde(rename = "scrutin")]
    pub balloting: Balloting,
    /// Slug of the voter.
    pub parlementaire_slug: String,
    /// Position taken.
    pub position: Position,
    /// Majority position of the voter's group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_groupe: Option<Position>,
    /// True if cast on behalf of another member.
    ///
    /// Accepts booleans, `0`/`1` and their string forms; `null` reads as false.
    #[serde(default, deserialize_with = "deserialize_delegation")]
    pub par_delegation: bool,
    /// Every other field returned by the API.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Vote {
    /// Returns the balloting number.
    #[must_use]
    pub const fn balloting_number(&self) -> u64 {
        self.balloting.numero
    }

    /// Returns the `(balloting number, slug)` pair identifying this vote.
    #[must_use]
    pub fn key(&self) -> (u64, &str) {
        (self.balloting.numero, &self.parlementaire_slug)
    }

    /// Returns true if the voter departed from their group's position.
    #[must_use]
    pub fn is_dissent(&self) -> bool {
        self.position_groupe.as_ref().is_some_and(|groupe| {
            *groupe != self.position && !matches!(groupe, Position::Other(_))
        })
    }
}

fn deserialize_delegation<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Flag(#[serde(deserialize_with = "deserialize_bool_from_anything")] bool);

    Ok(Option::<Flag>::deserialize(deserializer)?.is_some_and(|flag| flag.0))
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}) {} [{}]",
            self.balloting.numero, self.parlementaire_slug, self.position
        )
    }
}

/// Votes grouped by balloting number.
///
/// Built by callers from the votes of one or more parliamentarians; each
/// balloting is stored once, with the positions of every voter seen so far.
#[derive(Debug, Clone, Default)]
pub struct BallotingIndex {
    ballotings: BTreeMap<u64, IndexedBalloting>,
}

#[derive(Debug, Clone)]
struct IndexedBalloting {
    balloting: Balloting,
    positions: BTreeMap<String, Position>,
}

impl BallotingIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from a set of votes.
    #[must_use]
    pub fn from_votes<'a>(votes: impl IntoIterator<Item = &'a Vote>) -> Self {
        let mut index = Self::new();
        index.extend(votes);
        index
    }

    /// Records a vote. The first snapshot seen for a balloting is kept.
    pub fn insert(&mut self, vote: &Vote) {
        let entry = self
            .ballotings
            .entry(vote.balloting.numero)
            .or_insert_with(|| IndexedBalloting {
                balloting: vote.balloting.clone(),
                positions: BTreeMap::new(),
            });
        entry
            .positions
            .insert(vote.parlementaire_slug.clone(), vote.position.clone());
    }

    /// Records several votes.
    pub fn extend<'a>(&mut self, votes: impl IntoIterator<Item = &'a Vote>) {
        for vote in votes {
            self.insert(vote);
        }
    }

    /// Looks up a balloting by number.
    #[must_use]
    pub fn get(&self, numero: u64) -> Option<&Balloting> {
        self.ballotings.get(&numero).map(|b| &b.balloting)
    }

    /// Returns the position of a parliamentarian in a balloting.
    #[must_use]
    pub fn position(&self, numero: u64, slug: &str) -> Option<&Position> {
        self.ballotings.get(&numero)?.positions.get(slug)
    }

    /// Returns every `(slug, position)` recorded for a balloting, by slug.
    pub fn positions(&self, numero: u64) -> impl Iterator<Item = (&str, &Position)> {
        self.ballotings
            .get(&numero)
            .into_iter()
            .flat_map(|b| b.positions.iter().map(|(slug, pos)| (slug.as_str(), pos)))
    }

    /// Returns all ballotings in number order.
    pub fn ballotings(&self) -> impl Iterator<Item = &Balloting> {
        self.ballotings.values().map(|b| &b.balloting)
    }

    /// Returns the number of distinct ballotings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ballotings.len()
    }

    /// Returns true if no vote has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ballotings.is_empty()
    }
}
