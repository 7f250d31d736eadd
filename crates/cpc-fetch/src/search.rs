//! Fuzzy name search over a parliamentarian list.

use cpc_types::Parliamentarian;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Default number of matches returned.
pub const DEFAULT_LIMIT: usize = 5;

/// Record field a search is matched against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchField {
    /// Full name (`nom`).
    #[default]
    Name,
    /// Family name (`nom_de_famille`).
    FamilyName,
    /// Slug.
    Slug,
    /// Any other field, looked up in the record's auxiliary map.
    Other(String),
}

impl SearchField {
    /// Returns the wire name of the field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "nom",
            Self::FamilyName => "nom_de_famille",
            Self::Slug => "slug",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for SearchField {
    fn from(s: &str) -> Self {
        match s {
            "nom" | "name" => Self::Name,
            "nom_de_famille" | "family_name" => Self::FamilyName,
            "slug" => Self::Slug,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A name search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text name fragment.
    pub text: String,
    /// Field matched against.
    pub field: SearchField,
    /// Maximum number of matches.
    pub limit: usize,
    /// Restrict the candidates to sitting members.
    pub active_only: bool,
}

impl SearchQuery {
    /// Creates a query on the full name with the default limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            field: SearchField::Name,
            limit: DEFAULT_LIMIT,
            active_only: false,
        }
    }

    /// Matches against another field.
    #[must_use]
    pub fn field(mut self, field: impl Into<SearchField>) -> Self {
        self.field = field.into();
        self
    }

    /// Sets the maximum number of matches.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Restricts candidates to sitting members.
    #[must_use]
    pub const fn active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    /// Returns true if the query text has nothing to match on.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A ranked search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    /// The matching record.
    pub parliamentarian: Parliamentarian,
    /// Matcher score, higher is better.
    pub score: i64,
}

/// Lowest normalized Levenshtein similarity accepted as a misspelled word.
const TYPO_SIMILARITY: f64 = 0.75;

/// Shortest query word eligible for typo matching.
const TYPO_MIN_CHARS: usize = 4;

/// Score granted per query character on a typo match, below what an exact
/// subsequence match earns.
const TYPO_SCORE_PER_CHAR: f64 = 10.0;

/// Ranks candidates by fuzzy similarity of `query.field` to `query.text`.
///
/// Both sides are normalized first: case, French diacritics, hyphens,
/// apostrophes and runs of whitespace are folded, so `"Jean Luc Melenchon"`
/// finds `"Jean-Luc Mélenchon"`. Each query word is scored on its own and
/// the scores are summed. A word that is not a subsequence of the field may
/// still match a single field word with a small misspelling (`"Melanchon"`).
///
/// Candidates matching no query word are dropped; equal scores keep the
/// input order. A blank query matches nothing.
#[must_use]
pub fn rank(candidates: Vec<Parliamentarian>, query: &SearchQuery) -> Vec<SearchMatch> {
    if query.is_blank() || query.limit == 0 {
        return Vec::new();
    }

    let normalized_query = normalize(&query.text);
    let words: Vec<&str> = normalized_query.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();

    let mut matches: Vec<SearchMatch> = candidates
        .into_iter()
        .filter_map(|p| {
            let text = normalize(&p.field_text(query.field.as_str())?);
            let score = words
                .iter()
                .filter_map(|word| score_word(&matcher, &text, word))
                .reduce(|total, score| total + score)?;
            Some(SearchMatch {
                parliamentarian: p,
                score,
            })
        })
        .collect();

    // Stable sort keeps the remote order between equal scores.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(query.limit);
    matches
}

/// Scores one normalized query word against a normalized field.
fn score_word(matcher: &SkimMatcherV2, text: &str, word: &str) -> Option<i64> {
    if let Some(score) = matcher.fuzzy_match(text, word) {
        return Some(score);
    }

    let chars = word.chars().count();
    if chars < TYPO_MIN_CHARS {
        return None;
    }
    let similarity = text
        .split(' ')
        .map(|candidate| strsim::normalized_levenshtein(candidate, word))
        .fold(0.0, f64::max);

    (similarity >= TYPO_SIMILARITY)
        .then(|| (similarity * TYPO_SCORE_PER_CHAR * chars as f64).round() as i64)
}

/// Folds diacritics and turns name punctuation into single spaces.
///
/// `"Jean-Luc  Mélenchon"` and `"jean luc melenchon"` normalize to the same
/// string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = fold_diacritics(text)
        .chars()
        .map(|c| match c {
            '-' | '\'' | '\u{2019}' | '.' | ',' | '_' => ' ',
            other => other,
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercases and strips diacritics from Latin letters.
///
/// Covers French names plus the Central European, Romanian, Turkish and
/// Nordic letters found in members' names. Letters outside the table
/// (other scripts, rarer Latin extensions) are kept as they are.
#[must_use]
pub fn fold_diacritics(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => folded.push('a'),
            'ç' | 'ć' | 'č' => folded.push('c'),
            'ď' | 'đ' => folded.push('d'),
            'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => folded.push('e'),
            'ğ' => folded.push('g'),
            'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => folded.push('i'),
            'ł' | 'ľ' | 'ĺ' => folded.push('l'),
            'ñ' | 'ń' | 'ň' => folded.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => folded.push('o'),
            'ř' | 'ŕ' => folded.push('r'),
            'ś' | 'š' | 'ş' | 'ș' => folded.push('s'),
            'ť' | 'ţ' | 'ț' => folded.push('t'),
            'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => folded.push('u'),
            'ý' | 'ÿ' => folded.push('y'),
            'ź' | 'ż' | 'ž' => folded.push('z'),
            'œ' => folded.push_str("oe"),
            'æ' => folded.push_str("ae"),
            'ß' => folded.push_str("ss"),
            _ => folded.push(c),
        }
    }
    folded
}
