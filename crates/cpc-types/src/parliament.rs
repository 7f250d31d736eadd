//! Parliamentary body and legislature definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ConfigurationError;

/// Parliamentary body a client targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParliamentType {
    /// Assemblée nationale, served by nosdeputes.fr.
    #[default]
    Depute,
    /// Sénat, served by nossenateurs.fr.
    Senateur,
}

impl ParliamentType {
    /// Returns the singular wire name (`depute`, `senateur`).
    ///
    /// This is also the JSON member wrapping each record.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Depute => "depute",
            Self::Senateur => "senateur",
        }
    }

    /// Returns the plural wire name (`deputes`, `senateurs`).
    #[must_use]
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Depute => "deputes",
            Self::Senateur => "senateurs",
        }
    }

    /// Returns true if the given legislature is served for this body.
    ///
    /// nossenateurs.fr only exposes the current term.
    #[must_use]
    pub const fn supports(&self, legislature: Legislature) -> bool {
        match self {
            Self::Depute => true,
            Self::Senateur => matches!(legislature, Legislature::Current),
        }
    }

    /// Returns all parliamentary bodies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Depute, Self::Senateur]
    }
}

impl std::fmt::Display for ParliamentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParliamentType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "depute" | "deputes" | "député" => Ok(Self::Depute),
            "senateur" | "senateurs" | "sénateur" => Ok(Self::Senateur),
            _ => Err(ConfigurationError::UnknownParliamentType(s.to_string())),
        }
    }
}

/// Legislature term, selecting the archive host of the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Legislature {
    /// The sitting legislature (`www` host).
    #[default]
    #[serde(rename = "current")]
    Current,
    /// XIIIe législature.
    #[serde(rename = "2007-2012")]
    L2007_2012,
    /// XIVe législature.
    #[serde(rename = "2012-2017")]
    L2012_2017,
    /// XVe législature.
    #[serde(rename = "2017-2022")]
    L2017_2022,
}

impl Legislature {
    /// Returns the term range (`2017-2022`), or `current`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::L2007_2012 => "2007-2012",
            Self::L2012_2017 => "2012-2017",
            Self::L2017_2022 => "2017-2022",
        }
    }

    /// Returns the host prefix used in the base URL.
    #[must_use]
    pub const fn host_prefix(&self) -> &'static str {
        match self {
            Self::Current => "www",
            other => other.as_str(),
        }
    }

    /// Returns true if the remote service can compute a synthesis over the
    /// whole term.
    ///
    /// The 2012-2017 archive only serves monthly syntheses.
    #[must_use]
    pub const fn has_global_synthese(&self) -> bool {
        !matches!(self, Self::L2012_2017)
    }

    /// Returns all legislatures.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Current,
            Self::L2007_2012,
            Self::L2012_2017,
            Self::L2017_2022,
        ]
    }
}

impl std::fmt::Display for Legislature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Legislature {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "current" | "www" => Ok(Self::Current),
            "2007-2012" | "13" | "xiii" => Ok(Self::L2007_2012),
            "2012-2017" | "14" | "xiv" => Ok(Self::L2012_2017),
            "2017-2022" | "15" | "xv" => Ok(Self::L2017_2022),
            _ => Err(ConfigurationError::UnknownLegislature(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parliament_type_parse() {
        assert_eq!(
            "depute".parse::<ParliamentType>().unwrap(),
            ParliamentType::Depute
        );
        assert_eq!(
            "Senateur".parse::<ParliamentType>().unwrap(),
            ParliamentType::Senateur
        );
        assert!(matches!(
            "maire".parse::<ParliamentType>(),
            Err(ConfigurationError::UnknownParliamentType(_))
        ));
    }

    #[test]
    fn test_legislature_parse() {
        assert_eq!(
            "2017-2022".parse::<Legislature>().unwrap(),
            Legislature::L2017_2022
        );
        assert_eq!("".parse::<Legislature>().unwrap(), Legislature::Current);
        assert!(matches!(
            "2022-2027".parse::<Legislature>(),
            Err(ConfigurationError::UnknownLegislature(_))
        ));
    }

    #[test]
    fn test_host_prefix() {
        assert_eq!(Legislature::Current.host_prefix(), "www");
        assert_eq!(Legislature::L2007_2012.host_prefix(), "2007-2012");
    }

    #[test]
    fn test_senate_only_current() {
        for legislature in Legislature::all() {
            assert!(ParliamentType::Depute.supports(*legislature));
        }
        assert!(ParliamentType::Senateur.supports(Legislature::Current));
        assert!(!ParliamentType::Senateur.supports(Legislature::L2017_2022));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Legislature::L2012_2017).unwrap();
        assert_eq!(json, "\"2012-2017\"");
        let ptype: ParliamentType = serde_json::from_str("\"senateur\"").unwrap();
        assert_eq!(ptype, ParliamentType::Senateur);
    }
}
