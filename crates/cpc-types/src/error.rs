//! Error types for cpc.

use thiserror::Error;

use crate::{Legislature, ParliamentType};

/// Result type alias for cpc operations.
pub type Result<T> = std::result::Result<T, CpcError>;

/// Errors surfaced by the API client.
#[derive(Error, Debug)]
pub enum CpcError {
    /// The client was configured with unsupported parameters.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The remote service could not be reached or answered with garbage.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The remote service reported that the entity does not exist.
    #[error("{kind} not found: {key}")]
    NotFound {
        /// What was looked up.
        kind: EntityKind,
        /// The lookup key (usually a slug).
        key: String,
    },
}

impl CpcError {
    /// Creates a [`CpcError::NotFound`] for the given entity kind and key.
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Returns true if this is a [`CpcError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a [`CpcError::Configuration`].
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns true if this is a [`CpcError::Remote`].
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

/// Kind of entity a [`CpcError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A deputy or senator.
    Parliamentarian,
    /// A portrait.
    Picture,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parliamentarian => f.write_str("Parliamentarian"),
            Self::Picture => f.write_str("Picture"),
        }
    }
}

/// Invalid client configuration, detected before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Unknown parliamentarian type string.
    #[error("Unknown parliamentarian type '{0}', expected 'depute' or 'senateur'")]
    UnknownParliamentType(String),

    /// Unknown legislature string.
    #[error(
        "Unknown legislature '{0}', expected one of: current, 2007-2012, 2012-2017, 2017-2022"
    )]
    UnknownLegislature(String),

    /// The legislature is not served for this parliamentarian type.
    #[error("Legislature {legislature} is not available for {ptype}s")]
    UnsupportedLegislature {
        /// The configured parliamentarian type.
        ptype: ParliamentType,
        /// The rejected legislature.
        legislature: Legislature,
    },

    /// The remote service cannot compute a whole-legislature synthesis here.
    #[error("Global synthesis is not available for legislature {0}, request a month instead")]
    GlobalSyntheseUnavailable(Legislature),

    /// Month is not in `YYYYMM` form.
    #[error("Invalid month '{0}', expected YYYYMM")]
    InvalidMonth(String),

    /// A portrait cannot be requested at this resolution.
    #[error("Invalid picture resolution {0}, expected at least 1 pixel")]
    InvalidResolution(u32),

    /// Base URL override is unusable.
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Transport or decoding failure while talking to the remote service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status.
    #[error("{url} answered HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Response body is not the expected JSON.
    #[error("Malformed JSON from {url}: {message}")]
    Json {
        /// Requested URL.
        url: String,
        /// Decoder message.
        message: String,
    },

    /// Response body is not the expected CSV.
    #[error("Malformed CSV from {url}: {message}")]
    Csv {
        /// Requested URL.
        url: String,
        /// Decoder message.
        message: String,
    },

    /// Response body could not be decoded as an image.
    #[error("Image decode error: {0}")]
    Image(String),

    /// The portrait was not served at the requested resolution.
    #[error("Picture is {width}x{height}, requested {requested}x{requested}")]
    Resolution {
        /// Requested edge length in pixels.
        requested: u32,
        /// Decoded width.
        width: u32,
        /// Decoded height.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = CpcError::not_found(EntityKind::Parliamentarian, "nobody");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Parliamentarian not found: nobody");

        let err: CpcError = ConfigurationError::InvalidMonth("2020".into()).into();
        assert!(err.is_configuration());
        assert!(!err.is_remote());

        let err: CpcError = RemoteError::Status {
            url: "https://www.nosdeputes.fr/synthese/data/json".into(),
            status: 500,
        }
        .into();
        assert!(err.is_remote());
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_unsupported_legislature_message() {
        let err = ConfigurationError::UnsupportedLegislature {
            ptype: ParliamentType::Senateur,
            legislature: Legislature::L2017_2022,
        };
        assert_eq!(
            err.to_string(),
            "Legislature 2017-2022 is not available for senateurs"
        );
    }
}
