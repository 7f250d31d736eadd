//! Core types for the nosdeputes.fr / nossenateurs.fr API client.
//!
//! This crate provides the data structures shared by the cpc crates:
//!
//! - [`ParliamentType`] and [`Legislature`] - Which endpoint family to target
//! - [`ClientConfig`] - Validated, immutable client configuration
//! - [`Parliamentarian`] - A deputy or senator record
//! - [`Vote`], [`Balloting`] and [`BallotingIndex`] - Balloting records
//! - [`Synthese`] - Activity summary for a legislature or a month
//! - [`Picture`] - A decoded portrait
//! - [`SearchHit`] - A row of the full-text search results
//! - [`CpcError`] - The error taxonomy

#![doc(issue_tracker_base_url = "https://github.com/regardscitoyens/cpc-api/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod parliament;
mod parliamentarian;
mod picture;
mod search;
mod synthese;
mod vote;

pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::{ConfigurationError, CpcError, EntityKind, RemoteError, Result};
pub use parliament::{Legislature, ParliamentType};
pub use parliamentarian::Parliamentarian;
pub use picture::Picture;
pub use search::SearchHit;
pub use synthese::{Synthese, SyntheseEntry, SyntheseMonth};
pub use vote::{Balloting, BallotingIndex, Position, Vote};
