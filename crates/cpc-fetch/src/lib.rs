//! HTTP client for the nosdeputes.fr / nossenateurs.fr API.
//!
//! This crate provides the request/response layer:
//!
//! - [`url`] - Endpoint URL construction
//! - [`ParliamentApi`] - The facade operations, implemented over HTTP by [`CpcApi`]
//! - [`ParliamentarianExt`] - Relationship accessors on returned records
//! - [`search::rank`] - Fuzzy name matching
//! - [`decode_picture`] - Portrait decoding
//! - [`decode_list`], [`decode_member`], [`parse_search_csv`] - Body decoding
//!
//! Every call issues a single GET and surfaces failures immediately; there
//! is no retry and no caching.

#![doc(issue_tracker_base_url = "https://github.com/regardscitoyens/cpc-api/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod decode;
mod picture;
mod related;
pub mod search;
pub mod url;

pub use client::{CpcApi, ParliamentApi};
pub use decode::{CSV_DELIMITER, decode_list, decode_member, parse_search_csv};
pub use picture::decode_picture;
pub use related::ParliamentarianExt;
pub use search::{SearchField, SearchMatch, SearchQuery};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
