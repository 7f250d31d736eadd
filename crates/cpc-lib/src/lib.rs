//! Rust client library for the Regards Citoyens parliamentary APIs
//! (nosdeputes.fr and nossenateurs.fr).
//!
//! This is a facade crate that re-exports functionality from the cpc
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use cpc_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new(ParliamentType::Depute, Legislature::L2017_2022)?;
//!     let api = CpcApi::new(config)?;
//!
//!     for deputy in api.search_parliamentarians("Melenchon").await? {
//!         let votes = deputy.votes(&api).await?;
//!         println!("{deputy}: {} votes", votes.len());
//!
//!         let portrait = api.picture(&deputy.slug, 120).await?;
//!         println!("{}x{}", portrait.width(), portrait.height());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/regardscitoyens/cpc-api/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use cpc_types::*;

// Re-export the HTTP facade
#[cfg(feature = "fetch")]
pub use cpc_fetch::{
    CpcApi, ParliamentApi, ParliamentarianExt, SearchField, SearchMatch, SearchQuery,
    decode_picture, search, url,
};

#[cfg(feature = "test-utils")]
pub use cpc_fetch::mock;

/// Prelude module for convenient imports.
///
/// ```
/// use cpc_lib::prelude::*;
/// ```
pub mod prelude {
    pub use cpc_types::{
        Balloting, BallotingIndex, ClientConfig, ConfigurationError, CpcError, EntityKind,
        Legislature, ParliamentType, Parliamentarian, Picture, Position, RemoteError, Result,
        SearchHit, Synthese, SyntheseEntry, SyntheseMonth, Vote,
    };

    #[cfg(feature = "fetch")]
    pub use cpc_fetch::{CpcApi, ParliamentApi, ParliamentarianExt, SearchField, SearchQuery};
}
