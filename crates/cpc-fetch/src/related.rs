//! Relationship accessors on returned records.

use async_trait::async_trait;
use cpc_types::{Parliamentarian, Result, Vote};

use crate::ParliamentApi;

/// Follows a parliamentarian's references through an API client.
///
/// ```ignore
/// use cpc_fetch::{CpcApi, ParliamentApi, ParliamentarianExt};
///
/// let api = CpcApi::with_defaults()?;
/// for deputy in api.search_parliamentarians("Melenchon").await? {
///     let votes = deputy.votes(&api).await?;
///     println!("{deputy}: {} votes", votes.len());
/// }
/// ```
#[async_trait]
pub trait ParliamentarianExt {
    /// Fetches this parliamentarian's votes.
    async fn votes(&self, api: &dyn ParliamentApi) -> Result<Vec<Vote>>;

    /// Fetches the full record, e.g. to complete an entry from a list.
    async fn details(&self, api: &dyn ParliamentApi) -> Result<Parliamentarian>;
}

#[async_trait]
impl ParliamentarianExt for Parliamentarian {
    async fn votes(&self, api: &dyn ParliamentApi) -> Result<Vec<Vote>> {
        api.parliamentarian_votes(&self.slug).await
    }

    async fn details(&self, api: &dyn ParliamentApi) -> Result<Parliamentarian> {
        api.parliamentarian(&self.slug).await
    }
}
