//! CLI command implementations.

pub(crate) mod find;
pub(crate) mod list;
pub(crate) mod picture;
pub(crate) mod search;
pub(crate) mod show;
pub(crate) mod synthese;
pub(crate) mod votes;
