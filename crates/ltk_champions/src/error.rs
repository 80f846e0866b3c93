//! Error types for catalog fetching.
//!
//! Only the [`CatalogSource`](crate::CatalogSource) layer and client
//! construction return [`Result<T>`]. The directory itself absorbs these
//! errors into [`LoadStatus`](crate::LoadStatus) and degraded lookup values.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the champion data service.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure, non-success status, or undecodable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a catalog or version list payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The version endpoint answered with an empty list.
    #[error("Version list is empty")]
    EmptyVersionList,

    /// A catalog entry carried a `key` that is not a numeric champion id.
    #[error("Invalid champion key '{key}' for '{id}'")]
    InvalidChampionKey { id: String, key: String },
}
