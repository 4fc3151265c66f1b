//! Store capability trait
//!
//! The query service reads the job collection only through `JobStore`, so
//! tests substitute a double and the MongoDB driver stays contained in this
//! crate.

use async_trait::async_trait;
use jb_core::PageParams;

use crate::filter::JobFilter;
use crate::job::{GroupCount, Job, JobId};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(#[from] mongodb::error::Error),

    #[error("Malformed document: {0}")]
    Decode(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to the job collection.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// One page of postings matching `filter`, newest `postedAt` first.
    async fn find(&self, filter: &JobFilter, page: PageParams) -> StoreResult<Vec<Job>>;

    /// Total number of postings matching `filter`, ignoring pagination.
    async fn count(&self, filter: &JobFilter) -> StoreResult<u64>;

    /// The posting with the given id. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: &JobId) -> StoreResult<Option<Job>>;

    /// Distinct values of a field across the whole collection.
    async fn distinct_values(&self, field: &str) -> StoreResult<Vec<String>>;

    /// Posting count per value of a field, order unspecified.
    async fn group_count(&self, field: &str) -> StoreResult<Vec<GroupCount>>;
}
