//! # jb-db
//!
//! Document-store layer for JobBoard RS.
//!
//! This crate owns the boundary to MongoDB:
//!
//! - Connection management
//! - The `JobStore` capability trait the rest of the service depends on
//! - Translation of listing filters into store queries
//! - The MongoDB-backed `JobStore` implementation
//!
//! ## Example
//!
//! ```ignore
//! use jb_db::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env();
//! let store = Store::connect(&config).await?;
//! let jobs = store.jobs();
//! let job = jobs.find_by_id(&id).await?;
//! ```

pub mod client;
pub mod filter;
pub mod job;
pub mod mongo;
pub mod store;

// Re-exports
pub use client::{Store, StoreConfig};
pub use filter::JobFilter;
pub use job::{GroupCount, InvalidJobId, Job, JobId};
pub use mongo::MongoJobStore;
pub use store::{JobStore, StoreError, StoreResult};
