//! Persistence boundary for formloom.
//!
//! The designer core never performs I/O; it hands serialized snapshots
//! across this boundary and receives plain data (or a failure result) back.
//! [`FormStore`] is the contract the hosting application implements against
//! its real backend; [`MemoryFormStore`] is the reference implementation
//! used by tests and embedders.
//!
//! Failures are reported to the caller and surfaced to the user; nothing
//! here retries on its own.

mod error;
mod record;
mod store;

pub use error::{StorageError, StorageResult};
pub use record::{FormRecord, SubmissionRecord};
pub use store::{FormStore, MemoryFormStore};
