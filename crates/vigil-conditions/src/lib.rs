//! Condition bookkeeping for Vigil.
//!
//! A fixed [`Catalog`] of condition descriptors is built once at startup.
//! Presence management (add/remove/query against a subject) goes through the
//! [`StatusBackend`] trait: an external status-effect provider can be probed
//! in at startup, otherwise the built-in [`LocalStatus`] list is used.
//! Callers never branch on which backend is active.

pub mod catalog;
pub mod error;
pub mod store;

pub use catalog::{Catalog, ConditionDescriptor};
pub use error::{ConditionError, ConditionResult};
pub use store::{LocalStatus, StatusBackend, SubjectId, select_backend};
