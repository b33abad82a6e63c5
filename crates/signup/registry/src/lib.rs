//! Signup Registry - Activity registry traits and implementations
//!
//! The registry owns every activity and its roster:
//!
//! - **list**: ordered snapshot of the catalog
//! - **signup**: add an email to an activity roster
//! - **unregister**: remove an email from an activity roster
//!
//! Activities are fixed at construction time from a seed catalog; only the
//! rosters change afterwards.
//!
//! ## In-Memory vs Persistent
//!
//! The crate ships an in-memory implementation. State is lost on restart.
//! A durable backend would implement the same [`ActivityRegistry`] trait.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod error;
pub mod memory;
pub mod registry;

// Re-exports
pub use error::{RegistryError, Result};
pub use memory::InMemoryActivityRegistry;
pub use registry::ActivityRegistry;
