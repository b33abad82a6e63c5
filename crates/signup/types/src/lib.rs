//! Signup Types - Core types for the activity signup service
//!
//! The signup service exposes a catalog of extracurricular activities and
//! lets students join or leave them by email.
//!
//! ## Key Concepts
//!
//! - **Activity**: A named offering with descriptive metadata and a roster
//! - **Participant**: A student, identified solely by email
//! - **Catalog**: An ordered snapshot of every activity
//! - **Seed**: The activity set a registry starts with
//! - **Confirmation**: The outcome of a successful signup or unregister

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod activity;
pub mod catalog;
pub mod confirmation;
pub mod seed;

// Re-export main types
pub use activity::{Activity, ActivityValidationError};
pub use catalog::Catalog;
pub use confirmation::Confirmation;
pub use seed::{SeedActivity, SeedCatalog, SeedValidationError};
