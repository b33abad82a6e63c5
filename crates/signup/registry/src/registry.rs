//! Activity registry trait
//!
//! The ActivityRegistry holds the activity catalog and every roster.

use crate::error::Result;
use async_trait::async_trait;
use signup_types::{Activity, Catalog, Confirmation};

/// Registry for activities and their participants
#[async_trait]
pub trait ActivityRegistry: Send + Sync {
    /// Snapshot of all activities in seed order
    async fn list(&self) -> Catalog;

    /// Snapshot of a single activity
    async fn get(&self, name: &str) -> Option<Activity>;

    /// Add `email` to the roster of `name`.
    ///
    /// Fails with `ActivityNotFound` for an unknown activity and with
    /// `AlreadySignedUp` when the email is already on the roster. Capacity is
    /// not enforced.
    async fn signup(&self, name: &str, email: &str) -> Result<Confirmation>;

    /// Remove `email` from the roster of `name`.
    ///
    /// Fails with `ActivityNotFound` for an unknown activity and with
    /// `NotSignedUp` when the email is not on the roster.
    async fn unregister(&self, name: &str, email: &str) -> Result<Confirmation>;

    /// Number of activities
    async fn activity_count(&self) -> usize;

    /// Total roster size across all activities
    async fn participant_count(&self) -> usize;
}
