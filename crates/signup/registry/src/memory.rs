//! In-memory implementation of the registry trait
//!
//! Each activity lives in its own `DashMap` entry. Signup and unregister run
//! their membership check and roster mutation under that entry's write guard,
//! so two concurrent calls for the same activity are serialized.

use crate::error::{RegistryError, Result};
use crate::registry::ActivityRegistry;
use async_trait::async_trait;
use dashmap::DashMap;
use signup_types::{Activity, Catalog, Confirmation, SeedCatalog};

/// In-memory activity registry
#[derive(Debug)]
pub struct InMemoryActivityRegistry {
    activities: DashMap<String, Activity>,
    /// Seed order; fixed after construction
    order: Vec<String>,
}

impl InMemoryActivityRegistry {
    /// Build a registry from a seed catalog, validating it first
    pub fn from_seed(seed: &SeedCatalog) -> Result<Self> {
        seed.validate()?;
        Ok(Self::build(seed))
    }

    /// Registry seeded with the built-in Mergington High School catalog
    pub fn mergington() -> Self {
        Self::build(&SeedCatalog::mergington())
    }

    fn build(seed: &SeedCatalog) -> Self {
        let activities = DashMap::with_capacity(seed.activities.len());
        let mut order = Vec::with_capacity(seed.activities.len());

        for entry in &seed.activities {
            activities.insert(entry.name.clone(), entry.to_activity());
            order.push(entry.name.clone());
        }

        tracing::debug!(activities = order.len(), "Seeded activity registry");

        Self { activities, order }
    }
}

impl Default for InMemoryActivityRegistry {
    fn default() -> Self {
        Self::mergington()
    }
}

#[async_trait]
impl ActivityRegistry for InMemoryActivityRegistry {
    async fn list(&self) -> Catalog {
        self.order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|a| (name.clone(), a.value().clone()))
            })
            .collect()
    }

    async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|a| a.value().clone())
    }

    async fn signup(&self, name: &str, email: &str) -> Result<Confirmation> {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());

        if activity.is_over_capacity() {
            tracing::warn!(
                activity = %name,
                participants = activity.participant_count(),
                max_participants = activity.max_participants,
                "Activity roster exceeds max_participants"
            );
        }

        tracing::info!(activity = %name, email = %email, "Signed up participant");

        Ok(Confirmation::signed_up(name, email))
    }

    async fn unregister(&self, name: &str, email: &str) -> Result<Confirmation> {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotSignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        // Vec::remove keeps the remaining signup order intact
        activity.participants.remove(position);

        tracing::info!(activity = %name, email = %email, "Unregistered participant");

        Ok(Confirmation::unregistered(name, email))
    }

    async fn activity_count(&self) -> usize {
        self.order.len()
    }

    async fn participant_count(&self) -> usize {
        self.activities
            .iter()
            .map(|a| a.value().participant_count())
            .sum()
    }
}
