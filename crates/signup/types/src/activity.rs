//! Activity records

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An extracurricular activity and its current roster.
///
/// The activity name is not part of the record; registries key records by
/// name and names never change after seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description
    pub description: String,

    /// Free-text meeting time
    pub schedule: String,

    /// Advisory capacity, always > 0
    pub max_participants: u32,

    /// Participant emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style roster for seeding
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Exact-match membership check
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Remaining capacity; zero once the roster reaches or passes the limit
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }

    /// True when signups have pushed the roster past `max_participants`.
    ///
    /// Capacity is advisory, so this can happen.
    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }

    /// Validate the record invariants
    pub fn validate(&self) -> Result<(), ActivityValidationError> {
        if self.max_participants == 0 {
            return Err(ActivityValidationError::ZeroCapacity);
        }

        for (i, email) in self.participants.iter().enumerate() {
            if self.participants[..i].contains(email) {
                return Err(ActivityValidationError::DuplicateParticipant(email.clone()));
            }
        }

        Ok(())
    }
}

/// Activity validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityValidationError {
    #[error("max_participants must be > 0")]
    ZeroCapacity,

    #[error("Participant listed more than once: {0}")]
    DuplicateParticipant(String),
}
