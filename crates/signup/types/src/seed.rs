//! Seed catalogs
//!
//! A registry is populated exactly once, from a [`SeedCatalog`]. The built-in
//! catalog is the Mergington High School activity list; deployments can supply
//! their own through a catalog file.

use crate::activity::{Activity, ActivityValidationError};
use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One activity as it appears in a seed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl SeedActivity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn to_activity(&self) -> Activity {
        Activity {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }
}

/// Seed set for a registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCatalog {
    #[serde(default)]
    pub activities: Vec<SeedActivity>,
}

/// Seed validation failure, naming the offending activity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedValidationError {
    #[error("{activity}: {source}")]
    Activity {
        activity: String,
        #[source]
        source: ActivityValidationError,
    },

    #[error("Activity name cannot be empty")]
    EmptyName,

    #[error("Duplicate activity name: {0}")]
    DuplicateName(String),
}

impl SeedCatalog {
    pub fn new(activities: Vec<SeedActivity>) -> Self {
        Self { activities }
    }

    /// The Mergington High School catalog
    pub fn mergington() -> Self {
        Self::new(vec![
            SeedActivity::new(
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
            SeedActivity::new(
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
            SeedActivity::new(
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
            SeedActivity::new(
                "Soccer Team",
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
            SeedActivity::new(
                "Basketball Team",
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
            SeedActivity::new(
                "Art Club",
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
            SeedActivity::new(
                "Drama Club",
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
            SeedActivity::new(
                "Math Club",
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
            SeedActivity::new(
                "Debate Team",
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ])
    }

    /// Check names are non-empty and unique, and every record is valid
    pub fn validate(&self) -> Result<(), SeedValidationError> {
        let mut seen = HashSet::new();

        for seed in &self.activities {
            if seed.name.is_empty() {
                return Err(SeedValidationError::EmptyName);
            }

            if !seen.insert(seed.name.as_str()) {
                return Err(SeedValidationError::DuplicateName(seed.name.clone()));
            }

            seed.to_activity()
                .validate()
                .map_err(|source| SeedValidationError::Activity {
                    activity: seed.name.clone(),
                    source,
                })?;
        }

        Ok(())
    }

    /// Catalog view of the seed, in seed order
    pub fn to_catalog(&self) -> Catalog {
        self.activities
            .iter()
            .map(|s| (s.name.clone(), s.to_activity()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mergington_catalog_is_valid() {
        let seed = SeedCatalog::mergington();
        assert!(seed.validate().is_ok());
        assert_eq!(seed.activities.len(), 9);

        let catalog = seed.to_catalog();
        let chess = catalog.get("Chess Club").unwrap();
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
        assert!(catalog.contains("Programming Class"));
        assert!(catalog.contains("Art Club"));

        for (_, activity) in catalog.iter() {
            assert!(activity.max_participants > 0);
            assert!(activity.participants.len() <= activity.max_participants as usize);
        }
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let seed = SeedCatalog::new(vec![
            SeedActivity::new("Chess Club", "a", "b", 1, &[]),
            SeedActivity::new("Chess Club", "c", "d", 2, &[]),
        ]);
        assert_eq!(
            seed.validate(),
            Err(SeedValidationError::DuplicateName("Chess Club".into()))
        );
    }

    #[test]
    fn test_rejects_invalid_records() {
        let zero = SeedCatalog::new(vec![SeedActivity::new("Empty", "a", "b", 0, &[])]);
        assert!(matches!(
            zero.validate(),
            Err(SeedValidationError::Activity {
                source: ActivityValidationError::ZeroCapacity,
                ..
            })
        ));

        let unnamed = SeedCatalog::new(vec![SeedActivity::new("", "a", "b", 3, &[])]);
        let err = unnamed.validate().unwrap_err();
        assert_eq!(err, SeedValidationError::EmptyName);
        assert_eq!(err.to_string(), "Activity name cannot be empty");

        let dup = SeedCatalog::new(vec![SeedActivity::new(
            "Chess Club",
            "a",
            "b",
            3,
            &["x@y.edu", "x@y.edu"],
        )]);
        assert!(dup.validate().is_err());
    }

    #[test]
    fn test_participants_default_to_empty() {
        let seed: SeedCatalog = serde_json::from_str(
            r#"{"activities":[{"name":"Robotics","description":"Build","schedule":"Mon","max_participants":8}]}"#,
        )
        .unwrap();
        assert!(seed.activities[0].participants.is_empty());
        assert!(seed.validate().is_ok());
    }
}
