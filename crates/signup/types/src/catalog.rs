//! Ordered catalog snapshots
//!
//! A [`Catalog`] serializes as a JSON object keyed by activity name. Keys keep
//! the order the registry was seeded in, so front-ends render a stable list.

use crate::activity::Activity;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Snapshot of every activity, in seed order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, activity: Activity) {
        self.entries.push((name.into(), activity));
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// Total roster size across all activities
    pub fn participant_count(&self) -> usize {
        self.entries.iter().map(|(_, a)| a.participant_count()).sum()
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (String, Activity)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Catalog {
    type Item = (String, Activity);
    type IntoIter = std::vec::IntoIter<(String, Activity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(Catalog { entries })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.push(
            "Programming Class",
            Activity::new("Code", "Tuesdays", 20).with_participants(["emma@mergington.edu"]),
        );
        catalog.push(
            "Chess Club",
            Activity::new("Chess", "Fridays", 12)
                .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        );
        catalog
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let json = serde_json::to_string(&sample()).unwrap();
        let programming = json.find("\"Programming Class\"").unwrap();
        let chess = json.find("\"Chess Club\"").unwrap();
        assert!(programming < chess);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_object());
        assert_eq!(value["Chess Club"]["max_participants"], 12);
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.names().collect::<Vec<_>>(),
            vec!["Programming Class", "Chess Club"]
        );
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_lookup_and_counts() {
        let catalog = sample();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("Chess Club"));
        assert!(!catalog.contains("chess club"));
        assert_eq!(catalog.participant_count(), 3);
        assert_eq!(catalog.get("Chess Club").unwrap().max_participants, 12);
    }
}
