use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tokio::sync::RwLock;

use crate::database::seed;
use crate::models::Activity;

/// Activities keyed by name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, Activity)>,
}

impl Directory {
    pub fn from_entries(entries: Vec<(String, Activity)>) -> Self {
        let mut directory = Self::default();
        for (name, activity) in entries {
            directory.insert(name, activity);
        }
        directory
    }

    /// Replaces the record if `name` is already present, keeping its position.
    pub fn insert(&mut self, name: String, activity: Activity) {
        match self.get_mut(&name) {
            Some(existing) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    AlreadyEnrolled,
    ActivityNotFound,
}

/// Shared handle to the process-wide directory.
///
/// One lock guards the whole directory: reads clone a snapshot under the read
/// lock, and a signup holds the write lock across its duplicate check and the
/// append, so concurrent signups for the same roster never both succeed.
#[derive(Debug, Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<Directory>>,
}

impl ActivityDirectory {
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Directory::from_entries(seed::seed_activities()))
    }

    pub async fn snapshot(&self) -> Directory {
        self.inner.read().await.clone()
    }

    pub async fn load_activity(&self, name: &str) -> Option<Activity> {
        self.inner.read().await.get(name).cloned()
    }

    pub async fn append_participant(&self, name: &str, email: &str) -> AppendOutcome {
        let mut directory = self.inner.write().await;
        let Some(activity) = directory.get_mut(name) else {
            return AppendOutcome::ActivityNotFound;
        };
        if activity.is_enrolled(email) {
            return AppendOutcome::AlreadyEnrolled;
        }
        activity.participants.push(email.to_string());
        AppendOutcome::Appended
    }
}
