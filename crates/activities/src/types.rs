//! Types for the activity registry

use serde::{Serialize, Serializer};

/// An extracurricular activity and its current roster.
///
/// The name is the registry key, so it is left out of the serialized form:
/// listings render as `{ "<name>": { "description": ..., ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order. Never contains duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper used by the seed list.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Point-in-time copy of the whole registry, in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitiesSnapshot {
    activities: Vec<Activity>,
}

impl ActivitiesSnapshot {
    pub(crate) fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.activities.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<Activity> {
        self.activities
    }
}

impl Serialize for ActivitiesSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.activities.iter().map(|a| (a.name.as_str(), a)))
    }
}

/// Confirmation of a successful signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupReceipt {
    pub activity: String,
    pub email: String,
}

impl SignupReceipt {
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity)
    }
}

/// Confirmation of a successful unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnregisterReceipt {
    pub activity: String,
    pub email: String,
}

impl UnregisterReceipt {
    pub fn message(&self) -> String {
        format!("Unregistered {} from {}", self.email, self.activity)
    }
}
