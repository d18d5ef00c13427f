//! Activity registry implementation
//!
//! Keeps every activity and its roster in memory behind a single lock.
//! Each mutation validates and applies under one write guard, so a rejected
//! call never leaves a roster partially changed.

use crate::errors::*;
use crate::seed::default_activities;
use crate::types::*;
use parking_lot::RwLock;

/// Activity registry
///
/// Activities are kept in seed order and looked up by exact,
/// case-sensitive name.
#[derive(Debug)]
pub struct ActivityRegistry {
    activities: RwLock<Vec<Activity>>,
}

impl ActivityRegistry {
    /// Create a registry loaded with the built-in seed list
    pub fn new() -> Self {
        Self {
            activities: RwLock::new(default_activities()),
        }
    }

    /// Alias for [`ActivityRegistry::new`]
    pub fn with_seed() -> Self {
        Self::new()
    }

    /// Create a registry from an explicit activity list
    ///
    /// Fails if two activities share a name, a capacity is zero, a roster
    /// repeats an email, or a roster is already above its capacity.
    pub fn from_activities<I>(activities: I) -> Result<Self>
    where
        I: IntoIterator<Item = Activity>,
    {
        let mut validated: Vec<Activity> = Vec::new();
        for activity in activities {
            if validated.iter().any(|a| a.name == activity.name) {
                return Err(RegistryError::DuplicateActivity {
                    activity: activity.name,
                });
            }

            if activity.max_participants == 0 {
                return Err(RegistryError::InvalidActivity {
                    activity: activity.name,
                    reason: "max_participants must be positive".to_string(),
                });
            }

            for (idx, email) in activity.participants.iter().enumerate() {
                if activity.participants[..idx].contains(email) {
                    return Err(RegistryError::InvalidActivity {
                        activity: activity.name.clone(),
                        reason: format!("{email} is listed more than once"),
                    });
                }
            }

            if activity.participants.len() > activity.max_participants as usize {
                return Err(RegistryError::InvalidActivity {
                    reason: format!(
                        "{} participants exceed capacity {}",
                        activity.participants.len(),
                        activity.max_participants
                    ),
                    activity: activity.name,
                });
            }

            validated.push(activity);
        }

        Ok(Self {
            activities: RwLock::new(validated),
        })
    }

    /// Snapshot of every activity with its live roster
    pub fn list_activities(&self) -> ActivitiesSnapshot {
        ActivitiesSnapshot::new(self.activities.read().clone())
    }

    /// Fetch a single activity by name
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities
            .read()
            .iter()
            .find(|a| a.name == name)
            .cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.activities.read().iter().any(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Add `email` to the roster of `activity_name`
    ///
    /// Checks, in order: the activity exists, the email is not already on
    /// the roster, and the roster has room.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<SignupReceipt> {
        let mut activities = self.activities.write();
        let activity = find_mut(&mut activities, activity_name)?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: activity.name.clone(),
                email: email.to_string(),
            });
        }

        if activity.is_full() {
            return Err(RegistryError::CapacityExceeded {
                activity: activity.name.clone(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());

        Ok(SignupReceipt {
            activity: activity.name.clone(),
            email: email.to_string(),
        })
    }

    /// Remove `email` from the roster of `activity_name`
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<UnregisterReceipt> {
        let mut activities = self.activities.write();
        let activity = find_mut(&mut activities, activity_name)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                activity: activity.name.clone(),
                email: email.to_string(),
            });
        };
        activity.participants.remove(position);

        Ok(UnregisterReceipt {
            activity: activity.name.clone(),
            email: email.to_string(),
        })
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn find_mut<'a>(activities: &'a mut [Activity], name: &str) -> Result<&'a mut Activity> {
    activities
        .iter_mut()
        .find(|a| a.name == name)
        .ok_or_else(|| RegistryError::ActivityNotFound {
            activity: name.to_string(),
        })
}
