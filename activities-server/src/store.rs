use activities_core::{Activity, ActivityDirectory, MessageResponse, SignupError, SignupResult};
use dashmap::DashMap;

/// In-memory activity directory. Each signup/unregister runs while holding
/// the activity's map entry, so membership checks and roster edits are
/// atomic per activity.
pub struct ActivityStore {
    activities: DashMap<String, Activity>,
    seed: ActivityDirectory,
    enforce_capacity: bool,
}

impl ActivityStore {
    pub fn new(seed: ActivityDirectory) -> Self {
        let activities = seed
            .iter()
            .map(|(name, activity)| (name.clone(), activity.clone()))
            .collect();

        Self {
            activities,
            seed,
            enforce_capacity: false,
        }
    }

    /// Reject signups once an activity reaches `max_participants`.
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of every activity, ordered by name.
    pub fn list_activities(&self) -> ActivityDirectory {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn get(&self, activity_name: &str) -> SignupResult<Activity> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| SignupError::ActivityNotFound(activity_name.to_string()))
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> SignupResult<MessageResponse> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| SignupError::ActivityNotFound(activity_name.to_string()))?;

        if activity.has_participant(email) {
            return Err(SignupError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        if self.enforce_capacity && activity.is_full() {
            return Err(SignupError::ActivityFull {
                activity: activity_name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        tracing::debug!(
            activity = %activity_name,
            %email,
            spots_left = activity.spots_left(),
            "Participant signed up"
        );

        Ok(MessageResponse::signed_up(email, activity_name))
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> SignupResult<MessageResponse> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| SignupError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| SignupError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        tracing::debug!(activity = %activity_name, %email, "Participant unregistered");

        Ok(MessageResponse::unregistered(email, activity_name))
    }

    /// Restore the catalog this store was built with. Seeded entries are
    /// overwritten in place, so readers never see a seeded activity missing.
    pub fn reset(&self) {
        for (name, activity) in &self.seed {
            self.activities.insert(name.clone(), activity.clone());
        }
        self.activities.retain(|name, _| self.seed.contains_key(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use activities_core::default_activities;

    fn store() -> ActivityStore {
        ActivityStore::new(default_activities())
    }

    #[test]
    fn test_list_returns_seeded_count() {
        let store = store();
        assert_eq!(store.len(), 9);
        assert_eq!(store.list_activities().len(), 9);
    }

    #[test]
    fn test_signup_appends_in_order() {
        let store = store();
        store.signup("Chess Club", "new@mergington.edu").unwrap();

        let chess = store.get("Chess Club").unwrap();
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu", "new@mergington.edu"]
        );
    }

    #[test]
    fn test_repeated_signup_is_rejected() {
        let store = store();
        store.signup("Chess Club", "twice@mergington.edu").unwrap();

        let err = store.signup("Chess Club", "twice@mergington.edu").unwrap_err();
        assert!(matches!(err, SignupError::AlreadySignedUp { .. }));
        assert_eq!(store.get("Chess Club").unwrap().participants.len(), 3);
    }

    #[test]
    fn test_unknown_activity_is_not_found_for_any_email() {
        let store = store();
        for email in ["michael@mergington.edu", "", "not-an-email"] {
            assert_eq!(
                store.signup("Knitting Circle", email).unwrap_err(),
                SignupError::ActivityNotFound("Knitting Circle".to_string())
            );
            assert_eq!(
                store.unregister("Knitting Circle", email).unwrap_err(),
                SignupError::ActivityNotFound("Knitting Circle".to_string())
            );
        }
    }

    #[test]
    fn test_unregister_keeps_remaining_order() {
        let store = store();
        store.signup("Drama Club", "third@mergington.edu").unwrap();
        store.unregister("Drama Club", "sarah@mergington.edu").unwrap();

        let drama = store.get("Drama Club").unwrap();
        assert_eq!(drama.participants, vec!["ryan@mergington.edu", "third@mergington.edu"]);
    }

    #[test]
    fn test_unregister_missing_participant() {
        let store = store();
        let err = store.unregister("Chess Club", "ghost@mergington.edu").unwrap_err();
        assert!(matches!(err, SignupError::NotSignedUp { .. }));
    }

    #[test]
    fn test_capacity_is_ignored_by_default() {
        let mut seed = ActivityDirectory::new();
        seed.insert("Duo".to_string(), Activity::new("Pairs", "Mondays", 1, &["a@mergington.edu"]));
        let store = ActivityStore::new(seed);

        assert!(store.signup("Duo", "b@mergington.edu").is_ok());
        assert_eq!(store.get("Duo").unwrap().participants.len(), 2);
    }

    #[test]
    fn test_capacity_enforced_when_enabled() {
        let mut seed = ActivityDirectory::new();
        seed.insert("Duo".to_string(), Activity::new("Pairs", "Mondays", 1, &["a@mergington.edu"]));
        let store = ActivityStore::new(seed).with_capacity_enforcement(true);

        let err = store.signup("Duo", "b@mergington.edu").unwrap_err();
        assert_eq!(
            err,
            SignupError::ActivityFull {
                activity: "Duo".to_string(),
                max_participants: 1,
            }
        );

        // Duplicate check still wins over the capacity check
        let err = store.signup("Duo", "a@mergington.edu").unwrap_err();
        assert!(matches!(err, SignupError::AlreadySignedUp { .. }));
    }

    #[test]
    fn test_reset_restores_seed() {
        let store = store();
        store.unregister("Chess Club", "michael@mergington.edu").unwrap();
        store.signup("Tennis Club", "new@mergington.edu").unwrap();

        store.reset();

        assert_eq!(store.list_activities(), default_activities());
    }
}
