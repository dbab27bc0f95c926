use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An extracurricular offering and its roster. The activity name is the
/// key it is stored under, not a field of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    /// First participant that appears more than once, if any.
    pub fn duplicate_participant(&self) -> Option<&str> {
        self.participants
            .iter()
            .enumerate()
            .find(|&(i, p)| self.participants[..i].contains(p))
            .map(|(_, p)| p.as_str())
    }
}

/// Activity name -> record, as returned by `GET /activities`.
pub type ActivityDirectory = BTreeMap<String, Activity>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity),
        }
    }

    pub fn unregistered(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Unregistered {} from {}", email, activity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_helpers() {
        let mut activity = Activity::new("Tennis lessons", "Tuesdays", 2, &["a@mergington.edu"]);
        assert_eq!(activity.spots_left(), 1);
        assert!(!activity.is_full());

        activity.participants.push("b@mergington.edu".to_string());
        assert!(activity.is_full());

        // Rosters loaded over capacity never underflow
        activity.participants.push("c@mergington.edu".to_string());
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn test_duplicate_participant_detection() {
        let activity = Activity::new(
            "Chess",
            "Fridays",
            12,
            &["a@mergington.edu", "b@mergington.edu", "a@mergington.edu"],
        );
        assert_eq!(activity.duplicate_participant(), Some("a@mergington.edu"));

        let clean = Activity::new("Chess", "Fridays", 12, &["a@mergington.edu"]);
        assert_eq!(clean.duplicate_participant(), None);
    }

    #[test]
    fn test_activity_serializes_without_name() {
        let activity = Activity::new("Chess", "Fridays", 12, &["michael@mergington.edu"]);
        let json = serde_json::to_value(&activity).unwrap();

        assert!(json.get("name").is_none());
        assert_eq!(json["max_participants"], 12);
        assert_eq!(json["participants"][0], "michael@mergington.edu");
    }

    #[test]
    fn test_confirmation_messages() {
        let msg = MessageResponse::signed_up("new@mergington.edu", "Chess Club");
        assert_eq!(msg.message, "Signed up new@mergington.edu for Chess Club");

        let msg = MessageResponse::unregistered("new@mergington.edu", "Chess Club");
        assert_eq!(msg.message, "Unregistered new@mergington.edu from Chess Club");
    }
}
