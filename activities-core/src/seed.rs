use crate::errors::SeedError;
use crate::models::{Activity, ActivityDirectory};

/// The catalog the school starts every term with.
pub fn default_activities() -> ActivityDirectory {
    let mut activities = ActivityDirectory::new();

    activities.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities.insert(
        "Basketball Team".to_string(),
        Activity::new(
            "Competitive basketball training and games",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["alex@mergington.edu"],
        ),
    );
    activities.insert(
        "Tennis Club".to_string(),
        Activity::new(
            "Tennis lessons and friendly matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
            10,
            &["james@mergington.edu"],
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Perform in theatrical productions and improv",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            25,
            &["sarah@mergington.edu", "ryan@mergington.edu"],
        ),
    );
    activities.insert(
        "Art Studio".to_string(),
        Activity::new(
            "Explore painting, drawing, and sculpture",
            "Mondays and Thursdays, 3:30 PM - 4:30 PM",
            18,
            &["jessica@mergington.edu"],
        ),
    );
    activities.insert(
        "Debate Team".to_string(),
        Activity::new(
            "Develop argumentation and public speaking skills",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            16,
            &["marcus@mergington.edu", "lisa@mergington.edu"],
        ),
    );
    activities.insert(
        "Science Club".to_string(),
        Activity::new(
            "Conduct experiments and explore STEM topics",
            "Wednesdays, 3:30 PM - 5:00 PM",
            20,
            &["andrew@mergington.edu"],
        ),
    );

    activities
}

/// Parse a seed catalog in the same shape `GET /activities` returns.
pub fn parse_seed(json: &str) -> Result<ActivityDirectory, SeedError> {
    let activities: ActivityDirectory = serde_json::from_str(json)?;

    if activities.is_empty() {
        return Err(SeedError::Empty);
    }

    for (name, activity) in &activities {
        if let Some(email) = activity.duplicate_participant() {
            return Err(SeedError::DuplicateParticipant {
                activity: name.clone(),
                email: email.to_string(),
            });
        }
    }

    Ok(activities)
}
