use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull { activity: String, max_participants: u32 },
}

impl SignupError {
    /// Name of the activity the failed operation targeted.
    pub fn activity(&self) -> &str {
        match self {
            SignupError::ActivityNotFound(activity)
            | SignupError::AlreadySignedUp { activity, .. }
            | SignupError::NotSignedUp { activity, .. }
            | SignupError::ActivityFull { activity, .. } => activity,
        }
    }

    /// True for the "request conflicts with the roster" family, false for lookups.
    pub fn is_conflict(&self) -> bool {
        !matches!(self, SignupError::ActivityNotFound(_))
    }
}

pub type SignupResult<T> = Result<T, SignupError>;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Invalid seed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed catalog lists {email} twice in {activity}")]
    DuplicateParticipant { activity: String, email: String },

    #[error("Seed catalog contains no activities")]
    Empty,
}
