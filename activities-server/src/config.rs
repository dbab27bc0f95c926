use std::path::PathBuf;
use clap::Parser;
use activities_core::{default_activities, parse_seed, ActivityDirectory};
use crate::errors::ServerResult;

#[derive(Parser, Debug, Clone)]
#[command(name = "activities-server")]
#[command(about = "Mergington High School extracurricular activities API")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8080")]
    pub bind_address: String,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value_os_t = default_static_dir())]
    pub static_dir: PathBuf,

    /// JSON catalog replacing the built-in activities
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Reject signups once an activity reaches max_participants
    #[arg(long, env = "ENFORCE_CAPACITY")]
    pub enforce_capacity: bool,

    /// Print a live, coloured signup log
    #[arg(long, env = "MONITORING")]
    pub monitoring: bool,

    /// Expose POST /test/reset
    #[arg(long, env = "ENABLE_RESET")]
    pub enable_reset: bool,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            static_dir: default_static_dir(),
            seed_file: None,
            enforce_capacity: false,
            monitoring: false,
            enable_reset: false,
        }
    }
}

impl ServerConfig {
    /// The activities the server boots with: the seed file when one is
    /// configured, the built-in catalog otherwise.
    pub fn load_catalog(&self) -> ServerResult<ActivityDirectory> {
        match &self.seed_file {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let activities = parse_seed(&json)?;
                tracing::info!(path = %path.display(), count = activities.len(), "Loaded seed catalog");
                Ok(activities)
            }
            None => Ok(default_activities()),
        }
    }
}
