use chrono::Local;
use colored::*;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessage {
    SignedUp {
        activity: String,
        email: String,
    },
    Unregistered {
        activity: String,
        email: String,
    },
    Rejected {
        activity: String,
        email: String,
        reason: String,
    },
    StateReset,
}

#[derive(Clone)]
pub struct MonitoringLayer {
    tx: mpsc::Sender<LogMessage>,
}

impl MonitoringLayer {
    pub fn new(tx: mpsc::Sender<LogMessage>) -> Self {
        Self { tx }
    }

    pub async fn log_signed_up(&self, activity: &str, email: &str) {
        let _ = self
            .tx
            .send(LogMessage::SignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            })
            .await;
    }

    pub async fn log_unregistered(&self, activity: &str, email: &str) {
        let _ = self
            .tx
            .send(LogMessage::Unregistered {
                activity: activity.to_string(),
                email: email.to_string(),
            })
            .await;
    }

    pub async fn log_rejected(&self, activity: &str, email: &str, reason: String) {
        let _ = self
            .tx
            .send(LogMessage::Rejected {
                activity: activity.to_string(),
                email: email.to_string(),
                reason,
            })
            .await;
    }

    pub async fn log_state_reset(&self) {
        let _ = self.tx.send(LogMessage::StateReset).await;
    }
}

pub async fn spawn_monitoring_display(mut rx: mpsc::Receiver<LogMessage>) {
    tokio::spawn(async move {
        info!("");
        info!("{}", "📋 Signup Log:".bold());
        info!("{}", "─".repeat(80).dimmed());

        while let Some(log) = rx.recv().await {
            let timestamp = Local::now().format("%H:%M:%S%.3f");

            match log {
                LogMessage::SignedUp { activity, email } => {
                    info!(
                        "{} {} {} joined {}",
                        timestamp.to_string().dimmed(),
                        "→".green().bold(),
                        email.yellow(),
                        activity.white().bold()
                    );
                }
                LogMessage::Unregistered { activity, email } => {
                    info!(
                        "{} {} {} left {}",
                        timestamp.to_string().dimmed(),
                        "←".red().bold(),
                        email.yellow(),
                        activity.white().bold()
                    );
                }
                LogMessage::Rejected { activity, email, reason } => {
                    info!(
                        "{} ⚠️ {} for {} rejected: {}",
                        timestamp.to_string().dimmed(),
                        email.yellow(),
                        activity.white().bold(),
                        reason.red()
                    );
                }
                LogMessage::StateReset => {
                    info!(
                        "{} 🔄 {}",
                        timestamp.to_string().dimmed(),
                        "Rosters reset to seed catalog".cyan()
                    );
                }
            }
        }
    });
}
