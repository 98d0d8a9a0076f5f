use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Severity configured for general reminders. Anything but `Normal` is
/// shown as a bracketed tag in front of the time-of-day message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
        }
    }

    /// `[LOW]` / `[HIGH]`, or `None` for normal urgency
    pub fn tag(&self) -> Option<String> {
        match self {
            Urgency::Normal => None,
            other => Some(format!("[{}]", other.as_str().to_uppercase())),
        }
    }
}

/// Which timer produced a reminder. Also selects the sound to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    General,
    Git,
}

/// A composed reminder, dispatched once and then dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub title: &'static str,
    /// Full text sent to the notification and the log file
    pub message: String,
    /// Short line echoed to the terminal
    pub headline: String,
    pub urgency: Urgency,
    pub timeout_secs: u32,
}

impl Reminder {
    /// Text written to the reminder log
    pub fn log_line(&self) -> String {
        match self.kind {
            ReminderKind::Git => format!("Git Reminder: {}", self.message),
            ReminderKind::General => self.message.clone(),
        }
    }

    /// Terminal echo, stamped with the local `HH:MM`
    pub fn echo_line(&self, at: NaiveTime) -> String {
        let clock = at.format("%H:%M");
        match self.kind {
            ReminderKind::Git => format!("{} - {}", clock, self.headline),
            ReminderKind::General => format!("⏰ {} - {}", clock, self.headline),
        }
    }
}
