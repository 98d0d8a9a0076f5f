/// Application configuration constants
///
/// Centralized constants for the reminder loop and its messages.

/// Seconds between scheduler ticks
pub const POLL_INTERVAL_SECS: u64 = 1;

/// Default reminder log, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "reminder_log.txt";

/// Notification titles
pub const GENERAL_TITLE: &str = "🧠 Developer Reminder";
pub const GIT_TITLE: &str = "💾 Git Commit Reminder";

/// Notification timeouts in seconds
pub const GENERAL_TIMEOUT_SECS: u32 = 10;
pub const GIT_TIMEOUT_SECS: u32 = 5;

/// Fallback texts used when a configured message is blank
pub const FALLBACK_MORNING: &str = "Time to start your day!";
pub const FALLBACK_AFTERNOON: &str = "Time to stretch or drink water!";
pub const FALLBACK_EVENING: &str = "Have you committed your work today?";
pub const FALLBACK_DEFAULT: &str = "Time to take a break!";
pub const FALLBACK_GIT_MESSAGE: &str = "Time to commit your changes!";

/// Developer nudges appended to general reminders
pub const DOC_REMINDER: &str = "📝 Document your recent changes?";
pub const TEST_REMINDER: &str = "🧪 Write some tests!";
pub const REVIEW_REMINDER: &str = "👀 Review recent PRs/code";

/// Hour-of-day moduli gating the developer nudges
pub const DOC_EVERY_HOURS: u32 = 4;
pub const TEST_EVERY_HOURS: u32 = 6;
pub const REVIEW_EVERY_HOURS: u32 = 3;

/// Alarm played when no custom sound is configured or the file is missing
pub const BUNDLED_ALARM: &[u8] = include_bytes!("../assets/alarm.wav");
