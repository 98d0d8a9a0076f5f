mod local;
mod merge;

use crate::config::DEFAULT_LOG_FILE;
use crate::reminder::Urgency;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use local::{load_settings, save_settings};

/// Complete reminder settings. Every field is always populated; partial
/// files are merged onto [`Settings::default`] before use.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub general: GeneralSettings,
    pub messages: MessageSettings,
    pub developer: DeveloperSettings,
    pub sound: SoundSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Minutes between general reminders, aligned to the wall clock
    pub frequency: u64,
    pub log_file: PathBuf,
    pub urgency: Urgency,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            frequency: 60,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            urgency: Urgency::Normal,
        }
    }
}

/// Time-of-day texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSettings {
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    pub default: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            morning: "Time to start your day! Review your tasks.".to_string(),
            afternoon: "Time to stretch or drink water!".to_string(),
            evening: "Have you committed your work today?".to_string(),
            default: "Time to take a break!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperSettings {
    pub git_reminders: bool,
    /// Minutes between git reminders, measured from process start
    pub git_interval: u64,
    pub git_message: String,
    pub doc_reminders: bool,
    pub test_reminders: bool,
    pub review_reminders: bool,
}

impl Default for DeveloperSettings {
    fn default() -> Self {
        Self {
            git_reminders: true,
            git_interval: 1,
            git_message: "⏰ Time to commit your changes!".to_string(),
            doc_reminders: true,
            test_reminders: false,
            review_reminders: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSettings {
    pub enabled: bool,
    pub custom_sound: Option<PathBuf>,
    /// Overrides `custom_sound` for git reminders
    pub git_sound: Option<PathBuf>,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            custom_sound: None,
            git_sound: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.general.frequency, 60);
        assert_eq!(
            settings.general.log_file,
            PathBuf::from("reminder_log.txt")
        );
        assert_eq!(settings.general.urgency, Urgency::Normal);
        assert!(settings.developer.git_reminders);
        assert_eq!(settings.developer.git_interval, 1);
        assert!(!settings.developer.test_reminders);
        assert!(settings.sound.enabled);
        assert!(settings.sound.custom_sound.is_none());
    }

    #[test]
    fn test_serialized_sections_use_snake_case_keys() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["general"]["log_file"], "reminder_log.txt");
        assert_eq!(json["developer"]["review_reminders"], true);
        assert!(json["sound"]["git_sound"].is_null());
        assert_eq!(json["messages"]["default"], "Time to take a break!");
    }
}
