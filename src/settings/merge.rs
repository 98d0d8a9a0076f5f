use super::Settings;
use crate::reminder::Urgency;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings as read from disk: any section or key may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialSettings {
    pub general: Option<PartialGeneral>,
    pub messages: Option<PartialMessages>,
    pub developer: Option<PartialDeveloper>,
    pub sound: Option<PartialSound>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialGeneral {
    pub frequency: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub urgency: Option<Urgency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialMessages {
    pub morning: Option<String>,
    pub afternoon: Option<String>,
    pub evening: Option<String>,
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialDeveloper {
    pub git_reminders: Option<bool>,
    pub git_interval: Option<u64>,
    pub git_message: Option<String>,
    pub doc_reminders: Option<bool>,
    pub test_reminders: Option<bool>,
    pub review_reminders: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialSound {
    pub enabled: Option<bool>,
    pub custom_sound: Option<PathBuf>,
    pub git_sound: Option<PathBuf>,
}

fn take<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Overlay loaded values on top of `defaults`, one leaf at a time.
/// Absent sections and keys keep the default value.
pub fn merge_settings(defaults: &Settings, loaded: PartialSettings) -> Settings {
    let mut merged = defaults.clone();

    if let Some(general) = loaded.general {
        take(&mut merged.general.frequency, general.frequency);
        take(&mut merged.general.log_file, general.log_file);
        take(&mut merged.general.urgency, general.urgency);
    }

    if let Some(messages) = loaded.messages {
        take(&mut merged.messages.morning, messages.morning);
        take(&mut merged.messages.afternoon, messages.afternoon);
        take(&mut merged.messages.evening, messages.evening);
        take(&mut merged.messages.default, messages.default);
    }

    if let Some(developer) = loaded.developer {
        take(&mut merged.developer.git_reminders, developer.git_reminders);
        take(&mut merged.developer.git_interval, developer.git_interval);
        take(&mut merged.developer.git_message, developer.git_message);
        take(&mut merged.developer.doc_reminders, developer.doc_reminders);
        take(&mut merged.developer.test_reminders, developer.test_reminders);
        take(&mut merged.developer.review_reminders, developer.review_reminders);
    }

    if let Some(sound) = loaded.sound {
        take(&mut merged.sound.enabled, sound.enabled);
        take(&mut merged.sound.custom_sound, sound.custom_sound.map(Some));
        take(&mut merged.sound.git_sound, sound.git_sound.map(Some));
    }

    merged
}
