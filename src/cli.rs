use crate::reminder::Urgency;
use crate::settings::Settings;
use clap::Parser;
use std::path::PathBuf;

/// Developer Reminder Tool
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "devremind", version, about)]
pub struct Cli {
    /// Path to custom config file
    #[arg(long, value_name = "PATH", env = "DEVREMIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reminder frequency in minutes
    #[arg(long, value_name = "MINUTES")]
    pub frequency: Option<u64>,

    /// Git reminder frequency in minutes
    #[arg(long, value_name = "MINUTES")]
    pub git_interval: Option<u64>,

    /// Notification urgency level
    #[arg(long, value_enum)]
    pub urgency: Option<Urgency>,

    /// Path to custom sound file
    #[arg(long, value_name = "PATH")]
    pub sound: Option<PathBuf>,

    /// Path to custom git reminder sound
    #[arg(long, value_name = "PATH")]
    pub git_sound: Option<PathBuf>,

    /// Disable all sounds
    #[arg(long)]
    pub no_sound: bool,

    /// Enable git commit reminders
    #[arg(long, overrides_with = "no_git_reminders")]
    pub git_reminders: bool,

    /// Disable git commit reminders
    #[arg(long, overrides_with = "git_reminders")]
    pub no_git_reminders: bool,

    /// Enable documentation reminders
    #[arg(long, overrides_with = "no_doc_reminders")]
    pub doc_reminders: bool,

    /// Disable documentation reminders
    #[arg(long, overrides_with = "doc_reminders")]
    pub no_doc_reminders: bool,

    /// Enable test-writing reminders
    #[arg(long, overrides_with = "no_test_reminders")]
    pub test_reminders: bool,

    /// Disable test-writing reminders
    #[arg(long, overrides_with = "test_reminders")]
    pub no_test_reminders: bool,

    /// Enable code review reminders
    #[arg(long, overrides_with = "no_review_reminders")]
    pub review_reminders: bool,

    /// Disable code review reminders
    #[arg(long, overrides_with = "review_reminders")]
    pub no_review_reminders: bool,

    /// Write the effective settings to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<PathBuf>,
}

/// `Some(true)` for `--x`, `Some(false)` for `--no-x`, `None` if neither
fn toggle(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    /// Overlay every flag that was given onto `settings`
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(frequency) = self.frequency {
            settings.general.frequency = frequency;
        }
        if let Some(urgency) = self.urgency {
            settings.general.urgency = urgency;
        }
        if let Some(git_interval) = self.git_interval {
            settings.developer.git_interval = git_interval;
        }

        let developer = &mut settings.developer;
        if let Some(on) = toggle(self.git_reminders, self.no_git_reminders) {
            developer.git_reminders = on;
        }
        if let Some(on) = toggle(self.doc_reminders, self.no_doc_reminders) {
            developer.doc_reminders = on;
        }
        if let Some(on) = toggle(self.test_reminders, self.no_test_reminders) {
            developer.test_reminders = on;
        }
        if let Some(on) = toggle(self.review_reminders, self.no_review_reminders) {
            developer.review_reminders = on;
        }

        if let Some(sound) = &self.sound {
            settings.sound.custom_sound = Some(sound.clone());
        }
        if let Some(git_sound) = &self.git_sound {
            settings.sound.git_sound = Some(git_sound.clone());
        }
        if self.no_sound {
            settings.sound.enabled = false;
        }
    }
}
