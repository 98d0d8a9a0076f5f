use crate::config::BUNDLED_ALARM;
use crate::error::{AppError, AppResult};
use crate::reminder::ReminderKind;
use crate::settings::SoundSettings;
use kira::sound::static_sound::StaticSoundData;
use kira::{AudioManager, AudioManagerSettings, DefaultBackend};
use std::io::Cursor;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Lets the output device drain after the clip ends
const PLAYBACK_TAIL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq)]
pub enum SoundSource {
    File(PathBuf),
    Bundled,
}

/// Pick the clip for a reminder, or `None` when sound is switched off.
///
/// Git reminders prefer `git_sound`, everything else `custom_sound`. A
/// configured file that does not exist falls back to the bundled alarm.
pub fn resolve_sound(settings: &SoundSettings, kind: ReminderKind) -> Option<SoundSource> {
    if !settings.enabled {
        return None;
    }

    let configured = match (kind, &settings.git_sound) {
        (ReminderKind::Git, Some(git_sound)) => Some(git_sound),
        _ => settings.custom_sound.as_ref(),
    };

    Some(match configured {
        Some(path) if path.exists() => SoundSource::File(path.clone()),
        _ => SoundSource::Bundled,
    })
}

pub trait SoundPlayer {
    /// Play the clip to completion
    fn play(&self, source: &SoundSource) -> AppResult<()>;
}

/// Plays clips through the default audio output with kira
#[derive(Debug, Clone, Copy, Default)]
pub struct KiraPlayer;

impl SoundPlayer for KiraPlayer {
    fn play(&self, source: &SoundSource) -> AppResult<()> {
        let data = match source {
            SoundSource::File(path) => StaticSoundData::from_file(path)
                .map_err(|e| AppError::sound(format!("{}: {}", path.display(), e)))?,
            SoundSource::Bundled => StaticSoundData::from_cursor(Cursor::new(BUNDLED_ALARM))
                .map_err(|e| AppError::sound(format!("bundled alarm: {}", e)))?,
        };
        let duration = data.duration();

        let mut manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| AppError::sound(format!("no audio output: {}", e)))?;
        manager
            .play(data)
            .map_err(|e| AppError::sound(format!("playback failed: {:?}", e)))?;

        // The manager stops playback when dropped
        thread::sleep(duration + PLAYBACK_TAIL);
        Ok(())
    }
}
