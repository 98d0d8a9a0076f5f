//! Reminder loop: two timers driven by one once-a-second tick.
//!
//! The git timer counts minutes since it last fired. The general timer is
//! aligned to the wall clock: it fires on the first tick inside each new
//! `frequency`-minute slot since the Unix epoch, so `frequency = 60` means
//! on the hour.

use crate::compose::{general_reminder, git_reminder};
use crate::config::POLL_INTERVAL_SECS;
use crate::error::AppError;
use crate::journal::append_entry;
use crate::notify::Notifier;
use crate::reminder::Reminder;
use crate::settings::Settings;
use crate::sound::{resolve_sound, SoundPlayer};
use chrono::{DateTime, Local};
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// `None` when the span does not fit in an `i64` of seconds
fn minutes_to_secs(minutes: u64) -> Option<i64> {
    i64::try_from(minutes).ok()?.checked_mul(60)
}

/// Length of a general-reminder slot, or `None` when the frequency is 0 or
/// too large to ever come round
pub fn general_period_secs(settings: &Settings) -> Option<i64> {
    match settings.general.frequency {
        0 => None,
        minutes => minutes_to_secs(minutes),
    }
}

/// Git reminder interval, or `None` when it is too large to ever elapse
pub fn git_interval_secs(settings: &Settings) -> Option<i64> {
    minutes_to_secs(settings.developer.git_interval)
}

/// Mutable timer state carried from one tick to the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerState {
    /// Unix seconds of the last git reminder (process start before the first)
    pub last_git_reminder: i64,
    /// Index of the last wall-clock slot a general reminder fired in
    pub last_general_slot: i64,
}

impl SchedulerState {
    /// Start both timers at `started_at`. A start exactly on a slot
    /// boundary still counts as due for that slot.
    pub fn new(settings: &Settings, started_at: i64) -> Self {
        let last_general_slot = general_period_secs(settings)
            .map(|period| (started_at - 1).div_euclid(period))
            .unwrap_or(0);
        Self {
            last_git_reminder: started_at,
            last_general_slot,
        }
    }

    pub fn git_due(&mut self, settings: &Settings, now: i64) -> bool {
        if !settings.developer.git_reminders {
            return false;
        }
        let Some(interval) = git_interval_secs(settings) else {
            return false;
        };
        if now.saturating_sub(self.last_git_reminder) >= interval {
            self.last_git_reminder = now;
            true
        } else {
            false
        }
    }

    pub fn general_due(&mut self, settings: &Settings, now: i64) -> bool {
        let Some(period) = general_period_secs(settings) else {
            return false;
        };
        let slot = now.div_euclid(period);
        if slot > self.last_general_slot {
            self.last_general_slot = slot;
            true
        } else {
            false
        }
    }

    /// Reminders due at `now`, git first
    pub fn tick(&mut self, settings: &Settings, now: DateTime<Local>) -> Vec<Reminder> {
        let secs = now.timestamp();
        let mut due = Vec::new();
        if self.git_due(settings, secs) {
            due.push(git_reminder(settings));
        }
        if self.general_due(settings, secs) {
            due.push(general_reminder(settings, now.time()));
        }
        due
    }
}

/// Sends a reminder to every output. Failures are reported and returned,
/// never propagated.
pub struct Dispatcher<N, P> {
    notifier: N,
    player: P,
}

impl<N: Notifier, P: SoundPlayer> Dispatcher<N, P> {
    pub fn new(notifier: N, player: P) -> Self {
        Self { notifier, player }
    }

    pub fn deliver(
        &self,
        settings: &Settings,
        reminder: &Reminder,
        now: DateTime<Local>,
    ) -> Vec<AppError> {
        let mut failures = Vec::new();

        if let Err(e) = self.notifier.notify(
            reminder.title,
            &reminder.message,
            reminder.timeout_secs,
            reminder.urgency,
        ) {
            warn!("Error sending notification: {}", e);
            failures.push(e);
        }

        println!("{}", reminder.echo_line(now.time()));

        if let Some(source) = resolve_sound(&settings.sound, reminder.kind) {
            if let Err(e) = self.player.play(&source) {
                warn!("🔇 Error playing sound: {}", e);
                failures.push(e);
            }
        }

        if let Err(e) = append_entry(&settings.general.log_file, now, &reminder.log_line()) {
            warn!("Error writing to log file: {}", e);
            failures.push(e);
        }

        failures
    }
}

/// Tick once per second until `stop` is raised
pub fn run_loop<N: Notifier, P: SoundPlayer>(
    settings: &Settings,
    dispatcher: &Dispatcher<N, P>,
    stop: &AtomicBool,
) {
    let mut state = SchedulerState::new(settings, Local::now().timestamp());
    debug!("Scheduler started: {:?}", state);

    while !stop.load(Ordering::Relaxed) {
        let now = Local::now();
        for reminder in state.tick(settings, now) {
            dispatcher.deliver(settings, &reminder, now);
        }
        thread::sleep(Duration::from_secs(POLL_INTERVAL_SECS));
    }

    println!("\n✅ Reminder stopped by user");
}
