//! Message composition: pure functions from settings and time of day to
//! reminder text.

use crate::config::{
    DOC_EVERY_HOURS, DOC_REMINDER, FALLBACK_AFTERNOON, FALLBACK_DEFAULT, FALLBACK_EVENING,
    FALLBACK_GIT_MESSAGE, FALLBACK_MORNING, GENERAL_TIMEOUT_SECS, GENERAL_TITLE, GIT_TIMEOUT_SECS,
    GIT_TITLE, REVIEW_EVERY_HOURS, REVIEW_REMINDER, TEST_EVERY_HOURS, TEST_REMINDER,
};
use crate::reminder::{Reminder, ReminderKind};
use crate::settings::Settings;
use chrono::{NaiveTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    /// Everything else, including the final minute 23:59
    Night,
}

/// Bucket a time of day into `[06:00,12:00)`, `[12:00,18:00)`,
/// `[18:00,23:59)` or the rest.
pub fn day_period(now: NaiveTime) -> DayPeriod {
    let minutes = now.hour() * 60 + now.minute();
    match minutes {
        m if (6 * 60..12 * 60).contains(&m) => DayPeriod::Morning,
        m if (12 * 60..18 * 60).contains(&m) => DayPeriod::Afternoon,
        m if (18 * 60..23 * 60 + 59).contains(&m) => DayPeriod::Evening,
        _ => DayPeriod::Night,
    }
}

fn or_fallback<'a>(configured: &'a str, fallback: &'a str) -> &'a str {
    if configured.trim().is_empty() {
        fallback
    } else {
        configured
    }
}

/// Time-of-day message, prefixed with the urgency tag unless urgency is normal
pub fn time_based_message(settings: &Settings, now: NaiveTime) -> String {
    let messages = &settings.messages;
    let base = match day_period(now) {
        DayPeriod::Morning => or_fallback(&messages.morning, FALLBACK_MORNING),
        DayPeriod::Afternoon => or_fallback(&messages.afternoon, FALLBACK_AFTERNOON),
        DayPeriod::Evening => or_fallback(&messages.evening, FALLBACK_EVENING),
        DayPeriod::Night => or_fallback(&messages.default, FALLBACK_DEFAULT),
    };

    match settings.general.urgency.tag() {
        Some(tag) => format!("{} {}", tag, base),
        None => base.to_string(),
    }
}

fn git_message(settings: &Settings) -> &str {
    or_fallback(&settings.developer.git_message, FALLBACK_GIT_MESSAGE)
}

/// Developer nudges for the current hour, one per line.
///
/// The git line depends only on the toggle; its own cadence is handled by
/// the scheduler's git timer.
pub fn developer_reminder(settings: &Settings, now: NaiveTime) -> Option<String> {
    let developer = &settings.developer;
    let hour = now.hour();
    let mut lines: Vec<&str> = Vec::new();

    if developer.git_reminders {
        lines.push(git_message(settings));
    }
    if developer.doc_reminders && hour % DOC_EVERY_HOURS == 0 {
        lines.push(DOC_REMINDER);
    }
    if developer.test_reminders && hour % TEST_EVERY_HOURS == 0 {
        lines.push(TEST_REMINDER);
    }
    if developer.review_reminders && hour % REVIEW_EVERY_HOURS == 0 {
        lines.push(REVIEW_REMINDER);
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Full general reminder: time-of-day message, then a blank line and the
/// developer nudges if there are any.
pub fn general_reminder(settings: &Settings, now: NaiveTime) -> Reminder {
    let headline = time_based_message(settings, now);
    let message = match developer_reminder(settings, now) {
        Some(dev) => format!("{}\n\n{}", headline, dev),
        None => headline.clone(),
    };

    Reminder {
        kind: ReminderKind::General,
        title: GENERAL_TITLE,
        message,
        headline,
        urgency: settings.general.urgency,
        timeout_secs: GENERAL_TIMEOUT_SECS,
    }
}

pub fn git_reminder(settings: &Settings) -> Reminder {
    let message = git_message(settings).to_string();
    Reminder {
        kind: ReminderKind::Git,
        title: GIT_TITLE,
        headline: message.clone(),
        message,
        urgency: settings.general.urgency,
        timeout_secs: GIT_TIMEOUT_SECS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::Urgency;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn all_developer_toggles(settings: &mut Settings, enabled: bool) {
        settings.developer.git_reminders = enabled;
        settings.developer.doc_reminders = enabled;
        settings.developer.test_reminders = enabled;
        settings.developer.review_reminders = enabled;
    }

    #[test]
    fn test_day_period_boundaries() {
        assert_eq!(day_period(at(5, 59)), DayPeriod::Night);
        assert_eq!(day_period(at(6, 0)), DayPeriod::Morning);
        assert_eq!(day_period(at(11, 59)), DayPeriod::Morning);
        assert_eq!(day_period(at(12, 0)), DayPeriod::Afternoon);
        assert_eq!(day_period(at(17, 59)), DayPeriod::Afternoon);
        assert_eq!(day_period(at(18, 0)), DayPeriod::Evening);
        assert_eq!(day_period(at(23, 58)), DayPeriod::Evening);
        assert_eq!(day_period(at(23, 59)), DayPeriod::Night);
        assert_eq!(day_period(at(0, 0)), DayPeriod::Night);
    }

    #[test]
    fn test_each_bucket_returns_configured_text() {
        let settings = Settings::default();
        let messages = &settings.messages;
        assert_eq!(time_based_message(&settings, at(9, 0)), messages.morning);
        assert_eq!(time_based_message(&settings, at(14, 0)), messages.afternoon);
        assert_eq!(time_based_message(&settings, at(20, 0)), messages.evening);
        assert_eq!(time_based_message(&settings, at(3, 0)), messages.default);
    }

    #[test]
    fn test_non_normal_urgency_prefixes_tag() {
        let mut settings = Settings::default();
        settings.general.urgency = Urgency::Low;
        assert_eq!(
            time_based_message(&settings, at(14, 0)),
            format!("[LOW] {}", settings.messages.afternoon)
        );

        settings.general.urgency = Urgency::High;
        assert_eq!(
            time_based_message(&settings, at(9, 30)),
            "[HIGH] Time to start your day! Review your tasks."
        );
    }

    #[test]
    fn test_blank_message_uses_fallback() {
        let mut settings = Settings::default();
        settings.messages.morning = "   ".to_string();
        assert_eq!(time_based_message(&settings, at(8, 0)), FALLBACK_MORNING);
    }

    #[test]
    fn test_developer_reminder_none_when_all_disabled() {
        let mut settings = Settings::default();
        all_developer_toggles(&mut settings, false);
        for hour in 0..24 {
            assert_eq!(developer_reminder(&settings, at(hour, 0)), None);
        }
    }

    #[test]
    fn test_developer_reminder_midnight_includes_all() {
        let mut settings = Settings::default();
        all_developer_toggles(&mut settings, true);
        let text = developer_reminder(&settings, at(0, 10)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                settings.developer.git_message.as_str(),
                DOC_REMINDER,
                TEST_REMINDER,
                REVIEW_REMINDER,
            ]
        );
    }

    #[test]
    fn test_developer_reminder_one_am_only_git() {
        let mut settings = Settings::default();
        all_developer_toggles(&mut settings, true);
        assert_eq!(
            developer_reminder(&settings, at(1, 0)),
            Some(settings.developer.git_message.clone())
        );

        settings.developer.git_reminders = false;
        assert_eq!(developer_reminder(&settings, at(1, 0)), None);
    }

    #[test]
    fn test_developer_reminder_moduli() {
        let mut settings = Settings::default();
        all_developer_toggles(&mut settings, true);
        settings.developer.git_reminders = false;

        assert_eq!(
            developer_reminder(&settings, at(8, 0)),
            Some(DOC_REMINDER.to_string())
        );
        assert_eq!(
            developer_reminder(&settings, at(9, 0)),
            Some(REVIEW_REMINDER.to_string())
        );
        assert_eq!(
            developer_reminder(&settings, at(12, 0)),
            Some(format!("{}\n{}\n{}", DOC_REMINDER, TEST_REMINDER, REVIEW_REMINDER))
        );
    }

    #[test]
    fn test_general_reminder_scenario() {
        let mut settings = Settings::default();
        settings.general.frequency = 60;
        settings.general.urgency = Urgency::High;

        let reminder = general_reminder(&settings, at(9, 30));
        assert_eq!(reminder.kind, ReminderKind::General);
        assert_eq!(
            reminder.headline,
            "[HIGH] Time to start your day! Review your tasks."
        );
        // hour 9: review fires (9 % 3 == 0), doc does not
        assert_eq!(
            reminder.message,
            format!(
                "[HIGH] Time to start your day! Review your tasks.\n\n{}\n{}",
                settings.developer.git_message, REVIEW_REMINDER
            )
        );
    }

    #[test]
    fn test_general_reminder_without_developer_lines() {
        let mut settings = Settings::default();
        all_developer_toggles(&mut settings, false);
        let reminder = general_reminder(&settings, at(14, 0));
        assert_eq!(reminder.message, settings.messages.afternoon);
        assert_eq!(reminder.message, reminder.headline);
    }

    #[test]
    fn test_git_reminder_uses_configured_message() {
        let mut settings = Settings::default();
        settings.developer.git_message = "push it".to_string();
        let reminder = git_reminder(&settings);
        assert_eq!(reminder.kind, ReminderKind::Git);
        assert_eq!(reminder.message, "push it");
        assert_eq!(reminder.title, GIT_TITLE);
        assert_eq!(reminder.timeout_secs, GIT_TIMEOUT_SECS);
    }
}
