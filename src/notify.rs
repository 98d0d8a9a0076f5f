use crate::error::{AppError, AppResult};
use crate::reminder::Urgency;
use notify_rust::{Notification, Timeout};

/// Something that can put a reminder in front of the user
pub trait Notifier {
    fn notify(
        &self,
        title: &str,
        message: &str,
        timeout_secs: u32,
        urgency: Urgency,
    ) -> AppResult<()>;
}

/// Native desktop notifications (libnotify / macOS / Windows toast)
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(
        &self,
        title: &str,
        message: &str,
        timeout_secs: u32,
        urgency: Urgency,
    ) -> AppResult<()> {
        let mut notification = Notification::new();
        notification
            .appname("devremind")
            .summary(title)
            .body(message)
            .timeout(Timeout::Milliseconds(timeout_secs.saturating_mul(1000)));

        #[cfg(all(unix, not(target_os = "macos")))]
        notification.urgency(match urgency {
            Urgency::Low => notify_rust::Urgency::Low,
            Urgency::Normal => notify_rust::Urgency::Normal,
            Urgency::High => notify_rust::Urgency::Critical,
        });
        #[cfg(not(all(unix, not(target_os = "macos"))))]
        let _ = urgency;

        notification
            .show()
            .map(|_| ())
            .map_err(|e| AppError::notification(e.to_string()))
    }
}
