use std::fmt;

/// Application error types, one per collaborator the reminder loop talks to.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Errors reading, parsing or writing the settings file
    Config(String),
    /// Errors appending to the reminder log
    Log(String),
    /// Errors related to desktop notification delivery
    Notification(String),
    /// Errors related to audio output or decoding
    Sound(String),
    /// Errors installing the interrupt handler
    Signal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Log(msg) => write!(f, "Log error: {}", msg),
            AppError::Notification(msg) => write!(f, "Notification error: {}", msg),
            AppError::Sound(msg) => write!(f, "Sound error: {}", msg),
            AppError::Signal(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Convenience constructors
impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }

    pub fn log<S: Into<String>>(msg: S) -> Self {
        AppError::Log(msg.into())
    }

    pub fn notification<S: Into<String>>(msg: S) -> Self {
        AppError::Notification(msg.into())
    }

    pub fn sound<S: Into<String>>(msg: S) -> Self {
        AppError::Sound(msg.into())
    }

    pub fn signal<S: Into<String>>(msg: S) -> Self {
        AppError::Signal(msg.into())
    }
}

#[cfg(test)]
impl AppError {
    /// Errors that may stop the process. Everything else is reported and
    /// the loop carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Config(_) | AppError::Signal(_))
    }
}

/// Result type alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::config("file not found");
        assert_eq!(err.to_string(), "Config error: file not found");
    }

    #[test]
    fn test_error_constructors() {
        let log_err = AppError::log("test");
        assert!(matches!(log_err, AppError::Log(_)));

        let sound_err = AppError::sound("test");
        assert!(matches!(sound_err, AppError::Sound(_)));
    }

    #[test]
    fn test_only_startup_errors_are_fatal() {
        assert!(AppError::config("bad json").is_fatal());
        assert!(AppError::signal("no handler").is_fatal());
        assert!(!AppError::log("disk full").is_fatal());
        assert!(!AppError::notification("no daemon").is_fatal());
        assert!(!AppError::sound("no device").is_fatal());
    }
}
