use thiserror::Error;

/// Errors from the grid's render state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("box grid is already populated with {count} ids")]
    AlreadyPopulated { count: usize },
}

/// Errors from reading [`AppPrefs`](crate::prefs::AppPrefs).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefsError {
    #[error("invalid log level {value:?}, expected one of trace, debug, info, warn, error")]
    InvalidLogLevel { value: String },
}
