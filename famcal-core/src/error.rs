//! Error types for calendar operations.

use thiserror::Error;

use crate::modal::ModalState;

/// Errors that can occur while editing or committing calendar events.
///
/// None of these are fatal: every operation that returns one leaves the
/// store and the edit buffer exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Event title must not be empty")]
    EmptyTitle,

    #[error("Event end {end} is before its start {start}")]
    InvalidRange { start: String, end: String },

    #[error("User '{user}' may not modify event '{event_id}'")]
    PermissionDenied { event_id: String, user: String },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Time cannot be changed while the event is all-day")]
    TimeLocked,

    #[error("No event modal is open")]
    NoOpenModal,

    #[error("Expected the {expected} modal, but the {actual} modal is open")]
    WrongModal {
        expected: ModalState,
        actual: ModalState,
    },

    #[error("No {0} picker is open")]
    PickerClosed(&'static str),

    #[error("Minute step must divide 60 evenly, got {0}")]
    InvalidMinuteStep(u32),

    #[error("{0} is not a selectable value")]
    InvalidSelection(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid calendar grid event: {0}")]
    InvalidGridEvent(String),
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
