//! Core types for the famcal calendar.
//!
//! This crate holds everything the calendar screen needs that is not rendering:
//! - `datetime` and `normalize` for naive local date-times and the start/end repair rules
//! - `event` and `store` for the in-memory event list and its permission checks
//! - `form` and `modal` for the edit buffer and the modal/picker state machine
//! - `picker` for the wheel time picker and the month date grid
//! - `grid` for the payloads exchanged with the calendar-grid widget

pub mod datetime;
pub mod error;
pub mod event;
pub mod form;
pub mod grid;
pub mod labels;
pub mod modal;
pub mod normalize;
pub mod picker;
pub mod store;

pub use datetime::LocalDateTime;
pub use error::{CalendarError, CalendarResult};
pub use event::{CalendarEvent, Color, EventId, Repeat, UserId};
pub use form::{Endpoint, FormBuffer};
pub use modal::{CalendarController, ModalState, PickerState};
pub use store::EventStore;
