//! Interactive selectors that feed date and time values into the form.

pub mod date_grid;
pub mod wheel;

pub use date_grid::{DateGridPicker, DayCell};
pub use wheel::{Meridiem, ScrollBehavior, ScrollCommand, WheelColumn, WheelSelection, WheelTimePicker};
