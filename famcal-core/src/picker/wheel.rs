//! Wheel-style time picker.
//!
//! Three independently scrolled columns: meridiem, hour (1-12) and minute (in
//! `minutes_step` increments). Clicking a value commits immediately, returning
//! the 24-hour time for the form plus a scroll command that smoothly centres
//! the clicked column. External value changes snap every column into place
//! without animation; an hour click that rolls the meridiem over counts as one
//! for the meridiem column.

use chrono::{NaiveTime, Timelike};

use crate::error::{CalendarError, CalendarResult};

pub const DEFAULT_MINUTES_STEP: u32 = 5;

/// Height of one wheel row.
pub const ITEM_HEIGHT: f64 = 44.0;
/// Rows visible in a column.
pub const VISIBLE_ITEMS: usize = 5;

/// Spacer above the first and below the last row.
pub const PADDING: f64 = ((VISIBLE_ITEMS - 1) / 2) as f64 * ITEM_HEIGHT;
/// Distance from the top of the viewport to the centred row.
pub const CENTER_OFFSET: f64 = (VISIBLE_ITEMS / 2) as f64 * ITEM_HEIGHT;

/// Offsets closer than this are treated as already in place.
const SCROLL_EPSILON: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub const ALL: [Meridiem; 2] = [Meridiem::Am, Meridiem::Pm];

    pub fn label(&self) -> &'static str {
        match self {
            Meridiem::Am => "오전",
            Meridiem::Pm => "오후",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }

    fn index(&self) -> usize {
        match self {
            Meridiem::Am => 0,
            Meridiem::Pm => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelColumn {
    Meridiem,
    Hour,
    Minute,
}

impl WheelColumn {
    pub const ALL: [WheelColumn; 3] = [WheelColumn::Meridiem, WheelColumn::Hour, WheelColumn::Minute];

    fn slot(&self) -> usize {
        match self {
            WheelColumn::Meridiem => 0,
            WheelColumn::Hour => 1,
            WheelColumn::Minute => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the offset.
    Instant,
    /// Animate to the offset.
    Smooth,
}

/// A request for the view to scroll one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub column: WheelColumn,
    pub offset: f64,
    pub behavior: ScrollBehavior,
}

/// Result of clicking a wheel value.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSelection {
    /// Committed 24-hour time, seconds zeroed.
    pub time: NaiveTime,
    /// Smooth scroll of the clicked column first, then any instant snaps of
    /// columns that moved as a side effect.
    pub scrolls: Vec<ScrollCommand>,
}

#[derive(Debug, Clone)]
pub struct WheelTimePicker {
    minute_options: Vec<u32>,
    meridiem: Meridiem,
    hour12: u32,
    minute: u32,
    offsets: [f64; 3],
}

impl WheelTimePicker {
    pub fn new(minutes_step: u32) -> CalendarResult<Self> {
        if minutes_step == 0 || 60 % minutes_step != 0 {
            return Err(CalendarError::InvalidMinuteStep(minutes_step));
        }
        Ok(Self::with_step(minutes_step))
    }

    fn with_step(minutes_step: u32) -> Self {
        WheelTimePicker {
            minute_options: (0..60).step_by(minutes_step as usize).collect(),
            meridiem: Meridiem::Am,
            hour12: 12,
            minute: 0,
            offsets: [0.0; 3],
        }
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    pub fn hour12(&self) -> u32 {
        self.hour12
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minute_options(&self) -> &[u32] {
        &self.minute_options
    }

    /// The time currently selected on the wheel.
    pub fn value(&self) -> NaiveTime {
        make_time(to_24h(self.meridiem, self.hour12), self.minute)
    }

    /// Current scroll offset of a column.
    pub fn scroll_offset(&self, column: WheelColumn) -> f64 {
        self.offsets[column.slot()]
    }

    /// Labels for the rows of a column, top to bottom.
    pub fn items(&self, column: WheelColumn) -> Vec<String> {
        match column {
            WheelColumn::Meridiem => Meridiem::ALL.iter().map(|m| m.label().to_string()).collect(),
            WheelColumn::Hour => (1..=12).map(|h| format!("{:02}", h)).collect(),
            WheelColumn::Minute => self.minute_options.iter().map(|m| format!("{:02}", m)).collect(),
        }
    }

    /// Index of the selected row in a column.
    pub fn selected_index(&self, column: WheelColumn) -> usize {
        match column {
            WheelColumn::Meridiem => self.meridiem.index(),
            WheelColumn::Hour => (self.hour12 - 1) as usize,
            WheelColumn::Minute => self
                .minute_options
                .iter()
                .position(|m| *m == self.minute)
                .unwrap_or(0),
        }
    }

    /// Mirror an externally changed value, snapping columns that are out of
    /// place. Only columns that actually move produce a command.
    pub fn sync_to(&mut self, time: NaiveTime) -> Vec<ScrollCommand> {
        let (meridiem, hour12) = from_24h(time.hour());
        self.meridiem = meridiem;
        self.hour12 = hour12;
        self.minute = nearest_option(&self.minute_options, time.minute());

        WheelColumn::ALL
            .into_iter()
            .filter_map(|column| self.snap(column))
            .collect()
    }

    pub fn select_meridiem(&mut self, meridiem: Meridiem) -> WheelSelection {
        self.meridiem = meridiem;
        self.commit(WheelColumn::Meridiem)
    }

    /// Select an hour. Moving between 11 and 12 flips the meridiem, the way a
    /// clock rolls over at noon and midnight.
    pub fn select_hour(&mut self, hour12: u32) -> CalendarResult<WheelSelection> {
        if !(1..=12).contains(&hour12) {
            return Err(CalendarError::InvalidSelection(format!("hour {}", hour12)));
        }

        self.meridiem = auto_flip(self.hour12, hour12, self.meridiem);
        self.hour12 = hour12;

        let mut selection = self.commit(WheelColumn::Hour);
        selection.scrolls.extend(self.snap(WheelColumn::Meridiem));
        Ok(selection)
    }

    pub fn select_minute(&mut self, minute: u32) -> CalendarResult<WheelSelection> {
        if !self.minute_options.contains(&minute) {
            return Err(CalendarError::InvalidSelection(format!("minute {}", minute)));
        }

        self.minute = minute;
        Ok(self.commit(WheelColumn::Minute))
    }

    fn commit(&mut self, column: WheelColumn) -> WheelSelection {
        let offset = centered_offset(self.selected_index(column));
        self.offsets[column.slot()] = offset;

        WheelSelection {
            time: self.value(),
            scrolls: vec![ScrollCommand {
                column,
                offset,
                behavior: ScrollBehavior::Smooth,
            }],
        }
    }

    // Jump a column to its selected row, if it is not there already.
    fn snap(&mut self, column: WheelColumn) -> Option<ScrollCommand> {
        let target = centered_offset(self.selected_index(column));
        let slot = column.slot();
        if (self.offsets[slot] - target).abs() < SCROLL_EPSILON {
            return None;
        }
        self.offsets[slot] = target;
        Some(ScrollCommand {
            column,
            offset: target,
            behavior: ScrollBehavior::Instant,
        })
    }
}

impl Default for WheelTimePicker {
    fn default() -> Self {
        Self::with_step(DEFAULT_MINUTES_STEP)
    }
}

/// 12-hour clock to 24-hour: 12 AM is 0, 12 PM is 12.
pub fn to_24h(meridiem: Meridiem, hour12: u32) -> u32 {
    match (meridiem, hour12) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    }
}

/// 24-hour clock to meridiem and 1-12 hour.
pub fn from_24h(hour24: u32) -> (Meridiem, u32) {
    let meridiem = if hour24 >= 12 { Meridiem::Pm } else { Meridiem::Am };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    (meridiem, hour12)
}

pub fn auto_flip(prev_hour12: u32, next_hour12: u32, meridiem: Meridiem) -> Meridiem {
    match (prev_hour12, next_hour12) {
        (11, 12) | (12, 11) => meridiem.flipped(),
        _ => meridiem,
    }
}

/// Scroll offset that centres row `index` in the viewport.
pub fn centered_offset(index: usize) -> f64 {
    (PADDING + index as f64 * ITEM_HEIGHT - CENTER_OFFSET).max(0.0)
}

// Ties go to the earlier option.
fn nearest_option(options: &[u32], minute: u32) -> u32 {
    options
        .iter()
        .copied()
        .min_by_key(|option| option.abs_diff(minute))
        .unwrap_or(0)
}

fn make_time(hour24: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour24, minute, 0).unwrap_or(NaiveTime::MIN)
}
