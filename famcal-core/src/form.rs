//! The edit buffer bound to an open event modal.
//!
//! A `FormBuffer` is a disposable working copy of an event. Its date-time
//! fields can only be changed through the edit operations below, each of which
//! repairs the other endpoint so that `end >= start` keeps holding.

use chrono::{NaiveDate, NaiveTime};

use crate::datetime::{LocalDateTime, end_of_day};
use crate::error::{CalendarError, CalendarResult};
use crate::event::{CalendarEvent, Color, EventId, Repeat, UserId};
use crate::normalize::{ensure_order_after_end_change, repair_end};

/// Hour a new event starts at when created from a date cell.
pub const DEFAULT_START_HOUR: u32 = 9;
/// Length of a new event created from a date cell.
pub const DEFAULT_SLOT_HOURS: i64 = 1;

/// Which end of an event an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormBuffer {
    /// None until the event is committed to the store.
    id: Option<EventId>,
    title: String,
    start: LocalDateTime,
    end: Option<LocalDateTime>,
    memo: String,
    repeat: Repeat,
    color: Color,
    created_by: UserId,
    all_day: bool,
    /// Wall-clock times to restore when all-day is switched off again.
    prev_start_time: NaiveTime,
    prev_end_time: NaiveTime,
}

impl FormBuffer {
    /// Blank buffer for a new event: one hour from 09:00 on `date`.
    pub fn for_new_event(date: NaiveDate, author: UserId, color: Color) -> Self {
        let start = LocalDateTime::new(date, default_start_time());
        let end = start.add_hours(DEFAULT_SLOT_HOURS);

        FormBuffer {
            id: None,
            title: String::new(),
            start,
            end: Some(end),
            memo: String::new(),
            repeat: Repeat::None,
            color,
            created_by: author,
            all_day: false,
            prev_start_time: start.time(),
            prev_end_time: end.time(),
        }
    }

    /// Buffer pre-populated from an existing event.
    pub fn from_event(event: &CalendarEvent) -> Self {
        FormBuffer {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            start: event.start,
            end: event.end,
            memo: event.memo.clone().unwrap_or_default(),
            repeat: event.repeat,
            color: event.color.clone(),
            created_by: event.created_by.clone(),
            all_day: event.all_day,
            prev_start_time: event.start.time(),
            prev_end_time: event.display_end().time(),
        }
    }

    pub fn id(&self) -> Option<&EventId> {
        self.id.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> LocalDateTime {
        self.start
    }

    pub fn end(&self) -> Option<LocalDateTime> {
        self.end
    }

    /// End as shown in the form; an open-ended event shows its start.
    pub fn display_end(&self) -> LocalDateTime {
        self.end.unwrap_or(self.start)
    }

    pub fn value(&self, endpoint: Endpoint) -> LocalDateTime {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.display_end(),
        }
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn all_day(&self) -> bool {
        self.all_day
    }

    pub fn prev_start_time(&self) -> NaiveTime {
        self.prev_start_time
    }

    pub fn prev_end_time(&self) -> NaiveTime {
        self.prev_end_time
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.memo = memo.into();
    }

    pub fn set_repeat(&mut self, repeat: Repeat) {
        self.repeat = repeat;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Trimmed title, or `EmptyTitle` if nothing is left.
    pub fn committed_title(&self) -> CalendarResult<String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CalendarError::EmptyTitle);
        }
        Ok(title.to_string())
    }

    pub fn committed_memo(&self) -> Option<String> {
        if self.memo.is_empty() {
            None
        } else {
            Some(self.memo.clone())
        }
    }

    /// Switch all-day on or off.
    ///
    /// On: remember the current times, then pin start to 00:00 and end to
    /// 23:59 on their own dates. Off: put the remembered times back onto the
    /// current dates. Both directions finish with the start-change repair.
    pub fn set_all_day(&mut self, all_day: bool) {
        if self.all_day == all_day {
            return;
        }

        if all_day {
            self.prev_start_time = self.start.time();
            self.prev_end_time = self.display_end().time();

            let start = self.start.start_of_day();
            self.end = repair_end(start, self.end.map(LocalDateTime::end_of_day));
            self.start = start;
        } else {
            let start = self.start.with_time(self.prev_start_time);
            let prev_end_time = self.prev_end_time;
            self.end = repair_end(start, self.end.map(|end| end.with_time(prev_end_time)));
            self.start = start;
        }

        self.all_day = all_day;
    }

    pub fn change_date(&mut self, endpoint: Endpoint, date: NaiveDate) {
        match endpoint {
            Endpoint::Start => self.change_start_date(date),
            Endpoint::End => self.change_end_date(date),
        }
    }

    /// Errors with `TimeLocked` while the event is all-day.
    pub fn change_time(&mut self, endpoint: Endpoint, time: NaiveTime) -> CalendarResult<()> {
        match endpoint {
            Endpoint::Start => self.change_start_time(time),
            Endpoint::End => self.change_end_time(time),
        }
    }

    /// Move the start to another date, keeping its time of day.
    pub fn change_start_date(&mut self, date: NaiveDate) {
        let mut start = self.start.with_date(date);
        let mut end = self.end;

        if self.all_day {
            start = start.start_of_day();
            end = end.map(LocalDateTime::end_of_day);
        }

        let mut end = repair_end(start, end);
        if self.all_day {
            // A repaired end lands at 01:00; keep it pinned to the end of its day.
            end = end.map(LocalDateTime::end_of_day);
        }

        self.start = start;
        self.end = end;
    }

    /// Move the end to another date, keeping its time of day.
    pub fn change_end_date(&mut self, date: NaiveDate) {
        let mut end = self.display_end().with_date(date);
        let mut start = self.start;

        if self.all_day {
            end = end.with_time(end_of_day());
            start = start.start_of_day();
        }

        let (mut start, end) = ensure_order_after_end_change(start, end);
        if self.all_day {
            start = start.start_of_day();
        }

        self.start = start;
        self.end = Some(end);
    }

    pub fn change_start_time(&mut self, time: NaiveTime) -> CalendarResult<()> {
        if self.all_day {
            return Err(CalendarError::TimeLocked);
        }

        let start = self.start.with_time(time);
        self.end = repair_end(start, self.end);
        self.start = start;
        self.prev_start_time = time;
        Ok(())
    }

    pub fn change_end_time(&mut self, time: NaiveTime) -> CalendarResult<()> {
        if self.all_day {
            return Err(CalendarError::TimeLocked);
        }

        let end = self.display_end().with_time(time);
        let (start, end) = ensure_order_after_end_change(self.start, end);
        self.start = start;
        self.end = Some(end);
        self.prev_end_time = time;
        Ok(())
    }

    /// Copy the buffer into a new event with a freshly generated id.
    pub(crate) fn to_new_event(&self, author: &UserId) -> CalendarResult<CalendarEvent> {
        Ok(CalendarEvent {
            id: EventId::generate(),
            title: self.committed_title()?,
            start: self.start,
            end: self.end,
            all_day: self.all_day,
            memo: self.committed_memo(),
            repeat: self.repeat,
            color: self.color.clone(),
            created_by: author.clone(),
        })
    }

    /// Copy the editable fields onto an existing event. `id` and
    /// `created_by` are never touched.
    pub(crate) fn apply_to(&self, event: &mut CalendarEvent) -> CalendarResult<()> {
        event.title = self.committed_title()?;
        event.start = self.start;
        event.end = self.end;
        event.all_day = self.all_day;
        event.memo = self.committed_memo();
        event.repeat = self.repeat;
        event.color = self.color.clone();
        Ok(())
    }
}

fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Whether start/end respect the ordering invariant.
pub fn is_ordered(start: LocalDateTime, end: Option<LocalDateTime>) -> bool {
    end.is_none_or(|end| end >= start)
}
