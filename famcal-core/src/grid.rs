//! Payloads exchanged with the calendar-grid widget.
//!
//! The grid hands over loosely-shaped JSON from its date-click and
//! event-click callbacks. Those payloads are deserialized here and validated
//! into typed core values before anything else sees them. `GridEvent` is the
//! shape handed back to the grid for rendering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datetime::{LocalDateTime, parse_date};
use crate::error::{CalendarError, CalendarResult};
use crate::event::{CalendarEvent, Color, EventId, Repeat, UserId};

/// Date-cell click.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDateClick {
    pub date_str: String,
}

impl GridDateClick {
    /// The clicked date. Time-grid views send a full date-time; its date is used.
    pub fn date(&self) -> CalendarResult<NaiveDate> {
        match self.date_str.split_once('T') {
            Some((date, _)) => parse_date(date),
            None => parse_date(&self.date_str),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridExtendedProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repeat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Existing-event click.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridEventClick {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_str: Option<String>,
    #[serde(default)]
    pub end_str: Option<String>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub extended_props: GridExtendedProps,
}

impl TryFrom<GridEventClick> for CalendarEvent {
    type Error = CalendarError;

    fn try_from(click: GridEventClick) -> Result<Self, Self::Error> {
        if click.id.trim().is_empty() {
            return Err(CalendarError::InvalidGridEvent("missing id".into()));
        }

        let start = click
            .start_str
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CalendarError::InvalidGridEvent(format!("event '{}' has no start", click.id)))
            .and_then(LocalDateTime::parse)?;

        let end = match click.end_str.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => Some(LocalDateTime::parse(s)?),
            None => None,
        };

        if end.is_some_and(|end| end < start) {
            return Err(CalendarError::InvalidGridEvent(format!(
                "event '{}' ends before it starts",
                click.id
            )));
        }

        // An unusable color falls back to the default rather than rejecting the click.
        let color = click
            .background_color
            .as_deref()
            .and_then(|c| Color::parse(c).ok())
            .unwrap_or_default();

        let props = click.extended_props;

        Ok(CalendarEvent {
            id: EventId::from(click.id.as_str()),
            title: click.title.unwrap_or_default(),
            start,
            end,
            all_day: click.all_day,
            memo: props.memo.filter(|m| !m.is_empty()),
            repeat: props.repeat.unwrap_or_default(),
            color,
            created_by: UserId::new(props.created_by.unwrap_or_default()),
        })
    }
}

/// Event as rendered by the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub all_day: bool,
    pub background_color: String,
    pub extended_props: GridExtendedProps,
}

impl From<&CalendarEvent> for GridEvent {
    fn from(event: &CalendarEvent) -> Self {
        GridEvent {
            id: event.id.to_string(),
            title: event.title.clone(),
            start: event.start.to_string(),
            end: event.end.map(|e| e.to_string()),
            all_day: event.all_day,
            background_color: event.color.to_string(),
            extended_props: GridExtendedProps {
                memo: event.memo.clone(),
                repeat: Some(event.repeat),
                created_by: Some(event.created_by.to_string()),
            },
        }
    }
}
