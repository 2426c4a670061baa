//! Calendar event types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datetime::LocalDateTime;
use crate::error::{CalendarError, CalendarResult};

pub const DEFAULT_COLOR: &str = "#1e2a78";

/// Opaque event identifier, generated when an event is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn generate() -> Self {
        EventId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recurrence tag. Stored with the event, never expanded into instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Repeat {
    pub const ALL: [Repeat; 5] = [
        Repeat::None,
        Repeat::Daily,
        Repeat::Weekly,
        Repeat::Monthly,
        Repeat::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Repeat::None => "none",
            Repeat::Daily => "daily",
            Repeat::Weekly => "weekly",
            Repeat::Monthly => "monthly",
            Repeat::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Repeat::None => "반복 안함",
            Repeat::Daily => "매일",
            Repeat::Weekly => "매주",
            Repeat::Monthly => "매월",
            Repeat::Yearly => "매년",
        }
    }
}

impl FromStr for Repeat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Repeat::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CalendarError::Parse(format!("Unknown repeat '{}'", s)))
    }
}

/// Display color token, `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn parse(s: &str) -> CalendarResult<Self> {
        let s = s.trim();
        let valid = s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit());

        if !valid {
            return Err(CalendarError::Parse(format!(
                "Invalid color '{}'. Expected #rrggbb",
                s
            )));
        }
        Ok(Color(s.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| {
            self.0
                .get(i..i + 2)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .unwrap_or(0)
        };
        (channel(1), channel(3), channel(5))
    }
}

impl TryFrom<String> for Color {
    type Error = CalendarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color(DEFAULT_COLOR.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar event as held by the event store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub start: LocalDateTime,
    /// Absent for open-ended events. When present it is never before `start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<LocalDateTime>,
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default)]
    pub repeat: Repeat,
    #[serde(default)]
    pub color: Color,
    pub created_by: UserId,
}

impl CalendarEvent {
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.created_by == user
    }

    /// End for display purposes: an open-ended event ends where it starts.
    pub fn display_end(&self) -> LocalDateTime {
        self.end.unwrap_or(self.start)
    }

    /// Whether any part of the event falls on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.start.date() <= date && date <= self.display_end().date()
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_event() -> CalendarEvent {
        CalendarEvent {
            id: EventId::from("e1"),
            title: "가족 모임".to_string(),
            start: LocalDateTime::parse("2026-02-07T09:00").unwrap(),
            end: Some(LocalDateTime::parse("2026-02-08T10:00").unwrap()),
            all_day: false,
            memo: None,
            repeat: Repeat::None,
            color: Color::parse("#3b82f6").unwrap(),
            created_by: UserId::new("userA"),
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(EventId::generate(), EventId::generate());
    }

    #[test]
    fn test_repeat_from_str() {
        assert_eq!("weekly".parse::<Repeat>().unwrap(), Repeat::Weekly);
        assert!("fortnightly".parse::<Repeat>().is_err());
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#3B82F6").unwrap().as_str(), "#3b82f6");
        assert!(Color::parse("blue").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#12345g").is_err());
        assert_eq!(Color::parse("#1e2a78").unwrap().rgb(), (0x1e, 0x2a, 0x78));
    }

    #[test]
    fn test_occurs_on_spans_dates() {
        let event = make_test_event();
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2026, 2, 7).unwrap()));
        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()));
    }

    #[test]
    fn test_open_ended_event_displays_as_its_start() {
        let mut event = make_test_event();
        event.end = None;
        assert_eq!(event.display_end(), event.start);
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2026, 2, 8).unwrap()));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(make_test_event()).unwrap();
        assert_eq!(json["start"], "2026-02-07T09:00");
        assert_eq!(json["allDay"], false);
        assert_eq!(json["repeat"], "none");
        assert_eq!(json["createdBy"], "userA");
        assert!(json.get("memo").is_none());
    }
}
