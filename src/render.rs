//! TUI rendering traits for famcal types.
//!
//! Extension traits that add colored terminal rendering to famcal-core types
//! using owo_colors.

use chrono::{Datelike, NaiveDate, Weekday};
use famcal_core::labels::{date_label, month_label, time_label, weekday_label};
use famcal_core::picker::wheel::VISIBLE_ITEMS;
use famcal_core::picker::{DateGridPicker, DayCell, WheelColumn, WheelTimePicker};
use famcal_core::{CalendarController, CalendarEvent, Endpoint, FormBuffer, ModalState, PickerState};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let (r, g, b) = self.color.rgb();
        format!(
            "{} {} {}",
            "●".truecolor(r, g, b),
            self.title.bold(),
            render_event_time(self).dimmed()
        )
    }
}

fn render_event_time(event: &CalendarEvent) -> String {
    let start = event.start;
    let end = event.display_end();

    if event.all_day {
        if start.date() == end.date() {
            return format!("{} 종일", date_label(start.date()));
        }
        return format!("{} ~ {} 종일", date_label(start.date()), date_label(end.date()));
    }

    let start_label = format!("{} {}", date_label(start.date()), time_label(start.time()));
    match event.end {
        None => start_label,
        Some(end) if end.date() == start.date() => {
            format!("{} ~ {}", start_label, time_label(end.time()))
        }
        Some(end) => format!(
            "{} ~ {} {}",
            start_label,
            date_label(end.date()),
            time_label(end.time())
        ),
    }
}

impl Render for FormBuffer {
    fn render(&self) -> String {
        let title = if self.title().trim().is_empty() {
            "(제목 없음)".dimmed().to_string()
        } else {
            self.title().bold().to_string()
        };
        let (r, g, b) = self.color().rgb();

        let mut lines = vec![
            format!("   {} {}", "●".truecolor(r, g, b), title),
            format!("   {}  {}", "시작".dimmed(), endpoint_summary(self, Endpoint::Start)),
            format!("   {}  {}", "종료".dimmed(), endpoint_summary(self, Endpoint::End)),
            format!(
                "   {}  {}",
                "종일".dimmed(),
                if self.all_day() { "켜짐" } else { "꺼짐" }
            ),
            format!("   {}  {}", "반복".dimmed(), self.repeat().label()),
        ];
        if !self.memo().is_empty() {
            lines.push(format!("   {}  {}", "메모".dimmed(), self.memo()));
        }
        lines.join("\n")
    }
}

fn endpoint_summary(form: &FormBuffer, endpoint: Endpoint) -> String {
    let value = form.value(endpoint);
    let date = date_label(value.date());
    if form.all_day() {
        return date;
    }
    format!("{}  {}", date, time_label(value.time()))
}

impl Render for CalendarController {
    fn render(&self) -> String {
        let Some(form) = self.form() else {
            return "   No event open".dimmed().to_string();
        };

        let heading = match self.state() {
            ModalState::Create => "새 일정",
            _ if self.can_edit() => "일정 수정",
            _ => "일정 보기",
        };

        let mut lines = vec![heading.bold().underline().to_string(), form.render()];

        let picker = self.picker();
        if picker != PickerState::None {
            lines.push(String::new());
            lines.push(format!("   {}", picker_heading(picker).dimmed()));
            if picker.is_date() {
                lines.push(self.date_grid().render());
            } else {
                lines.push(self.wheel().render());
            }
        }

        lines.join("\n")
    }
}

fn picker_heading(picker: PickerState) -> &'static str {
    match picker {
        PickerState::StartDate => "시작 날짜 선택",
        PickerState::EndDate => "종료 날짜 선택",
        PickerState::StartTime => "시작 시간 선택",
        PickerState::EndTime => "종료 시간 선택",
        PickerState::None => "",
    }
}

fn weekday_header() -> String {
    SUNDAY_FIRST
        .iter()
        .map(|w| match w {
            Weekday::Sun => weekday_label(*w).red().to_string(),
            Weekday::Sat => weekday_label(*w).blue().to_string(),
            _ => weekday_label(*w).to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

impl Render for DateGridPicker {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("   {}", month_label(self.month()).bold()),
            format!("   {}", weekday_header()),
        ];

        for week in self.weeks() {
            let cells: Vec<String> = week.iter().map(render_day_cell).collect();
            lines.push(format!("   {}", cells.join("  ")));
        }

        lines.join("\n")
    }
}

fn render_day_cell(cell: &DayCell) -> String {
    let day = format!("{:>2}", cell.date.day());
    if cell.selected {
        day.reversed().to_string()
    } else if cell.disabled {
        day.strikethrough().dimmed().to_string()
    } else if !cell.in_month {
        day.dimmed().to_string()
    } else {
        day
    }
}

impl Render for WheelTimePicker {
    fn render(&self) -> String {
        let columns: Vec<Vec<String>> = WheelColumn::ALL
            .iter()
            .map(|column| visible_rows(self, *column))
            .collect();

        (0..VISIBLE_ITEMS)
            .map(|row| {
                let cells: Vec<&str> = columns.iter().map(|c| c[row].as_str()).collect();
                format!("   {}", cells.join("   "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The rows of one column that fit in the viewport, selection in the middle.
fn visible_rows(picker: &WheelTimePicker, column: WheelColumn) -> Vec<String> {
    let items = picker.items(column);
    let selected = picker.selected_index(column) as isize;
    let half = (VISIBLE_ITEMS / 2) as isize;
    let width = items.iter().map(|i| i.chars().count()).max().unwrap_or(2);

    (-half..=half)
        .map(|delta| {
            let index = selected + delta;
            let item = usize::try_from(index).ok().and_then(|i| items.get(i));
            match item {
                Some(item) if delta == 0 => item.bold().to_string(),
                Some(item) => item.dimmed().to_string(),
                // Keep columns aligned past either end of the list.
                None => " ".repeat(width * 2),
            }
        })
        .collect()
}

/// Month overview with a marker on every day that has an event.
pub fn render_month(month: NaiveDate, today: NaiveDate, events: &[CalendarEvent]) -> String {
    let grid = DateGridPicker::new(month);
    let mut lines = vec![
        format!("{}", month_label(grid.month()).bold()),
        weekday_header(),
    ];

    for week in grid.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| {
                let day = format!("{:>2}", cell.date.day());
                let busy = events.iter().any(|e| e.occurs_on(cell.date));
                let mark = if busy { "•".yellow().to_string() } else { " ".to_string() };
                let day = if cell.date == today {
                    day.reversed().to_string()
                } else if !cell.in_month {
                    day.dimmed().to_string()
                } else {
                    day
                };
                format!("{}{}", day, mark)
            })
            .collect();
        lines.push(cells.join(" "));
    }

    let in_month: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| {
            let start = e.start.date();
            let end = e.display_end().date();
            start <= last_of_month(grid.month()) && end >= grid.month()
        })
        .collect();

    lines.push(String::new());
    if in_month.is_empty() {
        lines.push("No events this month".dimmed().to_string());
    } else {
        for event in in_month {
            lines.push(event.render());
        }
    }

    lines.join("\n")
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}
