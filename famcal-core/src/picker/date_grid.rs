//! Month-grid date picker.

use chrono::{Datelike, Days, Months, NaiveDate};

pub const WEEKS_SHOWN: usize = 6;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days of neighbouring months.
    pub in_month: bool,
    pub selected: bool,
    /// Before the picker's minimum date.
    pub disabled: bool,
}

#[derive(Debug, Clone)]
pub struct DateGridPicker {
    /// First day of the month on display.
    month: NaiveDate,
    selected: NaiveDate,
    min_date: Option<NaiveDate>,
}

impl DateGridPicker {
    pub fn new(selected: NaiveDate) -> Self {
        DateGridPicker {
            month: first_of_month(selected),
            selected,
            min_date: None,
        }
    }

    /// Re-bind the picker to a value, showing its month.
    pub fn show(&mut self, selected: NaiveDate, min_date: Option<NaiveDate>) {
        self.month = first_of_month(selected);
        self.selected = selected;
        self.min_date = min_date;
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min_date.is_some_and(|min| date < min)
    }

    /// Select a date. Dates before the minimum clamp to the minimum.
    /// Returns the date actually selected.
    pub fn select(&mut self, date: NaiveDate) -> NaiveDate {
        let date = match self.min_date {
            Some(min) if date < min => min,
            _ => date,
        };
        self.selected = date;
        self.month = first_of_month(date);
        date
    }

    pub fn prev_month(&mut self) {
        if let Some(month) = self.month.checked_sub_months(Months::new(1)) {
            self.month = month;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(month) = self.month.checked_add_months(Months::new(1)) {
            self.month = month;
        }
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.month = first_of_month(date);
    }

    /// Six Sunday-first weeks covering the displayed month.
    ///
    /// Cells that would fall past the last representable date are clamped to
    /// it and come back disabled and outside the month.
    pub fn weeks(&self) -> Vec<[DayCell; 7]> {
        let offset = Days::new(u64::from(self.month.weekday().num_days_from_sunday()));
        let grid_start = self.month.checked_sub_days(offset).unwrap_or(self.month);

        (0..WEEKS_SHOWN)
            .map(|week| {
                std::array::from_fn(|day| {
                    let shifted = grid_start.checked_add_days(Days::new((week * 7 + day) as u64));
                    self.cell(shifted)
                })
            })
            .collect()
    }

    fn cell(&self, date: Option<NaiveDate>) -> DayCell {
        match date {
            Some(date) => DayCell {
                date,
                in_month: date.month() == self.month.month(),
                selected: date == self.selected,
                disabled: self.is_disabled(date),
            },
            None => DayCell {
                date: NaiveDate::MAX,
                in_month: false,
                selected: false,
                disabled: true,
            },
        }
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weeks_are_sunday_first() {
        // February 2026 starts on a Sunday.
        let picker = DateGridPicker::new(date(2026, 2, 7));
        let weeks = picker.weeks();
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][0].date, date(2026, 2, 1));
        assert!(weeks[0][0].in_month);
        assert_eq!(weeks[4][0].date, date(2026, 3, 1));
        assert!(!weeks[4][0].in_month);
        assert!(weeks[0][6].selected);
    }

    #[test]
    fn test_leading_days_from_previous_month() {
        // March 2026 starts on a Sunday too; April starts on a Wednesday.
        let picker = DateGridPicker::new(date(2026, 4, 15));
        let first_week = picker.weeks()[0];
        assert_eq!(first_week[0].date, date(2026, 3, 29));
        assert!(!first_week[0].in_month);
        assert_eq!(first_week[3].date, date(2026, 4, 1));
    }

    #[test]
    fn test_navigation_crosses_years() {
        let mut picker = DateGridPicker::new(date(2026, 1, 31));
        picker.prev_month();
        assert_eq!(picker.month(), date(2025, 12, 1));
        picker.next_month();
        picker.next_month();
        assert_eq!(picker.month(), date(2026, 2, 1));
        assert_eq!(picker.selected(), date(2026, 1, 31));
    }

    #[test]
    fn test_last_month_of_calendar_does_not_overflow() {
        let picker = DateGridPicker::new(NaiveDate::MAX);
        let weeks = picker.weeks();
        assert_eq!(weeks.len(), 6);

        let cells: Vec<DayCell> = weeks.iter().flatten().copied().collect();
        assert_eq!(cells.iter().filter(|c| c.selected).count(), 1);
        let overflow = cells.iter().filter(|c| c.disabled && !c.in_month).count();
        assert!(overflow > 0);
    }

    #[test]
    fn test_select_clamps_to_min_date() {
        let mut picker = DateGridPicker::new(date(2026, 2, 10));
        picker.show(date(2026, 2, 10), Some(date(2026, 2, 7)));

        assert_eq!(picker.select(date(2026, 2, 5)), date(2026, 2, 7));
        assert_eq!(picker.select(date(2026, 2, 9)), date(2026, 2, 9));
        assert!(picker.is_disabled(date(2026, 2, 6)));
        assert!(!picker.is_disabled(date(2026, 2, 7)));

        let disabled = picker.weeks()[0].iter().filter(|c| c.disabled).count();
        assert_eq!(disabled, 6);
    }
}
