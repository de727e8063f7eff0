// --- File: crates/carebook_booking/src/calendar.rs ---
//! Month grid for the date picker.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::logic::{first_of_month, is_date_disabled};

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    /// `YYYY-MM-DD`, the value posted back when the day is picked.
    pub iso: String,
    pub disabled: bool,
    pub selected: bool,
    pub today: bool,
}

/// One month laid out in Sunday-first weeks. Cells outside the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub first: NaiveDate,
    pub title: String,
    pub weeks: Vec<Vec<Option<CalendarDay>>>,
    pub previous: NaiveDate,
    pub next: NaiveDate,
}

impl CalendarMonth {
    pub fn build(month: NaiveDate, today: NaiveDate, selected: Option<NaiveDate>) -> Self {
        let first = first_of_month(month);
        let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
        let previous = first.checked_sub_months(Months::new(1)).unwrap_or(first);

        let leading = first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<CalendarDay>> = vec![None; leading];
        cells.extend(first.iter_days().take_while(|d| d.month() == first.month()).map(|date| {
            Some(CalendarDay {
                date,
                day: date.day(),
                iso: date.format("%Y-%m-%d").to_string(),
                disabled: is_date_disabled(date, today),
                selected: selected == Some(date),
                today: date == today,
            })
        }));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        Self {
            first,
            title: first.format("%B %Y").to_string(),
            weeks: cells.chunks(7).map(<[_]>::to_vec).collect(),
            previous,
            next,
        }
    }

    pub fn previous_anchor(&self) -> String {
        self.previous.format("%Y-%m").to_string()
    }

    pub fn next_anchor(&self) -> String {
        self.next.format("%Y-%m").to_string()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten().flatten()
    }
}

/// Parses a `YYYY-MM` month anchor into the first day of that month.
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()
}
