//! Calendar grid and date helpers for the monthly reservation view.
//!
//! Everything here is a pure function of its inputs. The grid is
//! Sunday-first and always covers whole weeks, so the UI can lay it out
//! seven cells per row without any padding logic of its own.

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};

/// Weekday header labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Weekend/weekday classification used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayKind {
    Sunday,
    Saturday,
    Weekday,
}

impl WeekdayKind {
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sun => WeekdayKind::Sunday,
            Weekday::Sat => WeekdayKind::Saturday,
            _ => WeekdayKind::Weekday,
        }
    }
}

/// A single day in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_current_month: bool,
}

impl CalendarCell {
    pub fn weekday_kind(&self) -> WeekdayKind {
        WeekdayKind::of(self.date)
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }

    /// Only days of the displayed month open the reservation form
    pub fn is_selectable(&self) -> bool {
        self.in_current_month
    }
}

/// Build the full-week grid for the month containing `reference`.
pub fn generate_month_grid(reference: NaiveDate) -> Vec<CalendarCell> {
    let month_start = start_of_month(reference);
    let month_end = end_of_month(reference);
    let grid_start = start_of_week(month_start);
    let grid_end = end_of_week(month_end);

    grid_start
        .iter_days()
        .take_while(|day| *day <= grid_end)
        .map(|date| CalendarCell {
            date,
            in_current_month: same_month(date, reference),
        })
        .collect()
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let start = start_of_month(date);
    start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        // December of the last representable year
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date))
}

/// Sunday on or before `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Saturday on or after `date`
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    let offset = 6 - date.weekday().num_days_from_sunday() as u64;
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Shift forward one calendar month, clamping the day to the month's end.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// Shift back one calendar month, clamping the day to the month's end.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// Title shown between the navigation buttons, e.g. "2024년 2월"
pub fn month_title(date: NaiveDate) -> String {
    date.format("%Y년 %-m월").to_string()
}

/// Date key used by the reservation API, e.g. "2024년 02월 9일"
pub fn format_reservation_date(date: NaiveDate) -> String {
    date.format("%Y년 %m월 %-d일").to_string()
}

/// True when `date` is an earlier calendar day than `today`
pub fn is_before_today(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
