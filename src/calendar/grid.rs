//! Month-grid arithmetic.  Everything here is a pure function of the month,
//! year, and first day of the week.
use super::date::{check_year, month_from_number, WeekdayExt};
use crate::error::InvalidCalendarArgument;
use time::{Date, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

/// One slot of a month grid: either a leading blank (`day` is `None`) or a
/// day of the month
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DayCell {
    /// Zero-based position of the cell within its grid
    pub id: usize,
    pub day: Option<u8>,
    pub is_current_date: bool,
    pub is_selected_date: bool,
    pub has_primary_event: bool,
    pub has_secondary_event: bool,
}

impl DayCell {
    fn blank(id: usize) -> DayCell {
        DayCell {
            id,
            ..DayCell::default()
        }
    }

    fn with_day(id: usize, day: u8) -> DayCell {
        DayCell {
            id,
            day: Some(day),
            ..DayCell::default()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }

    /// Zero-based (row, column) of the cell when the grid is laid out seven
    /// cells to a row
    pub fn position(&self) -> (usize, usize) {
        (self.id / DAYS_IN_WEEK, self.id % DAYS_IN_WEEK)
    }
}

/// One month of a year overview
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MonthView {
    /// Month number, 1 through 12
    pub month: u8,
    pub cells: Vec<DayCell>,
}

/// Gregorian leap year rule: every fourth year, except for centuries not
/// divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(month: u8, year: i32) -> Result<u8, InvalidCalendarArgument> {
    let month = month_from_number(month)?;
    let year = check_year(i64::from(year))?;
    Ok(month_length(month, year))
}

pub(crate) fn month_length(month: Month, year: i32) -> u8 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Number of blank cells that precede day 1 of the month so that it lands in
/// its weekday's column when weeks start on `first_weekday`.  Always in
/// `0..7`.
pub fn leading_blank_count(
    month: u8,
    year: i32,
    first_weekday: Weekday,
) -> Result<usize, InvalidCalendarArgument> {
    let first = first_of_month(month, year)?;
    Ok(blank_count(first.weekday(), first_weekday))
}

fn blank_count(weekday: Weekday, first_weekday: Weekday) -> usize {
    usize::from((weekday.index0() + 7 - first_weekday.index0()) % 7)
}

fn first_of_month(month: u8, year: i32) -> Result<Date, InvalidCalendarArgument> {
    let m = month_from_number(month)?;
    let year = check_year(i64::from(year))?;
    Date::from_calendar_date(year, m, 1).map_err(|_| InvalidCalendarArgument::Year(year.into()))
}

/// The bare grid for a month: the leading blanks followed by one cell per
/// day, numbered consecutively from zero.  All flags are `false`.
pub fn build_skeleton(
    month: u8,
    year: i32,
    first_weekday: Weekday,
) -> Result<Vec<DayCell>, InvalidCalendarArgument> {
    let lead = leading_blank_count(month, year, first_weekday)?;
    let days = days_in_month(month, year)?;
    let blanks = (0..lead).map(DayCell::blank);
    let days = (1..=days)
        .zip(lead..)
        .map(|(day, id)| DayCell::with_day(id, day));
    Ok(blanks.chain(days).collect())
}
