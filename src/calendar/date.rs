use super::grid::month_length;
use crate::error::InvalidCalendarArgument;
use std::fmt;
use std::iter::successors;
use time::{Date, Month, OffsetDateTime, UtcOffset, Weekday};

pub(crate) trait WeekdayExt {
    /// Zero-based column of the weekday in a Sunday-first week
    fn index0(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }
}

/// Convert a one-based weekday number (1 = Sunday, 7 = Saturday) into a
/// [`Weekday`]
pub fn weekday_from_number(number: u8) -> Result<Weekday, InvalidCalendarArgument> {
    match number {
        1 => Ok(Weekday::Sunday),
        2 => Ok(Weekday::Monday),
        3 => Ok(Weekday::Tuesday),
        4 => Ok(Weekday::Wednesday),
        5 => Ok(Weekday::Thursday),
        6 => Ok(Weekday::Friday),
        7 => Ok(Weekday::Saturday),
        n => Err(InvalidCalendarArgument::Weekday(n)),
    }
}

pub(crate) fn month_from_number(month: u8) -> Result<Month, InvalidCalendarArgument> {
    Month::try_from(month).map_err(|_| InvalidCalendarArgument::Month(month))
}

pub(crate) fn check_year(year: i64) -> Result<i32, InvalidCalendarArgument> {
    i32::try_from(year)
        .ok()
        .filter(|y| (CalendarDate::MIN_YEAR..=CalendarDate::MAX_YEAR).contains(y))
        .ok_or(InvalidCalendarArgument::Year(year))
}

/// A day on the proleptic Gregorian calendar.
///
/// A `CalendarDate` has no time-of-day component, so it always denotes the
/// start of its day.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub const MIN_YEAR: i32 = Date::MIN.year();
    pub const MAX_YEAR: i32 = Date::MAX.year();

    pub fn new(year: i32, month: u8, day: u8) -> Result<CalendarDate, InvalidCalendarArgument> {
        let m = month_from_number(month)?;
        let year = check_year(i64::from(year))?;
        Date::from_calendar_date(year, m, day)
            .map(CalendarDate)
            .map_err(|_| InvalidCalendarArgument::Day { year, month, day })
    }

    /// The calendar day on which `instant` falls when observed at `offset`
    pub fn from_instant(instant: OffsetDateTime, offset: UtcOffset) -> CalendarDate {
        CalendarDate(instant.to_offset(offset).date())
    }

    pub fn today(offset: UtcOffset) -> CalendarDate {
        CalendarDate::from_instant(OffsetDateTime::now_utc(), offset)
    }

    pub fn date(self) -> Date {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 through 12
    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    pub(crate) fn month_enum(self) -> Month {
        self.0.month()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn ordinal(self) -> u16 {
        self.0.ordinal()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_same_month(self, other: CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    pub fn is_same_year(self, other: CalendarDate) -> bool {
        self.year() == other.year()
    }

    pub(crate) fn is_ymd(self, year: i32, month: u8, day: u8) -> bool {
        self.year() == year && self.month() == month && self.day() == day
    }

    pub fn first_of_month(self) -> CalendarDate {
        self.0.replace_day(1).map_or(self, CalendarDate)
    }

    pub fn last_of_month(self) -> CalendarDate {
        self.0
            .replace_day(month_length(self.0.month(), self.year()))
            .map_or(self, CalendarDate)
    }

    /// The day numbered `day` in the same month and year
    pub fn with_day(self, day: u8) -> Result<CalendarDate, InvalidCalendarArgument> {
        self.0
            .replace_day(day)
            .map(CalendarDate)
            .map_err(|_| InvalidCalendarArgument::Day {
                year: self.year(),
                month: self.month(),
                day,
            })
    }

    /// Every day of this date's month, in order
    pub fn days_of_month(self) -> impl Iterator<Item = CalendarDate> {
        let month = self.0.month();
        successors(Some(self.first_of_month()), |d| {
            d.0.next_day().map(CalendarDate)
        })
        .take_while(move |d| d.0.month() == month)
    }

    /// Move `delta` months forwards (or backwards, if negative).  If the day
    /// of the month does not exist in the target month, the target month's
    /// last day is used instead.
    pub fn checked_add_months(self, delta: i32) -> Result<CalendarDate, InvalidCalendarArgument> {
        self.shift_months(i64::from(delta))
    }

    /// Move `delta` years forwards (or backwards, if negative), clamping
    /// February 29 to February 28 in common years
    pub fn checked_add_years(self, delta: i32) -> Result<CalendarDate, InvalidCalendarArgument> {
        self.shift_months(i64::from(delta) * 12)
    }

    fn shift_months(self, delta: i64) -> Result<CalendarDate, InvalidCalendarArgument> {
        let index = i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + delta;
        let year = check_year(index.div_euclid(12))?;
        let month0 = u8::try_from(index.rem_euclid(12))
            .map_err(|_| InvalidCalendarArgument::Year(index.div_euclid(12)))?;
        let month = month_from_number(month0 + 1)?;
        let day = self.day().min(month_length(month, year));
        Date::from_calendar_date(year, month, day)
            .map(CalendarDate)
            .map_err(|_| InvalidCalendarArgument::Day {
                year,
                month: month0 + 1,
                day,
            })
    }
}

impl From<Date> for CalendarDate {
    fn from(date: Date) -> CalendarDate {
        CalendarDate(date)
    }
}

impl From<CalendarDate> for Date {
    fn from(date: CalendarDate) -> Date {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset};

    #[test]
    fn test_new_rejects_bad_components() {
        assert_eq!(
            CalendarDate::new(2022, 13, 1),
            Err(InvalidCalendarArgument::Month(13))
        );
        assert_eq!(
            CalendarDate::new(2022, 0, 1),
            Err(InvalidCalendarArgument::Month(0))
        );
        assert_eq!(
            CalendarDate::new(2023, 2, 29),
            Err(InvalidCalendarArgument::Day {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            CalendarDate::new(10000, 1, 1),
            Err(InvalidCalendarArgument::Year(10000))
        );
        assert_eq!(
            CalendarDate::new(2024, 2, 29).map(CalendarDate::date),
            Ok(date!(2024 - 02 - 29))
        );
    }

    #[test]
    fn test_weekday_from_number() {
        assert_eq!(weekday_from_number(1), Ok(Weekday::Sunday));
        assert_eq!(weekday_from_number(2), Ok(Weekday::Monday));
        assert_eq!(weekday_from_number(7), Ok(Weekday::Saturday));
        assert_eq!(
            weekday_from_number(0),
            Err(InvalidCalendarArgument::Weekday(0))
        );
        assert_eq!(
            weekday_from_number(8),
            Err(InvalidCalendarArgument::Weekday(8))
        );
    }

    #[test]
    fn test_from_instant_uses_offset() {
        let instant = datetime!(2022-01-31 23:30 UTC);
        assert_eq!(
            CalendarDate::from_instant(instant, offset!(UTC)).date(),
            date!(2022 - 01 - 31)
        );
        assert_eq!(
            CalendarDate::from_instant(instant, offset!(+2)).date(),
            date!(2022 - 02 - 01)
        );
        assert_eq!(
            CalendarDate::from_instant(instant, offset!(-5)).date(),
            date!(2022 - 01 - 31)
        );
    }

    #[test]
    fn test_add_months_clamps_day() {
        let d = CalendarDate::from(date!(2022 - 01 - 31));
        assert_eq!(
            d.checked_add_months(1).map(CalendarDate::date),
            Ok(date!(2022 - 02 - 28))
        );
        assert_eq!(
            d.checked_add_months(-2).map(CalendarDate::date),
            Ok(date!(2021 - 11 - 30))
        );
        assert_eq!(
            d.checked_add_months(13).map(CalendarDate::date),
            Ok(date!(2023 - 02 - 28))
        );
        assert_eq!(
            d.checked_add_months(-12).map(CalendarDate::date),
            Ok(date!(2021 - 01 - 31))
        );
    }

    #[test]
    fn test_add_years_from_leap_day() {
        let d = CalendarDate::from(date!(2024 - 02 - 29));
        assert_eq!(
            d.checked_add_years(1).map(CalendarDate::date),
            Ok(date!(2025 - 02 - 28))
        );
        assert_eq!(
            d.checked_add_years(4).map(CalendarDate::date),
            Ok(date!(2028 - 02 - 29))
        );
    }

    #[test]
    fn test_add_months_past_end_of_time() {
        let d = CalendarDate::from(date!(9999 - 12 - 01));
        assert_eq!(
            d.checked_add_months(1),
            Err(InvalidCalendarArgument::Year(10000))
        );
        let d = CalendarDate::new(-9999, 1, 1).unwrap();
        assert_eq!(
            d.checked_add_years(-1),
            Err(InvalidCalendarArgument::Year(-10000))
        );
    }

    #[test]
    fn test_month_edges() {
        let d = CalendarDate::from(date!(2024 - 02 - 17));
        assert_eq!(d.first_of_month().date(), date!(2024 - 02 - 01));
        assert_eq!(d.last_of_month().date(), date!(2024 - 02 - 29));
        assert_eq!(
            d.with_day(30),
            Err(InvalidCalendarArgument::Day {
                year: 2024,
                month: 2,
                day: 30
            })
        );
        let days = d.days_of_month().collect::<Vec<_>>();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first().map(|d| d.day()), Some(1));
        assert_eq!(days.last().map(|d| d.day()), Some(29));
    }

    #[test]
    fn test_days_of_last_month_of_time() {
        let d = CalendarDate::from(date!(9999 - 12 - 25));
        assert_eq!(d.days_of_month().count(), 31);
    }

    #[test]
    fn test_display() {
        let d = CalendarDate::from(date!(2022 - 01 - 05));
        assert_eq!(d.to_string(), "2022-01-05");
    }
}
