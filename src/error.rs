use thiserror::Error;

/// Error returned when a caller passes a month, day, year, or weekday that
/// does not exist on the Gregorian calendar supported by this crate.
///
/// Operations that fail with this error leave all state untouched.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum InvalidCalendarArgument {
    #[error("month {0} is not in the range 1 through 12")]
    Month(u8),
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    Day { year: i32, month: u8, day: u8 },
    #[error("year {0} is outside the supported range")]
    Year(i64),
    #[error("weekday number {0} is not in the range 1 through 7")]
    Weekday(u8),
}
