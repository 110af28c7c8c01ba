use super::date::{weekday_from_number, CalendarDate};
use super::locale::Locale;
use crate::error::InvalidCalendarArgument;
use time::{UtcOffset, Weekday};

/// Whether the calendar shows a single month or a whole year
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ViewMode {
    #[default]
    Month,
    Year,
}

impl ViewMode {
    /// `true` for the month ("detail") view
    pub fn is_detail(self) -> bool {
        self == ViewMode::Month
    }

    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Month => ViewMode::Year,
            ViewMode::Year => ViewMode::Month,
        }
    }
}

/// Which day to select when navigation lands in a month other than the
/// current one
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MonthAnchor {
    /// Always the 1st of the month
    #[default]
    FirstOfMonth,
    /// The last day for months before the current month, the 1st for months
    /// after it
    LastOfMonth,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarConfig {
    pub(crate) first_weekday: Weekday,
    pub(crate) locale: Locale,
    pub(crate) utc_offset: UtcOffset,
    pub(crate) selected_date: Option<CalendarDate>,
    pub(crate) view_mode: ViewMode,
    pub(crate) hide_month_grid: bool,
    pub(crate) hide_secondary_events: bool,
    pub(crate) anchor: MonthAnchor,
}

impl CalendarConfig {
    pub fn new() -> CalendarConfig {
        CalendarConfig {
            first_weekday: Weekday::Sunday,
            locale: Locale::english(),
            utc_offset: UtcOffset::UTC,
            selected_date: None,
            view_mode: ViewMode::Month,
            hide_month_grid: false,
            hide_secondary_events: false,
            anchor: MonthAnchor::FirstOfMonth,
        }
    }

    pub fn first_weekday(mut self, weekday: Weekday) -> Self {
        self.first_weekday = weekday;
        self
    }

    /// Set the first day of the week from its number, 1 (Sunday) through 7
    /// (Saturday)
    pub fn first_weekday_number(self, number: u8) -> Result<Self, InvalidCalendarArgument> {
        Ok(self.first_weekday(weekday_from_number(number)?))
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Offset at which "today" is determined
    pub fn utc_offset(mut self, offset: UtcOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Initially selected date; defaults to today
    pub fn selected_date(mut self, date: CalendarDate) -> Self {
        self.selected_date = Some(date);
        self
    }

    pub fn view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn hide_month_grid(mut self, yes: bool) -> Self {
        self.hide_month_grid = yes;
        self
    }

    pub fn hide_secondary_events(mut self, yes: bool) -> Self {
        self.hide_secondary_events = yes;
        self
    }

    pub fn anchor(mut self, anchor: MonthAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn today(&self) -> CalendarDate {
        CalendarDate::today(self.utc_offset)
    }
}

impl Default for CalendarConfig {
    fn default() -> CalendarConfig {
        CalendarConfig::new()
    }
}
