use super::config::{CalendarConfig, MonthAnchor, ViewMode};
use super::date::CalendarDate;
use super::events::EventSource;
use super::grid::{build_skeleton, DayCell, MonthView};
use super::locale::Locale;
use super::notify::{CalendarChange, CalendarObserver, NavigationSnapshot, ObserverId, Observers};
use crate::error::InvalidCalendarArgument;
use time::Weekday;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Granularity {
    Month,
    Year,
}

/// Navigation state of a calendar: today's date, the selected date, and
/// whether a month or a year is on display.
///
/// Every successful state-changing operation notifies the registered
/// observers exactly once, after the change has been applied.  Failed
/// operations change nothing and notify nobody.
#[derive(Debug)]
pub struct CalendarNavigation {
    current_date: CalendarDate,
    selected_date: CalendarDate,
    view_mode: ViewMode,
    month_grid_hidden: bool,
    first_weekday: Weekday,
    hide_secondary_events: bool,
    anchor: MonthAnchor,
    locale: Locale,
    version: u64,
    observers: Observers,
}

impl CalendarNavigation {
    /// Create a calendar for which "today" is `today`
    pub fn new(today: CalendarDate, config: CalendarConfig) -> CalendarNavigation {
        CalendarNavigation {
            current_date: today,
            selected_date: config.selected_date.unwrap_or(today),
            view_mode: config.view_mode,
            month_grid_hidden: config.hide_month_grid,
            first_weekday: config.first_weekday,
            hide_secondary_events: config.hide_secondary_events,
            anchor: config.anchor,
            locale: config.locale,
            version: 0,
            observers: Observers::default(),
        }
    }

    /// Create a calendar for which "today" is the current date at the
    /// configured UTC offset
    pub fn for_today(config: CalendarConfig) -> CalendarNavigation {
        let today = config.today();
        CalendarNavigation::new(today, config)
    }

    pub fn current_date(&self) -> CalendarDate {
        self.current_date
    }

    pub fn selected_date(&self) -> CalendarDate {
        self.selected_date
    }

    pub fn selected_month(&self) -> u8 {
        self.selected_date.month()
    }

    pub fn selected_year(&self) -> i32 {
        self.selected_date.year()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_detail_view(&self) -> bool {
        self.view_mode.is_detail()
    }

    pub fn month_grid_hidden(&self) -> bool {
        self.month_grid_hidden
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Number of notifications sent so far.  Renderers that poll rather than
    /// observe can redraw whenever this changes.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            current_date: self.current_date,
            selected_date: self.selected_date,
            view_mode: self.view_mode,
            month_grid_hidden: self.month_grid_hidden,
            version: self.version,
        }
    }

    /// "January 2022" in the month view, "2022" in the year view
    pub fn title(&self) -> String {
        match self.view_mode {
            ViewMode::Month => format!(
                "{} {}",
                self.locale.month_name(self.selected_date.month_enum()),
                self.selected_year()
            ),
            ViewMode::Year => self.selected_year().to_string(),
        }
    }

    pub fn weekday_headers(&self) -> Vec<&str> {
        self.locale.weekday_headers(self.first_weekday)
    }

    /// Short month names for labelling the year overview
    pub fn month_names(&self) -> Vec<&str> {
        self.locale.short_month_names()
    }

    pub fn subscribe<O: CalendarObserver + 'static>(&mut self, observer: O) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Returns `false` if the observer was not registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Select the given day of the selected month
    pub fn select_day(&mut self, day: u8) -> Result<(), InvalidCalendarArgument> {
        let date = self
            .selected_date
            .with_day(day)
            .inspect_err(|e| warn!(day, error = %e, "rejected day selection"))?;
        self.selected_date = date;
        self.notify(CalendarChange::Date(date));
        Ok(())
    }

    /// Switch to the month view of the given month.  Today is selected if it
    /// is in that month; otherwise the month's anchor day is.
    pub fn select_month(&mut self, month: u8, year: i32) -> Result<(), InvalidCalendarArgument> {
        let first = CalendarDate::new(year, month, 1)
            .inspect_err(|e| warn!(month, year, error = %e, "rejected month selection"))?;
        let date = self.land(first, Granularity::Month);
        self.view_mode = ViewMode::Month;
        self.selected_date = date;
        self.notify(CalendarChange::MonthSelected(date));
        Ok(())
    }

    /// Move the selection `delta` months.  Landing in the current month
    /// selects today; landing anywhere else selects the anchor day.
    pub fn step_month(&mut self, delta: i32) -> Result<(), InvalidCalendarArgument> {
        let candidate = self
            .selected_date
            .checked_add_months(delta)
            .inspect_err(|e| warn!(delta, error = %e, "cannot step month"))?;
        self.move_to(self.land(candidate, Granularity::Month));
        Ok(())
    }

    /// Move the selection `delta` years.  Landing in the current year selects
    /// today; landing anywhere else selects the anchor day of the selected
    /// month in the new year.
    pub fn step_year(&mut self, delta: i32) -> Result<(), InvalidCalendarArgument> {
        let candidate = self
            .selected_date
            .checked_add_years(delta)
            .inspect_err(|e| warn!(delta, error = %e, "cannot step year"))?;
        self.move_to(self.land(candidate, Granularity::Year));
        Ok(())
    }

    pub fn next_month(&mut self) -> Result<(), InvalidCalendarArgument> {
        self.step_month(1)
    }

    pub fn previous_month(&mut self) -> Result<(), InvalidCalendarArgument> {
        self.step_month(-1)
    }

    pub fn next_year(&mut self) -> Result<(), InvalidCalendarArgument> {
        self.step_year(1)
    }

    pub fn previous_year(&mut self) -> Result<(), InvalidCalendarArgument> {
        self.step_year(-1)
    }

    /// Step forwards by whatever unit is on display: a month in the month
    /// view, a year in the year view
    pub fn forward(&mut self) -> Result<(), InvalidCalendarArgument> {
        match self.view_mode {
            ViewMode::Month => self.next_month(),
            ViewMode::Year => self.next_year(),
        }
    }

    pub fn backward(&mut self) -> Result<(), InvalidCalendarArgument> {
        match self.view_mode {
            ViewMode::Month => self.previous_month(),
            ViewMode::Year => self.previous_year(),
        }
    }

    pub fn toggle_detail_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
        self.notify(CalendarChange::ViewMode(self.view_mode));
    }

    pub fn set_month_grid_hidden(&mut self, hidden: bool) {
        self.month_grid_hidden = hidden;
        self.notify(CalendarChange::MonthGridHidden(hidden));
    }

    /// Tell observers that the host's event data has changed
    pub fn events_updated(&mut self) {
        self.notify(CalendarChange::EventsUpdated);
    }

    /// Pass the host's idea of the calendar's size on to observers
    pub fn report_geometry(&mut self, width: u16, height: u16) {
        self.notify(CalendarChange::Geometry { width, height });
    }

    /// Build the finished grid for a month: the skeleton with today, the
    /// selection (month view only), and the event source's markers filled in.
    pub fn build_month_view<E: EventSource + ?Sized>(
        &self,
        month: u8,
        year: i32,
        events: &E,
    ) -> Result<Vec<DayCell>, InvalidCalendarArgument> {
        let mut cells = build_skeleton(month, year, self.first_weekday)?;
        let items = events.calendar_day_items(month, year);
        let mark_selection = self.view_mode.is_detail();
        for cell in &mut cells {
            let Some(day) = cell.day else {
                continue;
            };
            if let Some(item) = items.iter().find(|item| item.day == day) {
                cell.has_primary_event = item.has_primary_event;
                cell.has_secondary_event = item.has_secondary_event && !self.hide_secondary_events;
            }
            cell.is_current_date = self.current_date.is_ymd(year, month, day);
            cell.is_selected_date = mark_selection && self.selected_date.is_ymd(year, month, day);
        }
        Ok(cells)
    }

    /// Build the grid for the selected month
    pub fn build_selected_month_view<E: EventSource + ?Sized>(
        &self,
        events: &E,
    ) -> Result<Vec<DayCell>, InvalidCalendarArgument> {
        self.build_month_view(self.selected_month(), self.selected_year(), events)
    }

    /// Build all twelve month grids of the selected year
    pub fn build_year_view<E: EventSource + ?Sized>(
        &self,
        events: &E,
    ) -> Result<Vec<MonthView>, InvalidCalendarArgument> {
        let year = self.selected_year();
        (1..=12)
            .map(|month| {
                self.build_month_view(month, year, events)
                    .map(|cells| MonthView { month, cells })
            })
            .collect()
    }

    fn land(&self, candidate: CalendarDate, granularity: Granularity) -> CalendarDate {
        let snaps = match granularity {
            Granularity::Month => candidate.is_same_month(self.current_date),
            Granularity::Year => candidate.is_same_year(self.current_date),
        };
        if snaps {
            self.current_date
        } else {
            self.anchor_day(candidate)
        }
    }

    fn anchor_day(&self, candidate: CalendarDate) -> CalendarDate {
        match self.anchor {
            MonthAnchor::LastOfMonth
                if candidate.first_of_month() < self.current_date.first_of_month() =>
            {
                candidate.last_of_month()
            }
            MonthAnchor::FirstOfMonth | MonthAnchor::LastOfMonth => candidate.first_of_month(),
        }
    }

    fn move_to(&mut self, date: CalendarDate) {
        self.selected_date = date;
        self.notify(CalendarChange::Date(date));
    }

    fn notify(&mut self, change: CalendarChange) {
        self.version += 1;
        debug!(
            ?change,
            selected = %self.selected_date,
            view = ?self.view_mode,
            version = self.version,
            "calendar state changed"
        );
        let snapshot = self.snapshot();
        self.observers.dispatch(change, &snapshot);
    }
}
