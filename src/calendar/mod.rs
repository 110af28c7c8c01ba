mod config;
mod date;
mod events;
mod grid;
mod locale;
mod notify;
mod state;
mod widget;
pub use self::config::{CalendarConfig, MonthAnchor, ViewMode};
pub use self::date::{weekday_from_number, CalendarDate};
pub use self::events::{DayItem, EventFlags, EventSource, NoEvents};
pub use self::grid::{
    build_skeleton, days_in_month, is_leap_year, leading_blank_count, DayCell, MonthView,
};
pub use self::locale::Locale;
pub use self::notify::{CalendarChange, CalendarObserver, NavigationSnapshot, ObserverId};
pub use self::state::CalendarNavigation;
pub use self::widget::Calendar;
