use super::config::ViewMode;
use super::date::CalendarDate;
use std::fmt;

/// What a state-changing calendar operation did
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CalendarChange {
    /// The view switched to the given mode
    ViewMode(ViewMode),
    /// The selected date changed (or was reassigned) without a change of view
    Date(CalendarDate),
    /// A month was opened from the year overview: the view is now the month
    /// view and the given date is selected
    MonthSelected(CalendarDate),
    /// The host reported a new size for the calendar.  Nothing in the
    /// calendar's own state depends on it.
    Geometry { width: u16, height: u16 },
    /// The host's event data changed and grids should be rebuilt
    EventsUpdated,
    MonthGridHidden(bool),
}

/// Calendar state as it stands after a change
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NavigationSnapshot {
    pub current_date: CalendarDate,
    pub selected_date: CalendarDate,
    pub view_mode: ViewMode,
    pub month_grid_hidden: bool,
    pub version: u64,
}

/// Receiver of change notifications.
///
/// Observers are called after the change has been applied, once per
/// operation.
pub trait CalendarObserver {
    fn calendar_changed(&mut self, change: CalendarChange, snapshot: &NavigationSnapshot);
}

impl<F> CalendarObserver for F
where
    F: FnMut(CalendarChange, &NavigationSnapshot),
{
    fn calendar_changed(&mut self, change: CalendarChange, snapshot: &NavigationSnapshot) {
        self(change, snapshot);
    }
}

/// Handle for removing an observer again
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ObserverId(u64);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn CalendarObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe<O: CalendarObserver + 'static>(&mut self, observer: O) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(oid, _)| *oid != id);
        self.entries.len() < before
    }

    pub(crate) fn dispatch(&mut self, change: CalendarChange, snapshot: &NavigationSnapshot) {
        for (_, observer) in &mut self.entries {
            observer.calendar_changed(change, snapshot);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}
