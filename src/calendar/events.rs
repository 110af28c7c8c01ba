use super::date::CalendarDate;
use std::collections::BTreeMap;

/// Event markers reported by an [`EventSource`] for a single day of a month
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DayItem {
    pub day: u8,
    pub has_primary_event: bool,
    pub has_secondary_event: bool,
}

impl DayItem {
    pub fn new(day: u8) -> DayItem {
        DayItem {
            day,
            ..DayItem::default()
        }
    }

    pub fn primary(mut self, yes: bool) -> DayItem {
        self.has_primary_event = yes;
        self
    }

    pub fn secondary(mut self, yes: bool) -> DayItem {
        self.has_secondary_event = yes;
        self
    }
}

/// Supplier of per-day event markers.
///
/// The calendar asks for the markers of a whole month each time it builds a
/// grid and never caches the answer.  Days missing from the returned list
/// have no events; if a day is listed more than once, the first entry wins.
pub trait EventSource {
    fn calendar_day_items(&self, month: u8, year: i32) -> Vec<DayItem>;
}

impl<T: EventSource + ?Sized> EventSource for &T {
    fn calendar_day_items(&self, month: u8, year: i32) -> Vec<DayItem> {
        (**self).calendar_day_items(month, year)
    }
}

/// An event source with no events at all
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct NoEvents;

impl EventSource for NoEvents {
    fn calendar_day_items(&self, _month: u8, _year: i32) -> Vec<DayItem> {
        Vec::new()
    }
}

/// The pair of event markers a host attaches to a date
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct EventFlags {
    pub primary: bool,
    pub secondary: bool,
}

impl EventSource for BTreeMap<CalendarDate, EventFlags> {
    fn calendar_day_items(&self, month: u8, year: i32) -> Vec<DayItem> {
        let Ok(first) = CalendarDate::new(year, month, 1) else {
            return Vec::new();
        };
        self.range(first..=first.last_of_month())
            .map(|(date, flags)| {
                DayItem::new(date.day())
                    .primary(flags.primary)
                    .secondary(flags.secondary)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_map_source_only_reports_requested_month() {
        let mut events = BTreeMap::new();
        events.insert(
            CalendarDate::from(date!(2021 - 12 - 31)),
            EventFlags {
                primary: true,
                secondary: true,
            },
        );
        events.insert(
            CalendarDate::from(date!(2022 - 01 - 01)),
            EventFlags {
                primary: true,
                secondary: false,
            },
        );
        events.insert(
            CalendarDate::from(date!(2022 - 01 - 31)),
            EventFlags {
                primary: false,
                secondary: true,
            },
        );
        events.insert(
            CalendarDate::from(date!(2022 - 02 - 01)),
            EventFlags {
                primary: true,
                secondary: true,
            },
        );
        assert_eq!(
            events.calendar_day_items(1, 2022),
            vec![DayItem::new(1).primary(true), DayItem::new(31).secondary(true)]
        );
        assert_eq!(events.calendar_day_items(3, 2022), Vec::new());
        assert_eq!(events.calendar_day_items(13, 2022), Vec::new());
    }

    #[test]
    fn test_reference_source() {
        fn january<E: EventSource>(source: E) -> Vec<DayItem> {
            source.calendar_day_items(1, 2022)
        }
        let source: &dyn EventSource = &NoEvents;
        assert_eq!(january(source), Vec::new());
    }
}
