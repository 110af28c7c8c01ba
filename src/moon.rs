use calgrid::{CalendarDate, DayItem, EventSource};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
enum Phase {
    Normal,
    Full,
    New,
}

impl Phase {
    fn for_date(date: CalendarDate) -> Phase {
        // Will give wrong results pre-1900
        let year = date.year().abs_diff(1900);
        let goldn = (year % 19) + 1;
        let mut epact = (11 * goldn + 18) % 30;
        if (epact == 25 && goldn > 11) || epact == 24 {
            epact += 1;
        }
        let ordinal0 = u32::from(date.ordinal()) - 1;
        match (((((ordinal0 + epact) * 6) + 11) % 177) / 22) & 7 {
            0 => Phase::New,
            4 => Phase::Full,
            _ => Phase::Normal,
        }
    }
}

/// Event source marking full moons as primary events and new moons as
/// secondary events
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Phoon;

impl EventSource for Phoon {
    fn calendar_day_items(&self, month: u8, year: i32) -> Vec<DayItem> {
        let Ok(first) = CalendarDate::new(year, month, 1) else {
            return Vec::new();
        };
        first
            .days_of_month()
            .filter_map(|date| match Phase::for_date(date) {
                Phase::Normal => None,
                Phase::Full => Some(DayItem::new(date.day()).primary(true)),
                Phase::New => Some(DayItem::new(date.day()).secondary(true)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_january_2025() {
        let items = Phoon.calendar_day_items(1, 2025);
        let full = items
            .iter()
            .filter(|it| it.has_primary_event)
            .map(|it| it.day)
            .collect::<Vec<_>>();
        let new = items
            .iter()
            .filter(|it| it.has_secondary_event)
            .map(|it| it.day)
            .collect::<Vec<_>>();
        assert_eq!(full, [14, 15, 16, 17]);
        assert_eq!(new, [1, 2, 29, 30, 31]);
    }

    #[test]
    fn test_no_day_is_both() {
        for month in 1..=12 {
            for it in Phoon.calendar_day_items(month, 2024) {
                assert!(!(it.has_primary_event && it.has_secondary_event));
            }
        }
    }

    #[test]
    fn test_invalid_month() {
        assert!(Phoon.calendar_day_items(13, 2025).is_empty());
    }
}
