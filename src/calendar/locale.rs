use super::date::WeekdayExt;
use time::{Month, Weekday};

/// Month and weekday names used for titles and headers
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Locale {
    months: [String; 12],
    short_months: [String; 12],
    // Sunday first
    weekdays: [String; 7],
}

impl Locale {
    /// Build a locale from its name tables.  `short_weekday_names` must start
    /// with Sunday.
    pub fn new<S: Into<String>>(
        month_names: [S; 12],
        short_month_names: [S; 12],
        short_weekday_names: [S; 7],
    ) -> Locale {
        Locale {
            months: month_names.map(Into::into),
            short_months: short_month_names.map(Into::into),
            weekdays: short_weekday_names.map(Into::into),
        }
    }

    pub fn english() -> Locale {
        Locale::new(
            [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        )
    }

    pub fn month_name(&self, month: Month) -> &str {
        &self.months[month_index(month)]
    }

    pub fn short_month_name(&self, month: Month) -> &str {
        &self.short_months[month_index(month)]
    }

    pub fn short_month_names(&self) -> Vec<&str> {
        self.short_months.iter().map(String::as_str).collect()
    }

    /// Short weekday names, rotated so that `first_weekday` comes first
    pub fn weekday_headers(&self, first_weekday: Weekday) -> Vec<&str> {
        let start = usize::from(first_weekday.index0());
        (0..7)
            .map(|i| self.weekdays[(start + i) % 7].as_str())
            .collect()
    }
}

impl Default for Locale {
    fn default() -> Locale {
        Locale::english()
    }
}

fn month_index(month: Month) -> usize {
    usize::from(u8::from(month)) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_headers_rotate() {
        let locale = Locale::english();
        assert_eq!(
            locale.weekday_headers(Weekday::Sunday),
            ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        );
        assert_eq!(
            locale.weekday_headers(Weekday::Monday),
            ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
        );
        assert_eq!(
            locale.weekday_headers(Weekday::Saturday),
            ["Sa", "Su", "Mo", "Tu", "We", "Th", "Fr"]
        );
    }

    #[test]
    fn test_month_names() {
        let locale = Locale::english();
        assert_eq!(locale.month_name(Month::January), "January");
        assert_eq!(locale.month_name(Month::December), "December");
        assert_eq!(locale.short_month_name(Month::September), "Sep");
        assert_eq!(locale.short_month_names().len(), 12);
    }

    #[test]
    fn test_custom_tables() {
        let locale = Locale::new(
            [
                "tammikuu",
                "helmikuu",
                "maaliskuu",
                "huhtikuu",
                "toukokuu",
                "kesäkuu",
                "heinäkuu",
                "elokuu",
                "syyskuu",
                "lokakuu",
                "marraskuu",
                "joulukuu",
            ],
            [
                "tammi", "helmi", "maalis", "huhti", "touko", "kesä", "heinä", "elo", "syys",
                "loka", "marras", "joulu",
            ],
            ["su", "ma", "ti", "ke", "to", "pe", "la"],
        );
        assert_eq!(locale.month_name(Month::June), "kesäkuu");
        assert_eq!(
            locale.weekday_headers(Weekday::Monday),
            ["ma", "ti", "ke", "to", "pe", "la", "su"]
        );
    }
}
