use super::events::EventSource;
use super::grid::{DayCell, MonthView};
use super::state::CalendarNavigation;
use crate::theme::{
    overview::{PRIMARY_DAY_STYLE, SECONDARY_DAY_STYLE},
    BASE_STYLE, CURRENT_DAY_STYLE, MONTH_CURSOR_STYLE, MONTH_STYLE, PRIMARY_EVENT_STYLE,
    SECONDARY_EVENT_STYLE, SELECTED_DAY_STYLE, TITLE_STYLE, WEEKDAY_STYLE,
};
use ratatui::{prelude::*, widgets::*};
use std::iter::zip;

/// Number of columns per day of week in the month view
const DAY_WIDTH: u16 = 4;

/// Width of the month view
const MAIN_WIDTH: u16 = DAY_WIDTH * 7;

const TITLE_LINE: u16 = 0;

const HEADER_LINE: u16 = 1;

const RULE_LINE: u16 = 2;

/// First line of the month view's weeks
const GRID_TOP: u16 = 3;

/// Number of lines taken up by each week of the month view: one for the day
/// numbers and one for the event dots under them
const WEEK_LINES: u16 = 2;

/// Number of columns per day of week in the year overview
const MINI_DAY_WIDTH: u16 = 3;

const MINI_WIDTH: u16 = MINI_DAY_WIDTH * 7;

/// Columns between neighboring months in the year overview
const MINI_GUTTER: u16 = 3;

const MONTH_PITCH: u16 = MINI_WIDTH + MINI_GUTTER;

const MONTHS_PER_ROW: u16 = 3;

/// Width of the year overview
const YEAR_WIDTH: u16 = MONTH_PITCH * (MONTHS_PER_ROW - 1) + MINI_WIDTH;

/// First line of the year overview's months
const OVERVIEW_TOP: u16 = 2;

/// Lines per month in the year overview: name, weekday header, six weeks, and
/// a blank line
const MINI_HEIGHT: u16 = 9;

const ACS_HLINE: char = '─';
const EVENT_DOT: char = '•';

/// Terminal rendering of a [`CalendarNavigation`]: the month grid of the
/// selected month, or the twelve months of the selected year
#[derive(Debug)]
pub struct Calendar<'a, E: ?Sized> {
    events: &'a E,
    month_cursor: Option<u8>,
}

impl<'a, E: EventSource + ?Sized> Calendar<'a, E> {
    pub fn new(events: &'a E) -> Calendar<'a, E> {
        Calendar {
            events,
            month_cursor: None,
        }
    }

    /// Highlight the name of the given month in the year overview
    pub fn month_cursor(mut self, month: u8) -> Self {
        self.month_cursor = Some(month);
        self
    }
}

impl<E: EventSource + ?Sized> StatefulWidget for Calendar<'_, E> {
    type State = CalendarNavigation;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let width = if state.is_detail_view() {
            MAIN_WIDTH
        } else {
            YEAR_WIDTH
        };
        let left = area.width.saturating_sub(width) / 2;
        let area = Rect {
            x: area.x + left,
            width: width.min(area.width),
            ..area
        };
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.mvprint(TITLE_LINE, 0, state.title(), TITLE_STYLE);
        if state.is_detail_view() {
            if state.month_grid_hidden() {
                return;
            }
            if let Ok(cells) = state.build_selected_month_view(self.events) {
                canvas.draw_month(&state.weekday_headers(), &cells);
            }
        } else if let Ok(months) = state.build_year_view(self.events) {
            canvas.draw_year(
                &state.month_names(),
                &state.weekday_headers(),
                &months,
                self.month_cursor,
            );
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_month(&mut self, headers: &[&str], cells: &[DayCell]) {
        for (i, name) in zip(0u16.., headers) {
            self.mvprint(HEADER_LINE, i * DAY_WIDTH + 1, name, WEEKDAY_STYLE);
        }
        self.hline(RULE_LINE, 0, ACS_HLINE, MAIN_WIDTH);
        for cell in cells {
            let Some(day) = cell.day else {
                continue;
            };
            let (row, col) = cell_coords(cell);
            let y = GRID_TOP.saturating_add(row.saturating_mul(WEEK_LINES));
            let x = col * DAY_WIDTH;
            let s = if cell.is_current_date {
                format!("[{day:2}]")
            } else {
                format!(" {day:2} ")
            };
            let style = if cell.is_current_date {
                CURRENT_DAY_STYLE
            } else if cell.is_selected_date {
                SELECTED_DAY_STYLE
            } else {
                BASE_STYLE
            };
            self.mvprint(y, x, s, style);
            if cell.has_primary_event {
                self.mvaddch(y + 1, x + 1, EVENT_DOT, PRIMARY_EVENT_STYLE);
            }
            if cell.has_secondary_event {
                self.mvaddch(y + 1, x + 2, EVENT_DOT, SECONDARY_EVENT_STYLE);
            }
        }
    }

    fn draw_year(
        &mut self,
        names: &[&str],
        headers: &[&str],
        months: &[MonthView],
        cursor: Option<u8>,
    ) {
        for (i, view) in zip(0u16.., months) {
            let top = OVERVIEW_TOP + (i / MONTHS_PER_ROW) * MINI_HEIGHT;
            let left = (i % MONTHS_PER_ROW) * MONTH_PITCH;
            let name = names.get(usize::from(i)).copied().unwrap_or_default();
            let style = if cursor == Some(view.month) {
                MONTH_CURSOR_STYLE
            } else {
                MONTH_STYLE
            };
            self.mvprint(top, left, name, style);
            for (j, header) in zip(0u16.., headers) {
                self.mvprint(top + 1, left + j * MINI_DAY_WIDTH, header, WEEKDAY_STYLE);
            }
            for cell in &view.cells {
                let Some(day) = cell.day else {
                    continue;
                };
                let (row, col) = cell_coords(cell);
                let mut style = BASE_STYLE;
                if cell.has_primary_event {
                    style = style.patch(PRIMARY_DAY_STYLE);
                }
                if cell.has_secondary_event {
                    style = style.patch(SECONDARY_DAY_STYLE);
                }
                if cell.is_current_date {
                    style = style.patch(CURRENT_DAY_STYLE);
                }
                self.mvprint(
                    (top + 2).saturating_add(row),
                    left + col * MINI_DAY_WIDTH,
                    format!("{day:2}"),
                    style,
                );
            }
        }
    }

    fn mvaddch(&mut self, y: u16, x: u16, ch: char, style: Style) {
        if y < self.area.height && x < self.area.width {
            self.buf[(x + self.area.x, y + self.area.y)]
                .set_char(ch)
                .set_style(style);
        }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // The Rect passed to the Paragraph must lie entirely within the
            // buffer lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), BASE_STYLE);
    }
}

fn cell_coords(cell: &DayCell) -> (u16, u16) {
    let (row, col) = cell.position();
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    let col = u16::try_from(col).unwrap_or(0);
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::config::CalendarConfig;
    use crate::calendar::date::CalendarDate;
    use crate::calendar::events::EventFlags;
    use std::collections::BTreeMap;
    use time::macros::date;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_owned()
    }

    fn events() -> BTreeMap<CalendarDate, EventFlags> {
        BTreeMap::from([
            (
                CalendarDate::from(date!(2022 - 01 - 03)),
                EventFlags {
                    primary: true,
                    secondary: false,
                },
            ),
            (
                CalendarDate::from(date!(2022 - 01 - 04)),
                EventFlags {
                    primary: false,
                    secondary: true,
                },
            ),
        ])
    }

    fn navigation() -> CalendarNavigation {
        CalendarNavigation::new(
            CalendarDate::from(date!(2022 - 01 - 15)),
            CalendarConfig::new(),
        )
    }

    #[test]
    fn test_month_view() {
        let mut nav = navigation();
        nav.select_day(20).unwrap();
        let events = events();
        let area = Rect::new(0, 0, 28, 16);
        let mut buf = Buffer::empty(area);
        Calendar::new(&events).render(area, &mut buf, &mut nav);
        assert_eq!(row(&buf, 0), "January 2022");
        assert_eq!(row(&buf, 1), " Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(row(&buf, 2), "─".repeat(28));
        assert_eq!(row(&buf, 3), format!("{}1", " ".repeat(26)));
        assert_eq!(row(&buf, 4), "");
        assert_eq!(row(&buf, 5), "  2   3   4   5   6   7   8");
        assert_eq!(row(&buf, 6), "     •    •");
        assert_eq!(row(&buf, 7), "  9  10  11  12  13  14 [15]");
        assert_eq!(row(&buf, 9), " 16  17  18  19  20  21  22");
        assert_eq!(row(&buf, 11), " 23  24  25  26  27  28  29");
        assert_eq!(row(&buf, 13), " 30  31");
        assert_eq!(row(&buf, 15), "");
        assert_eq!(buf[(0, 0)].style().add_modifier, Modifier::BOLD);
        assert_eq!(buf[(5, 6)].fg, Color::LightBlue);
        assert_eq!(buf[(10, 6)].fg, Color::LightRed);
        assert_eq!(buf[(25, 7)].bg, Color::Red);
        assert_eq!(buf[(17, 9)].bg, Color::Magenta);
        assert_eq!(buf[(1, 9)].bg, Color::Black);
    }

    #[test]
    fn test_month_view_is_centered() {
        let mut nav = navigation();
        let events = events();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        Calendar::new(&events).render(area, &mut buf, &mut nav);
        assert_eq!(row(&buf, 0), "      January 2022");
        assert_eq!(row(&buf, 1), "       Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(row(&buf, 3), format!("{}1", " ".repeat(32)));
    }

    #[test]
    fn test_hidden_month_grid() {
        let mut nav = navigation();
        nav.set_month_grid_hidden(true);
        let events = events();
        let area = Rect::new(0, 0, 28, 8);
        let mut buf = Buffer::empty(area);
        Calendar::new(&events).render(area, &mut buf, &mut nav);
        assert_eq!(row(&buf, 0), "January 2022");
        for y in 1..8 {
            assert_eq!(row(&buf, y), "");
        }
    }

    #[test]
    fn test_year_view() {
        let mut nav = navigation();
        nav.toggle_detail_view();
        let events = events();
        let area = Rect::new(0, 0, 69, 38);
        let mut buf = Buffer::empty(area);
        Calendar::new(&events)
            .month_cursor(3)
            .render(area, &mut buf, &mut nav);
        assert_eq!(row(&buf, 0), "2022");
        assert_eq!(row(&buf, 1), "");
        assert_eq!(
            row(&buf, 2),
            format!("Jan{}Feb{}Mar", " ".repeat(21), " ".repeat(21))
        );
        assert!(row(&buf, 3).starts_with("Su Mo Tu We Th Fr Sa    Su Mo"));
        assert_eq!(buf[(19, 4)].symbol(), "1");
        assert_eq!(buf[(31, 4)].symbol(), "1");
        assert_eq!(buf[(55, 4)].symbol(), "1");
        assert_eq!(buf[(0, 11)].symbol(), "A");
        assert_eq!(buf[(16, 13)].symbol(), "1");
        assert_eq!(buf[(18, 6)].symbol(), "1");
        assert_eq!(buf[(19, 6)].symbol(), "5");
        assert_eq!(buf[(18, 6)].bg, Color::Red);
        assert_eq!(buf[(4, 5)].symbol(), "3");
        assert_eq!(buf[(4, 5)].fg, Color::LightBlue);
        assert!(buf[(7, 5)].modifier.contains(Modifier::UNDERLINED));
        assert!(buf[(48, 2)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(0, 2)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(66, 35)].symbol(), "3");
        assert_eq!(buf[(67, 35)].symbol(), "1");
    }
}
