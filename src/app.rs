use crate::help::Help;
use calgrid::theme::BASE_STYLE;
use calgrid::{Calendar, CalendarNavigation, EventSource};
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

/// Number of months per row of the year overview
const OVERVIEW_ROW: i8 = 3;

#[derive(Debug)]
pub(crate) struct App<E> {
    calendar: CalendarNavigation,
    events: E,
    month_cursor: u8,
    geometry: Option<(u16, u16)>,
    state: AppState,
}

impl<E: EventSource> App<E> {
    pub(crate) fn new(calendar: CalendarNavigation, events: E) -> App<E> {
        let month_cursor = calendar.selected_month();
        App {
            calendar,
            events,
            month_cursor,
            geometry: None,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-1),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(1),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-self.row_step()),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(self.row_step()),
                KeyCode::Char('p') | KeyCode::PageUp => self.calendar.backward().is_ok(),
                KeyCode::Char('n') | KeyCode::PageDown => self.calendar.forward().is_ok(),
                KeyCode::Char('<') => self.calendar.previous_year().is_ok(),
                KeyCode::Char('>') => self.calendar.next_year().is_ok(),
                KeyCode::Char('m') | KeyCode::Tab => {
                    self.toggle_view();
                    true
                }
                KeyCode::Enter => self.open_month(),
                KeyCode::Char('0') | KeyCode::Home => self.reset(),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn row_step(&self) -> i8 {
        if self.calendar.is_detail_view() {
            7
        } else {
            OVERVIEW_ROW
        }
    }

    // Moves the selected day in the month view or the month cursor in the
    // year view, never leaving the month or year on display
    fn move_cursor(&mut self, delta: i8) -> bool {
        if self.calendar.is_detail_view() {
            let day = i16::from(self.calendar.selected_date().day()) + i16::from(delta);
            u8::try_from(day).is_ok_and(|day| self.calendar.select_day(day).is_ok())
        } else {
            let month = i16::from(self.month_cursor) + i16::from(delta);
            match u8::try_from(month) {
                Ok(month @ 1..=12) => {
                    self.month_cursor = month;
                    true
                }
                _ => false,
            }
        }
    }

    fn toggle_view(&mut self) {
        self.calendar.toggle_detail_view();
        if !self.calendar.is_detail_view() {
            self.month_cursor = self.calendar.selected_month();
        }
    }

    fn open_month(&mut self) -> bool {
        !self.calendar.is_detail_view()
            && self
                .calendar
                .select_month(self.month_cursor, self.calendar.selected_year())
                .is_ok()
    }

    fn reset(&mut self) -> bool {
        let today = self.calendar.current_date();
        self.month_cursor = today.month();
        self.calendar.select_month(today.month(), today.year()).is_ok()
    }
}

impl<E: EventSource> Widget for &mut App<E> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let size = (area.width, area.height);
        if self.geometry != Some(size) {
            self.geometry = Some(size);
            self.calendar.report_geometry(area.width, area.height);
        }
        Calendar::new(&self.events)
            .month_cursor(self.month_cursor)
            .render(area, buf, &mut self.calendar);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}
