use ratatui::style::{Color, Modifier, Style};

pub const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub const WEEKDAY_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

/// Month name under the cursor in the year overview
pub const MONTH_CURSOR_STYLE: Style = MONTH_STYLE.add_modifier(Modifier::REVERSED);

pub const CURRENT_DAY_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);

pub const SELECTED_DAY_STYLE: Style = Style::new().fg(Color::White).bg(Color::Magenta);

pub const PRIMARY_EVENT_STYLE: Style = Style::new().fg(Color::LightBlue).bg(Color::Black);

pub const SECONDARY_EVENT_STYLE: Style = Style::new().fg(Color::LightRed).bg(Color::Black);

pub(crate) mod overview {
    use super::*;

    /// Day with a primary event, in the year overview where there is no room
    /// for event dots
    pub(crate) const PRIMARY_DAY_STYLE: Style = Style::new().fg(Color::LightBlue);

    pub(crate) const SECONDARY_DAY_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
}
