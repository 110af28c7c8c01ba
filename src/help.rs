use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

const KEYS_WIDTH: usize = 16;

static BINDINGS: &[(&str, &str)] = &[
    ("h, LEFT", "Previous day (month in year view)"),
    ("l, RIGHT", "Next day (month in year view)"),
    ("k, UP", "Previous week (row in year view)"),
    ("j, DOWN", "Next week (row in year view)"),
    ("p, PAGE UP", "Previous month (year in year view)"),
    ("n, PAGE DOWN", "Next month (year in year view)"),
    ("<, >", "Previous/next year"),
    ("m, TAB", "Toggle month/year view"),
    ("ENTER", "Open month under cursor"),
    ("0, HOME", "Jump to today"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

/// Popup listing the key bindings, centered over the calendar
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = BINDINGS
            .iter()
            .map(|&(keys, about)| Line::raw(format!("{keys:KEYS_WIDTH$}{about}")))
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw("Press the Any Key to dismiss."));
        let text = Text::from(lines);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(self.0).render(outer_area, buf);
        para.render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid::theme::BASE_STYLE;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_help_popup() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Help(BASE_STYLE).render(area, &mut buf);
        let top = (0..24)
            .find(|&y| row(&buf, y).contains(" Commands "))
            .unwrap();
        assert!(row(&buf, top + 1).contains("│h, LEFT         Previous day (month in year view)"));
        assert!(row(&buf, top + 12).contains("│q, ESC          Quit"));
        assert!(row(&buf, top + 14).contains("Press the Any Key to dismiss."));
        assert!(row(&buf, top + 15).contains('└'));
    }
}
