pub mod style;
pub mod chart_card;
pub mod map_panel;
pub mod status_bar;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
};

use crate::app::App;
use chart_card::{ChartCard, ChartKind};

/// Map on top, the two charts side by side below it, status line last.
impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(style::WINDOW_BG))
            .render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45), // Map
                Constraint::Min(10),        // Charts
                Constraint::Length(1),      // Status
            ])
            .split(area);

        map_panel::render_map_panel(self.session.map().current(), rows[0], buf);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let history = self.session.telemetry().history();
        ChartCard::new(ChartKind::Altitude).render(history, charts[0], buf);
        ChartCard::new(ChartKind::Temperature).render(history, charts[1], buf);

        let profile = self.session.telemetry().profile();
        status_bar::render_status_bar(history, profile, rows[2], buf);
    }
}
