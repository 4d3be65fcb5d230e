use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::telemetry::{FlightProfile, TelemetryHistory};
use crate::ui::style;

pub fn render_status_bar(
    history: &TelemetryHistory,
    profile: &FlightProfile,
    area: Rect,
    buf: &mut Buffer,
) {
    let dim = Style::default().fg(style::GRID);

    let mut spans = match history.last() {
        Some(sample) => vec![
            Span::styled(format!(" T+{}s ", sample.time), style::title()),
            Span::styled(format!(" ALT {:.1} m ", sample.altitude), Style::default().fg(style::ALTITUDE_LINE)),
            Span::styled(format!(" TEMP {:.1} °C ", sample.temperature), Style::default().fg(style::TEMPERATURE_LINE)),
            Span::styled(
                format!(" {} ", profile.phase_at(sample.time).as_str()),
                style::label().add_modifier(Modifier::REVERSED),
            ),
        ],
        None => vec![Span::styled(" awaiting telemetry ", dim)],
    };

    spans.push(Span::styled(
        format!(" {}/{} samples │ q quit · r new map · o open map", history.len(), history.capacity()),
        dim,
    ));

    Paragraph::new(Line::from(spans))
        .style(Style::default().bg(style::WINDOW_BG))
        .render(area, buf);
}
