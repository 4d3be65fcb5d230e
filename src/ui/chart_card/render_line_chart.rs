use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    prelude::{Style, Widget},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Padding},
};

use crate::telemetry::TelemetryHistory;
use crate::ui::style;

use super::{ChartCard, ViewData, X_LABEL};

impl ChartCard {
    /// Redraw the whole card from `history`: frame, axes, grid, series and
    /// the trend arrow. Same history in, same cells out.
    pub fn render(&self, history: &TelemetryHistory, area: Rect, buf: &mut Buffer) {
        let ViewData {
            title,
            y_label,
            unit,
            line_color,
            series,
            x_bounds,
            y_bounds,
            grid,
            arrow,
        } = self.get_view_data(history);

        let container = Block::default()
            .title(Span::styled(format!(" {} ", title), style::title()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style::GRID))
            .style(Style::default().bg(style::PLOT_BG))
            .padding(Padding::horizontal(1));

        let shaft;
        let head;
        let mut datasets = vec![
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(style::GRID))
                .data(&grid),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(line_color))
                .data(&series),
        ];

        if let Some(arrow) = arrow {
            shaft = [arrow.from, arrow.to];
            let last = arrow.to.1;
            datasets.push(
                Dataset::default()
                    .name(format!("{} {:.1} {}", arrow.trend().glyph(), last, unit))
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(style::TREND_ARROW))
                    .data(&shaft),
            );
            if let Some(points) = arrow.head(x_bounds, y_bounds) {
                head = points;
                datasets.push(
                    Dataset::default()
                        .marker(Marker::Braille)
                        .graph_type(GraphType::Line)
                        .style(Style::default().fg(style::TREND_ARROW))
                        .data(&head),
                );
            }
        }

        let chart = Chart::new(datasets)
            .block(container)
            .style(Style::default().bg(style::PLOT_BG))
            .legend_position(Some(LegendPosition::TopRight))
            .x_axis(
                Axis::default()
                    .title(Span::styled(X_LABEL, style::label()))
                    .style(style::label())
                    .bounds(x_bounds)
                    .labels(axis_labels(x_bounds, 0)),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(y_label, style::label()))
                    .style(style::label())
                    .bounds(y_bounds)
                    .labels(axis_labels(y_bounds, 1)),
            );

        Widget::render(chart, area, buf);
    }
}

fn axis_labels(bounds: [f64; 2], precision: usize) -> Vec<Span<'static>> {
    let [lo, hi] = bounds;
    [lo, (lo + hi) / 2.0, hi]
        .into_iter()
        .map(|v| Span::styled(format!("{:.*}", precision, v), style::label()))
        .collect()
}
