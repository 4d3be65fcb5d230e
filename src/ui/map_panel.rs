use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        Block, Borders, Paragraph, Widget, Wrap,
    },
};

use crate::map::{BoundingBox, MapView};
use crate::ui::style;

/// Area shown on the mini map, slightly wider than the sampling box.
const VIEWPORT: BoundingBox = BoundingBox {
    lat_min: 35.0,
    lat_max: 44.5,
    lon_min: -10.5,
    lon_max: 4.5,
};

/// Coastline sketch with the current location on the left, address details on the right.
pub fn render_map_panel(view: Option<&MapView>, area: Rect, buf: &mut Buffer) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let marker = view.map(|v| (v.coordinate.longitude, v.coordinate.latitude));

    Canvas::default()
        .block(
            Block::default()
                .title(Span::styled(" Map ", style::title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(style::GRID)),
        )
        .background_color(style::PLOT_BG)
        .marker(Marker::Braille)
        .x_bounds([VIEWPORT.lon_min, VIEWPORT.lon_max])
        .y_bounds([VIEWPORT.lat_min, VIEWPORT.lat_max])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::Gray,
                resolution: MapResolution::High,
            });
            if let Some((lon, lat)) = marker {
                ctx.layer();
                ctx.draw(&Points {
                    coords: &[(lon, lat)],
                    color: style::MAP_MARKER,
                });
                ctx.print(lon, lat, Span::styled("✕", Style::default().fg(style::MAP_MARKER)));
            }
        })
        .render(columns[0], buf);

    details(view)
        .block(
            Block::default()
                .title(Span::styled(" Location ", style::title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(style::GRID)),
        )
        .style(Style::default().bg(style::PLOT_BG).fg(style::LABEL))
        .wrap(Wrap { trim: false })
        .render(columns[1], buf);
}

fn details(view: Option<&MapView>) -> Paragraph<'static> {
    let Some(view) = view else {
        return Paragraph::new("Waiting for first location…");
    };

    let dim = Style::default().fg(style::GRID);
    let lines = vec![
        Line::from(vec![
            Span::styled("Lat  ", dim),
            Span::raw(format!("{:.6}", view.coordinate.latitude)),
        ]),
        Line::from(vec![
            Span::styled("Lon  ", dim),
            Span::raw(format!("{:.6}", view.coordinate.longitude)),
        ]),
        Line::from(vec![
            Span::styled("At   ", dim),
            Span::raw(view.refreshed_at.format("%H:%M:%S").to_string()),
        ]),
        Line::default(),
        Line::from(Span::styled(view.url.clone(), Style::default().fg(Color::Cyan))),
        Line::default(),
        Line::from(Span::styled("[r] new location  [o] open in browser", dim)),
    ];

    Paragraph::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{CoordinateSampler, MapRefresher, DEFAULT_MAP_BASE_URL};

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_placeholder_before_first_refresh() {
        let area = Rect::new(0, 0, 100, 16);
        let mut buf = Buffer::empty(area);
        render_map_panel(None, area, &mut buf);
        assert!(buffer_text(&buf).contains("Waiting for first location"));
    }

    #[test]
    fn test_shows_coordinate() {
        let mut refresher = MapRefresher::new(
            CoordinateSampler::seeded(BoundingBox::SPAIN, 11),
            DEFAULT_MAP_BASE_URL,
            15,
        );
        let view = refresher.refresh().clone();

        let area = Rect::new(0, 0, 120, 20);
        let mut buf = Buffer::empty(area);
        render_map_panel(Some(&view), area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains(&format!("{:.6}", view.coordinate.latitude)));
        assert!(text.contains(&format!("{:.6}", view.coordinate.longitude)));
    }
}
