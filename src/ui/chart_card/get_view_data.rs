use crate::telemetry::{trend, TelemetryHistory};

use super::{axis_bounds, grid_points, ChartCard, TrendArrow, ViewData, GRID_DENSITY, GRID_DIVISIONS};

impl ChartCard {
    pub(super) fn get_view_data(&self, history: &TelemetryHistory) -> ViewData {
        let series = self.kind.series(history);
        let (x_bounds, y_bounds) = axis_bounds(&series);
        let grid = grid_points(x_bounds, y_bounds, GRID_DIVISIONS, GRID_DENSITY);
        let arrow = trend(&series).map(|(from, to)| TrendArrow { from, to });

        ViewData {
            title: self.kind.title(),
            y_label: self.kind.y_label(),
            unit: self.kind.unit(),
            line_color: self.kind.color(),
            series,
            x_bounds,
            y_bounds,
            grid,
            arrow,
        }
    }
}
