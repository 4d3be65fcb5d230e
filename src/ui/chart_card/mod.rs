mod get_view_data;
mod axis_bounds;
mod grid_points;
mod trend_arrow;
mod render_line_chart;

use ratatui::prelude::Color;

use crate::telemetry::TelemetryHistory;
use super::style;

pub use axis_bounds::axis_bounds;
pub use grid_points::grid_points;
pub use trend_arrow::{Trend, TrendArrow};

/// Which history column a card plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Altitude,
    Temperature,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Altitude => "Altitude (m)",
            ChartKind::Temperature => "Temperature (°C)",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ChartKind::Altitude => "Altitude",
            ChartKind::Temperature => "Temperature",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ChartKind::Altitude => "m",
            ChartKind::Temperature => "°C",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ChartKind::Altitude => style::ALTITUDE_LINE,
            ChartKind::Temperature => style::TEMPERATURE_LINE,
        }
    }

    pub fn series(&self, history: &TelemetryHistory) -> Vec<(f64, f64)> {
        match self {
            ChartKind::Altitude => history.altitude_series(),
            ChartKind::Temperature => history.temperature_series(),
        }
    }
}

pub const X_LABEL: &str = "Time (s)";
const GRID_DIVISIONS: usize = 4;
const GRID_DENSITY: usize = 48;

/// One time-series panel. Holds no data; every frame is rebuilt from the history.
#[derive(Debug, Clone, Copy)]
pub struct ChartCard {
    kind: ChartKind,
}

impl ChartCard {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind }
    }
}

struct ViewData {
    title: &'static str,
    y_label: &'static str,
    unit: &'static str,
    line_color: Color,
    series: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    grid: Vec<(f64, f64)>,
    arrow: Option<TrendArrow>,
}
