use ratatui::style::{Color, Modifier, Style};

pub const WINDOW_BG: Color = Color::Rgb(0x2C, 0x2F, 0x33);
pub const PLOT_BG: Color = Color::Rgb(0x23, 0x27, 0x2A);
pub const GRID: Color = Color::Rgb(0x4E, 0x5D, 0x6C);
pub const ALTITUDE_LINE: Color = Color::Rgb(0x39, 0xFF, 0x14);
pub const TEMPERATURE_LINE: Color = Color::Rgb(0xFF, 0xD7, 0x00);
pub const LABEL: Color = Color::White;
pub const TREND_ARROW: Color = Color::White;
pub const MAP_MARKER: Color = Color::Red;

pub fn label() -> Style {
    Style::default().fg(LABEL)
}

pub fn title() -> Style {
    Style::default().fg(LABEL).add_modifier(Modifier::BOLD)
}
