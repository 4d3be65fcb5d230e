mod open_url;

/// Hands map addresses to whatever browser is installed.
#[derive(Debug, Clone)]
pub struct MapViewer {
    browsers: Vec<String>,
}

/// Openers tried in order. The first two defer to the desktop default.
pub const DEFAULT_BROWSERS: &[&str] = &[
    "xdg-open",
    "open",
    "firefox",
    "chromium-browser",
    "google-chrome",
    "epiphany",
];

impl Default for MapViewer {
    fn default() -> Self {
        Self::new(DEFAULT_BROWSERS.iter().map(|b| b.to_string()).collect())
    }
}

impl MapViewer {
    pub fn new(browsers: Vec<String>) -> Self {
        Self { browsers }
    }
}
