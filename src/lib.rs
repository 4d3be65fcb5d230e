pub mod app;
pub mod config;
pub mod event;
pub mod map;
pub mod session;
pub mod telemetry;
pub mod ui;
pub mod util;

pub use app::App;
pub use config::DashboardConfig;
pub use session::Session;
