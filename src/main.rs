use cansat_dashboard::{log_info, util, App, DashboardConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = DashboardConfig::load_default()?;
    util::log::init(&config.log_dir, config.debug_logging)?;
    log_info!("Starting dashboard: chart every {} ms, map every {} ms",
        config.timers.chart_tick_ms, config.timers.map_refresh_ms);

    let terminal = ratatui::init();
    let result = match App::new(config).await {
        Ok(app) => app.run(terminal).await,
        Err(e) => Err(e),
    };
    ratatui::restore();
    result
}
