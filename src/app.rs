use crate::config::DashboardConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::map::MapViewer;
use crate::session::Session;
use crate::{log_info, log_warn};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use color_eyre::Result;

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Telemetry history and current map view.
    pub session: Session,
    pub config: DashboardConfig,
    /// Event handler.
    pub events: EventHandler,
    viewer: MapViewer,
}

impl App {
    /// Must be called from inside the tokio runtime; the event task is spawned here.
    pub async fn new(config: DashboardConfig) -> Result<Self> {
        let mut app = Self {
            running: true,
            session: Session::from_config(&config),
            events: EventHandler::new(&config.timers),
            viewer: MapViewer::default(),
            config,
        };

        // show a location immediately instead of waiting for the first refresh
        app.refresh_map().await;

        Ok(app)
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            match self.events.next().await? {
                Event::Tick => {
                    if needs_redraw {
                        terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                        needs_redraw = false;
                    }
                }
                Event::ChartTick => {
                    self.session.chart_tick();
                    needs_redraw = true;
                }
                Event::MapRefresh => {
                    self.refresh_map().await;
                    needs_redraw = true;
                }
                Event::Crossterm(event) => {
                    if let crossterm::event::Event::Key(key_event) = event {
                        self.handle_key_events(key_event);
                    }
                    needs_redraw = true;
                }
                Event::App(app_event) => match app_event {
                    AppEvent::Quit => self.quit(),
                    AppEvent::RefreshMap => {
                        self.refresh_map().await;
                        needs_redraw = true;
                    }
                    AppEvent::OpenMap => self.open_map().await,
                },
            }
        }

        log_info!("Shutting down after {} samples",
            self.session.telemetry().history().last_time().map_or(0, |t| t + 1));
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Char('r') => self.events.send(AppEvent::RefreshMap),
            KeyCode::Char('o') => self.events.send(AppEvent::OpenMap),
            _ => {}
        }
    }

    async fn refresh_map(&mut self) {
        self.session.map_refresh();
        if self.config.map.open_browser {
            self.open_map().await;
        }
    }

    /// Hand the current map address to the system browser. Failures are only logged.
    pub async fn open_map(&self) {
        let Some(view) = self.session.map().current() else {
            return;
        };
        if let Err(e) = self.viewer.open_url(&view.url).await {
            log_warn!("Could not open map {}: {}", view.url, e);
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
