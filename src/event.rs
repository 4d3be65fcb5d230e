use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, interval_at, Instant, Interval, MissedTickBehavior};

use crate::config::TimerConfig;

/// The frequency at which redraw ticks are emitted.
const TICK_FPS: f64 = 30.0;

/// Representation of all possible events.
#[derive(Clone, Debug)]
pub enum Event {
    /// Redraw opportunity, emitted at [`TICK_FPS`].
    Tick,
    /// Time to generate the next telemetry sample.
    ChartTick,
    /// Time to move the map to a new coordinate.
    MapRefresh,
    /// Crossterm events.
    Crossterm(CrosstermEvent),
    /// Application events.
    App(AppEvent),
}

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    RefreshMap,
    OpenMap,
}

/// Terminal event handler.
#[derive(Debug)]
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Spawns the task that feeds timer and terminal events into the channel.
    pub fn new(timers: &TimerConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = EventTask::new(sender.clone(), timers.chart_tick(), timers.map_refresh());
        tokio::spawn(async { actor.run().await });
        Self { sender, receiver }
    }

    /// Receives the next event.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Queue an app event to be sent to the event receiver.
    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }
}

/// Reads crossterm events and emits the three periodic ticks.
struct EventTask {
    sender: mpsc::UnboundedSender<Event>,
    chart_period: Duration,
    map_period: Duration,
}

impl EventTask {
    fn new(sender: mpsc::UnboundedSender<Event>, chart_period: Duration, map_period: Duration) -> Self {
        Self { sender, chart_period, map_period }
    }

    async fn run(self) -> color_eyre::Result<()> {
        let mut reader = crossterm::event::EventStream::new();
        let mut timers = Timers::new(self.chart_period, self.map_period);

        loop {
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              event = timers.next() => {
                self.send(event);
              }
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}

/// The three periodic sources, polled chart first so a sample is never
/// generated after the map refresh that shares its instant.
struct Timers {
    redraw: Interval,
    chart: Interval,
    map: Interval,
}

impl Timers {
    fn new(chart_period: Duration, map_period: Duration) -> Self {
        let mut redraw = interval(Duration::from_secs_f64(1.0 / TICK_FPS));
        redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // first sample is produced right away
        let mut chart = interval(chart_period);
        chart.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // the startup map is loaded by the app, so wait a full period
        let mut map = interval_at(Instant::now() + map_period, map_period);
        map.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self { redraw, chart, map }
    }

    async fn next(&mut self) -> Event {
        tokio::select! {
            biased;
            _ = self.chart.tick() => Event::ChartTick,
            _ = self.map.tick() => Event::MapRefresh,
            _ = self.redraw.tick() => Event::Tick,
        }
    }
}
