use cansat_dashboard::config::DashboardConfig;
use cansat_dashboard::map::{BoundingBox, CoordinateSampler, MapRefresher, DEFAULT_MAP_BASE_URL};
use cansat_dashboard::telemetry::{FlightPhase, Sample, TelemetryGenerator};
use cansat_dashboard::Session;

#[test]
fn test_sixty_one_ticks_trace_the_flight() {
    let mut generator = TelemetryGenerator::default();
    let samples: Vec<Sample> = (0..61).map(|_| generator.generate_next()).collect();

    let times: Vec<u64> = samples.iter().map(|s| s.time).collect();
    assert_eq!(times, (0..=60).collect::<Vec<_>>());

    for (t, sample) in samples.iter().enumerate().take(41) {
        assert_eq!(sample.altitude, 653.0 + 25.0 * t as f64, "ascent t={}", t);
    }
    for (t, sample) in samples.iter().enumerate().skip(40) {
        assert_eq!(sample.altitude, 1653.0 - 50.0 * (t - 40) as f64, "descent t={}", t);
    }

    // landed from here on, temperature back at baseline
    for _ in 0..30 {
        let sample = generator.generate_next();
        assert_eq!(sample.altitude, 653.0);
        assert_eq!(sample.temperature, 22.0);
        assert_eq!(generator.profile().phase_at(sample.time), FlightPhase::Landed);
    }
}

#[test]
fn test_history_slides_after_one_hundred_samples() {
    let mut generator = TelemetryGenerator::default();
    for _ in 0..100 {
        generator.generate_next();
    }
    let before = generator.history().get(1);

    generator.generate_next();

    let history = generator.history();
    assert_eq!(history.len(), 100);
    assert_eq!(history.first(), before);
    assert_eq!(history.first().map(|s| s.time), Some(1));
    assert_eq!(history.last_time(), Some(100));
}

#[test]
fn test_map_refresh_stays_in_box() {
    let mut refresher = MapRefresher::new(
        CoordinateSampler::seeded(BoundingBox::SPAIN, 2024),
        DEFAULT_MAP_BASE_URL,
        15,
    );
    for _ in 0..1_000 {
        let view = refresher.refresh();
        let c = view.coordinate;
        assert!(36.0 <= c.latitude && c.latitude <= 43.8);
        assert!(-9.5 <= c.longitude && c.longitude <= 3.0);
        assert!(view.url.starts_with("https://www.google.com/maps/place/"));
        assert!(view.url.ends_with(",15z"));
    }
}

#[test]
fn test_session_from_yaml_config() {
    let config = DashboardConfig::from_yaml(
        r#"
history_capacity: 20
profile:
  altitude_peak: 1153.0
  descent_rate:
    mode: derived
"#,
    )
    .unwrap();

    let mut session = Session::from_config(&config);
    let samples: Vec<Sample> = (0..70).map(|_| session.chart_tick()).collect();

    assert_eq!(samples[40].altitude, 1153.0);
    // 500 m over 20 s
    assert_eq!(samples[50].altitude, 903.0);
    assert_eq!(samples[60].altitude, 653.0);
    assert_eq!(session.telemetry().history().len(), 20);
}
