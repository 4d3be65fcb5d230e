/// One telemetry reading: integer clock, altitude in meters, temperature in °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: u64,
    pub altitude: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Ascent,
    Descent,
    Landed,
}

impl FlightPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightPhase::Ascent => "ASCENT",
            FlightPhase::Descent => "DESCENT",
            FlightPhase::Landed => "LANDED",
        }
    }
}
