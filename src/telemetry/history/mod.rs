mod push;
pub mod series;

use std::collections::VecDeque;

use super::{Sample, HISTORY_CAPACITY};

/// Sliding window of recent samples stored as three index-aligned columns.
#[derive(Debug, Clone)]
pub struct TelemetryHistory {
    time: VecDeque<u64>,
    altitude: VecDeque<f64>,
    temperature: VecDeque<f64>,
    capacity: usize,
}

impl Default for TelemetryHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl TelemetryHistory {
    /// Only the default window is preallocated; larger capacities grow on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        let reserve = capacity.min(HISTORY_CAPACITY).saturating_add(1);
        Self {
            time: VecDeque::with_capacity(reserve),
            altitude: VecDeque::with_capacity(reserve),
            temperature: VecDeque::with_capacity(reserve),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time: *self.time.get(index)?,
            altitude: *self.altitude.get(index)?,
            temperature: *self.temperature.get(index)?,
        })
    }

    pub fn first(&self) -> Option<Sample> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn last_time(&self) -> Option<u64> {
        self.time.back().copied()
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.time
            .iter()
            .zip(&self.altitude)
            .zip(&self.temperature)
            .map(|((&time, &altitude), &temperature)| Sample { time, altitude, temperature })
    }
}
