use std::time::{SystemTime, UNIX_EPOCH};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use super::{Reading, CLOSING_SPEED_MAX, DISTANCE_RANGE, MODE, VEHICLE_ID, VEHICLE_SPEED_RANGE};

/// Produces independent synthetic readings from an owned RNG.
pub struct ReadingGenerator {
    rng: StdRng,
    sequence_counter: u64,
}

impl ReadingGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            sequence_counter: 0,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            sequence_counter: 0,
        }
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn generate(&mut self) -> Reading<'static> {
        self.generate_at(unix_timestamp())
    }

    pub fn generate_at(&mut self, timestamp: f64) -> Reading<'static> {
        self.sequence_counter += 1;

        Reading {
            vehicle_id: VEHICLE_ID,
            left_distance: self.rng.gen_range(DISTANCE_RANGE),
            right_distance: self.rng.gen_range(DISTANCE_RANGE),
            closing_speed: round_hundredths(self.rng.gen_range(0.0..=CLOSING_SPEED_MAX)),
            vehicle_speed: self.rng.gen_range(VEHICLE_SPEED_RANGE),
            mode: MODE,
            timestamp,
        }
    }

    /// Number of readings generated so far.
    pub fn get_sequence(&self) -> u64 {
        self.sequence_counter
    }
}

/// Wall-clock seconds since the UNIX epoch. A clock set before the epoch reads as 0.
pub fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
