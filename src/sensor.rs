//! Sensor module - Reading record and synthetic data generation

pub mod generator;

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ============================================================================
// FIXED RECORD CONTENTS
// ============================================================================

pub const VEHICLE_ID: &str = "BUS_01";
pub const MODE: &str = "traffic";

/// Side distance range, arbitrary unit (cm).
pub const DISTANCE_RANGE: RangeInclusive<u32> = 20..=100;
pub const VEHICLE_SPEED_RANGE: RangeInclusive<u32> = 10..=60;
pub const CLOSING_SPEED_MAX: f64 = 1.5;

// ============================================================================
// READING
// ============================================================================

/// One synthetic sensor record.
///
/// Field order here is the field order on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading<'a> {
    pub vehicle_id: &'a str,
    pub left_distance: u32,
    pub right_distance: u32,
    pub closing_speed: f64,
    pub vehicle_speed: u32,
    pub mode: &'a str,
    /// Seconds since the UNIX epoch.
    pub timestamp: f64,
}

impl Reading<'_> {
    /// Single-line JSON encoding, without the line terminator.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
