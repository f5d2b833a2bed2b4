//! Metrics module - Emission cycle timing

use hdrhistogram::Histogram;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use crate::error::{EmitterError, Result};

// ============================================================================
// EMISSION METRICS - Shared timing histograms
// ============================================================================

#[derive(Clone)]
pub struct EmissionMetrics {
    generation_hist: Arc<Mutex<Histogram<u64>>>,
    write_hist: Arc<Mutex<Histogram<u64>>>,
    // Start-to-start time between consecutive emissions
    period_hist: Arc<Mutex<Histogram<u64>>>,
    readings: Arc<AtomicU64>,
}

impl EmissionMetrics {
    pub fn new() -> Result<Self> {
        Ok(Self {
            generation_hist: Arc::new(Mutex::new(new_histogram()?)),
            write_hist: Arc::new(Mutex::new(new_histogram()?)),
            period_hist: Arc::new(Mutex::new(new_histogram()?)),
            readings: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn record_generation(&self, duration: Duration) {
        self.generation_hist.lock().record(as_nanos(duration)).ok();
    }

    /// Records the serialize + write + flush time of one reading.
    pub fn record_write(&self, duration: Duration) {
        self.write_hist.lock().record(as_nanos(duration)).ok();
        self.readings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_period(&self, duration: Duration) {
        self.period_hist.lock().record(as_nanos(duration)).ok();
    }

    pub fn readings(&self) -> u64 {
        self.readings.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> MetricsReport {
        let gen = self.generation_hist.lock();
        let write = self.write_hist.lock();
        let period = self.period_hist.lock();

        MetricsReport {
            readings: self.readings(),
            generation_p50: Duration::from_nanos(gen.value_at_quantile(0.5)),
            generation_p99: Duration::from_nanos(gen.value_at_quantile(0.99)),
            write_p50: Duration::from_nanos(write.value_at_quantile(0.5)),
            write_p99: Duration::from_nanos(write.value_at_quantile(0.99)),
            period_p50: Duration::from_nanos(period.value_at_quantile(0.5)),
            period_p99: Duration::from_nanos(period.value_at_quantile(0.99)),
            period_max: Duration::from_nanos(period.max()),
        }
    }
}

fn new_histogram() -> Result<Histogram<u64>> {
    Histogram::new(3).map_err(EmitterError::Metrics)
}

fn as_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

// ============================================================================
// METRICS REPORT - Summary statistics
// ============================================================================

#[derive(Debug, Clone)]
pub struct MetricsReport {
    pub readings: u64,
    pub generation_p50: Duration,
    pub generation_p99: Duration,
    pub write_p50: Duration,
    pub write_p99: Duration,
    pub period_p50: Duration,
    pub period_p99: Duration,
    pub period_max: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_zero() {
        let metrics = EmissionMetrics::new().unwrap();
        let report = metrics.report();
        assert_eq!(report.readings, 0);
        assert_eq!(report.period_p50, Duration::ZERO);
        assert_eq!(report.period_max, Duration::ZERO);
    }

    #[test]
    fn writes_count_readings() {
        let metrics = EmissionMetrics::new().unwrap();
        for _ in 0..3 {
            metrics.record_write(Duration::from_micros(5));
        }
        assert_eq!(metrics.readings(), 3);
        assert_eq!(metrics.report().readings, 3);
    }

    #[test]
    fn clones_share_histograms() {
        let metrics = EmissionMetrics::new().unwrap();
        let shared = metrics.clone();
        shared.record_period(Duration::from_secs(2));
        shared.record_generation(Duration::from_micros(1));

        let report = metrics.report();
        // 3 significant figures
        let period = report.period_p50.as_secs_f64();
        assert!((period - 2.0).abs() < 0.01, "period p50 was {}", period);
        assert!(report.period_max >= Duration::from_millis(1990));
        assert!(report.generation_p99 > Duration::ZERO);
    }
}
