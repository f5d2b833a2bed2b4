//! Emitter - one reading per cycle, written as a JSON line, then a fixed pause

use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};
use crate::error::Result;
use crate::ipc::shutdown::ShutdownSignal;
use crate::metrics::EmissionMetrics;
use crate::sensor::generator::ReadingGenerator;
use crate::sensor::Reading;

pub struct Emitter {
    generator: ReadingGenerator,
    interval: Duration,
    metrics: EmissionMetrics,
    last_cycle_start: Option<Instant>,
}

impl Emitter {
    pub fn new(generator: ReadingGenerator, interval: Duration, metrics: EmissionMetrics) -> Self {
        Self {
            generator,
            interval,
            metrics,
            last_cycle_start: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn metrics(&self) -> &EmissionMetrics {
        &self.metrics
    }

    /// Generates, writes and flushes a single reading.
    pub fn emit_once<W: Write>(&mut self, out: &mut W) -> Result<Reading<'static>> {
        let reading = self.begin_cycle();

        let write_start = Instant::now();
        let line = encode_line(&reading)?;
        out.write_all(line.as_bytes())?;
        out.flush()?;
        self.finish_cycle(write_start.elapsed());

        Ok(reading)
    }

    /// Emits until `shutdown` fires, pausing `interval` after every reading.
    ///
    /// Shutdown is observed between readings, never mid-write. Any write failure ends
    /// the loop with that error.
    pub fn run<W: Write>(&mut self, out: &mut W, shutdown: &ShutdownSignal) -> Result<u64> {
        info!(interval = ?self.interval, "emitter started");
        let mut emitted = 0u64;

        while !shutdown.is_stopped() {
            self.emit_once(out)?;
            emitted += 1;

            if shutdown.wait(self.interval) {
                break;
            }
        }

        info!(emitted, "emitter stopped");
        Ok(emitted)
    }

    /// Samples the next reading and records cycle timing.
    pub(crate) fn begin_cycle(&mut self) -> Reading<'static> {
        let cycle_start = Instant::now();
        if let Some(prev) = self.last_cycle_start.replace(cycle_start) {
            self.metrics.record_period(cycle_start.duration_since(prev));
        }

        let reading = self.generator.generate();
        self.metrics.record_generation(cycle_start.elapsed());
        reading
    }

    pub(crate) fn finish_cycle(&mut self, write_time: Duration) {
        self.metrics.record_write(write_time);
        trace!(seq = self.generator.get_sequence(), ?write_time, "reading emitted");
        if self.generator.get_sequence() % 100 == 0 {
            debug!(seq = self.generator.get_sequence(), "emission checkpoint");
        }
    }
}

/// JSON object followed by the line terminator.
pub fn encode_line(reading: &Reading<'_>) -> Result<String> {
    let mut line = reading.to_json_line()?;
    line.push('\n');
    Ok(line)
}
