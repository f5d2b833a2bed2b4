use std::io;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vehicle_sensor_stub::config::{load_config, RuntimeConfig, DEFAULT_CONFIG_PATH};
use vehicle_sensor_stub::threaded_impl::emitter_thread::{join_emitter, spawn_emitter_thread};
use vehicle_sensor_stub::{EmissionMetrics, Emitter, EmitterError, ReadingGenerator};

fn main() -> ExitCode {
    // stdout carries readings only; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "sensor stub terminated");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), EmitterError> {
    let cfg = match load_config(DEFAULT_CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "falling back to default config");
            RuntimeConfig::default()
        }
    };
    info!(interval_ms = cfg.interval_ms, seed = ?cfg.seed, "starting vehicle sensor stub");

    let metrics = EmissionMetrics::new()?;
    let emitter = Emitter::new(ReadingGenerator::with_seed(cfg.seed), cfg.interval(), metrics.clone());

    // Nothing ever stops the emitter; `_stop` must stay alive for the thread to keep running.
    let (handle, _stop) = spawn_emitter_thread(emitter, io::stdout())?;
    let result = join_emitter(handle);

    let report = metrics.report();
    info!(
        readings = report.readings,
        generation_p99 = ?report.generation_p99,
        write_p99 = ?report.write_p99,
        period_p50 = ?report.period_p50,
        period_max = ?report.period_max,
        "emission metrics"
    );

    result.map(|_| ())
}
