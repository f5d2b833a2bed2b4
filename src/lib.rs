pub mod sensor;
pub mod emitter;
pub mod ipc;
pub mod metrics;
pub mod async_impl;
pub mod threaded_impl;
pub mod config;
pub mod error;

pub use sensor::{Reading, generator::ReadingGenerator};
pub use emitter::Emitter;
pub use ipc::shutdown::{shutdown_channel, ShutdownSignal, StopHandle};
pub use metrics::{EmissionMetrics, MetricsReport};
pub use config::{load_config, RuntimeConfig};
pub use error::EmitterError;
