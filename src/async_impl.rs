//! Timer-driven emitter on the tokio runtime

pub mod emitter_task;
