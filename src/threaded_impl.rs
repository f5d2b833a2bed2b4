//! Blocking emitter on a dedicated thread

pub mod emitter_thread;
