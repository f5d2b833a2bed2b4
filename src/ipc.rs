//! IPC module - Signalling between the emitter and whoever owns it

pub mod shutdown;
