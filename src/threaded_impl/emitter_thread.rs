use std::io::Write;
use std::thread;
use crate::emitter::Emitter;
use crate::error::{EmitterError, Result};
use crate::ipc::shutdown::{shutdown_channel, StopHandle};

/// Runs `emitter` against `out` on its own thread.
///
/// The thread ends when the returned handle is stopped or dropped, or when a
/// write fails. Joining yields the number of readings emitted or the failure,
/// which is left to the caller to report.
pub fn spawn_emitter_thread<W>(
    mut emitter: Emitter,
    mut out: W,
) -> Result<(thread::JoinHandle<Result<u64>>, StopHandle)>
where
    W: Write + Send + 'static,
{
    let (stop, signal) = shutdown_channel();

    let handle = thread::Builder::new()
        .name("emitter".to_string())
        .spawn(move || emitter.run(&mut out, &signal))?;

    Ok((handle, stop))
}

/// Joins an emitter thread, folding a panic into [`EmitterError::ThreadPanicked`].
pub fn join_emitter(handle: thread::JoinHandle<Result<u64>>) -> Result<u64> {
    handle.join().map_err(|_| EmitterError::ThreadPanicked)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::EmissionMetrics;
    use crate::sensor::generator::ReadingGenerator;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn emitter(interval: Duration) -> Emitter {
        Emitter::new(ReadingGenerator::new(42), interval, EmissionMetrics::new().unwrap())
    }

    #[test]
    fn stop_handle_ends_thread() {
        let buf = SharedBuf::default();
        let (handle, stop) = spawn_emitter_thread(emitter(Duration::from_secs(60)), buf.clone()).unwrap();

        // First reading goes out before the first pause.
        while buf.0.lock().is_empty() {
            thread::sleep(Duration::from_millis(1));
        }
        stop.stop();

        assert_eq!(join_emitter(handle).unwrap(), 1);
        assert_eq!(buf.0.lock().iter().filter(|b| **b == b'\n').count(), 1);
    }

    #[test]
    fn dropping_handle_ends_thread() {
        let (handle, stop) = spawn_emitter_thread(emitter(Duration::from_millis(5)), io::sink()).unwrap();
        thread::sleep(Duration::from_millis(30));
        drop(stop);

        assert!(join_emitter(handle).unwrap() >= 1);
    }
}
