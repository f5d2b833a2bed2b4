use crossbeam::channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Creates a connected stop handle and shutdown signal.
///
/// Shutdown is requested by [`StopHandle::stop`] or by dropping every handle.
pub fn shutdown_channel() -> (StopHandle, ShutdownSignal) {
    let (tx, rx) = bounded(1);
    let stopped = Arc::new(AtomicBool::new(false));

    (
        StopHandle { tx, stopped: stopped.clone() },
        ShutdownSignal { rx, stopped },
    )
}

#[derive(Clone, Debug)]
pub struct StopHandle {
    tx: Sender<()>,
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
        // A full channel already carries a wake-up.
        let _ = self.tx.try_send(());
    }
}

#[derive(Debug)]
pub struct ShutdownSignal {
    rx: Receiver<()>,
    stopped: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn is_stopped(&self) -> bool {
        if self.stopped.load(Ordering::Acquire) {
            return true;
        }
        match self.rx.try_recv() {
            Ok(()) | Err(TryRecvError::Disconnected) => {
                self.stopped.store(true, Ordering::Release);
                true
            }
            Err(TryRecvError::Empty) => false,
        }
    }

    /// Blocks for at most `timeout`. Returns `true` once shutdown is requested,
    /// `false` if the full timeout elapsed without a request.
    pub fn wait(&self, timeout: Duration) -> bool {
        if self.stopped.load(Ordering::Acquire) {
            return true;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                self.stopped.store(true, Ordering::Release);
                true
            }
            Err(RecvTimeoutError::Timeout) => self.stopped.load(Ordering::Acquire),
        }
    }
}
