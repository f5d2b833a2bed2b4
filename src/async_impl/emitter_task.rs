use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::time::{sleep, Instant};
use tracing::info;
use crate::emitter::{encode_line, Emitter};
use crate::error::Result;

/// Async rendition of [`Emitter::run`].
///
/// Sleeps `interval` after each flushed line; no drift correction. Ends when
/// `stop` fires or its sender is dropped, checked before every reading.
pub async fn emitter_task<W>(
    mut emitter: Emitter,
    mut out: W,
    mut stop: oneshot::Receiver<()>,
) -> Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let interval = emitter.interval();
    let mut emitted = 0u64;
    info!(?interval, "emitter task started");

    loop {
        match stop.try_recv() {
            Err(TryRecvError::Empty) => {}
            Ok(()) | Err(TryRecvError::Closed) => break,
        }

        let reading = emitter.begin_cycle();

        let write_start = Instant::now();
        let line = encode_line(&reading)?;
        out.write_all(line.as_bytes()).await?;
        out.flush().await?;
        emitter.finish_cycle(write_start.elapsed());
        emitted += 1;

        tokio::select! {
            biased;
            _ = &mut stop => break,
            _ = sleep(interval) => {}
        }
    }

    info!(emitted, "emitter task stopped");
    Ok(emitted)
}
