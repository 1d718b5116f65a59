//! Background request runner
//!
//! Tagged requests arrive over an unbounded channel and each one runs as its
//! own task on a dedicated single-threaded tokio runtime. Results go back over
//! a `std::sync::mpsc` channel that the event loop drains with `try_recv`.
//! Requests overlap freely; the UI decides which results are stale.

use std::future::Future;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

/// Spawn a named worker thread that maps each request through `handle`
///
/// The worker exits when `request_rx` closes or `shutdown` is cancelled; tasks
/// still running at that point are dropped.
pub fn spawn<Req, Resp, F, Fut>(
    name: &'static str,
    request_rx: UnboundedReceiver<Req>,
    response_tx: Sender<Resp>,
    shutdown: CancellationToken,
    handle: F,
) where
    Req: Send + 'static,
    Resp: Send + 'static,
    F: Fn(Req) -> Fut + Send + 'static,
    Fut: Future<Output = Resp> + Send + 'static,
{
    let spawned = std::thread::Builder::new()
        .name(format!("vidq-{}", name))
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    log::error!("Failed to start {} runtime: {}", name, e);
                    return;
                }
            };

            runtime.block_on(worker_loop(name, request_rx, response_tx, shutdown, handle));
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn {} worker thread: {}", name, e);
    }
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop<Req, Resp, F, Fut>(
    name: &'static str,
    mut request_rx: UnboundedReceiver<Req>,
    response_tx: Sender<Resp>,
    shutdown: CancellationToken,
    handle: F,
) where
    Req: Send + 'static,
    Resp: Send + 'static,
    F: Fn(Req) -> Fut,
    Fut: Future<Output = Resp> + Send + 'static,
{
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else {
                    break;
                };

                let task = handle(request);
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let response = task.await;
                    if response_tx.send(response).is_err() {
                        log::debug!("Dropping {} response: receiver gone", name);
                    }
                });
            }
        }
    }

    log::debug!("{} worker shutting down", name);
}
