//! Background sweeper that removes due notifications.
//!
//! The queue itself stays synchronous; this thread is the only timer
//! machinery, waking on a short interval and sweeping the shared queue.
//! Timers are fire-and-forget: nothing cancels an entry early.

use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::queue::NotificationQueue;

/// Handle to a running sweeper thread.
///
/// Shutdown is graceful: signal via channel, then join. Dropping the handle
/// shuts the thread down as well.
#[derive(Debug)]
pub struct Sweeper {
    shutdown: mpsc::Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl Sweeper {
    /// Default poll interval. Short relative to the 5 s notification TTL so
    /// expiry is observed promptly without busy-waiting.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

    /// Spawn a sweeper over a shared queue.
    pub fn spawn(queue: Arc<Mutex<NotificationQueue>>) -> Self {
        Self::spawn_with_interval(queue, Self::POLL_INTERVAL)
    }

    pub fn spawn_with_interval(
        queue: Arc<Mutex<NotificationQueue>>,
        interval: Duration,
    ) -> Self {
        let (shutdown, signal) = mpsc::channel();
        let join = thread::spawn(move || {
            debug!("notification sweeper started");
            loop {
                match signal.recv_timeout(interval) {
                    Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        if let Ok(mut queue) = queue.lock() {
                            queue.sweep(Instant::now());
                        }
                    }
                }
            }
            debug!("notification sweeper stopped");
        });
        Self {
            shutdown,
            join: Some(join),
        }
    }

    /// Request graceful shutdown and wait for the thread to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let _ = self.shutdown.send(());
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.stop();
    }
}
