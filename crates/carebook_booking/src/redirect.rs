// --- File: crates/carebook_booking/src/redirect.rs ---
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// A deferred action, typically "return to the catalog" after a booking.
///
/// Dropping the timer detaches it; only [`RedirectTimer::cancel`] stops it.
#[derive(Debug)]
pub struct RedirectTimer {
    handle: JoinHandle<()>,
    delay: Duration,
}

impl RedirectTimer {
    /// Runs `action` once `delay` has elapsed. Must be called inside a tokio runtime.
    pub fn schedule<F>(delay: Duration, action: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        debug!(delay_ms = delay.as_millis() as u64, "redirect scheduled");
        Self { handle, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops the action if it has not run yet.
    pub fn cancel(self) {
        if !self.handle.is_finished() {
            debug!("pending redirect cancelled");
        }
        self.handle.abort();
    }
}
