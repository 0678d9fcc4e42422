//! Autoplay scheduling.
//!
//! The controller never sleeps itself. It asks a [`TimerDriver`] (the host
//! clock) to deliver a [`TimerToken`] after the autoplay interval, and the
//! host hands that token back through `Carousel::on_timer`. [`AutoplayTimer`]
//! keeps at most one token outstanding: arming always cancels the previous
//! token first, and only the outstanding token is ever accepted.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Identifies one scheduled autoplay tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

/// Clock primitive provided by the host environment.
pub trait TimerDriver {
    /// Deliver `token` once `delay` has elapsed.
    fn schedule(&mut self, token: TimerToken, delay: Duration);

    /// Drop a scheduled token. Unknown or already fired tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}

/// Single-pending-timer wrapper around a [`TimerDriver`].
pub struct AutoplayTimer {
    driver: Box<dyn TimerDriver>,
    interval: Duration,
    pending: Option<TimerToken>,
    issued: u64,
}

impl fmt::Debug for AutoplayTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoplayTimer")
            .field("interval", &self.interval)
            .field("pending", &self.pending)
            .field("issued", &self.issued)
            .finish()
    }
}

impl AutoplayTimer {
    pub fn new(driver: Box<dyn TimerDriver>, interval: Duration) -> Self {
        Self {
            driver,
            interval,
            pending: None,
            issued: 0,
        }
    }

    /// Cancel the outstanding tick (if any) and schedule a fresh one.
    pub fn arm(&mut self) -> TimerToken {
        self.disarm();
        self.issued += 1;
        let token = TimerToken(self.issued);
        self.driver.schedule(token, self.interval);
        self.pending = Some(token);
        tracing::trace!(token = token.0, interval_ms = self.interval.as_millis() as u64, "autoplay armed");
        token
    }

    /// Cancel the outstanding tick, if any.
    pub fn disarm(&mut self) {
        if let Some(token) = self.pending.take() {
            self.driver.cancel(token);
            tracing::trace!(token = token.0, "autoplay cancelled");
        }
    }

    /// Consume a fired token.
    ///
    /// Returns true only for the outstanding token; the slot is cleared so the
    /// same token cannot be accepted twice.
    pub fn accept(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            tracing::trace!(token = token.0, pending = ?self.pending, "stale autoplay tick ignored");
            false
        }
    }

    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Callback invoked from a tokio task when a token fires.
pub type FireCallback = Arc<dyn Fn(TimerToken) + Send + Sync>;

/// [`TimerDriver`] backed by `tokio::time::sleep` tasks.
///
/// Each schedule spawns one task on the given runtime; cancel aborts it.
/// The fire callback usually forwards the token into the UI event channel.
pub struct TokioTimerDriver {
    runtime: Handle,
    on_fire: FireCallback,
    tasks: HashMap<TimerToken, JoinHandle<()>>,
}

impl TokioTimerDriver {
    pub fn new<F>(runtime: Handle, on_fire: F) -> Self
    where
        F: Fn(TimerToken) + Send + Sync + 'static,
    {
        Self {
            runtime,
            on_fire: Arc::new(on_fire),
            tasks: HashMap::new(),
        }
    }

    /// Number of sleep tasks that have not fired or been cancelled.
    pub fn live_tasks(&mut self) -> usize {
        self.tasks.retain(|_, handle| !handle.is_finished());
        self.tasks.len()
    }
}

impl TimerDriver for TokioTimerDriver {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.tasks.retain(|_, handle| !handle.is_finished());
        let on_fire = Arc::clone(&self.on_fire);
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire(token);
        });
        self.tasks.insert(token, handle);
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(handle) = self.tasks.remove(&token) {
            handle.abort();
        }
    }
}

impl Drop for TokioTimerDriver {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
