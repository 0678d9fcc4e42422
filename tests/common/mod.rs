//! Shared test utilities: a hand-cranked timer driver and carousel builders.

#![allow(dead_code, unused_imports)]

use estate_carousel::carousel::{Carousel, CarouselConfig, Snapshot, TimerDriver, TimerToken};
use estate_carousel::carousel::Direction;
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct TimerLog {
    /// Every schedule call, in order.
    pub scheduled: Vec<(TimerToken, Duration)>,
    /// Every cancel call, in order.
    pub cancelled: Vec<TimerToken>,
    /// Tokens scheduled and neither cancelled nor fired.
    pub live: BTreeSet<TimerToken>,
}

/// `TimerDriver` that never fires on its own. Tests fire tokens explicitly.
#[derive(Clone, Default)]
pub struct ManualTimers(Arc<Mutex<TimerLog>>);

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn driver(&self) -> Box<dyn TimerDriver> {
        Box::new(self.clone())
    }

    pub fn live(&self) -> Vec<TimerToken> {
        self.0.lock().live.iter().copied().collect()
    }

    pub fn live_count(&self) -> usize {
        self.0.lock().live.len()
    }

    pub fn schedule_count(&self) -> usize {
        self.0.lock().scheduled.len()
    }

    pub fn cancel_count(&self) -> usize {
        self.0.lock().cancelled.len()
    }

    pub fn last_delay(&self) -> Option<Duration> {
        self.0.lock().scheduled.last().map(|(_, delay)| *delay)
    }

    /// Pretend the single live timer elapsed and return its token.
    pub fn fire(&self) -> Option<TimerToken> {
        let mut log = self.0.lock();
        let token = log.live.iter().next().copied()?;
        log.live.remove(&token);
        Some(token)
    }
}

impl TimerDriver for ManualTimers {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        let mut log = self.0.lock();
        log.scheduled.push((token, delay));
        log.live.insert(token);
    }

    fn cancel(&mut self, token: TimerToken) {
        let mut log = self.0.lock();
        log.cancelled.push(token);
        log.live.remove(&token);
    }
}

/// Slides are just their own index.
pub fn slides(n: usize) -> Vec<usize> {
    (0..n).collect()
}

pub fn autoplay_carousel(n: usize) -> (Carousel<usize>, ManualTimers) {
    let timers = ManualTimers::new();
    let carousel = Carousel::new(slides(n), CarouselConfig::default(), timers.driver())
        .expect("valid carousel");
    (carousel, timers)
}

pub fn manual_carousel(n: usize) -> (Carousel<usize>, ManualTimers) {
    let timers = ManualTimers::new();
    let carousel = Carousel::new(slides(n), CarouselConfig::manual(), timers.driver())
        .expect("valid carousel");
    (carousel, timers)
}

/// Owned copy of a snapshot for assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seen {
    pub index: usize,
    pub slide: usize,
    pub direction: Direction,
    pub is_autoplaying: bool,
}

impl Seen {
    pub fn from_snapshot(snapshot: &Snapshot<'_, usize>) -> Self {
        Self {
            index: snapshot.index,
            slide: *snapshot.slide,
            direction: snapshot.direction,
            is_autoplaying: snapshot.is_autoplaying,
        }
    }
}

/// Subscribe a recorder and return the shared list it appends to.
pub fn record(carousel: &mut Carousel<usize>) -> Arc<Mutex<Vec<Seen>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    carousel.subscribe(move |snapshot| sink.lock().push(Seen::from_snapshot(snapshot)));
    seen
}
