//! Carousel controller.
//!
//! Owns the slides, the [`CarouselState`], the autoplay timer and the list of
//! subscribers. Autoplay ticks, button presses, dot clicks and drag releases
//! all end up in [`Carousel::dispatch`], which runs the reducer, re-arms or
//! cancels the timer at the same point the index changes, and notifies
//! subscribers when the state differs from before.
//!
//! The controller is single-threaded: the host delivers events one at a time
//! (see `ui::runtime`), so no locking is involved.

use crate::carousel::config::CarouselConfig;
use crate::carousel::drag::{self, DragOutcome, DragRelease};
use crate::carousel::intent::CarouselIntent;
use crate::carousel::reducer::CarouselReducer;
use crate::carousel::state::{CarouselState, Direction};
use crate::carousel::timer::{AutoplayTimer, TimerDriver, TimerToken};
use crate::error::CarouselError;
use crate::mvi::Reducer;

/// What subscribers see after every state change.
#[derive(Debug)]
pub struct Snapshot<'a, T> {
    pub index: usize,
    pub slide_count: usize,
    pub slide: &'a T,
    pub direction: Direction,
    pub is_autoplaying: bool,
}

/// Handle returned by [`Carousel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&Snapshot<'_, T>)>;

struct Subscriber<T> {
    id: SubscriptionId,
    callback: Callback<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// Built but not mounted; no timer runs.
    Idle,
    Running,
    /// Unmounted; pending timers were cancelled and late ticks are ignored.
    Stopped,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Autoplay was on when the drag began and comes back on release.
    resume_after: bool,
}

pub struct Carousel<T> {
    name: String,
    slides: Vec<T>,
    config: CarouselConfig,
    state: CarouselState,
    timer: AutoplayTimer,
    lifecycle: Lifecycle,
    drag: Option<DragSession>,
    subscribers: Vec<Subscriber<T>>,
    next_subscription: u64,
}

impl<T> Carousel<T> {
    /// Build a controller over a fixed, non-empty list of slides.
    ///
    /// Nothing is scheduled until [`Carousel::start`].
    pub fn new(
        slides: Vec<T>,
        config: CarouselConfig,
        driver: Box<dyn TimerDriver>,
    ) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        config.validate()?;
        if config.initial_index >= slides.len() {
            return Err(CarouselError::IndexOutOfRange {
                index: config.initial_index,
                len: slides.len(),
            });
        }

        let state = CarouselState::new(slides.len(), config.initial_index, config.autoplay);
        let timer = AutoplayTimer::new(driver, config.interval());

        Ok(Self {
            name: "carousel".to_string(),
            slides,
            config,
            state,
            timer,
            lifecycle: Lifecycle::Idle,
            drag: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Label used in log lines.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mount: arm autoplay if enabled and emit the initial snapshot.
    pub fn start(&mut self) {
        if self.lifecycle == Lifecycle::Running {
            return;
        }
        self.lifecycle = Lifecycle::Running;
        if self.state.is_autoplaying {
            self.timer.arm();
        }
        tracing::info!(
            carousel = %self.name,
            slides = self.slides.len(),
            index = self.state.current_index,
            autoplay = self.state.is_autoplaying,
            "carousel started"
        );
        self.notify();
    }

    /// Unmount: cancel the pending timer and forget any drag in progress.
    pub fn stop(&mut self) {
        self.timer.disarm();
        self.drag = None;
        if self.lifecycle == Lifecycle::Running {
            tracing::info!(carousel = %self.name, "carousel stopped");
        }
        self.lifecycle = Lifecycle::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn next(&mut self) {
        self.dispatch(CarouselIntent::Next);
    }

    pub fn prev(&mut self) {
        self.dispatch(CarouselIntent::Prev);
    }

    /// Jump to `index`. Out-of-range targets leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if !self.state.contains(index) {
            tracing::warn!(
                carousel = %self.name,
                index,
                len = self.slides.len(),
                "go_to rejected"
            );
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.dispatch(CarouselIntent::GoTo { index });
        Ok(())
    }

    pub fn pause(&mut self) {
        self.dispatch(CarouselIntent::Pause);
    }

    /// Restart autoplay with a fresh interval.
    ///
    /// Carousels configured without autoplay stay manual.
    pub fn resume(&mut self) {
        if !self.config.autoplay {
            tracing::debug!(carousel = %self.name, "resume ignored, autoplay disabled");
            return;
        }
        self.dispatch(CarouselIntent::Resume);
    }

    /// Deliver a fired timer. Returns true if it advanced the carousel.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.is_running() {
            tracing::trace!(carousel = %self.name, token = token.0, "tick after stop ignored");
            return false;
        }
        if !self.timer.accept(token) || !self.state.is_autoplaying {
            return false;
        }
        self.dispatch(CarouselIntent::Next);
        true
    }

    /// Pointer went down on the slide view. Autoplay holds until release.
    pub fn begin_drag(&mut self) {
        if self.drag.is_some() {
            return;
        }
        self.drag = Some(DragSession {
            resume_after: self.state.is_autoplaying,
        });
        self.pause();
    }

    /// Pointer released: navigate according to the drag, then restore autoplay.
    pub fn release_drag(&mut self, release: DragRelease) -> DragOutcome {
        let session = self.drag.take();
        let outcome = drag::resolve(release, self.config.drag_threshold);
        tracing::debug!(
            carousel = %self.name,
            offset_x = release.offset_x,
            velocity_x = release.velocity_x,
            ?outcome,
            "drag released"
        );

        match outcome {
            DragOutcome::Next => self.next(),
            DragOutcome::Prev => self.prev(),
            DragOutcome::SnapBack => {}
        }

        if session.is_some_and(|session| session.resume_after) {
            self.resume();
        }
        outcome
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Register a callback for state changes.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot<'_, T>) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current(&self) -> &T {
        &self.slides[self.state.current_index]
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; construction rejects empty slide lists.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.timer.pending()
    }

    /// The single state-update path.
    fn dispatch(&mut self, intent: CarouselIntent) {
        let previous = self.state;
        self.state = CarouselReducer::reduce(previous, intent);

        tracing::debug!(
            carousel = %self.name,
            ?intent,
            from = previous.current_index,
            to = self.state.current_index,
            direction = ?self.state.direction,
            autoplay = self.state.is_autoplaying,
            "intent applied"
        );

        if !self.state.is_autoplaying {
            self.timer.disarm();
        } else if self.is_running()
            && (intent.is_navigation() || intent == CarouselIntent::Resume)
        {
            self.timer.arm();
        }

        if self.state != previous {
            self.notify();
        }
    }

    fn notify(&mut self) {
        let snapshot = Snapshot {
            index: self.state.current_index,
            slide_count: self.state.slide_count,
            slide: &self.slides[self.state.current_index],
            direction: self.state.direction,
            is_autoplaying: self.state.is_autoplaying,
        };
        for subscriber in self.subscribers.iter_mut() {
            (subscriber.callback)(&snapshot);
        }
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
