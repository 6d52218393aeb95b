//! L2 Organism Layer: Scroll controller facade
//!
//! Public entry point for page scrolling. Resolves requests against the
//! viewport, owns the single active animation session and reports
//! completion to callers.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use pagescroll_core::{
    Clock, Error, FrameQueue, Result, Scheduler, ScrollConfig, SystemClock, TickHandle, Viewport,
};

use super::animation::{AnimationSession, ScrollAnimator, StartOutcome, TickOutcome};
use super::config::ScrollConfigExt;
use super::easing::Easing;
use super::event::{CompletionCallback, ScrollCompletion, ScrollEvent, ScrollHandle};
use super::target::{self, ScrollRequest};
use super::timing::duration_for_speed;

/// Per-request animation parameters
pub struct ScrollOptions {
    duration_ms: u64,
    easing: Easing,
    /// Pixels per second; replaces `duration_ms` when set
    speed: Option<f64>,
    interruptible: bool,
    on_complete: Option<CompletionCallback>,
}

impl ScrollOptions {
    pub fn new(duration_ms: u64, easing: impl Into<Easing>) -> Self {
        Self {
            duration_ms,
            easing: easing.into(),
            speed: None,
            interruptible: true,
            on_complete: None,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = easing.into();
        self
    }

    pub fn with_speed(mut self, pixels_per_second: f64) -> Self {
        self.speed = Some(pixels_per_second);
        self
    }

    pub fn with_interruptible(mut self, interruptible: bool) -> Self {
        self.interruptible = interruptible;
        self
    }

    /// Called once with the final position if the scroll completes
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(ScrollCompletion) + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    pub fn speed(&self) -> Option<f64> {
        self.speed
    }

    pub fn is_interruptible(&self) -> bool {
        self.interruptible
    }

    fn validate(&self) -> Result<()> {
        match self.speed {
            Some(speed) if !speed.is_finite() || speed <= 0.0 => Err(Error::InvalidSpeed(speed)),
            Some(_) => Ok(()),
            None if self.duration_ms == 0 => Err(Error::InvalidDuration(self.duration_ms)),
            None => Ok(()),
        }
    }

    fn duration_for(&self, distance: i64) -> Result<Duration> {
        match self.speed {
            Some(speed) => duration_for_speed(distance, speed),
            None => Ok(Duration::from_millis(self.duration_ms)),
        }
    }
}

impl Default for ScrollOptions {
    fn default() -> Self {
        ScrollConfig::default().default_options()
    }
}

impl fmt::Debug for ScrollOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollOptions")
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("speed", &self.speed)
            .field("interruptible", &self.interruptible)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    Animating,
}

/// Scroll controller for one viewport
///
/// Call `scroll_to()` to start an animation, then `run_frame()` once per
/// frame (or hand individual ticks to `on_tick()`) until the controller is
/// idle again.
pub struct ScrollController<V, C = SystemClock, S = FrameQueue> {
    viewport: V,
    clock: C,
    scheduler: S,
    config: ScrollConfig,
    animator: ScrollAnimator,
    event_tx: Option<mpsc::UnboundedSender<ScrollEvent>>,
}

impl<V: Viewport> ScrollController<V> {
    /// Wall-clock controller with a frame queue and default configuration
    pub fn with_defaults(viewport: V) -> Self {
        Self::new(
            viewport,
            SystemClock::new(),
            FrameQueue::new(),
            ScrollConfig::default(),
        )
    }
}

impl<V: Viewport, C: Clock, S: Scheduler> ScrollController<V, C, S> {
    pub fn new(viewport: V, clock: C, scheduler: S, config: ScrollConfig) -> Self {
        Self {
            viewport,
            clock,
            scheduler,
            config,
            animator: ScrollAnimator::new(),
            event_tx: None,
        }
    }

    /// Set the event sender for lifecycle notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<ScrollEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn send_event(&self, event: ScrollEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send scroll event: receiver dropped");
            }
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn state(&self) -> ScrollState {
        if self.animator.is_animating() {
            ScrollState::Animating
        } else {
            ScrollState::Idle
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Destination of the running animation, if any
    pub fn target_scroll(&self) -> Option<i64> {
        self.animator.target_scroll()
    }

    /// Start animating towards `request`
    ///
    /// Any running animation is cancelled first. On error nothing is written
    /// and the controller is left idle.
    pub fn scroll_to(&mut self, request: ScrollRequest, options: ScrollOptions) -> Result<ScrollHandle> {
        self.cancel();

        if let Err(e) = options.validate() {
            debug!("Rejected scroll to {}: {}", request, e);
            return Err(e);
        }

        let destination = match target::resolve(&self.viewport, &request) {
            Ok(destination) => destination,
            Err(e) => {
                debug!("Rejected scroll to {}: {}", request, e);
                return Err(e);
            }
        };

        let from = self.viewport.current_scroll_offset();
        let duration = options.duration_for(destination - from)?;

        let ScrollOptions {
            easing,
            interruptible,
            on_complete,
            ..
        } = options;

        let mut session = AnimationSession::new(from, destination, self.clock.now(), duration, easing)
            .with_interruptible(interruptible);
        if let Some(callback) = on_complete {
            session = session.with_callback(callback);
        }
        let completion = session.subscribe();
        let session_id = session.id();

        info!(
            session = %session_id,
            from,
            to = destination,
            duration_ms = duration.as_millis() as u64,
            "Scrolling to {}",
            request
        );
        self.send_event(ScrollEvent::Started {
            session_id,
            from,
            to: destination,
        });

        let started = self
            .animator
            .start(session, &mut self.viewport, &mut self.scheduler);
        if let StartOutcome::Completed(done) = started.outcome {
            self.finish(done);
        }

        Ok(ScrollHandle::new(session_id, destination, completion))
    }

    /// `scroll_to` with options taken from the controller's configuration
    pub fn scroll_with_defaults(&mut self, request: ScrollRequest) -> Result<ScrollHandle> {
        let options = self.config.default_options();
        self.scroll_to(request, options)
    }

    /// Cancel the running animation. Returns false if there was none.
    pub fn cancel(&mut self) -> bool {
        match self.animator.cancel(&mut self.scheduler) {
            Some(session) => {
                let position = self.viewport.current_scroll_offset();
                debug!(session = %session.id(), position, "Scroll cancelled");
                self.send_event(ScrollEvent::Cancelled {
                    session_id: session.id(),
                    position,
                });
                true
            }
            None => false,
        }
    }

    /// User input (wheel, touch, key) arrived
    ///
    /// Stops the running animation if it is interruptible. Returns whether
    /// an animation was stopped.
    pub fn interrupt(&mut self) -> bool {
        match self.animator.interrupt(&mut self.scheduler) {
            Some(session) => {
                let position = self.viewport.current_scroll_offset();
                debug!(session = %session.id(), position, "Scroll interrupted by user input");
                self.send_event(ScrollEvent::Interrupted {
                    session_id: session.id(),
                    position,
                });
                true
            }
            None => false,
        }
    }

    /// Dispatch one scheduled tick
    pub fn on_tick(&mut self, handle: TickHandle) -> TickOutcome {
        let now = self.clock.now();
        let outcome = self
            .animator
            .tick(handle, now, &mut self.viewport, &mut self.scheduler);

        match outcome {
            TickOutcome::Completed(completion) => self.finish(completion),
            TickOutcome::Progress(_) | TickOutcome::Stale => {}
        }

        outcome
    }

    /// Dispatch every tick due on this frame. Returns the number of viewport writes.
    pub fn run_frame(&mut self) -> usize {
        let mut writes = 0;
        for handle in self.scheduler.take_due() {
            if matches!(
                self.on_tick(handle),
                TickOutcome::Progress(_) | TickOutcome::Completed(_)
            ) {
                writes += 1;
            }
        }
        writes
    }

    fn finish(&self, completion: ScrollCompletion) {
        info!(
            session = %completion.session_id,
            position = completion.final_position,
            "Scroll target reached"
        );
        self.send_event(ScrollEvent::Completed(completion));
    }
}
