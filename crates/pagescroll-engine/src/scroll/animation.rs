//! L3 Molecular Layer: Scroll animation sessions
//!
//! Combines easing functions and timing utilities to drive a viewport from a
//! start offset to a destination, one scheduled tick at a time.

use std::fmt;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::trace;
use uuid::Uuid;

use pagescroll_core::{Scheduler, TickHandle, Viewport};

use super::easing::Easing;
use super::event::{CompletionCallback, ScrollCompletion};
use super::timing::{lerp_px, progress};

/// Run-time state of one in-flight scroll animation
pub struct AnimationSession {
    id: Uuid,
    /// Offset the viewport had when the request was accepted
    start_position: i64,
    /// Resolved target offset
    destination: i64,
    /// Clock reading at session start
    started_at: Duration,
    duration: Duration,
    easing: Easing,
    interruptible: bool,
    cancelled: bool,
    /// Tick the scheduler owes this session, if any
    pending_tick: Option<TickHandle>,
    completion: Option<oneshot::Sender<ScrollCompletion>>,
    on_complete: Option<CompletionCallback>,
}

impl AnimationSession {
    pub fn new(
        start_position: i64,
        destination: i64,
        started_at: Duration,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_position,
            destination,
            started_at,
            duration,
            easing,
            interruptible: true,
            cancelled: false,
            pending_tick: None,
            completion: None,
            on_complete: None,
        }
    }

    pub fn with_interruptible(mut self, interruptible: bool) -> Self {
        self.interruptible = interruptible;
        self
    }

    pub fn with_callback(mut self, callback: CompletionCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    /// Open the one-shot completion channel for this session
    pub fn subscribe(&mut self) -> oneshot::Receiver<ScrollCompletion> {
        let (tx, rx) = oneshot::channel();
        self.completion = Some(tx);
        rx
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn start_position(&self) -> i64 {
        self.start_position
    }

    pub fn destination(&self) -> i64 {
        self.destination
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_interruptible(&self) -> bool {
        self.interruptible
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Normalized time and interpolated offset at clock reading `now`
    fn sample(&self, now: Duration) -> (f64, i64) {
        let elapsed = now.saturating_sub(self.started_at);
        let t = progress(elapsed, self.duration);
        let eased = self.easing.apply(t);
        (t, lerp_px(self.start_position, self.destination, eased))
    }

    fn complete(mut self, final_position: i64) -> ScrollCompletion {
        let completion = ScrollCompletion {
            session_id: self.id,
            final_position,
        };
        if let Some(tx) = self.completion.take() {
            // Receiver may have been dropped by a caller that doesn't care
            let _ = tx.send(completion);
        }
        if let Some(callback) = self.on_complete.take() {
            callback(completion);
        }
        completion
    }
}

impl fmt::Debug for AnimationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationSession")
            .field("id", &self.id)
            .field("start_position", &self.start_position)
            .field("destination", &self.destination)
            .field("started_at", &self.started_at)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("interruptible", &self.interruptible)
            .field("cancelled", &self.cancelled)
            .field("pending_tick", &self.pending_tick)
            .finish()
    }
}

#[derive(Debug)]
pub enum StartOutcome {
    /// First tick is scheduled
    Running,
    /// Zero-distance request: written once and already complete
    Completed(ScrollCompletion),
}

#[derive(Debug)]
pub struct Started {
    /// Session that was cancelled to make room for the new one
    pub superseded: Option<AnimationSession>,
    pub outcome: StartOutcome,
}

#[derive(Debug)]
pub enum TickOutcome {
    /// The tick does not belong to the active session; nothing was written
    Stale,
    /// Wrote an intermediate offset and scheduled the next tick
    Progress(i64),
    /// Wrote the final offset
    Completed(ScrollCompletion),
}

/// Scroll animation driver
///
/// Owns at most one [`AnimationSession`]. Starting a new session cancels the
/// previous one before the new session's first tick is scheduled, and ticks
/// addressed to a superseded session are ignored.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    session: Option<AnimationSession>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// Destination of the active session
    pub fn target_scroll(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.destination)
    }

    /// Start driving `session`, cancelling any active one first
    pub fn start<V, S>(
        &mut self,
        mut session: AnimationSession,
        viewport: &mut V,
        scheduler: &mut S,
    ) -> Started
    where
        V: Viewport + ?Sized,
        S: Scheduler + ?Sized,
    {
        let superseded = self.cancel(scheduler);

        if session.start_position == session.destination {
            let position = session.destination;
            viewport.set_scroll_offset(position);
            trace!("Scroll Position: {}", position);
            return Started {
                superseded,
                outcome: StartOutcome::Completed(session.complete(position)),
            };
        }

        session.pending_tick = Some(scheduler.schedule_next_tick());
        self.session = Some(session);

        Started {
            superseded,
            outcome: StartOutcome::Running,
        }
    }

    /// Advance the active session for the tick `handle` at clock reading `now`
    pub fn tick<V, S>(
        &mut self,
        handle: TickHandle,
        now: Duration,
        viewport: &mut V,
        scheduler: &mut S,
    ) -> TickOutcome
    where
        V: Viewport + ?Sized,
        S: Scheduler + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Stale;
        };
        if session.pending_tick != Some(handle) {
            return TickOutcome::Stale;
        }
        session.pending_tick = None;

        let (t, position) = session.sample(now);
        viewport.set_scroll_offset(position);
        trace!("Scroll Position: {}", position);

        if t >= 1.0 {
            return match self.session.take() {
                Some(session) => TickOutcome::Completed(session.complete(position)),
                None => TickOutcome::Stale,
            };
        }

        session.pending_tick = Some(scheduler.schedule_next_tick());
        TickOutcome::Progress(position)
    }

    /// Cancel the active session, leaving the viewport where it is
    ///
    /// The session's completion channel is closed without a value.
    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Option<AnimationSession> {
        let mut session = self.session.take()?;
        session.cancelled = true;
        if let Some(handle) = session.pending_tick.take() {
            scheduler.cancel_tick(handle);
        }
        session.completion = None;
        session.on_complete = None;
        Some(session)
    }

    /// Cancel the active session only if it accepts user interruption
    pub fn interrupt<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Option<AnimationSession> {
        match self.session {
            Some(ref session) if session.interruptible => self.cancel(scheduler),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::easing::EasingType;
    use pagescroll_core::{FrameQueue, SimulatedPage};

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn linear_session(from: i64, to: i64, duration_ms: u64) -> AnimationSession {
        AnimationSession::new(from, to, Duration::ZERO, ms(duration_ms), EasingType::Linear.into())
    }

    /// Dispatch the single due tick at `now`
    fn step(
        animator: &mut ScrollAnimator,
        page: &mut SimulatedPage,
        queue: &mut FrameQueue,
        now: Duration,
    ) -> TickOutcome {
        let due = queue.take_due();
        assert_eq!(due.len(), 1);
        animator.tick(due[0], now, page, queue)
    }

    #[test]
    fn test_zero_distance_completes_immediately() {
        let mut animator = ScrollAnimator::new();
        let mut page = SimulatedPage::new(800, 3000);
        page.jump_to(400);
        let mut queue = FrameQueue::new();

        let mut session = linear_session(400, 400, 1000);
        let mut rx = session.subscribe();
        let started = animator.start(session, &mut page, &mut queue);

        assert!(matches!(
            started.outcome,
            StartOutcome::Completed(ScrollCompletion { final_position: 400, .. })
        ));
        assert_eq!(page.history(), &[400]);
        assert!(!animator.is_animating());
        assert!(!queue.has_pending());
        assert_eq!(rx.try_recv().unwrap().final_position, 400);
    }

    #[test]
    fn test_linear_progress() {
        let mut animator = ScrollAnimator::new();
        let mut page = SimulatedPage::new(800, 3000);
        let mut queue = FrameQueue::new();

        animator.start(linear_session(0, 1000, 1000), &mut page, &mut queue);
        assert!(animator.is_animating());
        assert!(page.history().is_empty());

        assert!(matches!(
            step(&mut animator, &mut page, &mut queue, ms(250)),
            TickOutcome::Progress(250)
        ));
        assert!(matches!(
            step(&mut animator, &mut page, &mut queue, ms(600)),
            TickOutcome::Progress(600)
        ));
        assert_eq!(page.history(), &[250, 600]);
    }

    #[test]
    fn test_terminal_tick_lands_on_destination() {
        let mut animator = ScrollAnimator::new();
        let mut page = SimulatedPage::new(800, 3000);
        let mut queue = FrameQueue::new();

        let session = AnimationSession::new(
            300,
            850,
            Duration::ZERO,
            ms(1250),
            EasingType::EaseInOutQuad.into(),
        );
        animator.start(session, &mut page, &mut queue);

        step(&mut animator, &mut page, &mut queue, ms(1249));
        // The scheduler stalled: the late tick still finishes on the exact pixel
        let outcome = step(&mut animator, &mut page, &mut queue, ms(4000));

        assert!(matches!(
            outcome,
            TickOutcome::Completed(ScrollCompletion { final_position: 850, .. })
        ));
        assert_eq!(page.current_scroll_offset(), 850);
        assert!(!animator.is_animating());
        assert!(!queue.has_pending());
    }

    #[test]
    fn test_callback_fires_once() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut animator = ScrollAnimator::new();
        let mut page = SimulatedPage::new(800, 3000);
        let mut queue = FrameQueue::new();

        let session = linear_session(0, 100, 100)
            .with_callback(Box::new(move |c| sink.borrow_mut().push(c.final_position)));
        animator.start(session, &mut page, &mut queue);
        step(&mut animator, &mut page, &mut queue, ms(100));

        assert_eq!(*seen.borrow(), vec![100]);
    }

    #[test]
    fn test_cancel_leaves_viewport_in_place() {
        let mut animator = ScrollAnimator::new();
        let mut page = SimulatedPage::new(800, 3000);
        let mut queue = FrameQueue::new();

        let mut session = linear_session(0, 1000, 1000);
        let mut rx = session.subscribe();
        animator.start(session, &mut page, &mut queue);
        step(&mut animator, &mut page, &mut queue, ms(300));

        let cancelled = animator.cancel(&mut queue).unwrap();
        assert!(cancelled.is_cancelled());
        assert!(!animator.is_animating());
        assert!(!queue.has_pending());
        assert_eq!(page.current_scroll_offset(), 300);
        assert!(matches!(
            rx.try_recv(),
            Err(oneshot::error::TryRecvError::Closed)
        ));

        assert!(animator.cancel(&mut queue).is_none());
    }

    #[test]
    fn test_tick_after_cancel_writes_nothing() {
        let mut animator = ScrollAnimator::new();
        let mut page = SimulatedPage::new(800, 3000);
        let mut queue = FrameQueue::new();

        animator.start(linear_session(0, 1000, 1000), &mut page, &mut queue);
        // Host already drained the tick when the cancel arrives
        let in_flight = queue.take_due()[0];
        animator.cancel(&mut queue);

        assert!(matches!(
            animator.tick(in_flight, ms(500), &mut page, &mut queue),
            TickOutcome::Stale
        ));
        assert!(page.history().is_empty());
        assert!(!queue.has_pending());
    }

    #[test]
    fn test_superseded_tick_is_stale() {
        let mut animator = ScrollAnimator::new();
        let mut page = SimulatedPage::new(800, 3000);
        let mut queue = FrameQueue::new();

        animator.start(linear_session(0, 1000, 1000), &mut page, &mut queue);
        let old_tick = queue.take_due()[0];

        let started = animator.start(linear_session(0, 2000, 1000), &mut page, &mut queue);
        assert!(started.superseded.unwrap().is_cancelled());

        assert!(matches!(
            animator.tick(old_tick, ms(500), &mut page, &mut queue),
            TickOutcome::Stale
        ));
        assert!(page.history().is_empty());
        assert_eq!(animator.target_scroll(), Some(2000));
    }

    #[test]
    fn test_interrupt_respects_flag() {
        let mut animator = ScrollAnimator::new();
        let mut page = SimulatedPage::new(800, 3000);
        let mut queue = FrameQueue::new();

        let pinned = linear_session(0, 1000, 1000).with_interruptible(false);
        animator.start(pinned, &mut page, &mut queue);
        assert!(animator.interrupt(&mut queue).is_none());
        assert!(animator.is_animating());

        animator.start(linear_session(0, 1000, 1000), &mut page, &mut queue);
        assert!(animator.interrupt(&mut queue).is_some());
        assert!(!animator.is_animating());
    }
}
