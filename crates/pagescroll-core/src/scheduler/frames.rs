use std::collections::VecDeque;

/// Identifies one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Frame/timer driver abstraction
///
/// `schedule_next_tick` requests one callback on the next frame;
/// the host later hands the handle back through `take_due`.
pub trait Scheduler {
    fn schedule_next_tick(&mut self) -> TickHandle;

    /// Withdraw a tick that has not been dispatched yet. Unknown handles are ignored.
    fn cancel_tick(&mut self, handle: TickHandle);

    /// Drain the ticks due on the current frame, in scheduling order
    ///
    /// Ticks scheduled while these are being dispatched belong to the next frame.
    fn take_due(&mut self) -> Vec<TickHandle>;

    fn has_pending(&self) -> bool;
}

/// FIFO scheduler: every tick scheduled before a frame fires on that frame
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: VecDeque<TickHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for FrameQueue {
    fn schedule_next_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending.push_back(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.pending.retain(|pending| *pending != handle);
    }

    fn take_due(&mut self) -> Vec<TickHandle> {
        self.pending.drain(..).collect()
    }

    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let mut queue = FrameQueue::new();
        let a = queue.schedule_next_tick();
        let b = queue.schedule_next_tick();
        assert_ne!(a, b);
        assert_eq!(queue.take_due(), vec![a, b]);
        assert!(!queue.has_pending());
    }

    #[test]
    fn test_cancel_tick() {
        let mut queue = FrameQueue::new();
        let a = queue.schedule_next_tick();
        let b = queue.schedule_next_tick();
        queue.cancel_tick(a);
        queue.cancel_tick(a);
        assert_eq!(queue.take_due(), vec![b]);
    }

    #[test]
    fn test_ticks_scheduled_after_drain_wait_for_next_frame() {
        let mut queue = FrameQueue::new();
        queue.schedule_next_tick();
        let due = queue.take_due();
        assert_eq!(due.len(), 1);

        let next = queue.schedule_next_tick();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.take_due(), vec![next]);
    }
}
