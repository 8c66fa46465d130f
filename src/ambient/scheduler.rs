//! Frame scheduler
//!
//! Drives one render loop per mounted view. The host environment (a browser
//! window, or [`ManualHost`] in tests and the CLI) owns the display refresh
//! signal and the pointer/resize listeners; the scheduler decides when to ask
//! for a frame and which callbacks are still current.
//!
//! Every `start` and `stop` bumps a generation counter. A frame callback
//! carries the generation it was requested under, so a callback that was
//! already in flight when the view was torn down recognises itself as stale
//! and does nothing.
//!
//! ```text
//!   Idle --start()--> Running --stop()--> Idle
//!                       |  ^
//!                       +--+ begin_frame(gen) / schedule_next()
//! ```

use std::collections::VecDeque;

/// Lifecycle of a scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// Host services a scheduler needs
pub trait FrameHost {
    /// Token for a pending frame request
    type FrameHandle;
    /// Token for the registered pointer/resize listeners
    type Listeners;

    /// Ask for one callback on the next display refresh, tagged with
    /// `generation`. `None` if the host cannot schedule frames.
    fn request_frame(&mut self, generation: u64) -> Option<Self::FrameHandle>;

    /// Withdraw a pending request
    fn cancel_frame(&mut self, handle: Self::FrameHandle);

    /// Register pointer-move and resize listeners for `generation`
    fn subscribe(&mut self, generation: u64) -> Self::Listeners;

    /// Remove listeners returned by [`subscribe`](Self::subscribe)
    fn unsubscribe(&mut self, listeners: Self::Listeners);
}

/// One render loop
pub struct FrameScheduler<H: FrameHost> {
    host: H,
    state: SchedulerState,
    generation: u64,
    pending: Option<H::FrameHandle>,
    listeners: Option<H::Listeners>,
}

impl<H: FrameHost> FrameScheduler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: SchedulerState::Idle,
            generation: 0,
            pending: None,
            listeners: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Generation of the current (or most recent) run
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Enter `Running` and register listeners. Returns the new generation;
    /// calling it while already running returns the current one unchanged.
    pub fn start(&mut self) -> u64 {
        if self.is_running() {
            return self.generation;
        }

        self.generation = self.generation.wrapping_add(1);
        self.listeners = Some(self.host.subscribe(self.generation));
        self.state = SchedulerState::Running;

        tracing::debug!(generation = self.generation, "frame loop started");
        self.generation
    }

    /// Request the next frame. No-op unless running with nothing pending.
    pub fn schedule_next(&mut self) {
        if !self.is_running() || self.pending.is_some() {
            return;
        }
        self.pending = self.host.request_frame(self.generation);
    }

    /// Accept a frame callback. Returns false for callbacks from an earlier
    /// generation or arriving after teardown; the caller must not draw.
    pub fn begin_frame(&mut self, generation: u64) -> bool {
        if !self.is_running() || generation != self.generation {
            tracing::trace!(
                generation,
                current = self.generation,
                "ignoring stale frame callback"
            );
            return false;
        }
        // the request that produced this callback has been consumed
        self.pending = None;
        true
    }

    /// Cancel the pending frame, remove listeners and return to `Idle`.
    /// Returns false if there was nothing to stop.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        if let Some(listeners) = self.listeners.take() {
            self.host.unsubscribe(listeners);
        }

        self.generation = self.generation.wrapping_add(1);
        self.state = SchedulerState::Idle;

        tracing::debug!(generation = self.generation, "frame loop stopped");
        true
    }
}

impl<H: FrameHost> Drop for FrameScheduler<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Deterministic host: frame requests queue up until the caller fires them
#[derive(Debug, Default)]
pub struct ManualHost {
    next_handle: u64,
    queued: VecDeque<(u64, u64)>,
    subscribed: bool,
    subscriptions: usize,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest outstanding frame request, returning its generation
    pub fn next_frame(&mut self) -> Option<u64> {
        self.queued.pop_front().map(|(_, generation)| generation)
    }

    /// Number of outstanding frame requests
    pub fn pending_frames(&self) -> usize {
        self.queued.len()
    }

    /// Whether listeners are currently registered
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Total `subscribe` calls so far
    pub fn subscriptions(&self) -> usize {
        self.subscriptions
    }
}

impl FrameHost for ManualHost {
    type FrameHandle = u64;
    type Listeners = ();

    fn request_frame(&mut self, generation: u64) -> Option<u64> {
        self.next_handle += 1;
        self.queued.push_back((self.next_handle, generation));
        Some(self.next_handle)
    }

    fn cancel_frame(&mut self, handle: u64) {
        self.queued.retain(|(h, _)| *h != handle);
    }

    fn subscribe(&mut self, _generation: u64) {
        self.subscribed = true;
        self.subscriptions += 1;
    }

    fn unsubscribe(&mut self, _listeners: ()) {
        self.subscribed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_subscribes_and_runs() {
        let mut scheduler = FrameScheduler::new(ManualHost::new());
        assert_eq!(scheduler.state(), SchedulerState::Idle);

        let generation = scheduler.start();

        assert_eq!(generation, 1);
        assert!(scheduler.is_running());
        assert!(scheduler.host().is_subscribed());
    }

    #[test]
    fn test_start_twice_keeps_generation() {
        let mut scheduler = FrameScheduler::new(ManualHost::new());
        let first = scheduler.start();
        let second = scheduler.start();

        assert_eq!(first, second);
        assert_eq!(scheduler.host().subscriptions(), 1);
    }

    #[test]
    fn test_schedule_next_requests_once() {
        let mut scheduler = FrameScheduler::new(ManualHost::new());
        scheduler.start();

        scheduler.schedule_next();
        scheduler.schedule_next();

        assert_eq!(scheduler.host().pending_frames(), 1);
    }

    #[test]
    fn test_frame_cycle() {
        let mut scheduler = FrameScheduler::new(ManualHost::new());
        scheduler.start();
        scheduler.schedule_next();

        let generation = scheduler.host_mut().next_frame().unwrap();
        assert!(scheduler.begin_frame(generation));
        scheduler.schedule_next();

        assert_eq!(scheduler.host().pending_frames(), 1);
    }

    #[test]
    fn test_stop_cancels_and_unsubscribes() {
        let mut scheduler = FrameScheduler::new(ManualHost::new());
        scheduler.start();
        scheduler.schedule_next();

        assert!(scheduler.stop());

        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert_eq!(scheduler.host().pending_frames(), 0);
        assert!(!scheduler.host().is_subscribed());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut scheduler = FrameScheduler::new(ManualHost::new());
        scheduler.start();

        assert!(scheduler.stop());
        assert!(!scheduler.stop());
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[test]
    fn test_stale_callback_is_rejected() {
        let mut scheduler = FrameScheduler::new(ManualHost::new());
        let old = scheduler.start();
        scheduler.stop();

        // callback that fired after teardown
        assert!(!scheduler.begin_frame(old));

        // a new run does not revive callbacks from the previous one
        let new = scheduler.start();
        assert_ne!(old, new);
        assert!(!scheduler.begin_frame(old));
        assert!(scheduler.begin_frame(new));
    }

    #[test]
    fn test_schedule_next_when_idle_is_noop() {
        let mut scheduler = FrameScheduler::new(ManualHost::new());
        scheduler.schedule_next();
        assert_eq!(scheduler.host().pending_frames(), 0);
    }
}
