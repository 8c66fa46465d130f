//! Ambient background unit
//!
//! Composes the particle field, wave bands and pointer glow behind one view,
//! driven by a [`FrameScheduler`]. The hosting page forwards its lifecycle
//! and input events; nothing is shared between instances.
//!
//! Frame order: clear, waves, particles (advance then draw), pointer glow.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::geometry::Viewport;
use super::particle::{AdvanceStats, ParticlePool};
use super::pointer::{render_highlight, PointerState};
use super::scheduler::{FrameHost, FrameScheduler, SchedulerState};
use super::surface::Surface;
use super::theme::AmbientTheme;
use super::wave::render_waves;

/// Result of delivering a frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was drawn
    Rendered(AdvanceStats),
    /// The callback belonged to a cancelled run and was ignored
    Stale,
}

/// Animated background for one mounted view
pub struct AmbientBackground<S: Surface, H: FrameHost> {
    theme: AmbientTheme,
    scheduler: FrameScheduler<H>,
    surface: Option<S>,
    pool: Option<ParticlePool>,
    pointer: PointerState,
    rng: StdRng,
    frames: u64,
}

impl<S: Surface, H: FrameHost> AmbientBackground<S, H> {
    /// Background seeded from OS entropy
    pub fn new(theme: AmbientTheme, host: H) -> Self {
        Self::with_rng(theme, host, StdRng::from_entropy())
    }

    /// Background with a caller-supplied generator, for reproducible runs
    pub fn with_rng(theme: AmbientTheme, host: H, rng: StdRng) -> Self {
        Self {
            theme,
            scheduler: FrameScheduler::new(host),
            surface: None,
            pool: None,
            pointer: PointerState::new(),
            rng,
            frames: 0,
        }
    }

    /// View mounted. Returns false, doing nothing, when the drawing surface
    /// is not attached yet; a later mount can try again.
    pub fn mount(&mut self, surface: Option<S>, viewport: Viewport, now_ms: f64) -> bool {
        if self.scheduler.is_running() {
            return true;
        }

        let Some(mut surface) = surface else {
            tracing::debug!("drawing surface unavailable, background not started");
            return false;
        };

        surface.resize(viewport);
        let pool = ParticlePool::new(viewport, &self.theme, &mut self.rng);
        tracing::debug!(viewport = %viewport, particles = pool.len(), "background mounted");

        self.surface = Some(surface);
        self.pool = Some(pool);
        self.pointer.reset();
        self.frames = 0;

        self.scheduler.start();
        self.render_frame(now_ms);
        self.scheduler.schedule_next();
        true
    }

    /// Display refresh callback for `generation`
    pub fn on_frame(&mut self, generation: u64, now_ms: f64) -> FrameOutcome {
        if !self.scheduler.begin_frame(generation) {
            return FrameOutcome::Stale;
        }

        let stats = self.render_frame(now_ms);
        self.scheduler.schedule_next();
        FrameOutcome::Rendered(stats)
    }

    /// Viewport resized. The surface is resized (and so cleared); the pool
    /// keeps its size and recycles particles left outside on the next frame.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if !self.scheduler.is_running() {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(viewport);
        }
    }

    /// Pointer moved. Only stores the position; drawing waits for a frame.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.scheduler.is_running() {
            self.pointer.update(x, y);
        }
    }

    /// View torn down. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if self.scheduler.stop() {
            self.pool = None;
            tracing::debug!(frames = self.frames, "background unmounted");
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    /// Generation that current frame callbacks must carry
    pub fn generation(&self) -> u64 {
        self.scheduler.generation()
    }

    pub fn theme(&self) -> &AmbientTheme {
        &self.theme
    }

    /// The surface, attached or detached after unmount
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn pool(&self) -> Option<&ParticlePool> {
        self.pool.as_ref()
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Frames drawn since mount
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn host(&self) -> &H {
        self.scheduler.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.scheduler.host_mut()
    }

    fn render_frame(&mut self, now_ms: f64) -> AdvanceStats {
        let (Some(surface), Some(pool)) = (self.surface.as_mut(), self.pool.as_mut()) else {
            return AdvanceStats::default();
        };

        surface.clear();
        render_waves(surface, &self.theme.waves, now_ms);

        let stats = pool.advance(surface.size(), &mut self.rng);
        pool.render(surface);

        render_highlight(surface, &self.pointer, &self.theme.highlight);

        self.frames += 1;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::scheduler::ManualHost;
    use crate::ambient::surface::{DrawCommand, RecordingSurface};

    type TestBackground = AmbientBackground<RecordingSurface, ManualHost>;

    fn background() -> TestBackground {
        AmbientBackground::with_rng(
            AmbientTheme::default(),
            ManualHost::new(),
            StdRng::seed_from_u64(42),
        )
    }

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    fn surface() -> Option<RecordingSurface> {
        Some(RecordingSurface::new(Viewport::default()))
    }

    fn fire_next(bg: &mut TestBackground, now_ms: f64) -> FrameOutcome {
        let generation = bg.host_mut().next_frame().expect("a frame should be queued");
        bg.on_frame(generation, now_ms)
    }

    #[test]
    fn test_mount_without_surface_is_noop() {
        let mut bg = background();

        assert!(!bg.mount(None, viewport(), 0.0));

        assert_eq!(bg.state(), SchedulerState::Idle);
        assert!(bg.pool().is_none());
        assert_eq!(bg.host().pending_frames(), 0);
        assert!(!bg.host().is_subscribed());
    }

    #[test]
    fn test_mount_sizes_surface_and_pool() {
        let mut bg = background();

        assert!(bg.mount(surface(), viewport(), 0.0));

        assert_eq!(bg.state(), SchedulerState::Running);
        assert_eq!(bg.surface().unwrap().size(), viewport());
        assert_eq!(bg.pool().unwrap().len(), 50);
        assert!(bg.host().is_subscribed());
        // first frame drawn immediately, next one requested
        assert_eq!(bg.frames(), 1);
        assert_eq!(bg.host().pending_frames(), 1);
    }

    #[test]
    fn test_frame_draw_order() {
        let mut bg = background();
        bg.mount(surface(), viewport(), 0.0);
        bg.on_pointer_move(300.0, 200.0);

        assert!(matches!(fire_next(&mut bg, 16.0), FrameOutcome::Rendered(_)));

        let visible = bg.surface().unwrap().visible();
        assert_eq!(visible.len(), 2 + 50 + 1);
        assert!(matches!(visible[0], DrawCommand::Polygon { .. }));
        assert!(matches!(visible[1], DrawCommand::Polygon { .. }));
        assert!(visible[2..52]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { .. })));
        assert!(matches!(visible[52], DrawCommand::RadialGradient { .. }));
    }

    #[test]
    fn test_no_highlight_before_pointer_moves() {
        let mut bg = background();
        bg.mount(surface(), viewport(), 0.0);
        fire_next(&mut bg, 16.0);

        let has_glow = bg
            .surface()
            .unwrap()
            .visible()
            .iter()
            .any(|c| matches!(c, DrawCommand::RadialGradient { .. }));
        assert!(!has_glow);
    }

    #[test]
    fn test_pool_cardinality_is_stable_across_frames() {
        let mut bg = background();
        bg.mount(surface(), viewport(), 0.0);

        for frame in 0..300 {
            fire_next(&mut bg, frame as f64 * 16.0);
            assert_eq!(bg.pool().unwrap().len(), 50);
        }
        assert_eq!(bg.frames(), 301);
    }

    #[test]
    fn test_resize_keeps_pool() {
        let mut bg = background();
        bg.mount(surface(), viewport(), 0.0);

        bg.on_resize(Viewport::new(400.0, 300.0));

        assert_eq!(bg.surface().unwrap().size(), Viewport::new(400.0, 300.0));
        assert!(bg.surface().unwrap().visible().is_empty());
        assert_eq!(bg.pool().unwrap().len(), 50);

        fire_next(&mut bg, 16.0);
        for p in bg.pool().unwrap().iter() {
            assert!(p.position.x <= 400.0 && p.position.y <= 300.0);
        }
    }

    #[test]
    fn test_unmount_mid_loop_stops_drawing() {
        let mut bg = background();
        bg.mount(surface(), viewport(), 0.0);
        fire_next(&mut bg, 16.0);

        // a callback already handed to the host when the view goes away
        let in_flight = bg.generation();
        bg.unmount();

        let before = bg.surface().unwrap().commands().to_vec();
        assert_eq!(bg.on_frame(in_flight, 32.0), FrameOutcome::Stale);
        assert_eq!(bg.surface().unwrap().commands(), before.as_slice());

        assert_eq!(bg.state(), SchedulerState::Idle);
        assert_eq!(bg.host().pending_frames(), 0);
        assert!(!bg.host().is_subscribed());
        assert!(bg.pool().is_none());
    }

    #[test]
    fn test_unmount_twice() {
        let mut bg = background();
        bg.mount(surface(), viewport(), 0.0);

        bg.unmount();
        bg.unmount();

        assert_eq!(bg.state(), SchedulerState::Idle);
        assert_eq!(bg.host().pending_frames(), 0);
    }

    #[test]
    fn test_events_after_unmount_are_ignored() {
        let mut bg = background();
        bg.mount(surface(), viewport(), 0.0);
        bg.unmount();
        let before = bg.surface().unwrap().commands().len();

        bg.on_resize(Viewport::new(10.0, 10.0));
        bg.on_pointer_move(50.0, 50.0);

        assert_eq!(bg.surface().unwrap().commands().len(), before);
        assert!(!bg.pointer().is_set());
    }

    #[test]
    fn test_remount_starts_fresh_generation() {
        let mut bg = background();
        bg.mount(surface(), viewport(), 0.0);
        let first = bg.generation();
        bg.unmount();

        assert!(bg.mount(surface(), Viewport::new(200.0, 200.0), 0.0));

        assert!(bg.generation() > first);
        assert_eq!(bg.pool().unwrap().len(), 10);
        assert_eq!(bg.on_frame(first, 16.0), FrameOutcome::Stale);
    }
}
