//! Particle field animator
//!
//! A fixed pool of drifting, slowly shrinking dots. Particles are never
//! destroyed: once one shrinks to the floor size or drifts off the surface it
//! is re-seeded in place, so the pool keeps its cardinality for the life of
//! the view.
//!
//! Velocity is a per-frame displacement, not a per-second one; the field runs
//! faster on high-refresh displays, matching what users already see.

use rand::Rng;

use super::color::Rgba;
use super::geometry::{Point, Viewport};
use super::surface::Surface;
use super::theme::{AmbientTheme, Palette, PALETTE_SIZE};

/// Size lost per frame while above [`MIN_SIZE`]
pub const SIZE_DECAY: f64 = 0.01;

/// Particles at or below this size are recycled
pub const MIN_SIZE: f64 = 0.2;

/// Spawn size range `[SPAWN_SIZE_MIN, SPAWN_SIZE_MIN + SPAWN_SIZE_SPAN)`
pub const SPAWN_SIZE_MIN: f64 = 1.0;
pub const SPAWN_SIZE_SPAN: f64 = 5.0;

/// Each velocity component is drawn from `[-SPEED_LIMIT, SPEED_LIMIT)`
pub const SPEED_LIMIT: f64 = 0.5;

/// Opacity range `[OPACITY_MIN, OPACITY_MIN + OPACITY_SPAN)`
pub const OPACITY_MIN: f64 = 0.1;
pub const OPACITY_SPAN: f64 = 0.5;

/// Pool size for a viewport `width` pixels wide.
///
/// `min(max_particles, width / pixels_per_particle)`, counting a fractional
/// remainder as one more particle.
pub fn pool_capacity(width: f64, theme: &AmbientTheme) -> usize {
    if !(width > 0.0) || !(theme.pixels_per_particle > 0.0) {
        return 0;
    }
    let wanted = (width / theme.pixels_per_particle).ceil();
    (wanted as usize).min(theme.max_particles)
}

/// One decorative dot
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    /// Radius in pixels
    pub size: f64,
    /// Displacement per frame
    pub velocity: Point,
    pub color: Rgba,
    pub opacity: f64,
}

impl Particle {
    /// Fresh particle with random placement, motion, colour and opacity
    pub fn spawn<R: Rng>(bounds: Viewport, palette: &Palette, rng: &mut R) -> Self {
        let mut particle = Self {
            position: Point::ORIGIN,
            size: 0.0,
            velocity: Point::ORIGIN,
            color: palette[rng.gen_range(0..PALETTE_SIZE)],
            opacity: OPACITY_MIN + rng.gen::<f64>() * OPACITY_SPAN,
        };
        particle.recycle(bounds, rng);
        particle
    }

    /// Re-seed position, size and velocity in place.
    ///
    /// Colour and opacity keep the values rolled at spawn.
    pub fn recycle<R: Rng>(&mut self, bounds: Viewport, rng: &mut R) {
        self.position = Point::new(
            rng.gen::<f64>() * bounds.width.max(0.0),
            rng.gen::<f64>() * bounds.height.max(0.0),
        );
        self.size = SPAWN_SIZE_MIN + rng.gen::<f64>() * SPAWN_SIZE_SPAN;
        self.velocity = Point::new(
            rng.gen::<f64>() * 2.0 * SPEED_LIMIT - SPEED_LIMIT,
            rng.gen::<f64>() * 2.0 * SPEED_LIMIT - SPEED_LIMIT,
        );
    }

    /// Move one frame and shrink. Returns true when the particle is spent:
    /// at the floor size or outside `bounds`.
    pub fn step(&mut self, bounds: Viewport) -> bool {
        self.position = self.position.offset(self.velocity);

        if self.size > MIN_SIZE {
            self.size -= SIZE_DECAY;
        }

        self.size <= MIN_SIZE || !bounds.contains(self.position)
    }
}

/// Per-frame bookkeeping from [`ParticlePool::advance`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceStats {
    pub recycled: usize,
}

/// Fixed-cardinality particle collection owned by one view
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    /// Populate a pool sized for `viewport`
    pub fn new<R: Rng>(viewport: Viewport, theme: &AmbientTheme, rng: &mut R) -> Self {
        let count = pool_capacity(viewport.width, theme);
        let particles = (0..count)
            .map(|_| Particle::spawn(viewport, &theme.palette, rng))
            .collect();
        Self { particles }
    }

    /// Wrap existing particles. Cardinality is fixed from here on.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Step every particle one frame, recycling spent ones against `bounds`
    pub fn advance<R: Rng>(&mut self, bounds: Viewport, rng: &mut R) -> AdvanceStats {
        let mut stats = AdvanceStats::default();
        for particle in &mut self.particles {
            if particle.step(bounds) {
                particle.recycle(bounds, rng);
                stats.recycled += 1;
            }
        }
        stats
    }

    /// Draw every particle in pool order
    pub fn render<S: Surface>(&self, surface: &mut S) {
        for particle in &self.particles {
            surface.fill_circle(
                particle.position,
                particle.size,
                particle.color,
                particle.opacity,
            );
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::surface::{DrawCommand, RecordingSurface};
    use crate::ambient::theme::DEFAULT_PALETTE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn particle_at(x: f64, y: f64, size: f64) -> Particle {
        Particle {
            position: Point::new(x, y),
            size,
            velocity: Point::ORIGIN,
            color: DEFAULT_PALETTE[0],
            opacity: 0.3,
        }
    }

    #[test]
    fn test_pool_capacity() {
        let theme = AmbientTheme::default();

        assert_eq!(pool_capacity(1000.0, &theme), 50);
        assert_eq!(pool_capacity(1920.0, &theme), 96);
        assert_eq!(pool_capacity(2560.0, &theme), 100);
        assert_eq!(pool_capacity(1010.0, &theme), 51);
        assert_eq!(pool_capacity(0.0, &theme), 0);
        assert_eq!(pool_capacity(-5.0, &theme), 0);
    }

    #[test]
    fn test_new_pool_for_1000x800() {
        let viewport = Viewport::new(1000.0, 800.0);
        let pool = ParticlePool::new(viewport, &AmbientTheme::default(), &mut rng());

        assert_eq!(pool.len(), 50);
        for p in pool.iter() {
            assert!(p.position.x >= 0.0 && p.position.x < 1000.0);
            assert!(p.position.y >= 0.0 && p.position.y < 800.0);
            assert!(p.size >= 1.0 && p.size < 6.0);
            assert!(p.velocity.x >= -0.5 && p.velocity.x < 0.5);
            assert!(p.velocity.y >= -0.5 && p.velocity.y < 0.5);
            assert!(p.opacity >= 0.1 && p.opacity < 0.6);
            assert!(DEFAULT_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_advance_keeps_cardinality() {
        let viewport = Viewport::new(640.0, 480.0);
        let mut rng = rng();
        let mut pool = ParticlePool::new(viewport, &AmbientTheme::default(), &mut rng);
        let before = pool.len();

        for _ in 0..2_000 {
            pool.advance(viewport, &mut rng);
            assert_eq!(pool.len(), before);
        }
    }

    #[test]
    fn test_size_decays_by_fixed_step() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut pool = ParticlePool::from_particles(vec![particle_at(50.0, 50.0, 3.0)]);

        let stats = pool.advance(viewport, &mut rng());

        assert_eq!(stats.recycled, 0);
        assert!((pool.particles()[0].size - 2.99).abs() < 1e-12);
    }

    #[test]
    fn test_size_monotonic_between_recycles() {
        let viewport = Viewport::new(300.0, 300.0);
        let mut rng = rng();
        let mut pool = ParticlePool::new(viewport, &AmbientTheme::default(), &mut rng);

        for _ in 0..500 {
            let before: Vec<f64> = pool.iter().map(|p| p.size).collect();
            pool.advance(viewport, &mut rng);

            for (old, p) in before.iter().zip(pool.iter()) {
                let decayed = (old - SIZE_DECAY - p.size).abs() < 1e-9;
                // otherwise it was recycled to a fresh size
                let recycled = p.size >= SPAWN_SIZE_MIN && p.size < SPAWN_SIZE_MIN + SPAWN_SIZE_SPAN;
                assert!(decayed || recycled);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_particle_is_recycled() {
        let viewport = Viewport::new(1000.0, 800.0);
        let mut pool = ParticlePool::from_particles(vec![particle_at(-1.0, 400.0, 4.0)]);

        let stats = pool.advance(viewport, &mut rng());

        assert_eq!(stats.recycled, 1);
        let p = &pool.particles()[0];
        assert!(p.position.x >= 0.0 && p.position.x < 1000.0);
        assert!(p.position.y >= 0.0 && p.position.y < 800.0);
        assert!(p.size > MIN_SIZE && p.size < 6.0);
    }

    #[test]
    fn test_spent_particle_is_recycled() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut pool = ParticlePool::from_particles(vec![particle_at(50.0, 50.0, 0.205)]);

        let stats = pool.advance(viewport, &mut rng());

        assert_eq!(stats.recycled, 1);
        assert!(pool.particles()[0].size >= SPAWN_SIZE_MIN);
    }

    #[test]
    fn test_recycle_keeps_color_and_opacity() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut original = particle_at(-10.0, -10.0, 2.0);
        original.color = DEFAULT_PALETTE[3];
        original.opacity = 0.42;
        let mut pool = ParticlePool::from_particles(vec![original]);

        pool.advance(viewport, &mut rng());

        let p = &pool.particles()[0];
        assert_eq!(p.color, DEFAULT_PALETTE[3]);
        assert_eq!(p.opacity, 0.42);
    }

    #[test]
    fn test_shrunken_viewport_recycles_outside_particles() {
        let mut pool = ParticlePool::from_particles(vec![
            particle_at(900.0, 100.0, 3.0),
            particle_at(100.0, 100.0, 3.0),
        ]);

        let stats = pool.advance(Viewport::new(500.0, 500.0), &mut rng());

        assert_eq!(stats.recycled, 1);
        assert!(pool.particles()[0].position.x < 500.0);
        assert_eq!(pool.particles()[1].position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_render_draws_in_pool_order() {
        let pool = ParticlePool::from_particles(vec![
            particle_at(1.0, 1.0, 2.0),
            particle_at(2.0, 2.0, 3.0),
        ]);
        let mut surface = RecordingSurface::new(Viewport::new(10.0, 10.0));

        pool.render(&mut surface);

        let centers: Vec<Point> = surface
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Circle { center, alpha, .. } => {
                    assert_eq!(*alpha, 0.3);
                    *center
                }
                other => panic!("unexpected command {:?}", other),
            })
            .collect();
        assert_eq!(centers, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
    }

    #[test]
    fn test_empty_viewport_pool() {
        let pool = ParticlePool::new(Viewport::default(), &AmbientTheme::default(), &mut rng());
        assert!(pool.is_empty());
    }
}
