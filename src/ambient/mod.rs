//! Clutch Ambient Background
//!
//! The decorative animation painted behind every page:
//!
//! - **particle**: fixed pool of drifting, shrinking dots
//! - **wave**: two sine bands along the bottom edge
//! - **pointer**: soft glow following the mouse
//! - **scheduler**: one render loop per view, cancellable on teardown
//! - **background**: the unit a page mounts, composing all of the above
//! - **surface**: the 2D drawing target (canvas in the browser, recorder here)
//! - **theme**: palette, bands and densities, loadable from config
//!
//! # Architecture
//!
//! ```text
//! Frame:
//!   host refresh → begin_frame(gen) → clear → waves → particles → glow → schedule_next
//!
//! Teardown:
//!   unmount → cancel pending frame → remove listeners → bump generation
//! ```
//!
//! # Example
//!
//! ```rust
//! use clutch::ambient::{AmbientBackground, AmbientTheme, ManualHost, RecordingSurface, Viewport};
//!
//! let mut background = AmbientBackground::new(AmbientTheme::default(), ManualHost::new());
//! let surface = RecordingSurface::new(Viewport::default());
//!
//! background.mount(Some(surface), Viewport::new(800.0, 600.0), 0.0);
//! while let Some(generation) = background.host_mut().next_frame() {
//!     background.on_frame(generation, 16.0);
//!     if background.frames() >= 10 {
//!         break;
//!     }
//! }
//! background.unmount();
//! ```

pub mod background;
pub mod color;
pub mod error;
pub mod geometry;
pub mod particle;
pub mod pointer;
pub mod scheduler;
pub mod surface;
pub mod theme;
pub mod wave;

// Re-export commonly used types
pub use background::{AmbientBackground, FrameOutcome};
pub use color::Rgba;
pub use error::{AmbientError, AmbientResult};
pub use geometry::{Point, Viewport};
pub use particle::{pool_capacity, AdvanceStats, Particle, ParticlePool};
pub use pointer::{render_highlight, Highlight, PointerState};
pub use scheduler::{FrameHost, FrameScheduler, ManualHost, SchedulerState};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use theme::{AmbientTheme, Palette, DEFAULT_PALETTE, PALETTE_SIZE};
pub use wave::{draw_wave, render_waves, wave_outline, wave_time, WaveBand};
