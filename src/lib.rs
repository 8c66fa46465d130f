//! # Clutch
//!
//! Shared core of the Clutch It betting companion dashboard: the animated
//! ambient background every page draws behind its content, and the REST
//! contracts the pages fetch.
//!
//! ## Features
//!
//! - **Ambient background**: particle field, parallax waves and a pointer glow,
//!   one cancellable render loop per mounted view
//! - **Host-agnostic**: draws onto any [`ambient::Surface`], scheduled by any
//!   [`ambient::FrameHost`]; the browser and a headless recorder ship in-tree
//! - **Typed contracts**: DTOs for every dashboard endpoint, upload rules
//! - **Configurable**: TOML config with environment overrides
//!
//! ## Modules
//!
//! - [`ambient`]: Background animation engine
//! - [`api`]: REST contracts and upload validation
//! - [`config`]: Configuration loading
//! - [`format`]: Money and trend formatting
//!
//! ## Quick Start
//!
//! ```rust
//! use clutch::ambient::*;
//! use rand::SeedableRng;
//!
//! let mut background = AmbientBackground::with_rng(
//!     AmbientTheme::default(),
//!     ManualHost::new(),
//!     rand::rngs::StdRng::seed_from_u64(1),
//! );
//!
//! // No surface attached yet: nothing starts
//! assert!(!background.mount(None::<RecordingSurface>, Viewport::new(800.0, 600.0), 0.0));
//!
//! let surface = RecordingSurface::new(Viewport::default());
//! assert!(background.mount(Some(surface), Viewport::new(800.0, 600.0), 0.0));
//! assert_eq!(background.pool().map(|p| p.len()), Some(40));
//!
//! background.on_pointer_move(120.0, 80.0);
//! let generation = background.host_mut().next_frame().unwrap();
//! background.on_frame(generation, 16.0);
//!
//! background.unmount();
//! ```

pub mod ambient;
pub mod api;
pub mod config;
pub mod format;

// Re-export top-level types for convenience
pub use ambient::{
    AmbientBackground, AmbientError, AmbientResult, AmbientTheme, FrameHost, FrameOutcome,
    ManualHost, Point, RecordingSurface, Rgba, Surface, Viewport,
};

pub use api::{ApiError, ApiResult, UploadError};

pub use config::{generate_default_config, ApiConfig, Config, ConfigError, LoggingConfig};
