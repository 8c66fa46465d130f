//! Ambient theme
//!
//! Every page shares one parameterised background. The defaults reproduce the
//! purple night-sky look of the product; a `[ambient]` table in the config
//! file can override any field.

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::error::{AmbientError, AmbientResult};
use super::pointer::Highlight;
use super::wave::WaveBand;

/// Number of particle colours
pub const PALETTE_SIZE: usize = 4;

/// Fixed-size particle palette; a colour index is always in range
pub type Palette = [Rgba; PALETTE_SIZE];

/// Default particle palette
pub const DEFAULT_PALETTE: Palette = [
    Rgba::new(168, 85, 247, 0.4),  // purple
    Rgba::new(139, 92, 246, 0.3),  // indigo
    Rgba::new(79, 70, 229, 0.3),   // indigo darker
    Rgba::new(191, 219, 254, 0.2), // light blue
];

/// Theme for one ambient background instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientTheme {
    /// Particle colours, picked uniformly at spawn
    pub palette: Palette,

    /// Back-to-front wave bands
    pub waves: [WaveBand; 2],

    /// Glow under the pointer
    pub highlight: Highlight,

    /// Upper bound on pool size
    pub max_particles: usize,

    /// Viewport width per particle
    pub pixels_per_particle: f64,
}

impl Default for AmbientTheme {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE,
            waves: WaveBand::defaults(),
            highlight: Highlight::default(),
            max_particles: 100,
            pixels_per_particle: 20.0,
        }
    }
}

impl AmbientTheme {
    /// Reject parameters that would divide by zero or draw nothing sensible
    pub fn validate(&self) -> AmbientResult<()> {
        if !(self.pixels_per_particle > 0.0) {
            return Err(AmbientError::theme("pixels_per_particle", "must be positive"));
        }

        for (i, wave) in self.waves.iter().enumerate() {
            if !(wave.wavelength > 0.0) {
                return Err(AmbientError::theme(
                    format!("waves[{}].wavelength", i),
                    "must be positive",
                ));
            }
            if !wave.baseline_ratio.is_finite() || !wave.amplitude.is_finite() {
                return Err(AmbientError::theme(format!("waves[{}]", i), "must be finite"));
            }
        }

        if !(self.highlight.radius > 0.0) {
            return Err(AmbientError::theme("highlight.radius", "must be positive"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_valid() {
        let theme = AmbientTheme::default();
        assert!(theme.validate().is_ok());
        assert_eq!(theme.max_particles, 100);
        assert_eq!(theme.pixels_per_particle, 20.0);
        assert_eq!(theme.highlight.radius, 60.0);
    }

    #[test]
    fn test_validate_rejects_zero_wavelength() {
        let mut theme = AmbientTheme::default();
        theme.waves[1].wavelength = 0.0;

        let err = theme.validate().unwrap_err();
        assert_eq!(
            err,
            AmbientError::theme("waves[1].wavelength", "must be positive")
        );
    }

    #[test]
    fn test_validate_rejects_nan_density() {
        let mut theme = AmbientTheme::default();
        theme.pixels_per_particle = f64::NAN;
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_partial_theme_from_toml() {
        let theme: AmbientTheme = toml::from_str(
            r##"
            max_particles = 40
            palette = ["#ffffff", "rgb(0, 0, 0)", "rgba(1, 2, 3, 0.5)", "rgba(4, 5, 6, 0.25)"]

            [highlight]
            radius = 90.0
            "##,
        )
        .unwrap();

        assert_eq!(theme.max_particles, 40);
        assert_eq!(theme.palette[0], Rgba::new(255, 255, 255, 1.0));
        assert_eq!(theme.highlight.radius, 90.0);
        // untouched fields keep their defaults
        assert_eq!(theme.waves, WaveBand::defaults());
        assert_eq!(theme.highlight.color, Highlight::default().color);
    }
}
