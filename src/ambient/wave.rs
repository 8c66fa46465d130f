//! Wave renderer
//!
//! Two filled sine bands along the bottom of the viewport. Each band's
//! baseline bobs slowly with wall-clock time, so consecutive bands drift
//! against each other and read as parallax.

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::geometry::{Point, Viewport};
use super::surface::Surface;

/// Milliseconds of wall clock per radian of baseline drift
pub const WAVE_PERIOD_MS: f64 = 10_000.0;

/// Phase derived from the wall clock
pub fn wave_time(now_ms: f64) -> f64 {
    now_ms / WAVE_PERIOD_MS
}

/// One decorative wave band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveBand {
    /// Resting baseline as a fraction of surface height
    pub baseline_ratio: f64,
    /// How far the baseline bobs up and down, in pixels
    pub drift: f64,
    /// Phase added to the clock-derived time
    pub phase_offset: f64,
    /// Crest height of the sine, in pixels
    pub amplitude: f64,
    /// Pixels per radian along x
    pub wavelength: f64,
    pub color: Rgba,
}

impl Default for WaveBand {
    fn default() -> Self {
        Self::defaults()[0].clone()
    }
}

impl WaveBand {
    /// The two stock bands, back to front
    pub fn defaults() -> [WaveBand; 2] {
        [
            WaveBand {
                baseline_ratio: 0.85,
                drift: 20.0,
                phase_offset: 0.0,
                amplitude: 15.0,
                wavelength: 120.0,
                color: Rgba::new(76, 29, 149, 0.1),
            },
            WaveBand {
                baseline_ratio: 0.8,
                drift: 25.0,
                phase_offset: 1.0,
                amplitude: 20.0,
                wavelength: 100.0,
                color: Rgba::new(109, 40, 217, 0.07),
            },
        ]
    }

    /// Baseline y for a surface of `height` at phase `time`
    pub fn baseline(&self, height: f64, time: f64) -> f64 {
        height * self.baseline_ratio + (time + self.phase_offset).sin() * self.drift
    }
}

/// Closed outline of a sine band: the crest for every integer column in
/// `[0, width)`, then down to the bottom-right and bottom-left corners.
pub fn wave_outline(size: Viewport, baseline_y: f64, amplitude: f64, wavelength: f64) -> Vec<Point> {
    let columns = size.width.max(0.0).ceil() as usize;
    let mut outline = Vec::with_capacity(columns + 3);

    outline.push(Point::new(0.0, baseline_y));
    for x in 0..columns {
        let x = x as f64;
        outline.push(Point::new(x, baseline_y + (x / wavelength).sin() * amplitude));
    }
    outline.push(Point::new(size.width, size.height));
    outline.push(Point::new(0.0, size.height));

    outline
}

/// Fill one sine band reaching down to the bottom of the surface
pub fn draw_wave<S: Surface>(
    surface: &mut S,
    baseline_y: f64,
    amplitude: f64,
    wavelength: f64,
    color: Rgba,
) {
    let outline = wave_outline(surface.size(), baseline_y, amplitude, wavelength);
    surface.fill_polygon(&outline, color);
}

/// Draw every band at the phase given by `now_ms`
pub fn render_waves<S: Surface>(surface: &mut S, bands: &[WaveBand], now_ms: f64) {
    let time = wave_time(now_ms);
    let height = surface.size().height;

    for band in bands {
        draw_wave(
            surface,
            band.baseline(height, time),
            band.amplitude,
            band.wavelength,
            band.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_outline_shape() {
        let outline = wave_outline(Viewport::new(4.0, 100.0), 80.0, 15.0, 120.0);

        // start + 4 columns + 2 bottom corners
        assert_eq!(outline.len(), 7);
        assert_eq!(outline[0], Point::new(0.0, 80.0));
        assert_eq!(outline[1], Point::new(0.0, 80.0));
        assert!((outline[2].y - (80.0 + (1.0_f64 / 120.0).sin() * 15.0)).abs() < 1e-12);
        assert_eq!(outline[5], Point::new(4.0, 100.0));
        assert_eq!(outline[6], Point::new(0.0, 100.0));
    }

    #[test]
    fn test_outline_stays_within_amplitude() {
        let outline = wave_outline(Viewport::new(800.0, 600.0), 500.0, 20.0, 100.0);
        for p in &outline[1..outline.len() - 2] {
            assert!(p.y >= 480.0 && p.y <= 520.0);
        }
    }

    #[test]
    fn test_baseline_drifts_with_clock() {
        let band = &WaveBand::defaults()[0];
        assert!((band.baseline(800.0, 0.0) - 680.0).abs() < 1e-9);

        let quarter_turn = wave_time(std::f64::consts::FRAC_PI_2 * WAVE_PERIOD_MS);
        assert!((band.baseline(800.0, quarter_turn) - 700.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_waves_draws_each_band() {
        let mut surface = RecordingSurface::new(Viewport::new(50.0, 40.0));
        let bands = WaveBand::defaults();

        render_waves(&mut surface, &bands, 0.0);

        let colors: Vec<Rgba> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon { color, outline } => {
                    assert_eq!(outline.len(), 53);
                    Some(*color)
                }
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![bands[0].color, bands[1].color]);
    }

    #[test]
    fn test_empty_surface_still_closes_path() {
        let outline = wave_outline(Viewport::default(), 0.0, 15.0, 120.0);
        assert_eq!(outline.len(), 3);
    }
}
