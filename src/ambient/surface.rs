//! Drawing surfaces
//!
//! The renderers only need a handful of 2D primitives. In the browser these
//! map onto `CanvasRenderingContext2d`; natively, [`RecordingSurface`] keeps a
//! log of every mutation so frames can be inspected and compared.

use super::color::Rgba;
use super::geometry::{Point, Viewport};

/// A mutable, full-viewport drawing surface
pub trait Surface {
    /// Current size in pixels
    fn size(&self) -> Viewport;

    /// Resize the backing store. Resizing discards the current contents.
    fn resize(&mut self, size: Viewport);

    /// Clear the whole surface to transparent
    fn clear(&mut self);

    /// Filled circle; `alpha` multiplies the colour's own alpha
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba, alpha: f64);

    /// Closed, filled polygon through `outline`
    fn fill_polygon(&mut self, outline: &[Point], color: Rgba);

    /// Filled circle shaded by a radial gradient from `inner` at the centre
    /// to `outer` at `radius`
    fn fill_radial_gradient(&mut self, center: Point, radius: f64, inner: Rgba, outer: Rgba);
}

/// One recorded surface mutation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize(Viewport),
    Clear,
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
        alpha: f64,
    },
    Polygon {
        outline: Vec<Point>,
        color: Rgba,
    },
    RadialGradient {
        center: Point,
        radius: f64,
        inner: Rgba,
        outer: Rgba,
    },
}

/// In-memory surface that records every draw call
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Viewport,
    commands: Vec<DrawCommand>,
    frame_only: bool,
}

impl RecordingSurface {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            commands: Vec::new(),
            frame_only: false,
        }
    }

    /// Surface that drops its log on every clear or resize, keeping only
    /// the current frame. For long runs where history is not inspected.
    pub fn frame_only(size: Viewport) -> Self {
        Self {
            frame_only: true,
            ..Self::new(size)
        }
    }

    fn reset_log(&mut self) {
        if self.frame_only {
            self.commands.clear();
        }
    }

    /// Every mutation since creation (or the last [`take_commands`](Self::take_commands))
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the command log
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands issued since the most recent clear or resize, i.e. what is
    /// currently visible
    pub fn visible(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear | DrawCommand::Resize(_)))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn count_circles(&self) -> usize {
        self.visible()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, size: Viewport) {
        self.size = size;
        self.reset_log();
        self.commands.push(DrawCommand::Resize(size));
    }

    fn clear(&mut self) {
        self.reset_log();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba, alpha: f64) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn fill_polygon(&mut self, outline: &[Point], color: Rgba) {
        self.commands.push(DrawCommand::Polygon {
            outline: outline.to_vec(),
            color,
        });
    }

    fn fill_radial_gradient(&mut self, center: Point, radius: f64, inner: Rgba, outer: Rgba) {
        self.commands.push(DrawCommand::RadialGradient {
            center,
            radius,
            inner,
            outer,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_starts_after_last_clear() {
        let mut surface = RecordingSurface::new(Viewport::new(10.0, 10.0));
        let white = Rgba::new(255, 255, 255, 1.0);

        surface.fill_circle(Point::new(1.0, 1.0), 1.0, white, 1.0);
        surface.clear();
        surface.fill_circle(Point::new(2.0, 2.0), 1.0, white, 1.0);
        surface.fill_circle(Point::new(3.0, 3.0), 1.0, white, 1.0);

        assert_eq!(surface.commands().len(), 4);
        assert_eq!(surface.visible().len(), 2);
        assert_eq!(surface.count_circles(), 2);
    }

    #[test]
    fn test_resize_updates_size_and_clears_visible() {
        let mut surface = RecordingSurface::new(Viewport::new(10.0, 10.0));
        surface.fill_polygon(&[Point::ORIGIN], Rgba::new(0, 0, 0, 1.0));
        surface.resize(Viewport::new(20.0, 5.0));

        assert_eq!(surface.size(), Viewport::new(20.0, 5.0));
        assert!(surface.visible().is_empty());
        assert_eq!(surface.take_commands().len(), 2);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_frame_only_keeps_current_frame() {
        let mut surface = RecordingSurface::frame_only(Viewport::new(10.0, 10.0));
        let white = Rgba::new(255, 255, 255, 1.0);

        surface.fill_circle(Point::new(1.0, 1.0), 1.0, white, 1.0);
        surface.clear();
        surface.fill_circle(Point::new(2.0, 2.0), 1.0, white, 1.0);

        assert_eq!(surface.commands().len(), 2);
        assert_eq!(surface.visible().len(), 1);
    }
}
