//! Ambient Background Component
//!
//! Hosts the `clutch` ambient engine in the browser: a full-viewport canvas
//! behind the page content, animation frames from `requestAnimationFrame`,
//! and pointer/resize events from the window. Every page renders its own
//! instance; it starts when the canvas is attached and stops on cleanup.

use leptos::*;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use clutch::ambient::{
    AmbientBackground, AmbientTheme, FrameHost, Point, Rgba, Surface, Viewport,
};

type Background = AmbientBackground<CanvasSurface, BrowserHost>;

/// Canvas 2D context as a drawing surface
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

fn css(color: Rgba) -> JsValue {
    JsValue::from_str(&color.to_string())
}

impl Surface for CanvasSurface {
    fn size(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn resize(&mut self, size: Viewport) {
        // Setting either dimension also clears the bitmap
        self.canvas.set_width(size.width.max(0.0) as u32);
        self.canvas.set_height(size.height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba, alpha: f64) {
        self.ctx.set_fill_style(&css(color.scale_alpha(alpha)));
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, outline: &[Point], color: Rgba) {
        let Some((first, rest)) = outline.split_first() else {
            return;
        };

        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for point in rest {
            self.ctx.line_to(point.x, point.y);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style(&css(color));
        self.ctx.fill();
    }

    fn fill_radial_gradient(&mut self, center: Point, radius: f64, inner: Rgba, outer: Rgba) {
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &inner.to_string());
        let _ = gradient.add_color_stop(1.0, &outer.to_string());

        self.ctx.set_fill_style(&gradient);
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}

/// Browser window as the frame host
///
/// Holds a weak reference back to the background that owns it, so pending
/// callbacks never keep a torn-down view alive.
pub struct BrowserHost {
    target: Weak<RefCell<Background>>,
}

impl BrowserHost {
    fn new(target: Weak<RefCell<Background>>) -> Self {
        Self { target }
    }
}

/// Run `f` against the background if it is still alive
fn with_background(target: &Weak<RefCell<Background>>, f: impl FnOnce(&mut Background)) {
    if let Some(background) = target.upgrade() {
        if let Ok(mut background) = background.try_borrow_mut() {
            f(&mut background);
        }
    }
}

impl FrameHost for BrowserHost {
    type FrameHandle = AnimationFrameRequestHandle;
    type Listeners = [WindowListenerHandle; 2];

    fn request_frame(&mut self, generation: u64) -> Option<AnimationFrameRequestHandle> {
        let target = self.target.clone();
        request_animation_frame_with_handle(move || {
            with_background(&target, |bg| {
                bg.on_frame(generation, js_sys::Date::now());
            });
        })
        .ok()
    }

    fn cancel_frame(&mut self, handle: AnimationFrameRequestHandle) {
        handle.cancel();
    }

    fn subscribe(&mut self, _generation: u64) -> [WindowListenerHandle; 2] {
        let target = self.target.clone();
        let pointer = window_event_listener(ev::mousemove, move |e| {
            with_background(&target, |bg| {
                bg.on_pointer_move(e.client_x() as f64, e.client_y() as f64);
            });
        });

        let target = self.target.clone();
        let resize = window_event_listener(ev::resize, move |_| {
            with_background(&target, |bg| bg.on_resize(window_viewport()));
        });

        [pointer, resize]
    }

    fn unsubscribe(&mut self, listeners: [WindowListenerHandle; 2]) {
        for listener in listeners {
            listener.remove();
        }
    }
}

/// Current window size in CSS pixels
pub fn window_viewport() -> Viewport {
    let window = window();
    let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

fn shared_background(theme: AmbientTheme) -> Rc<RefCell<Background>> {
    Rc::new_cyclic(|weak| RefCell::new(AmbientBackground::new(theme, BrowserHost::new(weak.clone()))))
}

/// Animated background drawn behind a page
#[component]
pub fn AmbientCanvas(
    /// Colours, waves and density; the house theme when omitted
    #[prop(optional)]
    theme: Option<AmbientTheme>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let background = shared_background(theme.unwrap_or_default());

    canvas_ref.on_load({
        let background = background.clone();
        move |canvas| {
            // Without a 2D context the page simply has no background
            let surface = CanvasSurface::new((*canvas).clone());
            background
                .borrow_mut()
                .mount(surface, window_viewport(), js_sys::Date::now());
        }
    });

    on_cleanup(move || background.borrow_mut().unmount());

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 w-full h-full pointer-events-none z-0"
            aria-hidden="true"
        />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        document()
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_canvas_surface_resizes() {
        let mut surface = CanvasSurface::new(canvas()).unwrap();
        surface.resize(Viewport::new(320.0, 200.0));
        assert_eq!(surface.size(), Viewport::new(320.0, 200.0));

        surface.fill_circle(Point::new(10.0, 10.0), 2.0, Rgba::new(255, 255, 255, 1.0), 0.5);
        surface.fill_polygon(&[Point::new(0.0, 0.0), Point::new(5.0, 0.0)], Rgba::new(0, 0, 0, 1.0));
        surface.clear();
    }

    #[wasm_bindgen_test]
    fn test_background_lifecycle() {
        let background = shared_background(AmbientTheme::default());
        let surface = CanvasSurface::new(canvas());

        assert!(background
            .borrow_mut()
            .mount(surface, Viewport::new(400.0, 300.0), 0.0));
        assert_eq!(background.borrow().pool().map(|p| p.len()), Some(20));

        background.borrow_mut().unmount();
        assert!(background.borrow().pool().is_none());
    }

    #[wasm_bindgen_test]
    fn test_mount_without_context_stays_idle() {
        let background = shared_background(AmbientTheme::default());

        assert!(!background
            .borrow_mut()
            .mount(None, Viewport::new(400.0, 300.0), 0.0));
        assert!(background.borrow().pool().is_none());

        // Unmounting a background that never started is harmless
        background.borrow_mut().unmount();
    }
}
