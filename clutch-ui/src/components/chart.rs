//! Chart Component
//!
//! Profit-over-time line chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use clutch::api::PerformancePoint;

const LINE_COLOR: &str = "#a855f7";
const GRID_COLOR: &str = "rgba(255, 255, 255, 0.1)";
const LABEL_COLOR: &str = "rgba(255, 255, 255, 0.7)";

/// Profit line chart
#[component]
pub fn ProfitChart(
    #[prop(into)]
    points: Signal<Vec<PerformancePoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the data changes
    create_effect(move |_| {
        let points = points.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="320"
            class="w-full h-80 rounded-lg"
        />
    }
}

/// Vertical range for the y-axis, padded by 10% (at least 1 either side
/// when all values are equal)
fn y_range(points: &[PerformancePoint]) -> (f64, f64) {
    let min = points.iter().map(|p| p.profit).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.profit).fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let span = max - min;
    let padding = if span > 0.0 { span * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Horizontal position of point `i` of `n` across `width`
fn x_position(i: usize, n: usize, width: f64) -> f64 {
    if n <= 1 {
        width / 2.0
    } else {
        i as f64 / (n - 1) as f64 * width
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[PerformancePoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No performance data yet", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    let (y_min, y_max) = y_range(points);
    let to_y = |profit: f64| margin_top + (y_max - profit) / (y_max - y_min) * chart_height;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Profit line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = margin_left + x_position(i, points.len(), chart_width);
        let y = to_y(point.profit);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Points and x-axis labels
    for (i, point) in points.iter().enumerate() {
        let x = margin_left + x_position(i, points.len(), chart_width);

        ctx.set_fill_style(&LINE_COLOR.into());
        ctx.begin_path();
        let _ = ctx.arc(x, to_y(point.profit), 5.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&point.date, x - 15.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(profit: f64) -> PerformancePoint {
        PerformancePoint {
            date: "Jan".to_string(),
            profit,
        }
    }

    #[test]
    fn test_y_range_pads_span() {
        let (lo, hi) = y_range(&[point(100.0), point(200.0)]);
        assert_eq!(lo, 90.0);
        assert_eq!(hi, 210.0);
    }

    #[test]
    fn test_y_range_flat_series() {
        assert_eq!(y_range(&[point(5.0)]), (4.0, 6.0));
        assert_eq!(y_range(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_x_position() {
        assert_eq!(x_position(0, 1, 100.0), 50.0);
        assert_eq!(x_position(0, 3, 100.0), 0.0);
        assert_eq!(x_position(2, 3, 100.0), 100.0);
    }
}
