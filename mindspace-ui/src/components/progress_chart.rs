//! Progress Chart Component
//!
//! Monthly wellness progress as a filled area chart on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// One month of aggregated wellness progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressPoint {
    pub month: &'static str,
    pub progress: f64,
}

/// Area chart of monthly wellness progress
#[component]
pub fn ProgressChart(
    /// Points to plot, in month order
    points: Vec<ProgressPoint>,
    /// Canvas height in CSS pixels
    #[prop(default = 250)]
    height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let points_for_draw = points.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_progress(&canvas, &points_for_draw);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="700"
            height=height.to_string()
            class="w-full rounded-lg"
            style=format!("height: {}px", height)
        />
    }
}

fn draw_progress(canvas: &HtmlCanvasElement, points: &[ProgressPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 40.0;
    let margin_right = 15.0;
    let margin_top = 15.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        return;
    }

    let y_max = points
        .iter()
        .map(|p| p.progress)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.2;

    // Grid
    ctx.set_stroke_style_str("#e0e0e0");
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * y_max;
        ctx.set_fill_style_str("#828282");
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let step = if points.len() > 1 {
        chart_width / (points.len() - 1) as f64
    } else {
        chart_width
    };

    let x_at = |i: usize| margin_left + i as f64 * step;
    let y_at = |p: &ProgressPoint| margin_top + (1.0 - p.progress / y_max) * chart_height;

    // Filled area under the line
    ctx.set_fill_style_str("rgba(136, 132, 216, 0.25)");
    ctx.begin_path();
    ctx.move_to(x_at(0), margin_top + chart_height);
    for (i, p) in points.iter().enumerate() {
        ctx.line_to(x_at(i), y_at(p));
    }
    ctx.line_to(x_at(points.len() - 1), margin_top + chart_height);
    ctx.close_path();
    ctx.fill();

    // Line on top
    ctx.set_stroke_style_str("#8884d8");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(p));
        } else {
            ctx.line_to(x_at(i), y_at(p));
        }
    }
    ctx.stroke();

    // Month labels
    ctx.set_fill_style_str("#828282");
    ctx.set_font("11px sans-serif");
    for (i, p) in points.iter().enumerate() {
        let _ = ctx.fill_text(p.month, x_at(i) - 10.0, height - 10.0);
    }
}
