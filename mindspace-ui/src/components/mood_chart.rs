//! Mood Chart Component
//!
//! Weekday line chart for one history series using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use mindspace::MoodEntry;

use crate::state::session::use_session;

/// Which history series to plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodSeries {
    Anxiety,
    Depression,
    MoodScore,
}

impl MoodSeries {
    pub fn title(self) -> &'static str {
        match self {
            MoodSeries::Anxiety => "Anxiety Level",
            MoodSeries::Depression => "Depression Level",
            MoodSeries::MoodScore => "Mood Score",
        }
    }

    fn color(self) -> &'static str {
        match self {
            MoodSeries::Anxiety => "#E6B5FF",
            MoodSeries::Depression => "#B9A0FF",
            MoodSeries::MoodScore => "#4CAF50",
        }
    }

    fn y_max(self) -> f64 {
        match self {
            MoodSeries::Anxiety | MoodSeries::Depression => 100.0,
            MoodSeries::MoodScore => 5.0,
        }
    }

    fn value(self, entry: &MoodEntry) -> f64 {
        match self {
            MoodSeries::Anxiety => f64::from(entry.anxiety),
            MoodSeries::Depression => f64::from(entry.depression),
            MoodSeries::MoodScore => entry.mood_score,
        }
    }

    /// Headline text for the latest entry
    fn headline(self, entry: &MoodEntry) -> String {
        match self {
            MoodSeries::Anxiety => format!("{}%", entry.anxiety),
            MoodSeries::Depression => format!("{}%", entry.depression),
            MoodSeries::MoodScore => format!("{:.1}", entry.mood_score),
        }
    }
}

/// Line chart card for one series of the rolling history
#[component]
pub fn MoodChart(series: MoodSeries) -> impl IntoView {
    let state = use_session();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the history changes
    let state_for_draw = state.clone();
    create_effect(move |_| {
        let entries = state_for_draw.history_entries();
        if let Some(canvas) = canvas_ref.get() {
            draw_series(&canvas, &entries, series);
        }
    });

    view! {
        <section class="bg-white rounded-2xl shadow-md p-6">
            <div class="flex items-center justify-between pb-2">
                <h2 class="text-lg font-semibold">{series.title()}</h2>
                <div class="text-2xl font-bold" style=format!("color: {}", series.color())>
                    {move || {
                        state.latest_entry()
                            .map(|e| series.headline(&e))
                            .unwrap_or_else(|| "—".to_string())
                    }}
                </div>
            </div>

            <canvas
                node_ref=canvas_ref
                width="600"
                height="220"
                class="w-full h-[200px] mt-2 rounded-lg"
            />
        </section>
    }
}

/// Draw one series over the weekday axis
fn draw_series(canvas: &HtmlCanvasElement, entries: &[MoodEntry], series: MoodSeries) {
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
    let margin_left = 40.0;
    let margin_right = 15.0;
    let margin_top = 15.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    let y_max = series.y_max();

    // Horizontal grid lines with y-axis labels (5 divisions)
    ctx.set_stroke_style_str("#e0e0e0");
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style_str("#828282");
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    if entries.is_empty() {
        ctx.set_fill_style_str("#828282");
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 25.0, height / 2.0);
        return;
    }

    let step = if entries.len() > 1 {
        chart_width / (entries.len() - 1) as f64
    } else {
        chart_width
    };

    // Series polyline
    ctx.set_stroke_style_str(series.color());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, entry) in entries.iter().enumerate() {
        let x = margin_left + i as f64 * step;
        let y = margin_top + (1.0 - series.value(entry) / y_max) * chart_height;
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Data points and weekday labels
    ctx.set_fill_style_str(series.color());
    for (i, entry) in entries.iter().enumerate() {
        let x = margin_left + i as f64 * step;
        let y = margin_top + (1.0 - series.value(entry) / y_max) * chart_height;

        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    ctx.set_fill_style_str("#828282");
    ctx.set_font("11px sans-serif");
    for (i, entry) in entries.iter().enumerate() {
        let x = margin_left + i as f64 * step;
        let _ = ctx.fill_text(&entry.day.to_string(), x - 12.0, height - 10.0);
    }
}
