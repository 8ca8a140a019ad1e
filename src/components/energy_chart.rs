//! Energy Growth Chart Component
//!
//! Canvas line chart of the three-point growth curve with a hover tooltip.

use std::f64::consts::PI;

use leptos::html;
use leptos::prelude::*;
use leptos_observe::{bind_to_owner, js_err, listen_window};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::chart::{ChartLayout, PADDING, POINT_RADIUS};

const AXIS_COLOR: &str = "#52525b";
const LABEL_COLOR: &str = "#d4d4d8";
const LINE_COLOR: &str = "#dc2626";

/// Size the backing store for the device pixel ratio and return a context
/// drawing in CSS pixels
fn prepare(canvas: &HtmlCanvasElement) -> Result<(CanvasRenderingContext2d, ChartLayout), String> {
    let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).filter(|r| *r > 0.0).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    // Resizing the backing store also resets the transform
    canvas.set_width((rect.width() * dpr) as u32);
    canvas.set_height((rect.height() * dpr) as u32);

    let ctx = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or("2d context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "not a 2d context".to_string())?;
    ctx.scale(dpr, dpr).map_err(js_err)?;
    Ok((ctx, ChartLayout::new(rect.width(), rect.height())))
}

fn draw(canvas: &HtmlCanvasElement) -> Result<(), String> {
    let (ctx, layout) = prepare(canvas)?;
    let (w, h) = (layout.width, layout.height);
    ctx.clear_rect(0.0, 0.0, w, h);

    // Axes
    ctx.begin_path();
    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_line_width(1.0);
    ctx.move_to(PADDING, layout.baseline());
    ctx.line_to(w - PADDING, layout.baseline());
    ctx.move_to(PADDING, layout.baseline());
    ctx.line_to(PADDING, PADDING);
    ctx.stroke();

    // Labels
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (label, x) in layout.x_labels() {
        ctx.fill_text(label, x, layout.baseline() + 20.0).map_err(js_err)?;
    }
    ctx.set_text_align("right");
    for (label, y) in layout.y_labels() {
        ctx.fill_text(label, PADDING - 10.0, y).map_err(js_err)?;
    }

    // Curve
    let points = layout.points();
    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    for (control, end) in layout.curve() {
        ctx.quadratic_curve_to(control.x, control.y, end.x, end.y);
    }
    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_line_width(3.0);
    ctx.stroke();

    // Fill under the curve
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    gradient.add_color_stop(0.0, "rgba(220, 38, 38, 0.5)").map_err(js_err)?;
    gradient.add_color_stop(1.0, "rgba(220, 38, 38, 0.0)").map_err(js_err)?;
    ctx.line_to(w - PADDING, layout.baseline());
    ctx.line_to(PADDING, layout.baseline());
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();

    // Markers
    for point in points {
        ctx.begin_path();
        ctx.arc(point.x, point.y, POINT_RADIUS, 0.0, PI * 2.0).map_err(js_err)?;
        ctx.set_fill_style_str(LINE_COLOR);
        ctx.fill();
        ctx.set_stroke_style_str("#000000");
        ctx.set_line_width(2.0);
        ctx.stroke();
    }
    Ok(())
}

/// Tooltip text and position relative to the chart container
#[derive(Clone, Debug, Default, PartialEq)]
struct Tooltip {
    text: String,
    left: f64,
    top: f64,
}

#[component]
pub fn EnergyGrowthChart() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let (tooltip, set_tooltip) = signal(None::<Tooltip>);

    let redraw = move || {
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Err(e) = draw(&canvas) {
                log::warn!("[CHART] draw failed: {}", e);
            }
        }
    };

    Effect::new(move |_| {
        if canvas_ref.get().is_none() {
            return;
        }
        redraw();
        if let Err(e) = listen_window::<web_sys::Event, _>("resize", move |_| redraw()).map(bind_to_owner) {
            log::warn!("[CHART] resize listener: {}", e);
        }
    });

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let rect = canvas.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        let layout = ChartLayout::new(rect.width(), rect.height());
        set_tooltip.set(layout.hover_label(x).map(|text| Tooltip { text, left: x, top: y - 40.0 }));
    };

    view! {
        <div class="chart-card">
            <h3>"Masculine Energy Growth"</h3>
            <div class="chart-frame">
                <canvas class="chart-canvas" node_ref=canvas_ref on:mousemove=on_mousemove on:mouseleave=move |_| set_tooltip.set(None)></canvas>
                <div
                    class="chart-tooltip"
                    style:opacity=move || if tooltip.get().is_some() { "1" } else { "0" }
                    style:left=move || tooltip.get().map(|t| format!("{}px", t.left)).unwrap_or_default()
                    style:top=move || tooltip.get().map(|t| format!("{}px", t.top)).unwrap_or_default()
                >
                    {move || tooltip.get().map(|t| t.text).unwrap_or_default()}
                </div>
            </div>
            <p class="chart-note">
                "Track your energy growth over the 30-day protocol. Most men experience a significant surge after day 15."
            </p>
        </div>
    }
}
