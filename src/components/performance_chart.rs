//! Performance Chart
//!
//! Hexagonal radar on the dark card: one spoke per performance
//! category, red filled polygon for the user's scores.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::PerformanceMetric;
use crate::components::loading::{ChartSkeleton, ErrorNotice};
use crate::state::{use_user_performance, FetchState};

const CARD_COLOR: &str = "#282D30";
const POLYGON_COLOR: &str = "rgba(255, 1, 1, 0.7)";
const GRID_COLOR: &str = "#FFFFFF";

/// Category code (1..=6) to category key. Codes outside the table are
/// a data defect and yield `None` so the caller can reject them loudly.
pub fn kind_key(kind: u8) -> Option<&'static str> {
    match kind {
        1 => Some("cardio"),
        2 => Some("energy"),
        3 => Some("endurance"),
        4 => Some("strength"),
        5 => Some("speed"),
        6 => Some("intensity"),
        _ => None,
    }
}

/// Category key to French display label
pub fn kind_label_fr(key: &str) -> &'static str {
    match key {
        "cardio" => "Cardio",
        "energy" => "Énergie",
        "endurance" => "Endurance",
        "strength" => "Force",
        "speed" => "Vitesse",
        "intensity" => "Intensité",
        _ => "",
    }
}

/// Both tables chained: code to French label
pub fn performance_label(kind: u8) -> Option<&'static str> {
    kind_key(kind).map(kind_label_fr)
}

/// Performance panel: skeleton, error notice, or the radar
#[component]
pub fn PerformanceChart(
    #[prop(into)]
    user_id: Signal<u32>,
) -> impl IntoView {
    let performance = use_user_performance(user_id);

    view! {
        <div class="relative rounded-[5px] h-[263px]" style=format!("background-color: {CARD_COLOR}")>
            {move || match performance.get() {
                FetchState::Idle | FetchState::Loading => view! { <ChartSkeleton /> }.into_view(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_view(),
                FetchState::Ready(metrics) => {
                    view! { <PerformanceChartCanvas metrics=metrics /> }.into_view()
                }
            }}
        </div>
    }
}

/// The rendered radar for one user's scores
#[component]
fn PerformanceChartCanvas(metrics: Vec<PerformanceMetric>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Unknown category codes are dropped here, loudly; they must never
    // reach the drawing pass with a wrong label.
    let labeled: Vec<(String, f64)> = metrics
        .iter()
        .filter_map(|metric| match performance_label(metric.kind) {
            Some(label) => Some((label.to_string(), metric.value)),
            None => {
                web_sys::console::error_1(
                    &format!("unknown performance category code {}", metric.kind).into(),
                );
                None
            }
        })
        .collect();

    let labeled_for_draw = labeled.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_performance_chart(&canvas, &labeled_for_draw);
        }
    });

    view! {
        <div class="absolute inset-0 flex items-center justify-center">
            {move || {
                if labeled.is_empty() {
                    Some(view! {
                        <p class="text-white/70">"Aucune donnée"</p>
                    })
                } else {
                    None
                }
            }}

            <canvas
                node_ref=canvas_ref
                width="258"
                height="263"
                class="w-full h-full"
            />
        </div>
    }
}

/// Unit position of spoke `index` out of `count`, first spoke at the
/// top, advancing clockwise.
fn spoke_direction(index: usize, count: usize) -> (f64, f64) {
    let angle = -std::f64::consts::FRAC_PI_2
        + index as f64 * std::f64::consts::TAU / count.max(1) as f64;
    (angle.cos(), angle.sin())
}

/// Draw the grid, labels and score polygon on canvas
fn draw_performance_chart(canvas: &HtmlCanvasElement, labeled: &[(String, f64)]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    if labeled.is_empty() {
        return;
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) * 0.32;
    let count = labeled.len();

    let point_at = |index: usize, r: f64| {
        let (dx, dy) = spoke_direction(index, count);
        (center_x + dx * r, center_y + dy * r)
    };

    // Concentric grid polygons
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    for level in [0.25, 0.5, 0.75, 1.0] {
        ctx.begin_path();
        for index in 0..=count {
            let (x, y) = point_at(index % count, radius * level);
            if index == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }

    // Score polygon
    let max_value = labeled
        .iter()
        .map(|(_, value)| *value)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    ctx.set_fill_style(&POLYGON_COLOR.into());
    ctx.begin_path();
    for (index, (_, value)) in labeled.iter().enumerate() {
        let (x, y) = point_at(index, radius * value / max_value);
        if index == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    ctx.fill();

    // Category labels around the grid
    ctx.set_fill_style(&GRID_COLOR.into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (index, (label, _)) in labeled.iter().enumerate() {
        let (x, y) = point_at(index, radius * 1.3);
        let _ = ctx.fill_text(label, x, y + 4.0);
    }
    ctx.set_text_align("start");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_code_has_a_french_label() {
        let labels: Vec<&str> = (1..=6)
            .map(|kind| performance_label(kind).expect("known code"))
            .collect();
        assert_eq!(
            labels,
            vec!["Cardio", "Énergie", "Endurance", "Force", "Vitesse", "Intensité"]
        );
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(performance_label(0), None);
        assert_eq!(performance_label(7), None);
        assert_eq!(kind_key(0), None);
        assert_eq!(kind_key(7), None);
    }

    #[test]
    fn first_spoke_points_up() {
        let (dx, dy) = spoke_direction(0, 6);
        assert!(dx.abs() < 1e-9);
        assert!((dy + 1.0).abs() < 1e-9);
    }

    #[test]
    fn spokes_divide_the_circle_evenly() {
        let (dx, dy) = spoke_direction(3, 6);
        // Opposite the first spoke
        assert!(dx.abs() < 1e-9);
        assert!((dy - 1.0).abs() < 1e-9);
    }
}
