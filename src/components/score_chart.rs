//! Score Chart
//!
//! Radial progress arc for the goal-completion score, with the
//! percentage and caption on a white inner disc.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::UserProfile;
use crate::components::loading::{ChartSkeleton, ErrorNotice};
use crate::state::FetchState;

const ARC_COLOR: &str = "#E60000";
const TRACK_COLOR: &str = "#FBFBFB";

/// Goal ratio to displayed percentage. A ratio of exactly zero (or an
/// absent ratio) means "no score available", not `0%`.
pub fn score_percent(ratio: Option<f64>) -> Option<u32> {
    match ratio {
        Some(ratio) if ratio > 0.0 => Some((ratio * 100.0).round() as u32),
        _ => None,
    }
}

/// Score panel fed from the profile slice
#[component]
pub fn ScoreChart(profile: ReadSignal<FetchState<UserProfile>>) -> impl IntoView {
    view! {
        <div class="relative rounded-[5px] h-[263px]" style=format!("background-color: {TRACK_COLOR}")>
            <h2 class="absolute top-6 left-8 text-[15px] font-medium text-gray-900 z-10">"Score"</h2>

            {move || match profile.get() {
                FetchState::Idle | FetchState::Loading => view! { <ChartSkeleton /> }.into_view(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_view(),
                FetchState::Ready(profile) => {
                    match score_percent(profile.goal_score()) {
                        Some(percent) => view! { <ScoreArc percent=percent /> }.into_view(),
                        None => view! {
                            <p class="absolute inset-0 flex items-center justify-center text-gray-500">
                                "Aucun score disponible"
                            </p>
                        }
                        .into_view(),
                    }
                }
            }}
        </div>
    }
}

/// The rendered arc plus the inner disc
#[component]
fn ScoreArc(percent: u32) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_score_arc(&canvas, percent);
        }
    });

    view! {
        <div class="absolute inset-0 flex items-center justify-center">
            <canvas
                node_ref=canvas_ref
                width="258"
                height="263"
                class="w-full h-full"
            />

            <div class="absolute w-[140px] h-[140px] bg-white rounded-full flex justify-center items-center">
                <p class="text-[16px] text-gray-500 font-medium w-[95px] text-center">
                    <span class="text-gray-900 text-[26px] font-bold">{percent}"%"</span>
                    <br />
                    "de votre objectif"
                </p>
            </div>
        </div>
    }
}

/// Fraction of the full circle the arc covers for a given percentage
fn arc_sweep(percent: u32) -> f64 {
    f64::from(percent.min(100)) / 100.0 * std::f64::consts::TAU
}

/// Draw the progress ring: starts at the top, runs counterclockwise
fn draw_score_arc(canvas: &HtmlCanvasElement, percent: u32) {
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

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = 80.0;
    let start = -std::f64::consts::FRAC_PI_2;
    let end = start - arc_sweep(percent);

    ctx.set_stroke_style(&ARC_COLOR.into());
    ctx.set_line_width(10.0);
    ctx.set_line_cap("round");
    ctx.begin_path();
    let _ = ctx.arc_with_anticlockwise(center_x, center_y, radius, start, end, true);
    ctx.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_rounds_to_whole_percent() {
        assert_eq!(score_percent(Some(0.72)), Some(72));
        assert_eq!(score_percent(Some(0.12)), Some(12));
        assert_eq!(score_percent(Some(0.875)), Some(88));
        assert_eq!(score_percent(Some(1.0)), Some(100));
    }

    #[test]
    fn zero_and_absent_scores_short_circuit() {
        assert_eq!(score_percent(Some(0.0)), None);
        assert_eq!(score_percent(None), None);
    }

    #[test]
    fn sweep_is_proportional_and_clamped() {
        assert_eq!(arc_sweep(0), 0.0);
        assert!((arc_sweep(50) - std::f64::consts::PI).abs() < 1e-9);
        assert_eq!(arc_sweep(100), std::f64::consts::TAU);
        assert_eq!(arc_sweep(250), std::f64::consts::TAU);
    }
}
