//! Daily Activity Chart
//!
//! Grouped bar chart on HTML5 Canvas: one group per day, weight and
//! burned calories side by side, with an HTML legend and a hover
//! tooltip like the rest of the dashboard cards.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::ActivitySession;
use crate::components::loading::{ChartSkeleton, ErrorNotice};
use crate::state::{use_user_activity, FetchState};

const KILOGRAM_COLOR: &str = "#282D30";
const CALORIES_COLOR: &str = "#E60000";
const GRID_COLOR: &str = "#DEDEDE";
const AXIS_COLOR: &str = "#9B9EAC";
const HOVER_BAND_COLOR: &str = "rgba(196, 196, 196, 0.5)";

const MARGIN_LEFT: f64 = 30.0;
const MARGIN_RIGHT: f64 = 70.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 44.0;

/// Daily activity panel: skeleton, error notice, or the chart
#[component]
pub fn ActivityChart(
    #[prop(into)]
    user_id: Signal<u32>,
) -> impl IntoView {
    let activity = use_user_activity(user_id);

    view! {
        <div class="relative bg-gray-50 rounded-[5px] h-[320px]">
            {move || match activity.get() {
                FetchState::Idle | FetchState::Loading => view! { <ChartSkeleton /> }.into_view(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_view(),
                FetchState::Ready(sessions) => {
                    view! { <ActivityChartCanvas sessions=sessions /> }.into_view()
                }
            }}
        </div>
    }
}

/// The rendered chart for one week of sessions
#[component]
fn ActivityChartCanvas(sessions: Vec<ActivitySession>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hovered, set_hovered) = create_signal(None::<usize>);

    let sessions_for_draw = sessions.clone();
    create_effect(move |_| {
        let highlight = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_activity_chart(&canvas, &sessions_for_draw, highlight);
        }
    });

    let group_count = sessions.len();
    let on_mousemove = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return;
        }
        // Hit-test in canvas pixels, not CSS pixels
        let x = (ev.client_x() as f64 - rect.left()) * canvas.width() as f64 / rect.width();
        set_hovered.set(group_index_at(
            x,
            canvas.width() as f64,
            group_count,
        ));
    };

    let sessions_for_tooltip = sessions.clone();

    view! {
        <div class="absolute inset-0 p-6">
            <h2 class="absolute top-6 left-8 text-[15px] font-medium text-gray-900">
                "Activité quotidienne"
            </h2>

            <div class="absolute top-6 right-8 flex items-center gap-8">
                <LegendItem color=KILOGRAM_COLOR label="Poids (kg)" />
                <LegendItem color=CALORIES_COLOR label="Calories brûlées (kCal)" />
            </div>

            {move || {
                if sessions_for_tooltip.is_empty() {
                    Some(view! {
                        <p class="absolute inset-0 flex items-center justify-center text-gray-400">
                            "Aucune donnée"
                        </p>
                    })
                } else {
                    None
                }
            }}

            <canvas
                node_ref=canvas_ref
                width="780"
                height="230"
                class="absolute left-6 right-6 bottom-4 w-[calc(100%-3rem)] h-[230px]"
                on:mousemove=on_mousemove
                on:mouseleave=move |_| set_hovered.set(None)
            />

            // Tooltip follows the hovered day group
            {move || {
                let index = hovered.get()?;
                let session = sessions.get(index)?.clone();
                let center = group_center_fraction(index, sessions.len());

                Some(view! {
                    <div
                        class="absolute top-10 flex flex-col items-center gap-2 bg-red-600 text-white text-[10px] font-medium px-2 py-3 pointer-events-none"
                        style=format!("left: calc({:.1}% + 1.5rem)", center * 100.0)
                    >
                        <span>{format!("{}kg", session.kilogram)}</span>
                        <span>{format!("{}kCal", session.calories)}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// One legend entry: colored dot plus label
#[component]
fn LegendItem(
    color: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <span
                class="w-2 h-2 rounded-full"
                style=format!("background-color: {}", color)
            />
            <span class="text-[14px] font-medium text-gray-500">{label}</span>
        </div>
    }
}

/// X-axis label: day of month from an ISO date, the raw label otherwise
fn day_of_month_label(day: &str) -> String {
    use chrono::Datelike;

    chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|date| date.day().to_string())
        .unwrap_or_else(|_| day.to_string())
}

/// Weight axis domain: one kilogram of headroom on each side
fn kilogram_domain(sessions: &[ActivitySession]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for session in sessions {
        min = min.min(session.kilogram);
        max = max.max(session.kilogram);
    }
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    (min - 1.0, max + 1.0)
}

/// Which day group a canvas x coordinate falls in
fn group_index_at(x: f64, canvas_width: f64, group_count: usize) -> Option<usize> {
    if group_count == 0 {
        return None;
    }
    let plot_width = canvas_width - MARGIN_LEFT - MARGIN_RIGHT;
    let offset = x - MARGIN_LEFT;
    if offset < 0.0 || offset >= plot_width {
        return None;
    }
    let index = (offset / plot_width * group_count as f64) as usize;
    (index < group_count).then_some(index)
}

/// Horizontal center of one day group, as a fraction of canvas width
fn group_center_fraction(index: usize, group_count: usize) -> f64 {
    if group_count == 0 {
        return 0.0;
    }
    let plot_width = 1.0 - (MARGIN_LEFT + MARGIN_RIGHT) / 780.0;
    let left = MARGIN_LEFT / 780.0;
    left + plot_width * (index as f64 + 0.5) / group_count as f64
}

/// Draw the grouped bars on canvas
fn draw_activity_chart(
    canvas: &HtmlCanvasElement,
    sessions: &[ActivitySession],
    hovered: Option<usize>,
) {
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

    if sessions.is_empty() {
        return;
    }

    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let plot_bottom = MARGIN_TOP + plot_height;

    let (kg_min, kg_max) = kilogram_domain(sessions);
    let cal_max = sessions
        .iter()
        .map(|s| s.calories)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.1;

    // Horizontal dashed grid, weight ticks on the right
    let dash = js_sys::Array::of2(&3.0.into(), &3.0.into());
    let _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_fill_style(&AXIS_COLOR.into());
    ctx.set_font("12px sans-serif");
    ctx.set_line_width(1.0);

    let ticks = 3;
    for i in 0..ticks {
        let fraction = i as f64 / (ticks - 1) as f64;
        let y = plot_bottom - fraction * plot_height;
        if i > 0 {
            ctx.begin_path();
            ctx.move_to(MARGIN_LEFT, y);
            ctx.line_to(width - MARGIN_RIGHT, y);
            ctx.stroke();
        }
        let value = kg_min + fraction * (kg_max - kg_min);
        let _ = ctx.fill_text(&format!("{:.0}", value), width - MARGIN_RIGHT + 24.0, y + 4.0);
    }
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    let group_width = plot_width / sessions.len() as f64;
    let bar_width = 7.0;
    let bar_gap = 8.0;

    for (index, session) in sessions.iter().enumerate() {
        let group_left = MARGIN_LEFT + index as f64 * group_width;
        let center = group_left + group_width / 2.0;

        // Gray band behind the hovered group
        if hovered == Some(index) {
            ctx.set_fill_style(&HOVER_BAND_COLOR.into());
            ctx.fill_rect(group_left, MARGIN_TOP, group_width, plot_height);
        }

        let kg_height = if kg_max > kg_min {
            (session.kilogram - kg_min) / (kg_max - kg_min) * plot_height
        } else {
            0.0
        };
        let cal_height = session.calories / cal_max * plot_height;

        ctx.set_fill_style(&KILOGRAM_COLOR.into());
        ctx.fill_rect(
            center - bar_gap / 2.0 - bar_width,
            plot_bottom - kg_height,
            bar_width,
            kg_height,
        );

        ctx.set_fill_style(&CALORIES_COLOR.into());
        ctx.fill_rect(
            center + bar_gap / 2.0,
            plot_bottom - cal_height,
            bar_width,
            cal_height,
        );

        // Day-of-month labels along the x axis
        ctx.set_fill_style(&AXIS_COLOR.into());
        let label = day_of_month_label(&session.day);
        let _ = ctx.fill_text(&label, center - 4.0, height - 16.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(day: &str, kilogram: f64, calories: f64) -> ActivitySession {
        ActivitySession {
            day: day.to_string(),
            kilogram,
            calories,
        }
    }

    #[test]
    fn iso_dates_shrink_to_day_of_month() {
        assert_eq!(day_of_month_label("2020-07-01"), "1");
        assert_eq!(day_of_month_label("2020-07-31"), "31");
    }

    #[test]
    fn non_iso_labels_pass_through() {
        assert_eq!(day_of_month_label("lundi"), "lundi");
        assert_eq!(day_of_month_label(""), "");
    }

    #[test]
    fn kilogram_domain_adds_headroom() {
        let sessions = vec![
            session("2020-07-01", 76.0, 240.0),
            session("2020-07-02", 81.0, 290.0),
        ];
        assert_eq!(kilogram_domain(&sessions), (75.0, 82.0));
    }

    #[test]
    fn hit_testing_maps_x_to_day_groups() {
        let width = 780.0;
        assert_eq!(group_index_at(MARGIN_LEFT + 1.0, width, 7), Some(0));
        assert_eq!(group_index_at(width - MARGIN_RIGHT - 1.0, width, 7), Some(6));
        assert_eq!(group_index_at(MARGIN_LEFT - 5.0, width, 7), None);
        assert_eq!(group_index_at(width - 1.0, width, 7), None);
        assert_eq!(group_index_at(100.0, width, 0), None);
    }

    #[test]
    fn group_centers_stay_inside_the_plot() {
        let first = group_center_fraction(0, 7);
        let last = group_center_fraction(6, 7);
        assert!(first > 0.0 && first < last && last < 1.0);
    }
}
