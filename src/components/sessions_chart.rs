//! Average Sessions Chart
//!
//! White line over the red card: average session length for each
//! weekday, hover tooltip in minutes, and the darkened band to the
//! right of the cursor.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::AverageSession;
use crate::components::loading::{ChartSkeleton, ErrorNotice};
use crate::state::{use_average_sessions, FetchState};

const CARD_COLOR: &str = "#FF0000";
const LINE_COLOR: &str = "rgba(255, 255, 255, 0.7)";
const DOT_HALO_COLOR: &str = "rgba(255, 255, 255, 0.3)";
const SHADE_COLOR: &str = "rgba(0, 0, 0, 0.1)";

const MARGIN_X: f64 = 14.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 48.0;

/// Single-letter French weekday label; 1 = Monday .. 7 = Sunday.
/// Anything outside the range renders as an empty label.
pub fn weekday_letter(day: u8) -> &'static str {
    match day {
        1 => "L",
        2 => "M",
        3 => "M",
        4 => "J",
        5 => "V",
        6 => "S",
        7 => "D",
        _ => "",
    }
}

/// Average-sessions panel: skeleton, error notice, or the chart
#[component]
pub fn SessionsChart(
    #[prop(into)]
    user_id: Signal<u32>,
) -> impl IntoView {
    let sessions = use_average_sessions(user_id);

    view! {
        <div class="relative rounded-[5px] h-[263px] overflow-hidden" style=format!("background-color: {CARD_COLOR}")>
            {move || match sessions.get() {
                FetchState::Idle | FetchState::Loading => view! { <ChartSkeleton /> }.into_view(),
                FetchState::Failed(message) => view! { <ErrorNotice message=message /> }.into_view(),
                FetchState::Ready(sessions) => {
                    view! { <SessionsChartCanvas sessions=sessions /> }.into_view()
                }
            }}
        </div>
    }
}

/// The rendered line chart for one week of averages
#[component]
fn SessionsChartCanvas(sessions: Vec<AverageSession>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hovered, set_hovered) = create_signal(None::<usize>);

    let sessions_for_draw = sessions.clone();
    create_effect(move |_| {
        let highlight = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_sessions_chart(&canvas, &sessions_for_draw, highlight);
        }
    });

    let point_count = sessions.len();
    let on_mousemove = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return;
        }
        let x = (ev.client_x() as f64 - rect.left()) * canvas.width() as f64 / rect.width();
        set_hovered.set(nearest_point_index(x, canvas.width() as f64, point_count));
    };

    let sessions_for_tooltip = sessions.clone();

    view! {
        <div class="absolute inset-0">
            <h2 class="absolute top-6 left-6 right-16 text-[15px] font-medium text-white/50">
                "Durée moyenne des sessions"
            </h2>

            {move || {
                if sessions_for_tooltip.is_empty() {
                    Some(view! {
                        <p class="absolute inset-0 flex items-center justify-center text-white/70">
                            "Aucune donnée"
                        </p>
                    })
                } else {
                    None
                }
            }}

            <canvas
                node_ref=canvas_ref
                width="258"
                height="263"
                class="absolute inset-0 w-full h-full"
                on:mousemove=on_mousemove
                on:mouseleave=move |_| set_hovered.set(None)
            />

            // Tooltip above the hovered point
            {move || {
                let index = hovered.get()?;
                let session = sessions.get(index)?.clone();
                let center = point_fraction(index, sessions.len());

                Some(view! {
                    <div
                        class="absolute top-10 bg-white text-gray-900 text-[10px] font-medium px-3 py-1 pointer-events-none -translate-x-1/2"
                        style=format!("left: {:.1}%", center * 100.0)
                    >
                        {format!("{} min", session.session_length)}
                    </div>
                })
            }}
        </div>
    }
}

/// Horizontal position of one point, as a fraction of canvas width
fn point_fraction(index: usize, point_count: usize) -> f64 {
    if point_count < 2 {
        return 0.5;
    }
    let usable = 1.0 - 2.0 * MARGIN_X / 258.0;
    MARGIN_X / 258.0 + usable * index as f64 / (point_count - 1) as f64
}

/// Index of the point nearest to a canvas x coordinate
fn nearest_point_index(x: f64, canvas_width: f64, point_count: usize) -> Option<usize> {
    if point_count == 0 {
        return None;
    }
    if point_count == 1 {
        return Some(0);
    }
    let usable = canvas_width - 2.0 * MARGIN_X;
    let step = usable / (point_count - 1) as f64;
    let index = ((x - MARGIN_X) / step).round();
    if index < 0.0 {
        return Some(0);
    }
    Some((index as usize).min(point_count - 1))
}

/// Session-length domain with headroom so the line floats mid-card
fn length_domain(sessions: &[AverageSession]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for session in sessions {
        min = min.min(session.session_length);
        max = max.max(session.session_length);
    }
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    (min, max)
}

/// Draw the line, weekday letters and hover shading on canvas
fn draw_sessions_chart(
    canvas: &HtmlCanvasElement,
    sessions: &[AverageSession],
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

    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let (min_len, max_len) = length_domain(sessions);

    let x_at = |index: usize| point_fraction(index, sessions.len()) * width;
    let y_at = |length: f64| {
        MARGIN_TOP + (max_len - length) / (max_len - min_len) * plot_height
    };

    // Darken everything right of the hovered point
    if let Some(index) = hovered {
        let x = x_at(index);
        ctx.set_fill_style(&SHADE_COLOR.into());
        ctx.fill_rect(x, 0.0, width - x, height);
    }

    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (index, session) in sessions.iter().enumerate() {
        let x = x_at(index);
        let y = y_at(session.session_length);
        if index == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Active dot with translucent halo
    if let Some(index) = hovered {
        if let Some(session) = sessions.get(index) {
            let x = x_at(index);
            let y = y_at(session.session_length);

            ctx.set_fill_style(&DOT_HALO_COLOR.into());
            ctx.begin_path();
            let _ = ctx.arc(x, y, 9.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();

            ctx.set_fill_style(&"#FFFFFF".into());
            ctx.begin_path();
            let _ = ctx.arc(x, y, 4.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // Weekday letters along the bottom
    ctx.set_fill_style(&"rgba(255, 255, 255, 0.5)".into());
    ctx.set_font("12px sans-serif");
    for (index, session) in sessions.iter().enumerate() {
        let letter = weekday_letter(session.day);
        if letter.is_empty() {
            continue;
        }
        let _ = ctx.fill_text(letter, x_at(index) - 4.0, height - 18.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_letters_cover_the_week() {
        let letters: Vec<&str> = (1..=7).map(weekday_letter).collect();
        assert_eq!(letters, vec!["L", "M", "M", "J", "V", "S", "D"]);
    }

    #[test]
    fn out_of_range_days_get_an_empty_label() {
        assert_eq!(weekday_letter(0), "");
        assert_eq!(weekday_letter(8), "");
        assert_eq!(weekday_letter(255), "");
    }

    #[test]
    fn nearest_point_snaps_and_clamps() {
        let width = 258.0;
        assert_eq!(nearest_point_index(MARGIN_X, width, 7), Some(0));
        assert_eq!(nearest_point_index(width - MARGIN_X, width, 7), Some(6));
        assert_eq!(nearest_point_index(0.0, width, 7), Some(0));
        assert_eq!(nearest_point_index(width, width, 7), Some(6));
        assert_eq!(nearest_point_index(100.0, width, 0), None);
    }

    #[test]
    fn flat_series_still_has_a_valid_domain() {
        let sessions: Vec<AverageSession> = (1..=3)
            .map(|day| AverageSession {
                day,
                session_length: 30.0,
            })
            .collect();
        let (min, max) = length_domain(&sessions);
        assert!(min < max);
    }
}
