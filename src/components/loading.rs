//! Loading Component
//!
//! Skeleton states for panels still waiting on their resource, and the
//! in-place notice shown when a fetch fails.

use leptos::*;

/// Skeleton loader for chart panels
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="h-full w-full rounded-[5px] bg-gray-100 p-6 animate-pulse">
            <div class="h-4 bg-gray-200 rounded w-1/3 mb-6" />
            <div class="h-3/4 bg-gray-200 rounded" />
        </div>
    }
}

/// Skeleton loader for the key-data cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="flex items-center bg-gray-100 rounded-[5px] h-[124px] p-8 animate-pulse">
            <div class="w-[60px] h-[60px] bg-gray-200 rounded-md mr-6" />
            <div class="flex-1 space-y-2">
                <div class="h-5 bg-gray-200 rounded w-1/2" />
                <div class="h-4 bg-gray-200 rounded w-1/3" />
            </div>
        </div>
    }
}

/// Error notice rendered in place of a failed panel. Each resource
/// fails in isolation; the rest of the page stays usable.
#[component]
pub fn ErrorNotice(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="h-full w-full rounded-[5px] bg-gray-100 flex items-center justify-center p-6">
            <p class="text-sm text-red-700 text-center">"Erreur : " {message}</p>
        </div>
    }
}
