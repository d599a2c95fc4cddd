//! Sidebar Component
//!
//! Vertical activity rail with one icon tile per discipline and the
//! rotated copyright line at the bottom.

use leptos::*;
use leptos_router::*;

/// Aside navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="relative w-[117px] bg-black min-h-screen flex flex-col justify-center items-center">
            <nav class="flex flex-col justify-between gap-5">
                <ActivityLink href="/yoga" icon="🧘" />
                <ActivityLink href="/natation" icon="🏊" />
                <ActivityLink href="/cyclisme" icon="🚴" />
                <ActivityLink href="/musculation" icon="🏋️" />
            </nav>
            <p class="absolute bottom-[60px] text-[12px] text-white whitespace-nowrap -rotate-90">
                "Copyright, SportSee 2020"
            </p>
        </aside>
    }
}

/// Square icon tile linking to one activity
#[component]
fn ActivityLink(
    href: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="w-16 h-16 flex justify-center items-center bg-white rounded-md text-2xl"
        >
            {icon}
        </A>
    }
}
