//! Header Component
//!
//! Top navigation bar with the SportSee wordmark and primary links.

use leptos::*;
use leptos_router::*;

/// Header navigation component
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-30 flex items-center justify-between bg-black h-[91px] pl-7 pr-[91px] shadow-md">
            <A href="/" class="flex items-center space-x-3">
                <span class="text-2xl">"🏃"</span>
                <span class="text-xl font-bold text-red-600">"SportSee"</span>
            </A>

            <nav class="flex items-center gap-32 text-2xl text-white">
                <HeaderLink href="/" label="Accueil" />
                <HeaderLink href="/profil" label="Profil" />
                <HeaderLink href="/reglages" label="Réglages" />
                <HeaderLink href="/communaute" label="Communauté" />
            </nav>
        </header>
    }
}

/// Individual header link
#[component]
fn HeaderLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="text-white hover:text-red-500 transition-colors"
        >
            {label}
        </A>
    }
}
