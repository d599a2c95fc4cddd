//! SportSee Dashboard
//!
//! Single-user fitness analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Daily activity, average session length, performance radar and
//!   goal-completion score for the user named in the URL
//! - Nutritional key figures
//! - Mock mode serving static fixtures instead of the backend
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that
//! compiles to WebAssembly. It fetches each resource independently
//! over HTTP; a panel that fails renders its own error in place
//! without taking down the rest of the page.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
