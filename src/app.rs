//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api::ApiConfig;
use crate::components::{Header, Sidebar};
use crate::pages::Profile;

/// User shown when the URL does not name one
const DEFAULT_USER_ID: u32 = 12;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Resolve the API configuration once and hand it to every consumer
    provide_context(ApiConfig::load());

    view! {
        <Router>
            <div class="min-h-screen bg-white text-gray-900 flex flex-col">
                <Header />

                <div class="flex flex-1">
                    <Sidebar />

                    <Routes>
                        <Route
                            path="/"
                            view=|| view! { <Redirect path=format!("/user/{DEFAULT_USER_ID}") /> }
                        />
                        <Route path="/user/:id" view=Profile />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="flex-1 flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page introuvable"</h1>
            <p class="text-gray-500 mb-6">"La page demandée n'existe pas."</p>
            <A
                href="/"
                class="px-6 py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-colors"
            >
                "Retour au tableau de bord"
            </A>
        </main>
    }
}
