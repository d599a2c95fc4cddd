//! Profile Page
//!
//! The dashboard for one user: greeting, daily activity, the three
//! square charts and the nutritional key-data column. The user id
//! comes from the route and every panel re-fetches when it changes.

use leptos::*;
use leptos_router::*;

use crate::components::{
    ActivityChart, CardSkeleton, ErrorNotice, KeyDataCard, NutrientKind, PerformanceChart,
    ScoreChart, SessionsChart,
};
use crate::state::{use_user_profile, FetchState};

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let params = use_params_map();
    let user_id = create_memo(move |_| {
        params.with(|params| {
            params
                .get("id")
                .and_then(|id| id.parse::<u32>().ok())
        })
    });

    // Depends on validity only: an id change within the same route
    // updates the inner signal and refetches without remounting.
    let is_valid = create_memo(move |_| user_id.get().is_some());

    view! {
        {move || {
            if is_valid.get() {
                let id = Signal::derive(move || user_id.get().unwrap_or_default());
                view! { <ProfileContent user_id=id /> }.into_view()
            } else {
                view! { <InvalidUser /> }.into_view()
            }
        }}
    }
}

/// Dashboard body for a valid user id
#[component]
fn ProfileContent(user_id: Signal<u32>) -> impl IntoView {
    let profile = use_user_profile(user_id);

    view! {
        <main class="flex-1 pt-16 pl-[107px] pr-[90px] pb-16">
            <Greeting profile=profile />

            <div class="grid grid-cols-4 gap-7 mt-16">
                <div class="col-span-3 flex flex-col gap-7">
                    <ActivityChart user_id=user_id />

                    <div class="grid grid-cols-3 gap-7">
                        <SessionsChart user_id=user_id />
                        <PerformanceChart user_id=user_id />
                        <ScoreChart profile=profile />
                    </div>
                </div>

                <KeyDataColumn profile=profile />
            </div>
        </main>
    }
}

/// Greeting header fed from the profile slice
#[component]
fn Greeting(profile: ReadSignal<FetchState<crate::api::UserProfile>>) -> impl IntoView {
    view! {
        <header class="flex flex-col gap-10">
            <p class="text-[48px] font-medium text-gray-900">
                "Bonjour "
                <span class="text-red-600">
                    {move || {
                        profile.with(|state| {
                            state
                                .ready()
                                .map(|profile| profile.user_infos.first_name.clone())
                                .unwrap_or_default()
                        })
                    }}
                </span>
            </p>
            {move || {
                profile.with(|state| state.ready().is_some()).then(|| view! {
                    <p class="text-[18px] text-gray-900">
                        "Félicitations ! Vous avez explosé vos objectifs hier 👏"
                    </p>
                })
            }}
        </header>
    }
}

/// Right-hand column with the four nutritional cards
#[component]
fn KeyDataColumn(profile: ReadSignal<FetchState<crate::api::UserProfile>>) -> impl IntoView {
    const KINDS: [NutrientKind; 4] = [
        NutrientKind::Calories,
        NutrientKind::Proteins,
        NutrientKind::Carbohydrates,
        NutrientKind::Lipids,
    ];

    view! {
        <div class="col-span-1 flex flex-col justify-between gap-7">
            {move || match profile.get() {
                FetchState::Idle | FetchState::Loading => KINDS
                    .iter()
                    .map(|_| view! { <CardSkeleton /> }.into_view())
                    .collect_view(),
                FetchState::Failed(message) => {
                    view! { <ErrorNotice message=message /> }.into_view()
                }
                FetchState::Ready(profile) => KINDS
                    .iter()
                    .map(|kind| {
                        view! {
                            <KeyDataCard kind=*kind value=kind.value(&profile.key_data) />
                        }
                        .into_view()
                    })
                    .collect_view(),
            }}
        </div>
    }
}

/// Shown when the route's id segment is not a number
#[component]
fn InvalidUser() -> impl IntoView {
    view! {
        <main class="flex-1 flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2 text-gray-900">"Utilisateur introuvable"</h1>
            <p class="text-gray-500 mb-6">"L'identifiant demandé n'est pas valide."</p>
            <A
                href="/"
                class="px-6 py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-colors"
            >
                "Retour au tableau de bord"
            </A>
        </main>
    }
}
