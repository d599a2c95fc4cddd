//! Fetch Lifecycle State
//!
//! One tagged union per resource slice, transitioned only by the fetch
//! lifecycle: `Idle -> Loading -> Ready | Failed`, back to `Loading`
//! whenever the user id changes.

use std::future::Future;

use leptos::*;

use crate::api::{
    self, ActivitySession, ApiConfig, ApiError, AverageSession, PerformanceMetric, UserProfile,
};

/// Lifecycle of one fetched resource
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// User-facing failure message; names the configured base URL so a
/// misconfigured backend is diagnosable from the screen.
pub fn failure_message(config: &ApiConfig, error: &ApiError) -> String {
    format!(
        "Impossible to fetch data from {}: {}. Check that the backend is running and the endpoint is correct.",
        config.base_url, error
    )
}

/// Map a settled fetch to its terminal state
fn resolve<T>(config: &ApiConfig, result: Result<T, ApiError>) -> FetchState<T> {
    match result {
        Ok(data) => FetchState::Ready(data),
        Err(error) => FetchState::Failed(failure_message(config, &error)),
    }
}

/// A response is stale when the id it was requested for is no longer
/// the one the slice wants; stale responses must never be committed.
fn is_stale(requested_id: u32, wanted_id: u32) -> bool {
    requested_id != wanted_id
}

/// Drive one resource slice from a reactive user id.
///
/// Every id change re-enters `Loading` and spawns a fresh request. A
/// resolution is committed only while the id it was requested for is
/// still the wanted one; superseded responses are dropped rather than
/// overwriting newer state. The underlying request is not cancelled.
pub fn create_fetch_state<T, F, Fut>(user_id: Signal<u32>, fetch: F) -> ReadSignal<FetchState<T>>
where
    T: Clone + 'static,
    F: Fn(ApiConfig, u32) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let config = use_context::<ApiConfig>().expect("ApiConfig not provided");
    let (state, set_state) = create_signal(FetchState::Idle);

    create_effect(move |_| {
        let requested_id = user_id.get();
        set_state.set(FetchState::Loading);

        let config = config.clone();
        let fetch = fetch.clone();
        spawn_local(async move {
            let result = fetch(config.clone(), requested_id).await;

            if is_stale(requested_id, user_id.get_untracked()) {
                return;
            }

            if let Err(error) = &result {
                web_sys::console::error_1(
                    &format!("Fetch failed for user {requested_id}: {error}").into(),
                );
            }

            set_state.set(resolve(&config, result));
        });
    });

    state
}

/// Profile slice for one user
pub fn use_user_profile(user_id: Signal<u32>) -> ReadSignal<FetchState<UserProfile>> {
    create_fetch_state(user_id, |config, id| async move {
        api::get_user_profile(&config, id).await
    })
}

/// Daily activity slice for one user
pub fn use_user_activity(user_id: Signal<u32>) -> ReadSignal<FetchState<Vec<ActivitySession>>> {
    create_fetch_state(user_id, |config, id| async move {
        api::get_user_activity(&config, id).await
    })
}

/// Average-sessions slice for one user
pub fn use_average_sessions(user_id: Signal<u32>) -> ReadSignal<FetchState<Vec<AverageSession>>> {
    create_fetch_state(user_id, |config, id| async move {
        api::get_user_average_sessions(&config, id).await
    })
}

/// Performance slice for one user
pub fn use_user_performance(
    user_id: Signal<u32>,
) -> ReadSignal<FetchState<Vec<PerformanceMetric>>> {
    create_fetch_state(user_id, |config, id| async move {
        api::get_user_performance(&config, id).await
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            use_mock: true,
        }
    }

    #[test]
    fn resolve_maps_success_to_ready() {
        let state = resolve(&config(), Ok(7u32));
        assert_eq!(state, FetchState::Ready(7));
        assert!(!state.is_loading());
        assert_eq!(state.ready(), Some(&7));
    }

    #[test]
    fn resolve_maps_failure_to_message_with_base_url() {
        let error = ApiError::MockNotFound {
            resource: "average-sessions",
            user_id: 99,
        };
        let state: FetchState<u32> = resolve(&config(), Err(error));

        let message = state.error().expect("failed state");
        assert!(message.contains("http://localhost:3000"));
        assert!(message.contains("average-sessions"));
    }

    #[test]
    fn superseded_responses_are_stale() {
        // "12" then "18" before the first resolution: the response
        // requested for 12 must be dropped, 18's must commit.
        assert!(is_stale(12, 18));
        assert!(!is_stale(18, 18));
    }

    #[test]
    fn idle_and_loading_both_count_as_loading() {
        assert!(FetchState::<u32>::Idle.is_loading());
        assert!(FetchState::<u32>::Loading.is_loading());
        assert!(!FetchState::Ready(1u32).is_loading());
        assert!(!FetchState::<u32>::Failed(String::new()).is_loading());
    }
}
