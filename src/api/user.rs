//! User Resource Access
//!
//! One function per resource, binding its endpoint template to the
//! generic fetcher or, in mock mode, to the fixture tables. This is
//! the only layer that sees the `{data: ...}` envelope; callers get
//! the canonical inner shapes.

use super::client::fetch_resource;
use super::config::ApiConfig;
use super::error::ApiError;
use super::mock;
use super::models::{
    ActivitySession, ApiEnvelope, AverageSession, PerformanceMetric, UserActivity,
    UserAverageSessions, UserPerformance, UserProfile,
};

/// Fetch the profile record for one user
pub async fn get_user_profile(config: &ApiConfig, id: u32) -> Result<UserProfile, ApiError> {
    if config.use_mock {
        return mock::user_profile(id).ok_or(ApiError::MockNotFound {
            resource: "user",
            user_id: id,
        });
    }

    let envelope: ApiEnvelope<UserProfile> =
        fetch_resource(config, &format!("/user/{id}")).await?;
    Ok(envelope.data)
}

/// Fetch one week of daily activity for one user
pub async fn get_user_activity(
    config: &ApiConfig,
    id: u32,
) -> Result<Vec<ActivitySession>, ApiError> {
    if config.use_mock {
        return mock::activity_sessions(id).ok_or(ApiError::MockNotFound {
            resource: "activity",
            user_id: id,
        });
    }

    let envelope: ApiEnvelope<UserActivity> =
        fetch_resource(config, &format!("/user/{id}/activity")).await?;
    Ok(envelope.data.sessions)
}

/// Fetch the average session length per weekday for one user
pub async fn get_user_average_sessions(
    config: &ApiConfig,
    id: u32,
) -> Result<Vec<AverageSession>, ApiError> {
    if config.use_mock {
        return mock::average_sessions(id).ok_or(ApiError::MockNotFound {
            resource: "average-sessions",
            user_id: id,
        });
    }

    let envelope: ApiEnvelope<UserAverageSessions> =
        fetch_resource(config, &format!("/user/{id}/average-sessions")).await?;
    Ok(envelope.data.sessions)
}

/// Fetch the per-category performance scores for one user
pub async fn get_user_performance(
    config: &ApiConfig,
    id: u32,
) -> Result<Vec<PerformanceMetric>, ApiError> {
    if config.use_mock {
        return mock::performance(id).ok_or(ApiError::MockNotFound {
            resource: "performance",
            user_id: id,
        });
    }

    let envelope: ApiEnvelope<UserPerformance> =
        fetch_resource(config, &format!("/user/{id}/performance")).await?;
    Ok(envelope.data.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_config() -> ApiConfig {
        ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            use_mock: true,
        }
    }

    // Mock-mode access resolves synchronously, so the futures can be
    // polled to completion on the host without a browser runtime.
    fn block_on<T>(future: impl std::future::Future<Output = T>) -> T {
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn noop_raw_waker() -> RawWaker {
            fn clone(_: *const ()) -> RawWaker {
                noop_raw_waker()
            }
            fn noop(_: *const ()) {}
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
        let mut context = Context::from_waker(&waker);
        let mut future = Box::pin(future);
        match future.as_mut().poll(&mut context) {
            Poll::Ready(value) => value,
            Poll::Pending => panic!("mock-mode future should resolve immediately"),
        }
    }

    #[test]
    fn mock_mode_returns_fixture_data() {
        let config = mock_config();

        let profile = block_on(get_user_profile(&config, 12)).unwrap();
        assert_eq!(profile.user_infos.first_name, "Karl");

        let sessions = block_on(get_user_activity(&config, 18)).unwrap();
        assert_eq!(sessions.len(), 7);
    }

    #[test]
    fn mock_miss_is_not_found_with_resource_context() {
        let config = mock_config();

        let err = block_on(get_user_average_sessions(&config, 99)).unwrap_err();
        assert_eq!(
            err,
            ApiError::MockNotFound {
                resource: "average-sessions",
                user_id: 99,
            }
        );
    }
}
