//! API Error Types
//!
//! Typed failure kinds for the resource access layer. Every variant
//! renders to the message shown to the user by the fetch state slices.

use thiserror::Error;

/// Failure kinds surfaced by the fetcher and the access functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("request to {path} failed with status {status} {status_text}")]
    RequestFailed {
        path: String,
        status: u16,
        status_text: String,
    },

    /// Network failure or undecodable response body
    #[error("network or decode error for {path}: {detail}")]
    Transport { path: String, detail: String },

    /// Mock lookup miss for an unknown user
    #[error("no mock data for user {user_id} ({resource})")]
    MockNotFound {
        resource: &'static str,
        user_id: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_names_path_and_status() {
        let err = ApiError::RequestFailed {
            path: "/user/12/activity".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("/user/12/activity"));
        assert!(message.contains("404"));
    }

    #[test]
    fn mock_not_found_names_resource_and_user() {
        let err = ApiError::MockNotFound {
            resource: "average-sessions",
            user_id: 99,
        };
        assert_eq!(
            err.to_string(),
            "no mock data for user 99 (average-sessions)"
        );
    }
}
