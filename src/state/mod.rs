//! State Management
//!
//! Per-resource fetch lifecycle slices.

pub mod fetch;

pub use fetch::{
    use_average_sessions, use_user_activity, use_user_performance, use_user_profile, FetchState,
};
