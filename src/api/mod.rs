//! API Layer
//!
//! Configuration, the generic HTTP fetcher, the mock fixture provider,
//! and one access function per user resource.

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod user;

pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    ActivitySession, AverageSession, KeyData, PerformanceMetric, UserInfos, UserProfile,
};
pub use user::{
    get_user_activity, get_user_average_sessions, get_user_performance, get_user_profile,
};
