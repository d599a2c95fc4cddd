//! API Configuration
//!
//! Resolves the backend base URL and the mock-data switch once at startup.

/// Default API base URL, overridable at compile time
pub const DEFAULT_API_BASE: &str = match option_env!("SPORTSEE_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Whether mock mode is on by default, overridable at compile time
const DEFAULT_USE_MOCK: bool = option_env!("SPORTSEE_USE_MOCK").is_some();

const STORAGE_KEY_API_URL: &str = "sportsee_api_url";
const STORAGE_KEY_USE_MOCK: &str = "sportsee_use_mock";

/// Resolved API configuration, loaded once and passed explicitly into
/// the access layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Backend base URL, without trailing slash. May be empty when
    /// nothing is configured; consumers must tolerate that.
    pub base_url: String,
    /// When set, resource access reads the static fixtures instead of
    /// issuing network requests.
    pub use_mock: bool,
}

impl ApiConfig {
    /// Load the configuration: compile-time defaults, overridden by
    /// values persisted in local storage.
    pub fn load() -> Self {
        let base_url = read_storage(STORAGE_KEY_API_URL)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let use_mock = match read_storage(STORAGE_KEY_USE_MOCK) {
            Some(flag) => flag == "true",
            None => DEFAULT_USE_MOCK,
        };

        Self { base_url, use_mock }
    }
}

fn read_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}
