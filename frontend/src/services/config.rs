/// Runtime settings for the booking frontend
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Reservation API base, without trailing slash
    pub api_url: String,
    pub enable_debug_logging: bool,
}

const DEFAULT_API_URL: &str = "http://localhost:8000";

impl AppConfig {
    /// Reads `API_URL` at build time
    pub fn from_build_env() -> Self {
        Self::with_api_url(option_env!("API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(api_url: &str) -> Self {
        let api_url = api_url.trim().trim_end_matches('/');
        Self {
            api_url: if api_url.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                api_url.to_string()
            },
            enable_debug_logging: cfg!(debug_assertions),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::with_api_url("https://booking.example.com/api/");
        assert_eq!(config.api_url, "https://booking.example.com/api");
    }

    #[wasm_bindgen_test]
    fn test_blank_url_falls_back() {
        let config = AppConfig::with_api_url("  ");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
