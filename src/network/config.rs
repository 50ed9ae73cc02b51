/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin: an empty base makes every route root-relative
    /// (`/session/...`), which is what the panel uses when it is served by
    /// the backend itself.
    fn default() -> Self {
        Self { base_url: String::new() }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL build-time environment variable
    pub fn new() -> Result<Self, &'static str> {
        match option_env!("API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Ok(Self::from_url(url)),
            _ => Err("API_BASE_URL environment variable is not set"),
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    /// `GET` route for a session.  `encoded_key` must already be a safe path
    /// segment.
    pub fn session_url(&self, encoded_key: &str) -> String {
        format!("{}/session/{}", self.base_url, encoded_key)
    }

    /// `POST` route for a session action.
    pub fn session_action_url(&self, encoded_key: &str, action: &str) -> String {
        format!("{}/session/{}/{}", self.base_url, encoded_key, action)
    }
}
