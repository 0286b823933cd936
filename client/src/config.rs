const DEFAULT_BASE_URL: &str = "http://localhost:54321";
const DEFAULT_API_KEY: &str = "dev-anon-key";

/// Connection settings for the hosted backend. The api key rides every
/// request as the `apikey` header; authenticated requests add a bearer token
/// on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Compile-time configuration with localhost defaults for development.
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("FINBOOK_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            api_key: option_env!("FINBOOK_API_KEY")
                .unwrap_or(DEFAULT_API_KEY)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_falls_back_to_localhost() {
        let config = Config::from_env();
        assert!(!config.base_url.is_empty());
        assert!(!config.api_key.is_empty());
    }
}
