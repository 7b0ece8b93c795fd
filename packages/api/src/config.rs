//! Deployment configuration for the registration API.

/// Where the remote Registration API lives.
///
/// The base URL is baked in at build time from `CONFERENCE_API_URL`. When it
/// is missing the app does not fall back to building malformed URLs: the
/// provider logs the error once and every controller refuses to issue
/// requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read the base URL from the compile-time environment.
    pub fn from_env() -> Result<Self, String> {
        match option_env!("CONFERENCE_API_URL") {
            Some(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => Err("CONFERENCE_API_URL not set".to_string()),
        }
    }

    /// Build a config from an explicit base URL, normalizing trailing slashes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(ApiConfig::new("https://api.example.com/").base_url, "https://api.example.com");
        assert_eq!(ApiConfig::new("https://api.example.com///").base_url, "https://api.example.com");
        assert_eq!(ApiConfig::new("https://api.example.com").base_url, "https://api.example.com");
    }
}
