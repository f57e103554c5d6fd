use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Reads an env var and strips accidental surrounding quotes that tend to
/// sneak in from hand-edited .env files.
fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| {
        value
            .trim()
            .trim_matches('"')
            .trim_matches('\'')
            .to_string()
    })
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            base_url: None,
            timeout_secs: None,
            output_dir: None,
        }
    }
}

impl BackendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env_string("PIXELMASTER_BASE_URL");
        let timeout_secs = env_string("PIXELMASTER_TIMEOUT_SECS").and_then(|s| s.parse().ok());
        let output_dir = env_string("PIXELMASTER_OUTPUT_DIR");

        BackendConfig {
            base_url,
            timeout_secs,
            output_dir,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = BackendConfig::new();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.output_dir(), ".");
    }

    #[test]
    fn builders_override_defaults() {
        let config = BackendConfig::new()
            .with_base_url("http://10.0.0.2:8080")
            .with_timeout_secs(5)
            .with_output_dir("renders");
        assert_eq!(config.base_url(), "http://10.0.0.2:8080");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.output_dir(), "renders");
    }

    #[test]
    fn env_values_are_unquoted() {
        env::set_var("PIXELMASTER_TEST_QUOTED", "\"http://localhost:9999\"");
        assert_eq!(
            env_string("PIXELMASTER_TEST_QUOTED").as_deref(),
            Some("http://localhost:9999")
        );
        env::remove_var("PIXELMASTER_TEST_QUOTED");
    }
}
