pub mod generate;
pub mod history;

use reqwest::{Client, ClientBuilder};

use crate::{
    config::BackendConfig,
    error::{Result, StudioError},
};

pub use generate::GenerateClient;
pub use history::HistoryClient;

/// Strips the trailing slash so endpoint paths join uniformly.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Facade over the two backend endpoints. One HTTP transport is built from
/// the configuration and shared by the per-endpoint clients.
#[derive(Clone)]
pub struct StudioClient {
    generate_client: GenerateClient,
    history_client: HistoryClient,
}

impl StudioClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client: Client = ClientBuilder::new()
            .timeout(config.timeout())
            .build()
            .map_err(|e| StudioError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        let base_url = normalize_base_url(config.base_url());

        Ok(Self {
            generate_client: GenerateClient::new(client.clone(), base_url.clone()),
            history_client: HistoryClient::new(client, base_url),
        })
    }

    pub fn generation(&self) -> &GenerateClient {
        &self.generate_client
    }

    pub fn history(&self) -> &HistoryClient {
        &self.history_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(
            normalize_base_url("http://127.0.0.1:5001/"),
            "http://127.0.0.1:5001"
        );
        assert_eq!(
            normalize_base_url(" http://127.0.0.1:5001 "),
            "http://127.0.0.1:5001"
        );
        assert_eq!(
            normalize_base_url("http://127.0.0.1:5001"),
            "http://127.0.0.1:5001"
        );
    }
}
