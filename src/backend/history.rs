use reqwest::Client;

use crate::{
    error::{Result, StudioError},
    models::HistoryEntry,
};

#[derive(Clone)]
pub struct HistoryClient {
    client: Client,
    base_url: String,
}

impl HistoryClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/history", self.base_url)
    }

    /// Fetches the full ordered history, newest first.
    pub async fn fetch(&self) -> Result<Vec<HistoryEntry>> {
        log::debug!("GET {}", self.endpoint());

        let response = self
            .client
            .get(self.endpoint())
            .send()
            .await
            .map_err(|e| StudioError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StudioError::ResponseError(format!(
                "history fetch failed (status {})",
                response.status()
            )));
        }

        response
            .json::<Vec<HistoryEntry>>()
            .await
            .map_err(|e| StudioError::ResponseError(format!("unreadable history: {}", e)))
    }
}
