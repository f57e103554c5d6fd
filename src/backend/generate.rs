use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{Result, StudioError},
    models::GenerationRequest,
};

/// Response body of the generation endpoint. The backend signals failure
/// through the body (`error`) alongside a 400/500 status; interpretation is
/// body-driven so an `image` field always wins.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    image: Option<String>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct GenerateClient {
    client: Client,
    base_url: String,
}

impl GenerateClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Submits a generation request and returns the image payload string.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        log::debug!(
            "POST {} (style: {}, aspect_ratio: {})",
            self.endpoint(),
            request.style,
            request.aspect_ratio
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|e| StudioError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| StudioError::ResponseError(format!("unreadable body: {}", e)))?;

        if let Some(image) = body.image {
            return Ok(image);
        }

        let message = body
            .error
            .unwrap_or_else(|| format!("backend returned no image (status {})", status));
        Err(StudioError::GenerationError(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AspectRatio, PromptForm, Style};

    fn request() -> GenerationRequest {
        GenerationRequest::from_form(
            &PromptForm::new("a lighthouse in a storm")
                .with_style(Style::Cinematic)
                .with_aspect_ratio(AspectRatio::Landscape),
        )
        .unwrap()
    }

    fn client_for(server: &mockito::ServerGuard) -> GenerateClient {
        GenerateClient::new(Client::new(), server.url())
    }

    #[tokio::test]
    async fn image_body_wins() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"image": "data:image/png;base64,AAA="}"#)
            .create_async()
            .await;

        let image = client_for(&server).generate(&request()).await.unwrap();
        assert_eq!(image, "data:image/png;base64,AAA=");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_body_becomes_generation_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(500)
            .with_body(r#"{"error": "quota exceeded"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(&request())
            .await
            .unwrap_err();
        assert_eq!(err.server_message(), Some("quota exceeded"));
    }

    #[tokio::test]
    async fn empty_body_reports_missing_image() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, StudioError::GenerationError(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_a_response_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, StudioError::ResponseError(_)));
    }
}
