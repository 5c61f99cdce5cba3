use crate::{
    error::{GatewayError, Result},
    models::GenerateContentResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Single round trip against a generative model. Every call is stateless
/// and best-effort: no retry, no caching, no coupling between calls.
#[async_trait]
pub trait GenerateContent: Send + Sync {
    async fn generate_content(
        &self,
        model_id: &str,
        payload: Value,
    ) -> Result<GenerateContentResponse>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        HttpTransport {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl GenerateContent for HttpTransport {
    async fn generate_content(
        &self,
        model_id: &str,
        payload: Value,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model_id);

        log::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| GatewayError::RequestError(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Gemini API returned {}: {}", status, error_text);
            return Err(GatewayError::ApiError(format!("{} - {}", status, error_text)));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GatewayError::ResponseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let transport = HttpTransport::new("https://example.test/v1beta/", "k");
        assert_eq!(transport.base_url, "https://example.test/v1beta");
    }
}
