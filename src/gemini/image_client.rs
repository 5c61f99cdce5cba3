use crate::{
    config::DEFAULT_IMAGE_MODEL,
    error::Result,
    gemini::transport::GenerateContent,
    models::{ImageGenerationRequest, ImageGenerationResponse, ImageRef},
};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct ImageClient {
    transport: Arc<dyn GenerateContent>,
}

impl ImageClient {
    pub fn new(transport: Arc<dyn GenerateContent>) -> Self {
        Self { transport }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![("gemini-2.5-flash-image", "Gemini 2.5 Flash Image", "Google")]
    }

    pub async fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        let model_id = request.model_id.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL);

        let payload = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": request.prompt }]
                }
            ]
        });

        log::info!("Generating image with model: {}", model_id);

        let response = self.transport.generate_content(model_id, payload).await?;

        // The model usually answers with an inline payload; when it does not,
        // the placeholder stands in rather than failing the call.
        let image = match response.first_inline_image() {
            Some(inline) => ImageRef::Inline {
                mime_type: inline.mime_type.clone(),
                data: inline.data.clone(),
            },
            None => {
                log::warn!("No inline image in response from {}", model_id);
                ImageRef::Placeholder
            }
        };

        Ok(ImageGenerationResponse {
            image,
            model: model_id.to_string(),
        })
    }
}
