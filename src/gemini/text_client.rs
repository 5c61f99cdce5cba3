use crate::{
    config::DEFAULT_TEXT_MODEL,
    error::Result,
    gemini::transport::GenerateContent,
    models::{TextGenerationRequest, TextGenerationResponse},
};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct TextClient {
    transport: Arc<dyn GenerateContent>,
}

impl TextClient {
    pub fn new(transport: Arc<dyn GenerateContent>) -> Self {
        Self { transport }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("gemini-2.5-flash", "Gemini 2.5 Flash", "Google"),
            ("gemini-2.5-pro", "Gemini 2.5 Pro", "Google"),
        ]
    }

    pub async fn generate(&self, request: TextGenerationRequest) -> Result<TextGenerationResponse> {
        let model_id = request.model_id.as_deref().unwrap_or(DEFAULT_TEXT_MODEL);

        let payload = build_request_payload(&request);

        log::info!("Invoking model: {}", model_id);
        log::debug!("Text generation request payload: {}", payload);

        let response = self.transport.generate_content(model_id, payload).await?;

        Ok(TextGenerationResponse {
            text: response.text(),
            model: model_id.to_string(),
        })
    }
}

fn build_request_payload(request: &TextGenerationRequest) -> Value {
    let mut payload = json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }
        ]
    });

    if let Some(instruction) = &request.system_instruction {
        payload["systemInstruction"] = json!({
            "parts": [{ "text": instruction }]
        });
    }

    let mut generation_config = serde_json::Map::new();
    if let Some(max_tokens) = request.max_tokens {
        generation_config.insert("maxOutputTokens".to_string(), json!(max_tokens));
    }
    if let Some(temperature) = request.temperature {
        generation_config.insert("temperature".to_string(), json!(temperature));
    }
    if !generation_config.is_empty() {
        payload["generationConfig"] = Value::Object(generation_config);
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> TextGenerationRequest {
        TextGenerationRequest {
            prompt: prompt.to_string(),
            system_instruction: None,
            max_tokens: None,
            temperature: None,
            model_id: None,
        }
    }

    #[test]
    fn test_payload_carries_prompt_as_user_turn() {
        let payload = build_request_payload(&request("hello there"));
        assert_eq!(payload["contents"][0]["role"], "user");
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "hello there");
        assert!(payload.get("systemInstruction").is_none());
        assert!(payload.get("generationConfig").is_none());
    }

    #[test]
    fn test_payload_includes_instruction_and_cap() {
        let mut req = request("act");
        req.system_instruction = Some("be terse".to_string());
        req.max_tokens = Some(150);

        let payload = build_request_payload(&req);
        assert_eq!(payload["systemInstruction"]["parts"][0]["text"], "be terse");
        assert_eq!(payload["generationConfig"]["maxOutputTokens"], 150);
    }
}
