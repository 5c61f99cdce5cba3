use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct TextGenerationRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub max_tokens: Option<i32>,
    pub temperature: Option<f32>,
    pub model_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextGenerationResponse {
    pub text: String,
    pub model: String,
}
