use std::env;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub text_model: Option<String>,
    pub image_model: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            base_url: None,
            text_model: None,
            image_model: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok();
        let base_url = env::var("GEMINI_BASE_URL").ok();
        let text_model = env::var("GEMINI_TEXT_MODEL").ok();
        let image_model = env::var("GEMINI_IMAGE_MODEL").ok();

        GeminiConfig {
            api_key,
            base_url,
            text_model,
            image_model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_text_model(mut self, model_id: impl Into<String>) -> Self {
        self.text_model = Some(model_id.into());
        self
    }

    pub fn with_image_model(mut self, model_id: impl Into<String>) -> Self {
        self.image_model = Some(model_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = GeminiConfig::new()
            .with_api_key("test-key")
            .with_text_model("gemini-2.5-pro");

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.text_model.as_deref(), Some("gemini-2.5-pro"));
        assert!(config.base_url.is_none());
        assert!(config.image_model.is_none());
    }

    #[test]
    fn test_defaults_are_empty() {
        let config = GeminiConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
    }
}
