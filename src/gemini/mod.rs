pub mod image_client;
pub mod text_client;
pub mod transport;

use crate::{
    config::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL},
    error::{GatewayError, Result},
    models::{ImageGenerationRequest, ImageRef, PersonaMode, TextGenerationRequest},
};
use std::sync::Arc;

pub use image_client::ImageClient;
pub use text_client::TextClient;
pub use transport::{GenerateContent, HttpTransport};

/// Substituted when the simulator round trip succeeds but yields no text.
pub const PERSONA_FALLBACK_TEXT: &str = "Connection to neural core unstable...";

/// Output cap for simulator replies.
pub const PERSONA_MAX_OUTPUT_TOKENS: i32 = 150;

#[derive(Clone)]
pub struct GeminiClient {
    text_client: TextClient,
    image_client: ImageClient,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    /// Fails with `ConfigError` when no API key is configured; nothing is
    /// sent over the network before that check.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| GatewayError::ConfigError("Gemini API key is required".into()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let transport: Arc<dyn GenerateContent> = Arc::new(HttpTransport::new(base_url, api_key));
        Ok(Self::with_transport(transport, config))
    }

    /// Builds a client over an already-authenticated transport.
    pub fn with_transport(transport: Arc<dyn GenerateContent>, config: GeminiConfig) -> Self {
        GeminiClient {
            text_client: TextClient::new(transport.clone()),
            image_client: ImageClient::new(transport),
            text_model: config
                .text_model
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: config
                .image_model
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
        }
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    /// Renders a shell concept for the workshop screen. The composed prompt
    /// pins the hardware constraint so the cavity survives any style. A
    /// response without an inline image resolves to the placeholder
    /// reference; transport and API failures propagate.
    pub async fn generate_shell_concept(&self, prompt: &str, style: &str) -> Result<ImageRef> {
        let request = ImageGenerationRequest {
            prompt: compose_shell_prompt(prompt, style),
            model_id: Some(self.image_model.clone()),
        };

        let response = self.image_client.generate(request).await?;
        Ok(response.image)
    }

    /// Runs one persona simulation turn. An empty reply resolves to the
    /// fixed fallback text; transport and API failures propagate, same as
    /// the image path.
    pub async fn simulate_persona_response(
        &self,
        persona: PersonaMode,
        user_action: &str,
        rag_context: &str,
    ) -> Result<String> {
        let request = TextGenerationRequest {
            prompt: compose_action_turn(user_action),
            system_instruction: Some(compose_persona_instruction(persona, rag_context)),
            max_tokens: Some(PERSONA_MAX_OUTPUT_TOKENS),
            temperature: None,
            model_id: Some(self.text_model.clone()),
        };

        let response = self.text_client.generate(request).await?;

        if response.text.trim().is_empty() {
            log::warn!("Empty simulator reply from {}", response.model);
            return Ok(PERSONA_FALLBACK_TEXT.to_string());
        }

        Ok(response.text)
    }
}

/// Instruction sent to the image model. Keeps the central cavity for the
/// core capsule in every generated design.
pub fn compose_shell_prompt(prompt: &str, style: &str) -> String {
    format!(
        "Design a 3D printable outer shell for a smart home device called 'MindfulBite'.\n\
         The core device is a standard black cylinder (approx 8cm tall).\n\
         The shell must enclose this cylinder but leave a hollow cavity in the center for the hardware.\n\
         \n\
         Style: {}\n\
         User Description: {}\n\
         \n\
         The image should look like a high-quality 3D render or product photo.\n\
         Show the object clearly on a clean background.\n\
         Make it look like a trendy art toy.",
        style, prompt
    )
}

/// System instruction for the simulator: companion identity, the guideline
/// block for every mode, and the flattened knowledge-base context.
pub fn compose_persona_instruction(persona: PersonaMode, rag_context: &str) -> String {
    let guidelines = PersonaMode::ALL
        .iter()
        .map(|mode| format!("- {}: {}", mode.label(), mode.guidance()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are MindfulBite, an AI health companion.\n\
         Your personality mode is currently set to: {}.\n\
         \n\
         Behavior Guidelines:\n\
         {}\n\
         \n\
         Context from Knowledge Base (RAG): {}",
        persona.label(),
        guidelines,
        rag_context
    )
}

pub fn compose_action_turn(user_action: &str) -> String {
    format!("The user just attempted to: {}. React immediately.", user_action)
}
