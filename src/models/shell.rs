use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Substituted when the model answers without an inline image payload.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/400/400?grayscale";

/// Outcome of a shell concept generation: either the generated payload or
/// the stock placeholder. The placeholder is a valid result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageRef {
    Inline { mime_type: String, data: String },
    Placeholder,
}

impl ImageRef {
    pub fn to_uri(&self) -> String {
        match self {
            ImageRef::Inline { mime_type, data } => {
                format!("data:{};base64,{}", mime_type, data)
            }
            ImageRef::Placeholder => PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageRef::Placeholder)
    }
}

/// Preset art styles offered by the workshop screen. The gateway itself
/// accepts any style string, so new presets only touch this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellStyle {
    Cyberpunk,
    Minimalist,
    AnimeChibi,
    OrganicNature,
    PixelArt,
}

impl ShellStyle {
    pub const ALL: [ShellStyle; 5] = [
        ShellStyle::Cyberpunk,
        ShellStyle::Minimalist,
        ShellStyle::AnimeChibi,
        ShellStyle::OrganicNature,
        ShellStyle::PixelArt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShellStyle::Cyberpunk => "Cyberpunk",
            ShellStyle::Minimalist => "Minimalist",
            ShellStyle::AnimeChibi => "Anime/Chibi",
            ShellStyle::OrganicNature => "Organic/Nature",
            ShellStyle::PixelArt => "Pixel Art",
        }
    }
}

/// A generated enclosure concept as the workshop screen keeps it. Prompt,
/// style, timestamp and print status are re-attached by the caller for
/// display; the gateway only produces the image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellDesign {
    pub id: String,
    pub prompt: String,
    pub style: String,
    pub image: ImageRef,
    pub created_at: DateTime<Utc>,
    pub is_printed: bool,
}

impl ShellDesign {
    pub fn new(prompt: impl Into<String>, style: impl Into<String>, image: ImageRef) -> Self {
        ShellDesign {
            id: Uuid::new_v4().to_string(),
            prompt: prompt.into(),
            style: style.into(),
            image,
            created_at: Utc::now(),
            is_printed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_uri_is_fixed() {
        assert_eq!(ImageRef::Placeholder.to_uri(), PLACEHOLDER_IMAGE_URL);
        assert!(ImageRef::Placeholder.is_placeholder());
    }

    #[test]
    fn test_inline_uri_embeds_payload() {
        let image = ImageRef::Inline {
            mime_type: "image/png".to_string(),
            data: "Zm9v".to_string(),
        };
        assert_eq!(image.to_uri(), "data:image/png;base64,Zm9v");
        assert!(!image.is_placeholder());
    }

    #[test]
    fn test_new_design_starts_unprinted() {
        let design = ShellDesign::new("a dragon eating a burger", "Pixel Art", ImageRef::Placeholder);
        assert!(!design.is_printed);
        assert_eq!(design.style, "Pixel Art");
        assert!(!design.id.is_empty());
    }
}
