use serde::{Deserialize, Serialize};

/// Response envelope returned by `models/{id}:generateContent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(rename = "finishReason", skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A single content part; carries either text or inline binary data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// First inline payload found anywhere in the first candidate.
    pub fn first_inline_image(&self) -> Option<&InlineData> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.inline_data.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(parts: Vec<Part>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content { parts, role: Some("model".to_string()) }),
                finish_reason: Some("STOP".to_string()),
            }],
        }
    }

    #[test]
    fn test_text_concatenates_parts() {
        let response = envelope(vec![
            Part { text: Some("Put ".to_string()), ..Default::default() },
            Part { text: Some("it down.".to_string()), ..Default::default() },
        ]);
        assert_eq!(response.text(), "Put it down.");
    }

    #[test]
    fn test_text_empty_for_no_candidates() {
        let response = GenerateContentResponse::default();
        assert_eq!(response.text(), "");
        assert!(response.first_inline_image().is_none());
    }

    #[test]
    fn test_first_inline_image_skips_text_parts() {
        let response = envelope(vec![
            Part { text: Some("Here you go".to_string()), ..Default::default() },
            Part {
                inline_data: Some(InlineData {
                    mime_type: "image/png".to_string(),
                    data: "aGVsbG8=".to_string(),
                }),
                ..Default::default()
            },
        ]);
        let inline = response.first_inline_image().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "aGVsbG8=");
    }

    #[test]
    fn test_deserializes_wire_field_names() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"inlineData": {"mimeType": "image/png", "data": "Zm9v"}}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_inline_image().unwrap().data, "Zm9v");
    }
}
