use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavioral mode for the companion voice. Closed set; devices select one,
/// they never define new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonaMode {
    #[serde(rename = "Strict Coach")]
    StrictCoach,
    #[serde(rename = "Gentle Partner")]
    GentlePartner,
    #[serde(rename = "Anime Chuuni")]
    AnimeChuuni,
}

impl PersonaMode {
    pub const ALL: [PersonaMode; 3] = [
        PersonaMode::StrictCoach,
        PersonaMode::GentlePartner,
        PersonaMode::AnimeChuuni,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PersonaMode::StrictCoach => "Strict Coach",
            PersonaMode::GentlePartner => "Gentle Partner",
            PersonaMode::AnimeChuuni => "Anime Chuuni",
        }
    }

    /// Fixed behavior guideline embedded in the system instruction.
    pub fn guidance(&self) -> &'static str {
        match self {
            PersonaMode::StrictCoach => "Be harsh, direct, demand discipline.",
            PersonaMode::GentlePartner => "Be kind, pleading, use \"we\" language.",
            PersonaMode::AnimeChuuni => {
                "Use anime tropes, fantasy language, refer to calories as \"dark energy\"."
            }
        }
    }

    /// Short description shown on the persona picker.
    pub fn tagline(&self) -> &'static str {
        match self {
            PersonaMode::StrictCoach => "Direct, demanding, discipline-focused.",
            PersonaMode::GentlePartner => "Supportive, soft-spoken, 'we' language.",
            PersonaMode::AnimeChuuni => "Fantasy metaphors, energetic, dramatic.",
        }
    }
}

impl fmt::Display for PersonaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&PersonaMode::AnimeChuuni).unwrap();
        assert_eq!(json, "\"Anime Chuuni\"");
        let back: PersonaMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PersonaMode::AnimeChuuni);
    }

    #[test]
    fn test_all_covers_every_mode() {
        assert_eq!(PersonaMode::ALL.len(), 3);
        assert_eq!(PersonaMode::StrictCoach.to_string(), "Strict Coach");
    }
}
