use crate::models::{DocumentKind, PersonaMode, RagDocument};
use chrono::Utc;
use uuid::Uuid;

pub const DEFAULT_SIM_ACTION: &str = "reaching for a chocolate bar";

/// Persona configuration screen plus its simulator panel.
#[derive(Debug, Clone)]
pub struct PersonaEngine {
    pub active_persona: PersonaMode,
    pub documents: Vec<RagDocument>,
    pub sim_action: String,
    pub last_response: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PersonaAction {
    SelectPersona(PersonaMode),
    AddDocument { name: String, kind: DocumentKind },
    RemoveDocument(String),
    SetSimAction(String),
    RecordResponse(String),
}

impl PersonaEngine {
    pub fn new(documents: Vec<RagDocument>) -> Self {
        PersonaEngine {
            active_persona: PersonaMode::StrictCoach,
            documents,
            sim_action: DEFAULT_SIM_ACTION.to_string(),
            last_response: None,
        }
    }

    /// Flattened context string handed verbatim to the simulator, one
    /// `Source: <name> (<kind>)` segment per registered document.
    pub fn rag_context(&self) -> String {
        self.documents
            .iter()
            .map(|doc| doc.source_line())
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn apply(&mut self, action: PersonaAction) {
        match action {
            PersonaAction::SelectPersona(mode) => self.active_persona = mode,
            PersonaAction::AddDocument { name, kind } => {
                self.documents.push(RagDocument {
                    id: Uuid::new_v4().to_string(),
                    name,
                    kind,
                    upload_date: Utc::now().date_naive().to_string(),
                });
            }
            PersonaAction::RemoveDocument(id) => self.documents.retain(|d| d.id != id),
            PersonaAction::SetSimAction(action) => self.sim_action = action,
            PersonaAction::RecordResponse(text) => self.last_response = Some(text),
        }
    }
}
