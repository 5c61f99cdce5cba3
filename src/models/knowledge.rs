use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Medical,
    Educational,
    General,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Medical => "Medical",
            DocumentKind::Educational => "Educational",
            DocumentKind::General => "General",
        }
    }
}

/// A reference document registered in the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagDocument {
    pub id: String,
    pub name: String,
    pub kind: DocumentKind,
    pub upload_date: String,
}

impl RagDocument {
    /// One segment of the flattened context string handed to the simulator.
    pub fn source_line(&self) -> String {
        format!("Source: {} ({})", self.name, self.kind.label())
    }
}
