use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionGameKind {
    Neck,
    Squat,
    Focus,
}

/// A desktop fitness game that can gate the snack cabinet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionGame {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_active: bool,
    pub kind: MotionGameKind,
}
