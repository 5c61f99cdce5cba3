use serde::{Deserialize, Serialize};

/// One day of the weekly intake/motion series on the analytics screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyHealthSample {
    pub day: String,
    pub calories: u32,
    pub snacks: u32,
    pub motion_minutes: u32,
}

/// Intake versus burn for one device on the comparison chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeComparison {
    pub label: String,
    pub intake: u32,
    pub burned: u32,
}

/// Headline numbers on the family overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSummary {
    pub snacks_avoided: u32,
    pub active_hours: f32,
    pub top_user: String,
}
