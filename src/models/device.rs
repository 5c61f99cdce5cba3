use crate::models::persona::PersonaMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    Online,
    Offline,
    Charging,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceStats {
    pub calories_today: u32,
    pub snacks_intercepted: u32,
}

/// One registered MindfulBite core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub status: DeviceStatus,
    pub battery_level: u8,
    pub current_persona: PersonaMode,
    pub stats: DeviceStats,
}

impl Device {
    pub fn is_online(&self) -> bool {
        self.status == DeviceStatus::Online
    }

    /// Threshold used by the overview card to flag the battery readout.
    pub fn battery_low(&self) -> bool {
        self.battery_level < 20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_flag_threshold() {
        let mut device = Device {
            id: "d9".to_string(),
            name: "Test".to_string(),
            owner: "Nobody".to_string(),
            status: DeviceStatus::Charging,
            battery_level: 20,
            current_persona: PersonaMode::StrictCoach,
            stats: DeviceStats { calories_today: 0, snacks_intercepted: 0 },
        };
        assert!(!device.battery_low());
        assert!(!device.is_online());

        device.battery_level = 19;
        assert!(device.battery_low());
    }
}
