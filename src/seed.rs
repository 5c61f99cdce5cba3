//! Compiled-in seed data standing in for a backend. Fresh copies are
//! returned on every call; callers own what they get.

use crate::models::{
    DailyHealthSample, Device, DeviceStats, DeviceStatus, DocumentKind, FleetSummary,
    IntakeComparison, MotionGame, MotionGameKind, PersonaMode, RagDocument,
};

pub fn devices() -> Vec<Device> {
    vec![
        Device {
            id: "d1".to_string(),
            name: "Son's Study Device".to_string(),
            owner: "Tommy".to_string(),
            status: DeviceStatus::Online,
            battery_level: 85,
            current_persona: PersonaMode::StrictCoach,
            stats: DeviceStats { calories_today: 120, snacks_intercepted: 3 },
        },
        Device {
            id: "d2".to_string(),
            name: "Living Room Hub".to_string(),
            owner: "Mom".to_string(),
            status: DeviceStatus::Online,
            battery_level: 42,
            current_persona: PersonaMode::GentlePartner,
            stats: DeviceStats { calories_today: 450, snacks_intercepted: 1 },
        },
        Device {
            id: "d3".to_string(),
            name: "Office Monitor".to_string(),
            owner: "Dad".to_string(),
            status: DeviceStatus::Offline,
            battery_level: 12,
            current_persona: PersonaMode::AnimeChuuni,
            stats: DeviceStats { calories_today: 0, snacks_intercepted: 0 },
        },
    ]
}

pub fn knowledge_documents() -> Vec<RagDocument> {
    vec![
        RagDocument {
            id: "1".to_string(),
            name: "Diabetic_Guidelines_v2.pdf".to_string(),
            kind: DocumentKind::Medical,
            upload_date: "2023-10-24".to_string(),
        },
        RagDocument {
            id: "2".to_string(),
            name: "Kids_Nutrition_Facts.txt".to_string(),
            kind: DocumentKind::Educational,
            upload_date: "2023-10-25".to_string(),
        },
    ]
}

pub fn motion_games() -> Vec<MotionGame> {
    vec![
        MotionGame {
            id: "g1".to_string(),
            title: "Neck Defender".to_string(),
            description: "Defend against monsters by tilting your head. Reduces neck strain."
                .to_string(),
            is_active: true,
            kind: MotionGameKind::Neck,
        },
        MotionGame {
            id: "g2".to_string(),
            title: "Squat for Snacks".to_string(),
            description: "Unlock the snack cabinet only after performing 10 perfect squats."
                .to_string(),
            is_active: false,
            kind: MotionGameKind::Squat,
        },
        MotionGame {
            id: "g3".to_string(),
            title: "Focus Hand".to_string(),
            description: "Fast-paced hand gesture tracking to wake up your brain.".to_string(),
            is_active: false,
            kind: MotionGameKind::Focus,
        },
    ]
}

pub fn weekly_health() -> Vec<DailyHealthSample> {
    let rows = [
        ("Mon", 1200, 5, 15),
        ("Tue", 900, 3, 25),
        ("Wed", 1500, 8, 10),
        ("Thu", 800, 2, 45),
        ("Fri", 1100, 4, 30),
        ("Sat", 2100, 10, 5),
        ("Sun", 1800, 7, 12),
    ];

    rows.iter()
        .map(|(day, calories, snacks, motion_minutes)| DailyHealthSample {
            day: day.to_string(),
            calories: *calories,
            snacks: *snacks,
            motion_minutes: *motion_minutes,
        })
        .collect()
}

pub fn device_comparison() -> Vec<IntakeComparison> {
    vec![
        IntakeComparison {
            label: "Device A (Son)".to_string(),
            intake: 2400,
            burned: 1200,
        },
        IntakeComparison {
            label: "Device B (Daughter)".to_string(),
            intake: 1800,
            burned: 900,
        },
    ]
}

pub fn fleet_summary() -> FleetSummary {
    FleetSummary {
        snacks_avoided: 42,
        active_hours: 5.2,
        top_user: "Tommy".to_string(),
    }
}
