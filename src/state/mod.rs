//! Per-screen state stores. Each screen owns one state struct mutated only
//! through its action enum, so every transition goes through `apply`.

pub mod motion;
pub mod persona;
pub mod workshop;

pub use motion::{MotionAction, MotionHub};
pub use persona::{PersonaAction, PersonaEngine};
pub use workshop::{ShellWorkshop, WorkshopAction};
