pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod seed;
pub mod state;

pub use config::GeminiConfig;
pub use error::{GatewayError, Result};
pub use gemini::{GeminiClient, ImageClient, TextClient};
pub use models::*;
