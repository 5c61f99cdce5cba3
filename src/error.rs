use std::fmt;

#[derive(Debug)]
pub enum GatewayError {
    ConfigError(String),
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    ApiError(String),
    IoError(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GatewayError::RequestError(msg) => write!(f, "Request error: {}", msg),
            GatewayError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GatewayError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            GatewayError::ApiError(msg) => write!(f, "Gemini API error: {}", msg),
            GatewayError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

pub type Result<T> = std::result::Result<T, GatewayError>;
