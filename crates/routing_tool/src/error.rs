//! Error types for the routing tool.

use routing_defs::RoutingError;

/// Failures surfaced by the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// A routing operation rejected its input
    #[error("Routing error: {0}")]
    Routing(#[from] RoutingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command argument is outside what the hardware can address
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration loaded but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
