// file: src/error.rs
// version: 1.0.0
// guid: 3f8a1c2e-9b4d-4f61-8a2e-5c7d0e9f1a3b

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, UvinitError>;

/// Error types for uvinit
#[derive(Error, Debug)]
pub enum UvinitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Command '{command}' failed{}: {stderr}",
        .exit_code.map(|c| format!(" with exit code {}", c)).unwrap_or_default())]
    Process {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Launcher error: {0}")]
    Launcher(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Cancelled by user")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl UvinitError {
    /// Create a new launcher error
    pub fn launcher(msg: impl Into<String>) -> Self {
        Self::Launcher(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new prompt error
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }

    /// Create a new other error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Exit code for the process when this error reaches main.
    ///
    /// A failure of the wrapped tool is a failure of this tool: copier's
    /// exit status is relayed verbatim. Everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Process {
                exit_code: Some(code),
                ..
            } => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_relays_child_exit_code() {
        let err = UvinitError::Process {
            command: "copier copy".to_string(),
            exit_code: Some(42),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.exit_code(), 42);
    }

    #[test]
    fn test_process_error_without_code_maps_to_one() {
        let err = UvinitError::Process {
            command: "copier copy".to_string(),
            exit_code: None,
            stderr: "killed by signal".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_internal_errors_map_to_one() {
        assert_eq!(UvinitError::Cancelled.exit_code(), 1);
        assert_eq!(UvinitError::config("bad").exit_code(), 1);
        assert_eq!(UvinitError::launcher("missing").exit_code(), 1);
    }

    #[test]
    fn test_process_error_display_includes_exit_code() {
        let err = UvinitError::Process {
            command: "git push".to_string(),
            exit_code: Some(128),
            stderr: "remote not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git push"));
        assert!(msg.contains("128"));
        assert!(msg.contains("remote not found"));
    }
}
