// file: src/utils/system.rs
// version: 1.0.0
// guid: e8f2a4c6-5b19-4d72-93e8-1a6c4b0d7f25

//! System utility functions

/// External tools uvinit strictly requires. The template copy falls back
/// from copier to `uvx copier`, and gh is optional, so only git is listed.
pub const REQUIRED_COMMANDS: &[&str] = &["git"];

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Check prerequisites and return the missing required commands
    pub fn check_prerequisites() -> Vec<String> {
        REQUIRED_COMMANDS
            .iter()
            .filter(|cmd| !Self::command_exists(cmd))
            .map(|cmd| cmd.to_string())
            .collect()
    }
}
