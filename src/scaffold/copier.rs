// file: src/scaffold/copier.rs
// version: 1.0.0
// guid: f0b8d4a2-6c91-4e35-8d0f-2a7c5e9b1f63

//! Copier invocation shim
//!
//! Everything of substance (template rendering, variable substitution, file
//! generation) is owned by copier. This module only resolves how to launch
//! it, builds the argument vector, and relays the interactive session and
//! exit status back to the caller. No validation, no retries, no
//! translation: a copier failure is our failure, reported verbatim.

use crate::{error::UvinitError, Result};
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};

/// The public template repository used when no override is given
pub const DEFAULT_TEMPLATE: &str = "gh:jlevy/simple-modern-uv";

/// A single copier invocation: template source, destination, and the
/// pass-through options copier understands.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub template: String,
    pub destination: String,
    pub answers_file: Option<String>,
    pub data: Vec<(String, String)>,
    pub defaults: bool,
}

impl CopyRequest {
    pub fn new(template: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            destination: destination.into(),
            answers_file: None,
            data: Vec::new(),
            defaults: false,
        }
    }

    /// Build the argument vector handed to the copier launcher
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["copy".to_string()];

        for (key, value) in &self.data {
            args.push("--data".to_string());
            args.push(format!("{}={}", key, value));
        }

        if let Some(answers_file) = &self.answers_file {
            args.push("--answers-file".to_string());
            args.push(answers_file.clone());
        }

        if self.defaults {
            args.push("--defaults".to_string());
        }

        args.push(self.template.clone());
        args.push(self.destination.clone());
        args
    }
}

/// Resolve how to launch copier.
///
/// Prefers a copier on PATH; otherwise falls back to `uvx copier`, which
/// fetches and runs copier without prior installation.
pub fn resolve_launcher() -> Result<Vec<String>> {
    if which::which("copier").is_ok() {
        debug!("Using copier from PATH");
        return Ok(vec!["copier".to_string()]);
    }

    if which::which("uvx").is_ok() {
        debug!("copier not on PATH, launching via uvx");
        return Ok(vec!["uvx".to_string(), "copier".to_string()]);
    }

    Err(UvinitError::launcher(
        "Neither copier nor uvx found on PATH. \
         Install uv (https://docs.astral.sh/uv/) or copier and try again.",
    ))
}

/// Template defaults derived from the destination directory name:
/// kebab-case for the package name, snake_case for the module name.
pub fn default_template_data(destination: &str) -> Vec<(String, String)> {
    let project_name = Path::new(destination)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.to_string());

    let joined: Vec<&str> = project_name.split_whitespace().collect();
    let package_name = joined.join("-").replace('_', "-");
    let package_module = joined.join("").replace('-', "_");

    vec![
        ("package_name".to_string(), package_name),
        ("package_module".to_string(), package_module),
    ]
}

/// Human-readable form of the full invocation, for display and errors
pub fn display_command(launcher: &[String], args: &[String]) -> String {
    launcher
        .iter()
        .chain(args.iter())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run copier with inherited stdio so its interactive prompts reach the
/// user's terminal directly. Relays the exit status: a non-zero copier
/// exit becomes a [`UvinitError::Process`] carrying the same code.
pub async fn run_copy(request: &CopyRequest) -> Result<()> {
    let launcher = resolve_launcher()?;
    let args = request.to_args();
    let command_line = display_command(&launcher, &args);

    info!("Running: {}", command_line);

    let status = Command::new(&launcher[0])
        .args(&launcher[1..])
        .args(&args)
        .status()
        .await
        .map_err(|e| UvinitError::Process {
            command: command_line.clone(),
            exit_code: None,
            stderr: format!("Failed to spawn copier: {}", e),
        })?;

    if !status.success() {
        return Err(UvinitError::Process {
            command: command_line,
            exit_code: status.code(),
            stderr: "copier exited with failure (details above)".to_string(),
        });
    }

    Ok(())
}
