// file: src/scaffold/git.rs
// version: 1.0.0
// guid: 5a9c3e17-0b64-4d28-8f5a-9c2e6b4d1f07

//! Local git repository setup
//!
//! Runs the fixed init/remote command sequences in the generated project
//! directory, asking for confirmation before each step unless running
//! non-interactively. Output streams straight to the terminal.

use crate::{error::UvinitError, ui, Result};
use colored::Colorize;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};

/// A git setup step: the command to run and what it does
pub struct GitStep {
    pub command: &'static str,
    pub description: &'static str,
}

/// Repository initialization commands
pub const GIT_INIT_STEPS: &[GitStep] = &[
    GitStep {
        command: "git init",
        description: "Initialize Git repository",
    },
    GitStep {
        command: "git add .",
        description: "Add all files to Git",
    },
    GitStep {
        command: "git commit -m \"Initial commit from simple-modern-uv\"",
        description: "Create initial commit",
    },
];

/// Remote setup commands; `{repo_url}` is substituted before running
pub const GIT_REMOTE_STEPS: &[GitStep] = &[
    GitStep {
        command: "git remote add origin {repo_url}",
        description: "Add remote repository",
    },
    GitStep {
        command: "git branch -M main",
        description: "Rename branch to main",
    },
    GitStep {
        command: "git push -u origin main",
        description: "Push to remote repository",
    },
];

/// Substitute the repo URL placeholder in a step's command
pub fn render_command(step: &GitStep, repo_url: &str) -> String {
    step.command.replace("{repo_url}", repo_url)
}

/// Run one shell command in the project directory with inherited stdio
async fn run_step(command: &str, project_dir: &Path) -> Result<()> {
    debug!("Executing: {}", command);

    let status = Command::new("bash")
        .arg("-c")
        .arg(command)
        .current_dir(project_dir)
        .status()
        .await
        .map_err(|e| UvinitError::Process {
            command: command.to_string(),
            exit_code: None,
            stderr: format!("Failed to execute command: {}", e),
        })?;

    if !status.success() {
        return Err(UvinitError::Process {
            command: command.to_string(),
            exit_code: status.code(),
            stderr: "command exited with failure (details above)".to_string(),
        });
    }

    Ok(())
}

/// Run a sequence of git steps, confirming each one with the user.
///
/// Returns Ok(false) when the user declines a step; the caller prints the
/// manual recovery instructions in that case.
pub async fn run_sequence(
    steps: &[GitStep],
    project_dir: &Path,
    repo_url: &str,
    auto_confirm: bool,
) -> Result<bool> {
    for step in steps {
        let command = render_command(step, repo_url);

        println!();
        println!("{}", format!("# {}", step.description).dimmed());
        println!("{}", command.blue().bold());

        if !ui::confirm("Run this command?", true, auto_confirm)? {
            return Ok(false);
        }

        run_step(&command, project_dir).await?;
        info!("{} completed", step.description);
    }

    Ok(true)
}

/// Print the full command list for manual setup
pub fn print_manual_instructions(repo_url: &str) {
    for step in GIT_INIT_STEPS.iter().chain(GIT_REMOTE_STEPS.iter()) {
        println!("{}", format!("# {}", step.description).dimmed());
        println!("{}", render_command(step, repo_url));
    }
}
