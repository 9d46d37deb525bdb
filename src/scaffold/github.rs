// file: src/scaffold/github.rs
// version: 1.0.0
// guid: 8e4b0d26-7a13-4f59-b8e4-0d2c6a9f3b71

//! GitHub remote URL construction and optional gh CLI repo creation

use crate::{error::UvinitError, utils::SystemUtils, Result};
use std::path::Path;
use tokio::process::Command;
use tracing::info;

/// Protocol used for the git remote URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitProtocol {
    Ssh,
    Https,
}

impl GitProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ssh => "ssh",
            Self::Https => "https",
        }
    }
}

/// Build the GitHub remote URL for an organization and package name
pub fn repo_url(org: &str, name: &str, protocol: GitProtocol) -> String {
    match protocol {
        GitProtocol::Ssh => format!("git@github.com:{}/{}.git", org, name),
        GitProtocol::Https => format!("https://github.com/{}/{}.git", org, name),
    }
}

/// Create the remote repository with the gh CLI.
///
/// Repository creation mechanics are owned by gh; we only invoke it and
/// relay its status. Private by default.
pub async fn create_repo_with_gh(
    org: &str,
    name: &str,
    is_public: bool,
    project_dir: &Path,
) -> Result<()> {
    if !SystemUtils::command_exists("gh") {
        return Err(UvinitError::launcher(
            "gh CLI not found on PATH. Create the repository manually at \
             https://github.com/new or install gh (https://cli.github.com/).",
        ));
    }

    let visibility = if is_public { "--public" } else { "--private" };
    let repo = format!("{}/{}", org, name);
    let command_line = format!("gh repo create {} {}", repo, visibility);

    info!("Running: {}", command_line);

    let status = Command::new("gh")
        .args(["repo", "create", &repo, visibility])
        .current_dir(project_dir)
        .status()
        .await
        .map_err(|e| UvinitError::Process {
            command: command_line.clone(),
            exit_code: None,
            stderr: format!("Failed to spawn gh: {}", e),
        })?;

    if !status.success() {
        return Err(UvinitError::Process {
            command: command_line,
            exit_code: status.code(),
            stderr: "gh exited with failure (details above)".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_url_ssh() {
        assert_eq!(
            repo_url("example-org", "my-proj", GitProtocol::Ssh),
            "git@github.com:example-org/my-proj.git"
        );
    }

    #[test]
    fn test_repo_url_https() {
        assert_eq!(
            repo_url("example-org", "my-proj", GitProtocol::Https),
            "https://github.com/example-org/my-proj.git"
        );
    }

    #[test]
    fn test_protocol_as_str() {
        assert_eq!(GitProtocol::Ssh.as_str(), "ssh");
        assert_eq!(GitProtocol::Https.as_str(), "https");
    }
}
