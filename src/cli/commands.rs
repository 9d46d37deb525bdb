// file: src/cli/commands.rs
// version: 1.0.0
// guid: 9a5c1e73-8d26-4f04-b9a5-c1e738d264f0

//! Command implementations for the CLI

use crate::{
    cli::args::CreateArgs,
    error::UvinitError,
    migrate::{self, recommendations},
    scaffold::{answers, copier, git, github, CopyRequest},
    ui,
    utils::SystemUtils,
    Result,
};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Run the full project creation workflow: copy the template, confirm the
/// GitHub repository, and initialize the local git repository.
pub async fn create_command(args: CreateArgs) -> Result<()> {
    let user_data = parse_data_args(&args.data);

    if !args.yes {
        ui::print_rule("What is uvinit?");
        println!("{}", ui::readme_text());
    }

    ui::print_rule("Step 1 of 3: Copy the project template");

    let project_path = copy_template(&args, user_data).await?;
    ui::print_success("Project created successfully");
    println!();
    println!(
        "Your project directory is now ready: {}",
        project_path.display().to_string().bold()
    );

    if args.skip_git {
        print_final_guidance(&project_path, None);
        return Ok(());
    }

    ui::print_rule("Step 2 of 3: Confirm your repository on GitHub.com");

    println!("Next, you will need a git repository on GitHub.com.");
    println!("If you haven't already created one, you can do it now: https://github.com/new");
    println!();

    let repo_url = match confirm_github_repo(&project_path, &args).await? {
        Some(url) => url,
        None => {
            ui::print_cancelled();
            print_incomplete_git_setup();
            return Err(UvinitError::Cancelled);
        }
    };

    ui::print_rule("Step 3 of 3: Initialize your local git repository");

    let mut completed = true;
    for steps in [git::GIT_INIT_STEPS, git::GIT_REMOTE_STEPS] {
        match git::run_sequence(steps, &project_path, &repo_url, args.yes).await {
            Ok(true) => {}
            Ok(false) => {
                completed = false;
                break;
            }
            Err(e) => {
                print_incomplete_git_setup();
                return Err(e);
            }
        }
    }

    if !completed {
        ui::print_cancelled();
        print_incomplete_git_setup();
        return Err(UvinitError::Cancelled);
    }

    ui::print_success("Git repository setup complete!");
    print_final_guidance(&project_path, Some(&repo_url));
    Ok(())
}

/// Step 1: invoke copier against the template and destination
async fn copy_template(args: &CreateArgs, user_data: Vec<(String, String)>) -> Result<PathBuf> {
    let destination = match &args.destination {
        Some(dest) => dest.clone(),
        None => {
            if args.yes {
                return Err(UvinitError::config(
                    "--destination is required in non-interactive (--yes) mode",
                ));
            }
            ui::input(
                "Destination directory (usually kebab-case or snake_case)",
                "changeme",
            )?
        }
    };
    let destination = shellexpand::tilde(&destination).to_string();

    let mut request = CopyRequest::new(&args.template, &destination);
    request.answers_file = args.answers_file.clone();
    request.defaults = args.yes;

    // Destination-derived defaults, overridden by any explicit --data values
    let mut data = copier::default_template_data(&destination);
    data.retain(|(key, _)| !user_data.iter().any(|(user_key, _)| user_key == key));
    data.extend(user_data);
    request.data = data;

    println!();
    println!(
        "{} {}",
        "Creating project from:".bold(),
        args.template.green()
    );
    println!("{} {}", "Destination:".bold(), destination);
    println!();
    println!("We will now instantiate the template with:");
    println!();
    let launcher = copier::resolve_launcher()?;
    println!(
        "{}",
        copier::display_command(&launcher, &request.to_args())
            .blue()
            .bold()
    );
    println!();

    if !ui::confirm("Proceed with template copy?", true, args.yes)? {
        ui::print_cancelled();
        return Err(UvinitError::Cancelled);
    }

    println!();
    copier::run_copy(&request).await?;
    Ok(PathBuf::from(destination))
}

/// Step 2: derive the remote URL from the copier answers and confirm it,
/// optionally creating the repository with the gh CLI.
///
/// Returns None when the user declines.
async fn confirm_github_repo(project_path: &Path, args: &CreateArgs) -> Result<Option<String>> {
    let answers = answers::read_answers(project_path)?;

    let (Some(package_name), Some(github_org)) =
        (answers.package_name.clone(), answers.package_github_org)
    else {
        ui::print_warning("Missing package name or GitHub organization in the copier answers.");
        return Ok(None);
    };

    let protocol = select_protocol(&github_org, &package_name, args)?;
    let repo_url = github::repo_url(&github_org, &package_name, protocol);

    println!();
    println!(
        "This will be your GitHub repository URL: {}",
        repo_url.yellow().bold()
    );
    println!();

    if !args.no_gh_cli && SystemUtils::command_exists("gh") {
        let visibility = if args.public { "public" } else { "private" };
        let prompt = format!(
            "Create {}/{} as a {} repository with the gh CLI now?",
            github_org, package_name, visibility
        );
        if ui::confirm(&prompt, true, args.yes)? {
            github::create_repo_with_gh(&github_org, &package_name, args.public, project_path)
                .await?;
            ui::print_success("Repository created on GitHub");
        }
    } else {
        println!("If you haven't created the repository yet, do it now: https://github.com/new");
        println!();
    }

    if !ui::confirm(
        "Confirm this is correct and the repository exists?",
        true,
        args.yes,
    )? {
        return Ok(None);
    }

    Ok(Some(repo_url))
}

fn select_protocol(org: &str, name: &str, args: &CreateArgs) -> Result<github::GitProtocol> {
    if args.yes {
        return Ok(args.git_protocol.into());
    }

    let choices = vec![
        format!("ssh (git@github.com:{}/{}.git)", org, name),
        format!("https (https://github.com/{}/{}.git)", org, name),
    ];
    let default = match github::GitProtocol::from(args.git_protocol) {
        github::GitProtocol::Ssh => 0,
        github::GitProtocol::Https => 1,
    };

    let index = ui::select("Select GitHub URL format", &choices, default)?;
    Ok(if index == 0 {
        github::GitProtocol::Ssh
    } else {
        github::GitProtocol::Https
    })
}

fn print_incomplete_git_setup() {
    println!();
    ui::print_warning("Git repository setup not completed.");
    println!();
    println!("If you want to continue, you can rerun uvinit.");
    println!("Or set up the repository manually with these commands:");
    println!();
    git::print_manual_instructions("<your-repo-url>");
    println!();
}

fn print_final_guidance(project_path: &Path, repo_url: Option<&str>) {
    println!();
    ui::print_success("Project creation complete!");
    println!();
    println!(
        "Your template code is now ready: {}",
        project_path.display().to_string().bold()
    );
    if let Some(url) = repo_url {
        println!();
        println!("Your repository is at: {}", url.yellow().bold());
    }
    println!();
    println!(
        "For more information, see README.md, development.md (for dev workflows), \
         and publishing.md (for PyPI publishing instructions), all in your new repository."
    );
    println!();
    println!("Happy coding!");
    println!();
}

/// Parse --data KEY=VALUE arguments into pairs, skipping malformed items
pub fn parse_data_args(items: &[String]) -> Vec<(String, String)> {
    let mut result = Vec::new();
    for item in items {
        match item.split_once('=') {
            Some((key, value)) => {
                result.push((key.trim().to_string(), value.trim().to_string()));
            }
            None => {
                warn!("Invalid --data format '{}'. Expected KEY=VALUE.", item);
            }
        }
    }
    result
}

/// Print the embedded README documentation
pub async fn readme_command() -> Result<()> {
    println!("{}", ui::readme_text());
    Ok(())
}

/// Analyze an existing project and print migration recommendations
pub async fn migrate_command(dir: &str, json_output: bool) -> Result<()> {
    let dir = shellexpand::tilde(dir).to_string();
    let path = Path::new(&dir);

    if !path.is_dir() {
        return Err(UvinitError::config(format!(
            "Not a directory: {}",
            path.display()
        )));
    }

    info!("Analyzing project in {}", path.display());
    let analysis = migrate::analyze_project(path)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        recommendations::display_analysis(&analysis);
    }

    Ok(())
}

/// Report availability of the external tools uvinit orchestrates
pub async fn check_prereqs_command() -> Result<()> {
    println!();

    let copier_available = SystemUtils::command_exists("copier");
    let uvx_available = SystemUtils::command_exists("uvx");

    if copier_available {
        ui::print_success("copier is available on PATH");
    } else if uvx_available {
        ui::print_success("uvx is available; copier will be launched via uvx");
    } else {
        ui::print_warning(
            "Neither copier nor uvx found. Install uv: https://docs.astral.sh/uv/",
        );
    }

    for (cmd, hint) in [
        ("git", "required for repository setup"),
        ("uv", "recommended for working in the generated project"),
        ("gh", "optional, used to create the GitHub repository"),
    ] {
        if SystemUtils::command_exists(cmd) {
            ui::print_success(&format!("{} is available ({})", cmd, hint));
        } else {
            ui::print_warning(&format!("{} not found ({})", cmd, hint));
        }
    }

    let missing = SystemUtils::check_prerequisites();
    if !missing.is_empty() {
        return Err(UvinitError::config(format!(
            "Missing required commands: {}",
            missing.join(", ")
        )));
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_args_key_value() {
        let items = vec!["package_name=my-proj".to_string(), "k = v ".to_string()];
        let parsed = parse_data_args(&items);
        assert_eq!(
            parsed,
            vec![
                ("package_name".to_string(), "my-proj".to_string()),
                ("k".to_string(), "v".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_data_args_skips_malformed() {
        let items = vec!["no-equals-sign".to_string(), "ok=1".to_string()];
        let parsed = parse_data_args(&items);
        assert_eq!(parsed, vec![("ok".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_parse_data_args_keeps_value_equals() {
        // Only the first '=' splits; values may contain '='
        let items = vec!["expr=a=b".to_string()];
        let parsed = parse_data_args(&items);
        assert_eq!(parsed, vec![("expr".to_string(), "a=b".to_string())]);
    }

    #[tokio::test]
    async fn test_migrate_command_rejects_missing_dir() {
        let result = migrate_command("/nonexistent/path/12345", false).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_readme_command_succeeds() {
        assert!(readme_command().await.is_ok());
    }
}
