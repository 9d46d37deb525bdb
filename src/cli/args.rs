// file: src/cli/args.rs
// version: 1.0.0
// guid: 7b3e9d15-6a42-4c80-a7b3-e9d156a424c8

//! Command line argument definitions

use crate::scaffold::github::GitProtocol;
use crate::scaffold::DEFAULT_TEMPLATE;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uvinit")]
#[command(about = "Create a new Python project with uv using the simple-modern-uv template")]
#[command(
    after_help = "Run `uvinit` without arguments to interactively create a new project, \
                  or `uvinit readme` for the full documentation."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the default create workflow when no subcommand is given
    #[command(flatten)]
    pub create: CreateArgs,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project (the default when no subcommand is given)
    Create(CreateArgs),

    /// Print the full README documentation
    Readme,

    /// Analyze an existing Python project and print uv migration recommendations
    Migrate {
        /// Project directory to analyze
        #[arg(default_value = ".")]
        dir: String,

        /// Print the analysis as JSON instead of formatted text
        #[arg(short, long)]
        json: bool,
    },

    /// Check that the external tools uvinit orchestrates are available
    CheckPrereqs,
}

#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Copier template to use
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Destination directory (will prompt if not provided)
    #[arg(long)]
    pub destination: Option<String>,

    /// Path to a .copier-answers.yml file to use for default values
    #[arg(long)]
    pub answers_file: Option<String>,

    /// Set a template value (can be repeated), e.g. --data package_name=my-project
    #[arg(long, value_name = "KEY=VALUE")]
    pub data: Vec<String>,

    /// Auto-confirm all prompts (non-interactive mode for automation/agents)
    #[arg(long)]
    pub yes: bool,

    /// Skip GitHub repository setup and git initialization
    #[arg(long)]
    pub skip_git: bool,

    /// Don't use the gh CLI to create the repo (assume it already exists)
    #[arg(long)]
    pub no_gh_cli: bool,

    /// Create a public repository (default is private)
    #[arg(long)]
    pub public: bool,

    /// Git protocol to use for the repository URL
    #[arg(long, value_enum, default_value = "ssh")]
    pub git_protocol: ProtocolArg,
}

/// Git protocol argument for the CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ProtocolArg {
    Ssh,
    Https,
}

impl From<ProtocolArg> for GitProtocol {
    fn from(protocol: ProtocolArg) -> Self {
        match protocol {
            ProtocolArg::Ssh => GitProtocol::Ssh,
            ProtocolArg::Https => GitProtocol::Https,
        }
    }
}

impl From<GitProtocol> for ProtocolArg {
    fn from(protocol: GitProtocol) -> Self {
        match protocol {
            GitProtocol::Ssh => ProtocolArg::Ssh,
            GitProtocol::Https => ProtocolArg::Https,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_default_template() {
        let cli = Cli::try_parse_from(["uvinit"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.create.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_template_flag_overrides_default() {
        let cli = Cli::try_parse_from(["uvinit", "--template", "gh:other/tmpl"]).unwrap();
        assert_eq!(cli.create.template, "gh:other/tmpl");
    }

    #[test]
    fn test_create_subcommand_accepts_same_flags() {
        let cli = Cli::try_parse_from([
            "uvinit",
            "create",
            "--template",
            "gh:other/tmpl",
            "--destination",
            "my-proj",
            "--yes",
            "--skip-git",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Create(args)) => {
                assert_eq!(args.template, "gh:other/tmpl");
                assert_eq!(args.destination.as_deref(), Some("my-proj"));
                assert!(args.yes);
                assert!(args.skip_git);
            }
            _ => panic!("expected create subcommand"),
        }
    }

    #[test]
    fn test_data_flag_is_repeatable() {
        let cli = Cli::try_parse_from([
            "uvinit",
            "--data",
            "package_name=p",
            "--data",
            "package_module=m",
        ])
        .unwrap();
        assert_eq!(cli.create.data.len(), 2);
    }

    #[test]
    fn test_migrate_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["uvinit", "migrate"]).unwrap();
        match cli.command {
            Some(Commands::Migrate { dir, json }) => {
                assert_eq!(dir, ".");
                assert!(!json);
            }
            _ => panic!("expected migrate subcommand"),
        }
    }

    #[test]
    fn test_git_protocol_parses() {
        let cli = Cli::try_parse_from(["uvinit", "--git-protocol", "https"]).unwrap();
        assert!(matches!(cli.create.git_protocol, ProtocolArg::Https));
    }
}
