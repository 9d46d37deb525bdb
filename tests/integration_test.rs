// file: tests/integration_test.rs
// version: 1.0.0
// guid: 8c4e0a26-7b59-4d13-a8c4-e0a267b594d1

//! Integration tests for uvinit

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use uvinit::{
    cli::args::{Cli, Commands},
    scaffold::{copier, CopyRequest, DEFAULT_TEMPLATE},
    UvinitError,
};

use clap::Parser;

/// Bare invocation forwards the default template identifier to copier.
#[test]
fn test_default_template_flows_from_cli_to_copier_args() {
    let cli = Cli::try_parse_from(["uvinit", "--yes", "--destination", "proj"]).unwrap();
    assert!(cli.command.is_none());

    let mut request = CopyRequest::new(&cli.create.template, "proj");
    request.defaults = cli.create.yes;

    let args = request.to_args();
    assert!(args.contains(&DEFAULT_TEMPLATE.to_string()));
    assert!(args.contains(&"--defaults".to_string()));
}

/// `--template X` forwards X instead of the default.
#[test]
fn test_template_override_flows_from_cli_to_copier_args() {
    let cli = Cli::try_parse_from(["uvinit", "--template", "gh:acme/tmpl"]).unwrap();

    let request = CopyRequest::new(&cli.create.template, "proj");
    let args = request.to_args();
    assert!(args.contains(&"gh:acme/tmpl".to_string()));
    assert!(!args.contains(&DEFAULT_TEMPLATE.to_string()));
}

/// The process exit code always equals the external tool's exit code.
#[test]
fn test_copier_exit_status_is_relayed() {
    let err = UvinitError::Process {
        command: "copier copy gh:jlevy/simple-modern-uv proj".to_string(),
        exit_code: Some(2),
        stderr: "copier exited with failure".to_string(),
    };
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_create_subcommand_matches_default_behavior() {
    let direct = Cli::try_parse_from(["uvinit", "--template", "gh:acme/tmpl"]).unwrap();
    let via_sub = Cli::try_parse_from(["uvinit", "create", "--template", "gh:acme/tmpl"]).unwrap();

    let sub_args = match via_sub.command {
        Some(Commands::Create(args)) => args,
        _ => panic!("expected create subcommand"),
    };
    assert_eq!(direct.create.template, sub_args.template);
}

#[test]
fn test_destination_defaults_derive_template_data() {
    let data = copier::default_template_data("workdir/new_tool");
    let request = CopyRequest {
        template: DEFAULT_TEMPLATE.to_string(),
        destination: "workdir/new_tool".to_string(),
        answers_file: None,
        data,
        defaults: true,
    };

    let args = request.to_args();
    assert!(args.contains(&"package_name=new-tool".to_string()));
    assert!(args.contains(&"package_module=new_tool".to_string()));
}

#[test]
fn test_help_shows_template_flag() {
    Command::cargo_bin("uvinit")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--destination"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("uvinit")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_readme_command_prints_documentation() {
    Command::cargo_bin("uvinit")
        .unwrap()
        .arg("readme")
        .assert()
        .success()
        .stdout(predicate::str::contains("uvinit"))
        .stdout(predicate::str::contains("simple-modern-uv"));
}

#[test]
fn test_non_interactive_create_requires_destination() {
    Command::cargo_bin("uvinit")
        .unwrap()
        .args(["--yes", "--skip-git"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--destination"));
}

#[test]
fn test_migrate_detects_poetry_project() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("pyproject.toml"),
        "[tool.poetry]\nname = \"legacy\"\n",
    )
    .unwrap();

    Command::cargo_bin("uvinit")
        .unwrap()
        .args(["migrate", temp_dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("poetry"));
}

#[test]
fn test_migrate_json_output() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("requirements.txt"), "requests\n").unwrap();

    Command::cargo_bin("uvinit")
        .unwrap()
        .args(["migrate", "--json", temp_dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"build_system\": \"requirements\""));
}

#[test]
fn test_migrate_missing_directory_fails() {
    Command::cargo_bin("uvinit")
        .unwrap()
        .args(["migrate", "/nonexistent/path/12345"])
        .assert()
        .failure()
        .code(1);
}
