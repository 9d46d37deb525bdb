// file: src/migrate/recommendations.rs
// version: 1.0.0
// guid: 4f0c2a68-5d91-4e37-b4f0-c2a685d914e3

//! Migration recommendations toward the uv template layout

use super::analysis::{BuildSystem, ProjectAnalysis};
use crate::ui;
use colored::Colorize;

/// One recommended migration step: a short action line plus detail lines
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub action: String,
    pub details: Vec<String>,
}

impl Recommendation {
    fn new(action: &str, details: &[&str]) -> Self {
        Self {
            action: action.to_string(),
            details: details.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Generate migration recommendations based on the project analysis
pub fn generate_recommendations(analysis: &ProjectAnalysis) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if analysis.build_system == BuildSystem::Uv {
        if analysis.copier_template.is_some() {
            recs.push(Recommendation::new(
                "This project was created from a copier template",
                &[
                    "To update to the latest template version, run copier directly:",
                    "   copier update",
                ],
            ));
        } else {
            recs.push(Recommendation::new(
                "This project already uses uv. No migration needed.",
                &[
                    "Note: this project was not created from a copier template,",
                    "so automatic template updates are not available.",
                ],
            ));
        }
        return recs;
    }

    if analysis.build_system == BuildSystem::Unknown {
        recs.push(Recommendation::new(
            "Could not detect a build system",
            &["You may need to create a pyproject.toml from scratch."],
        ));
        recs.push(Recommendation::new(
            "CREATE a fresh template for reference",
            &["   uvinit --skip-git --destination .uvinit-ref"],
        ));
        recs.push(Recommendation::new(
            "COPY the pyproject.toml structure to your project",
            &[],
        ));
        return recs;
    }

    recs.push(Recommendation::new(
        "CREATE a fresh template for reference",
        &["   uvinit --skip-git --destination .uvinit-ref"],
    ));

    match analysis.build_system {
        BuildSystem::Poetry => {
            recs.push(Recommendation::new(
                "UPDATE pyproject.toml",
                &[
                    "   - Replace [build-system] with hatchling (see template)",
                    "   - Move [tool.poetry.dependencies] to [project.dependencies]",
                    "   - Move dev dependencies to [dependency-groups.dev]",
                    "   - Add [tool.ruff], [tool.basedpyright], [tool.pytest.ini_options] from template",
                    "   - Remove [tool.poetry] section entirely",
                ],
            ));
            recs.push(Recommendation::new(
                "DELETE obsolete files",
                &["   - poetry.lock (uv sync will create uv.lock)"],
            ));
        }
        BuildSystem::Pdm => {
            recs.push(Recommendation::new(
                "UPDATE pyproject.toml",
                &[
                    "   - Replace [build-system] with hatchling (see template)",
                    "   - Keep [project] section (PDM uses the standard format)",
                    "   - Move [tool.pdm.dev-dependencies] to [dependency-groups.dev]",
                    "   - Add [tool.ruff], [tool.basedpyright], [tool.pytest.ini_options] from template",
                    "   - Remove [tool.pdm] section",
                ],
            ));
            recs.push(Recommendation::new(
                "DELETE obsolete files",
                &["   - pdm.lock (uv sync will create uv.lock)"],
            ));
        }
        BuildSystem::Flit => {
            recs.push(Recommendation::new(
                "UPDATE pyproject.toml",
                &[
                    "   - Replace [build-system] with hatchling (see template)",
                    "   - Move [tool.flit.metadata] to [project] section",
                    "   - Add [tool.ruff], [tool.basedpyright], [tool.pytest.ini_options] from template",
                    "   - Remove [tool.flit] section",
                ],
            ));
        }
        BuildSystem::Setuptools => {
            recs.push(Recommendation::new(
                "UPDATE pyproject.toml",
                &[
                    "   - Add [build-system] with hatchling (see template)",
                    "   - Move metadata from setup.py/setup.cfg to [project] section",
                    "   - Add [tool.ruff], [tool.basedpyright], [tool.pytest.ini_options] from template",
                ],
            ));
            let mut files = Vec::new();
            for name in ["setup.py", "setup.cfg", "MANIFEST.in"] {
                if analysis.project_dir.join(name).exists() {
                    files.push(format!("   - {}", name));
                }
            }
            if !files.is_empty() {
                let refs: Vec<&str> = files.iter().map(String::as_str).collect();
                recs.push(Recommendation::new("DELETE obsolete files", &refs));
            }
        }
        BuildSystem::Pipenv => {
            recs.push(Recommendation::new(
                "CREATE pyproject.toml",
                &[
                    "   - Copy structure from template",
                    "   - Move [packages] from Pipfile to [project.dependencies]",
                    "   - Move [dev-packages] from Pipfile to [dependency-groups.dev]",
                ],
            ));
            recs.push(Recommendation::new(
                "DELETE obsolete files",
                &["   - Pipfile", "   - Pipfile.lock"],
            ));
        }
        BuildSystem::Requirements => {
            recs.push(Recommendation::new(
                "CREATE pyproject.toml",
                &[
                    "   - Copy structure from template",
                    "   - Move dependencies from requirements.txt to [project.dependencies]",
                    "   - If you have requirements-dev.txt, move it to [dependency-groups.dev]",
                ],
            ));
            recs.push(Recommendation::new(
                "OPTIONALLY delete",
                &["   - requirements.txt (after migrating deps to pyproject.toml)"],
            ));
        }
        BuildSystem::Uv | BuildSystem::Unknown => unreachable!("handled above"),
    }

    recs.push(Recommendation::new(
        "COPY from template",
        &[
            "   - .github/workflows/ci.yml",
            "   - .github/workflows/publish.yml",
            "   - Makefile",
            "   - devtools/lint.py",
        ],
    ));
    recs.push(Recommendation::new("RUN", &["   uv sync"]));
    recs.push(Recommendation::new(
        "CLEANUP",
        &["   rm -rf .uvinit-ref  # Remove the reference template when done"],
    ));

    recs
}

/// Display the project analysis and migration recommendations
pub fn display_analysis(analysis: &ProjectAnalysis) {
    ui::print_rule("Project Analysis");

    if analysis.build_system == BuildSystem::Uv {
        ui::print_success("This project already uses uv!");
        println!();
        if let Some(template) = &analysis.copier_template {
            println!("{} {}", "Template:".bold(), template);
            if let Some(version) = &analysis.copier_version {
                println!("{} {}", "Version:".bold(), version);
            }
            println!();
        }
        ui::print_rule("Update Recommendations");
        for rec in generate_recommendations(analysis) {
            println!("{}", rec.action);
            for line in &rec.details {
                ui::print_subtle(line);
            }
            println!();
        }
        return;
    }

    if analysis.build_system == BuildSystem::Unknown {
        ui::print_warning("Could not detect a build system");
    } else {
        println!(
            "{} {} project",
            "Detected:".bold(),
            analysis.build_system.as_str()
        );
    }

    for file in &analysis.detected_files {
        ui::print_subtle(&format!("  Found: {}", file));
    }

    println!();
    if let Some(name) = &analysis.package_name {
        println!("{} {}", "Package:".bold(), name);
    }
    if let Some(python) = &analysis.python_requires {
        println!("{} {}", "Python:".bold(), python);
    }

    if !analysis.warnings.is_empty() {
        println!();
        for warning in &analysis.warnings {
            ui::print_warning(warning);
        }
    }

    ui::print_rule("Migration Recommendations");
    println!("To migrate this project to uv:\n");

    for (i, rec) in generate_recommendations(analysis).iter().enumerate() {
        println!(
            "{} {}",
            format!("{}.", i + 1).cyan().bold(),
            rec.action.bold()
        );
        for line in &rec.details {
            ui::print_subtle(line);
        }
        println!();
    }

    ui::print_subtle("For template reference: https://github.com/jlevy/simple-modern-uv");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn analysis_for(build_system: BuildSystem) -> ProjectAnalysis {
        ProjectAnalysis {
            build_system,
            project_dir: PathBuf::from("/tmp/does-not-exist"),
            detected_files: Vec::new(),
            package_name: None,
            python_requires: None,
            warnings: Vec::new(),
            copier_template: None,
            copier_version: None,
        }
    }

    #[test]
    fn test_uv_project_needs_no_migration() {
        let recs = generate_recommendations(&analysis_for(BuildSystem::Uv));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].action.contains("No migration needed"));
    }

    #[test]
    fn test_uv_template_project_suggests_copier_update() {
        let mut analysis = analysis_for(BuildSystem::Uv);
        analysis.copier_template = Some("gh:jlevy/simple-modern-uv".to_string());

        let recs = generate_recommendations(&analysis);
        assert!(recs[0].details.iter().any(|d| d.contains("copier update")));
    }

    #[test]
    fn test_poetry_migration_mentions_lockfile() {
        let recs = generate_recommendations(&analysis_for(BuildSystem::Poetry));
        assert!(recs
            .iter()
            .any(|r| r.details.iter().any(|d| d.contains("poetry.lock"))));
        // Every non-uv migration ends with uv sync and cleanup
        assert!(recs.iter().any(|r| r.action == "RUN"));
        assert!(recs.iter().any(|r| r.action == "CLEANUP"));
    }

    #[test]
    fn test_pipenv_migration_moves_packages() {
        let recs = generate_recommendations(&analysis_for(BuildSystem::Pipenv));
        assert!(recs
            .iter()
            .any(|r| r.details.iter().any(|d| d.contains("[packages]"))));
    }

    #[test]
    fn test_unknown_build_system_suggests_reference_template() {
        let recs = generate_recommendations(&analysis_for(BuildSystem::Unknown));
        assert!(recs
            .iter()
            .any(|r| r.details.iter().any(|d| d.contains(".uvinit-ref"))));
    }
}
