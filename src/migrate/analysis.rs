// file: src/migrate/analysis.rs
// version: 1.0.0
// guid: 6c2a8e50-9f47-4b13-86c2-a8e509f47b13

//! Project analysis: build system detection and metadata extraction
//!
//! Detects which Python packaging ecosystem an existing project uses by
//! checking for signature files, then pulls out the package name and
//! Python version requirement where the format allows it.

use crate::{scaffold::answers, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Detected build system types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    Uv,
    Poetry,
    Pdm,
    Flit,
    Setuptools,
    Pipenv,
    Requirements,
    Unknown,
}

impl BuildSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uv => "uv",
            Self::Poetry => "poetry",
            Self::Pdm => "pdm",
            Self::Flit => "flit",
            Self::Setuptools => "setuptools",
            Self::Pipenv => "pipenv",
            Self::Requirements => "requirements",
            Self::Unknown => "unknown",
        }
    }
}

/// Results of analyzing a project directory
#[derive(Debug, Clone, Serialize)]
pub struct ProjectAnalysis {
    pub build_system: BuildSystem,
    pub project_dir: PathBuf,
    pub detected_files: Vec<String>,
    pub package_name: Option<String>,
    pub python_requires: Option<String>,
    pub warnings: Vec<String>,
    /// Template source, when the project was created from a copier template
    pub copier_template: Option<String>,
    /// Template version, when known
    pub copier_version: Option<String>,
}

/// Analyze a project directory: detect its build system and metadata
pub fn analyze_project(project_dir: &Path) -> Result<ProjectAnalysis> {
    let pyproject = read_pyproject(project_dir);
    let (build_system, detected_files) = detect_build_system(project_dir, pyproject.as_ref());

    debug!(
        "Detected {} project in {}",
        build_system.as_str(),
        project_dir.display()
    );

    let mut analysis = ProjectAnalysis {
        build_system,
        project_dir: project_dir.to_path_buf(),
        detected_files,
        package_name: None,
        python_requires: None,
        warnings: Vec::new(),
        copier_template: None,
        copier_version: None,
    };

    extract_copier_info(&mut analysis);

    if let Some(pyproject) = &pyproject {
        extract_metadata(&mut analysis, pyproject);
    }

    match build_system {
        BuildSystem::Pipenv => extract_pipenv_metadata(&mut analysis),
        BuildSystem::Setuptools => extract_setuptools_metadata(&mut analysis),
        _ => {}
    }

    Ok(analysis)
}

fn read_pyproject(project_dir: &Path) -> Option<toml::Value> {
    let path = project_dir.join("pyproject.toml");
    let content = std::fs::read_to_string(path).ok()?;
    content.parse::<toml::Value>().ok()
}

fn has_tool_table(pyproject: Option<&toml::Value>, tool: &str) -> bool {
    pyproject
        .and_then(|p| p.get("tool"))
        .and_then(|t| t.get(tool))
        .is_some()
}

/// Detect the build system by checking for signature files.
/// Returns the build system and the list of files that gave it away.
pub fn detect_build_system(
    project_dir: &Path,
    pyproject: Option<&toml::Value>,
) -> (BuildSystem, Vec<String>) {
    let mut detected_files = Vec::new();

    if project_dir.join("pyproject.toml").exists() {
        detected_files.push("pyproject.toml".to_string());
    }

    // uv (already migrated)
    if project_dir.join("uv.lock").exists() {
        detected_files.push("uv.lock".to_string());
        return (BuildSystem::Uv, detected_files);
    }
    if has_tool_table(pyproject, "uv") {
        detected_files.push("pyproject.toml with [tool.uv]".to_string());
        return (BuildSystem::Uv, detected_files);
    }

    // Poetry
    if project_dir.join("poetry.lock").exists() {
        detected_files.push("poetry.lock".to_string());
        return (BuildSystem::Poetry, detected_files);
    }
    if has_tool_table(pyproject, "poetry") {
        detected_files.push("pyproject.toml with [tool.poetry]".to_string());
        return (BuildSystem::Poetry, detected_files);
    }

    // PDM
    if project_dir.join("pdm.lock").exists() {
        detected_files.push("pdm.lock".to_string());
        return (BuildSystem::Pdm, detected_files);
    }
    if has_tool_table(pyproject, "pdm") {
        detected_files.push("pyproject.toml with [tool.pdm]".to_string());
        return (BuildSystem::Pdm, detected_files);
    }

    // Flit
    if has_tool_table(pyproject, "flit") {
        detected_files.push("pyproject.toml with [tool.flit]".to_string());
        return (BuildSystem::Flit, detected_files);
    }

    // setuptools
    if project_dir.join("setup.py").exists() {
        detected_files.push("setup.py".to_string());
        return (BuildSystem::Setuptools, detected_files);
    }
    if project_dir.join("setup.cfg").exists() {
        detected_files.push("setup.cfg".to_string());
        return (BuildSystem::Setuptools, detected_files);
    }

    // Pipenv
    if project_dir.join("Pipfile").exists() {
        detected_files.push("Pipfile".to_string());
        if project_dir.join("Pipfile.lock").exists() {
            detected_files.push("Pipfile.lock".to_string());
        }
        return (BuildSystem::Pipenv, detected_files);
    }

    // Plain requirements
    if project_dir.join("requirements.txt").exists() {
        detected_files.push("requirements.txt".to_string());
        return (BuildSystem::Requirements, detected_files);
    }

    (BuildSystem::Unknown, detected_files)
}

fn extract_metadata(analysis: &mut ProjectAnalysis, pyproject: &toml::Value) {
    // Standard [project] section first
    if let Some(project) = pyproject.get("project") {
        analysis.package_name = project
            .get("name")
            .and_then(|v| v.as_str())
            .map(String::from);
        analysis.python_requires = project
            .get("requires-python")
            .and_then(|v| v.as_str())
            .map(String::from);
    }

    let tool = |name: &str| pyproject.get("tool").and_then(|t| t.get(name));

    // Poetry keeps its own metadata under [tool.poetry]
    if analysis.build_system == BuildSystem::Poetry {
        if let Some(poetry) = tool("poetry") {
            if analysis.package_name.is_none() {
                analysis.package_name = poetry
                    .get("name")
                    .and_then(|v| v.as_str())
                    .map(String::from);
            }
            if analysis.python_requires.is_none() {
                analysis.python_requires = poetry
                    .get("dependencies")
                    .and_then(|d| d.get("python"))
                    .and_then(|v| v.as_str())
                    .map(String::from);
            }
        }
    }

    if analysis.build_system == BuildSystem::Pdm && analysis.package_name.is_none() {
        analysis.package_name = tool("pdm")
            .and_then(|p| p.get("name"))
            .and_then(|v| v.as_str())
            .map(String::from);
    }

    if analysis.build_system == BuildSystem::Flit && analysis.package_name.is_none() {
        analysis.package_name = tool("flit")
            .and_then(|f| f.get("metadata"))
            .and_then(|m| m.get("module"))
            .and_then(|v| v.as_str())
            .map(String::from);
    }
}

fn extract_pipenv_metadata(analysis: &mut ProjectAnalysis) {
    let pipfile_path = analysis.project_dir.join("Pipfile");
    let content = match std::fs::read_to_string(&pipfile_path) {
        Ok(content) => content,
        Err(e) => {
            analysis
                .warnings
                .push(format!("Could not read Pipfile: {}", e));
            return;
        }
    };

    // Pipfile is TOML-ish; a line scan for python_version is enough here
    for line in content.lines() {
        if line.contains("python_version") && line.contains('=') {
            if let Some(value) = line.splitn(2, '=').nth(1) {
                let version = value.trim().trim_matches('"').trim_matches('\'');
                analysis.python_requires = Some(format!(">={}", version));
            }
            break;
        }
    }
}

fn extract_setuptools_metadata(analysis: &mut ProjectAnalysis) {
    let setup_cfg = analysis.project_dir.join("setup.cfg");
    let content = match std::fs::read_to_string(&setup_cfg) {
        Ok(content) => content,
        Err(_) => return, // setup.py only; nothing safe to parse
    };

    // Minimal INI scan: [metadata] name and [options] python_requires
    let mut section = String::new();
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('[') && line.ends_with(']') {
            section = line[1..line.len() - 1].to_string();
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        match (section.as_str(), key) {
            ("metadata", "name") if analysis.package_name.is_none() => {
                analysis.package_name = Some(value.to_string());
            }
            ("options", "python_requires") if analysis.python_requires.is_none() => {
                analysis.python_requires = Some(value.to_string());
            }
            _ => {}
        }
    }
}

fn extract_copier_info(analysis: &mut ProjectAnalysis) {
    if !answers::has_answers_file(&analysis.project_dir) {
        return;
    }

    analysis
        .detected_files
        .push(answers::ANSWERS_FILE.to_string());

    match answers::read_answers(&analysis.project_dir) {
        Ok(answers) => {
            analysis.copier_template = answers.src_path;
            analysis.copier_version = answers.commit;
        }
        Err(e) => {
            analysis
                .warnings
                .push(format!("Could not parse {}: {}", answers::ANSWERS_FILE, e));
        }
    }
}
