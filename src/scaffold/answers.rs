// file: src/scaffold/answers.rs
// version: 1.0.0
// guid: d2c6a8e0-4f17-4b93-a5d2-7e1b9f3c6a85

//! Reading copier answers files
//!
//! Copier records the values used to instantiate a template in
//! `.copier-answers.yml` inside the generated project. We read it back to
//! pre-fill the git/GitHub setup steps and to recognize template-created
//! projects during migration analysis.

use crate::{error::UvinitError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Name of the answers file copier writes into generated projects
pub const ANSWERS_FILE: &str = ".copier-answers.yml";

/// The subset of copier answers uvinit cares about.
///
/// Unknown keys are ignored so template evolution does not break parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CopierAnswers {
    /// Template source the project was created from
    #[serde(rename = "_src_path")]
    pub src_path: Option<String>,

    /// Template version (tag or commit) that was instantiated
    #[serde(rename = "_commit")]
    pub commit: Option<String>,

    pub package_name: Option<String>,
    pub package_module: Option<String>,
    pub package_github_org: Option<String>,
    pub package_description: Option<String>,
    pub package_author_name: Option<String>,
    pub package_author_email: Option<String>,
}

/// Read and parse the answers file from a generated project directory
pub fn read_answers(project_dir: &Path) -> Result<CopierAnswers> {
    let answers_path = project_dir.join(ANSWERS_FILE);

    if !answers_path.exists() {
        return Err(UvinitError::config(format!(
            "Answers file not found: {}",
            answers_path.display()
        )));
    }

    debug!("Reading answers from {}", answers_path.display());
    let content = std::fs::read_to_string(&answers_path)?;
    let answers: CopierAnswers = serde_yaml::from_str(&content)?;
    Ok(answers)
}

/// Check whether a directory looks like a copier-generated project
pub fn has_answers_file(project_dir: &Path) -> bool {
    project_dir.join(ANSWERS_FILE).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
_commit: v0.2.3
_src_path: gh:jlevy/simple-modern-uv
package_author_email: dev@example.com
package_author_name: Dev
package_description: A test project
package_github_org: example-org
package_module: test_project
package_name: test-project
"#;

    #[test]
    fn test_read_answers_extracts_fields() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(ANSWERS_FILE), SAMPLE).unwrap();

        let answers = read_answers(temp_dir.path()).unwrap();
        assert_eq!(answers.package_name.as_deref(), Some("test-project"));
        assert_eq!(answers.package_github_org.as_deref(), Some("example-org"));
        assert_eq!(
            answers.src_path.as_deref(),
            Some("gh:jlevy/simple-modern-uv")
        );
        assert_eq!(answers.commit.as_deref(), Some("v0.2.3"));
    }

    #[test]
    fn test_read_answers_tolerates_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let content = "package_name: p\nsome_future_key: whatever\n";
        std::fs::write(temp_dir.path().join(ANSWERS_FILE), content).unwrap();

        let answers = read_answers(temp_dir.path()).unwrap();
        assert_eq!(answers.package_name.as_deref(), Some("p"));
        assert!(answers.package_github_org.is_none());
    }

    #[test]
    fn test_read_answers_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!has_answers_file(temp_dir.path()));
        assert!(read_answers(temp_dir.path()).is_err());
    }
}
