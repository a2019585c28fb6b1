/// Core types and structures for the quizrun orchestrator
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Orchestrator configuration.
///
/// All values are fixed at build time for the IP-Quiz project; tests
/// override the binary names and roots to substitute stub toolchains.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Project root all relative paths resolve against
    pub project_root: PathBuf,
    /// Layout subpath whose presence marks a correctly located run
    pub layout_probe: PathBuf,
    /// Build root, relative to the project root
    pub build_root: PathBuf,
    /// Output directory tree to create, relative to the build root
    pub output_dir: PathBuf,
    /// Compiled-classes directory passed to the runtime, relative to the build root
    pub classes_dir: PathBuf,
    /// Source root used as the compile-time resolution path, relative to the build root
    pub source_root: PathBuf,
    /// Compiler binary name (or path, for stubs)
    pub compiler: String,
    /// Runtime binary name (or path, for stubs)
    pub runtime: String,
    /// Fully qualified entry point class
    pub entry_point: String,
    /// Informational URL the supervised application is expected to serve on
    pub server_url: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            layout_probe: ["backend", "src", "main", "java"].iter().collect(),
            build_root: PathBuf::from("backend"),
            output_dir: ["bin", "com", "quiz"].iter().collect(),
            classes_dir: PathBuf::from("bin"),
            source_root: ["src", "main", "java"].iter().collect(),
            compiler: "javac".to_string(),
            runtime: "java".to_string(),
            entry_point: "com.quiz.QuizApplication".to_string(),
            server_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Custom error types for quizrun
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("project layout error: {0}")]
    Layout(String),

    #[error("toolchain error: {0}")]
    Toolchain(String),

    #[error("workspace error: {0}")]
    Workspace(#[from] std::io::Error),

    #[error("compilation failed:\n{stderr}")]
    Compile { stderr: String },

    #[error("launch error: {0}")]
    Launch(String),
}

/// Convert orchestrator errors to appropriate exit codes
impl From<&RunnerError> for i32 {
    fn from(err: &RunnerError) -> i32 {
        match err {
            RunnerError::Layout(_) => 66,    // Input missing
            RunnerError::Toolchain(_) => 69, // Service unavailable
            RunnerError::Workspace(_) => 73, // Can't create
            RunnerError::Compile { .. } => 65, // Data error
            RunnerError::Launch(_) => 70,    // Internal software error
        }
    }
}

/// Result type alias for quizrun operations
pub type Result<T> = std::result::Result<T, RunnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_layout() {
        let config = RunnerConfig::default();
        assert_eq!(config.layout_probe, PathBuf::from("backend/src/main/java"));
        assert_eq!(config.build_root, PathBuf::from("backend"));
        assert_eq!(config.output_dir, PathBuf::from("bin/com/quiz"));
        assert_eq!(config.entry_point, "com.quiz.QuizApplication");
    }

    #[test]
    fn test_error_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            RunnerError::Layout("missing".to_string()),
            RunnerError::Toolchain("missing".to_string()),
            RunnerError::Workspace(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )),
            RunnerError::Compile {
                stderr: "error".to_string(),
            },
            RunnerError::Launch("spawn failed".to_string()),
        ];

        let codes: Vec<i32> = errors.iter().map(i32::from).collect();
        for code in &codes {
            assert_ne!(*code, 0);
        }
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
    }
}
