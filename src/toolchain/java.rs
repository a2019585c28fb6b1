use crate::config::RunnerConfig;
use crate::toolchain::adapter::Toolchain;

#[derive(Debug, Clone, Default)]
pub struct JavaToolchain;

/// Implementation units of the quiz backend. The list is fixed in source
/// rather than discovered: a missing file fails the build immediately and
/// the diagnostic names the unit. Order is stable for readable diagnostics;
/// javac resolves the units together regardless.
const SOURCES: &[&str] = &[
    "src/main/java/com/quiz/QuizApplication.java",
    "src/main/java/com/quiz/controllers/QuizController.java",
    "src/main/java/com/quiz/datastructures/QuizLinkedList.java",
    "src/main/java/com/quiz/datastructures/QuizStack.java",
    "src/main/java/com/quiz/models/Question.java",
    "src/main/java/com/quiz/models/QuizSession.java",
    "src/main/java/com/quiz/models/UserAnswer.java",
    "src/main/java/com/quiz/services/QuizService.java",
];

impl Toolchain for JavaToolchain {
    fn language(&self) -> &'static str {
        "java"
    }

    fn probe_commands(&self, config: &RunnerConfig) -> Vec<Vec<String>> {
        vec![
            vec![config.runtime.clone(), "-version".to_string()],
            vec![config.compiler.clone(), "-version".to_string()],
        ]
    }

    fn sources(&self) -> &'static [&'static str] {
        SOURCES
    }

    fn compile_command(&self, config: &RunnerConfig) -> Vec<String> {
        let mut command = vec![
            config.compiler.clone(),
            "-d".to_string(),
            config.classes_dir.to_string_lossy().to_string(),
            "-cp".to_string(),
            config.source_root.to_string_lossy().to_string(),
        ];
        command.extend(SOURCES.iter().map(|s| s.to_string()));
        command
    }

    fn run_command(&self, config: &RunnerConfig) -> Vec<String> {
        vec![
            config.runtime.clone(),
            "-cp".to_string(),
            config.classes_dir.to_string_lossy().to_string(),
            config.entry_point.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_is_complete_and_unique() {
        assert_eq!(SOURCES.len(), 8);
        let mut seen = std::collections::HashSet::new();
        for source in SOURCES {
            assert!(source.ends_with(".java"), "not a java unit: {}", source);
            assert!(source.starts_with("src/main/java/com/quiz/"));
            assert!(seen.insert(source), "duplicate unit: {}", source);
        }
    }

    #[test]
    fn test_compile_command_includes_every_unit_once() {
        let config = RunnerConfig::default();
        let command = JavaToolchain.compile_command(&config);

        assert_eq!(command[0], "javac");
        assert_eq!(&command[1..5], &["-d", "bin", "-cp", "src/main/java"]);
        for source in SOURCES {
            assert_eq!(command.iter().filter(|arg| arg.as_str() == *source).count(), 1);
        }
        assert_eq!(command.len(), 5 + SOURCES.len());
    }

    #[test]
    fn test_run_command_targets_entry_point() {
        let config = RunnerConfig::default();
        let command = JavaToolchain.run_command(&config);
        assert_eq!(command, vec!["java", "-cp", "bin", "com.quiz.QuizApplication"]);
    }

    #[test]
    fn test_probe_commands_cover_runtime_and_compiler() {
        let mut config = RunnerConfig::default();
        config.compiler = "/stubs/javac".to_string();
        config.runtime = "/stubs/java".to_string();

        let probes = JavaToolchain.probe_commands(&config);
        assert_eq!(probes.len(), 2);
        assert_eq!(probes[0], vec!["/stubs/java", "-version"]);
        assert_eq!(probes[1], vec!["/stubs/javac", "-version"]);
    }
}
