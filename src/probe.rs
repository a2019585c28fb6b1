//! Environment prober: project layout and toolchain checks.
//!
//! Both checks are fatal on failure. The toolchain probe runs each
//! binary's version query and requires a zero exit status; the reported
//! version text is captured for the operator but never parsed.

use crate::config::{Result, RunnerConfig, RunnerError};
use crate::toolchain::adapter::Toolchain;
use log::{debug, info};
use std::process::Command;

/// Outcome of one binary's version query.
#[derive(Debug, Clone)]
pub struct ToolProbe {
    /// Binary that was invoked
    pub tool: String,
    /// First reported version line, when the query succeeded
    pub version: Option<String>,
}

/// Combined probe outcome. Both binaries answered their version query.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub tools: Vec<ToolProbe>,
}

/// Check that the expected project structure exists under the project root.
///
/// The subpath is built from components, so both path-separator
/// conventions resolve. Absence is a fatal misconfiguration.
pub fn verify_layout(config: &RunnerConfig) -> Result<()> {
    let probe = config.project_root.join(&config.layout_probe);
    if !probe.is_dir() {
        return Err(RunnerError::Layout(format!(
            "not in the project root: {} is missing (expected structure: backend/src/main/java/com/quiz/)",
            probe.display()
        )));
    }
    debug!("layout probe found: {}", probe.display());
    Ok(())
}

/// Invoke every probe command of the toolchain and require exit status 0.
///
/// A spawn failure (binary not on PATH) and a non-zero exit are the same
/// fatal condition; the error carries a remediation hint.
pub fn verify_toolchain(config: &RunnerConfig, toolchain: &dyn Toolchain) -> Result<ProbeReport> {
    let mut tools = Vec::new();

    for probe in toolchain.probe_commands(config) {
        let (program, args) = probe
            .split_first()
            .ok_or_else(|| RunnerError::Toolchain("empty probe command".to_string()))?;

        let output = Command::new(program).args(args).output().map_err(|e| {
            RunnerError::Toolchain(format!(
                "'{}' is not installed or not in PATH ({}); install a JDK (Java 8 or higher)",
                program, e
            ))
        })?;

        if !output.status.success() {
            return Err(RunnerError::Toolchain(format!(
                "'{}' version query failed with {}; install a JDK (Java 8 or higher)",
                program, output.status
            )));
        }

        // `java -version` prints to stderr, so fall back to it.
        let version = first_line(&output.stdout).or_else(|| first_line(&output.stderr));
        if let Some(ref line) = version {
            info!("{} -> {}", program, line);
        }
        tools.push(ToolProbe {
            tool: program.clone(),
            version,
        });
    }

    Ok(ProbeReport { tools })
}

fn first_line(raw: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(raw);
    let line = text.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
