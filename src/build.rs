//! Build invoker: one compiler invocation over the whole manifest.

use crate::config::{Result, RunnerConfig, RunnerError};
use crate::toolchain::adapter::Toolchain;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

/// Verdict of the compilation stage, consumed immediately by the driver.
#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// Compiler exited with status 0
    pub success: bool,
    /// Captured standard-error text; relayed verbatim on failure
    pub stderr: String,
}

/// Compile every source unit in a single invocation, run against the
/// build root. The manifest is fixed by the toolchain adapter; a missing
/// unit fails the compiler immediately with the unit named.
pub fn compile(
    config: &RunnerConfig,
    toolchain: &dyn Toolchain,
    build_root: &Path,
) -> Result<BuildOutcome> {
    let command = toolchain.compile_command(config);
    let (program, args) = command
        .split_first()
        .ok_or_else(|| RunnerError::Toolchain("empty compile command".to_string()))?;

    debug!("compile invocation: {:?}", command);
    let output = Command::new(program)
        .args(args)
        .current_dir(build_root)
        .output()
        .map_err(|e| RunnerError::Toolchain(format!("spawn {}: {}", program, e)))?;

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if output.status.success() {
        info!(
            "compiled {} units into {}",
            toolchain.sources().len(),
            config.classes_dir.display()
        );
    }

    Ok(BuildOutcome {
        success: output.status.success(),
        stderr,
    })
}
