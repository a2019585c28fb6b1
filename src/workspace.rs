//! Workspace preparation for compiled artifacts.

use crate::config::{Result, RunnerConfig};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Create the output directory tree under the build root, parents included.
///
/// Idempotent: pre-existing directories are not an error, and nothing
/// pre-existing is deleted or modified. Returns the resolved build root
/// that subsequent stages run against.
pub fn prepare_output_dir(config: &RunnerConfig) -> Result<PathBuf> {
    let build_root = config.project_root.join(&config.build_root);
    let output_dir = build_root.join(&config.output_dir);

    fs::create_dir_all(&output_dir).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to create output directory {}: {}", output_dir.display(), e),
        )
    })?;

    debug!("output directory ready: {}", output_dir.display());
    Ok(build_root)
}
