//! Process supervisor: foreground execution of the compiled application.
//!
//! Lifecycle: STARTING -> RUNNING -> {EXITED_OK, EXITED_ERROR, INTERRUPTED},
//! then a final report that runs on every exit path. An operator interrupt
//! is a normal termination path, not an error. Nothing is retried.

use crate::config::{Result, RunnerConfig, RunnerError};
use crate::signal;
use crate::toolchain::adapter::Toolchain;
use log::{debug, info, warn};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::time::Duration;

/// Terminal state of the supervised process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Child exited with status 0
    ExitedOk,
    /// Child exited non-zero; the code is reported but never retried
    ExitedError(i32),
    /// Operator-requested shutdown; graceful, not an error
    Interrupted,
}

impl RunOutcome {
    /// Process exit code for the orchestrator. Interruption is graceful.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::ExitedOk | RunOutcome::Interrupted => 0,
            RunOutcome::ExitedError(_) => 1,
        }
    }
}

/// Prints the final status line when dropped, so the report runs exactly
/// once on every exit path out of supervision, the interrupted one included.
struct FinalReport;

impl Drop for FinalReport {
    fn drop(&mut self) {
        println!();
        println!("✅ Server stopped. Thank you for using Java Quiz Application!");
    }
}

/// Launch the entry point in the foreground and block until it exits or
/// the operator interrupts it.
pub fn run_and_supervise(
    config: &RunnerConfig,
    toolchain: &dyn Toolchain,
    build_root: &Path,
) -> Result<RunOutcome> {
    let command = toolchain.run_command(config);
    let (program, args) = command
        .split_first()
        .ok_or_else(|| RunnerError::Launch("empty run command".to_string()))?;

    print_server_banner(config);

    let _report = FinalReport;

    debug!("run invocation: {:?}", command);
    let mut child = Command::new(program)
        .args(args)
        .current_dir(build_root)
        .spawn()
        .map_err(|e| RunnerError::Launch(format!("spawn {}: {}", program, e)))?;

    info!("supervised process started (pid {})", child.id());

    let mut interrupt_forwarded = false;
    let status = loop {
        if signal::shutdown_requested() && !interrupt_forwarded {
            debug!(
                "operator interrupt (signal {}), forwarding to child",
                signal::received_signal()
            );
            // The terminal usually delivers Ctrl+C to the whole foreground
            // group; forward explicitly in case the child missed it.
            if let Err(e) = kill(Pid::from_raw(child.id() as i32), Signal::SIGINT) {
                warn!("failed to forward SIGINT to child: {}", e);
            }
            interrupt_forwarded = true;
        }

        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => std::thread::sleep(Duration::from_millis(50)),
            Err(e) => {
                return Err(RunnerError::Launch(format!("wait {}: {}", program, e)));
            }
        }
    };

    let outcome = interpret_status(status, signal::shutdown_requested());
    match outcome {
        RunOutcome::ExitedOk => {
            info!("supervised process exited normally");
        }
        RunOutcome::ExitedError(code) => {
            println!();
            println!("❌ ERROR: Server failed! Exit code: {}", code);
        }
        RunOutcome::Interrupted => {
            println!();
            println!("🛑 Server stopped by user");
        }
    }

    Ok(outcome)
}

/// Map the child's wait status to a terminal state. An interrupt request
/// observed by the supervisor dominates; a child terminated by SIGINT is
/// also an interrupt (the terminal delivers Ctrl+C to the whole
/// foreground group, so the child can die of it before the flag is seen).
fn interpret_status(status: ExitStatus, interrupt_requested: bool) -> RunOutcome {
    if interrupt_requested {
        return RunOutcome::Interrupted;
    }
    if let Some(code) = status.code() {
        return if code == 0 {
            RunOutcome::ExitedOk
        } else {
            RunOutcome::ExitedError(code)
        };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            if sig == libc::SIGINT {
                return RunOutcome::Interrupted;
            }
            return RunOutcome::ExitedError(128 + sig);
        }
    }

    RunOutcome::ExitedError(1)
}

fn print_server_banner(config: &RunnerConfig) {
    println!();
    println!("{}", "=".repeat(50));
    println!("          🚀 STARTING QUIZ SERVER 🚀");
    println!("{}", "=".repeat(50));
    println!();
    println!("Server will start at: {}", config.server_url);
    println!("Open your web browser and navigate to the URL above");
    println!("Press Ctrl+C to stop the server when done");
    println!();
    println!("{}", "=".repeat(50));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    fn status_from_code(code: i32) -> ExitStatus {
        ExitStatus::from_raw(code << 8)
    }

    fn status_from_signal(sig: i32) -> ExitStatus {
        ExitStatus::from_raw(sig)
    }

    #[test]
    fn test_zero_exit_is_ok() {
        assert_eq!(interpret_status(status_from_code(0), false), RunOutcome::ExitedOk);
    }

    #[test]
    fn test_nonzero_exit_carries_code() {
        assert_eq!(
            interpret_status(status_from_code(7), false),
            RunOutcome::ExitedError(7)
        );
    }

    #[test]
    fn test_interrupt_request_dominates() {
        assert_eq!(
            interpret_status(status_from_code(0), true),
            RunOutcome::Interrupted
        );
        assert_eq!(
            interpret_status(status_from_code(143), true),
            RunOutcome::Interrupted
        );
    }

    #[test]
    fn test_sigint_death_is_interrupt() {
        assert_eq!(
            interpret_status(status_from_signal(libc::SIGINT), false),
            RunOutcome::Interrupted
        );
    }

    #[test]
    fn test_other_signal_death_is_error() {
        assert_eq!(
            interpret_status(status_from_signal(libc::SIGKILL), false),
            RunOutcome::ExitedError(128 + libc::SIGKILL)
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(RunOutcome::ExitedOk.exit_code(), 0);
        assert_eq!(RunOutcome::Interrupted.exit_code(), 0);
        assert_eq!(RunOutcome::ExitedError(7).exit_code(), 1);
    }
}
