//! Async-safe operator-interrupt handling.
//!
//! The handler only stores atomics; the supervisor's poll loop observes
//! them and performs the actual shutdown. Install once, early in main,
//! before the supervised child is spawned.

use log::debug;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Global shutdown flag (async-safe atomic)
static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Signal that triggered the shutdown request (0 if none)
static SIGNAL_RECEIVED: AtomicU32 = AtomicU32::new(0);

/// Install handlers for SIGINT and SIGTERM.
pub fn install() -> Result<(), String> {
    let action = SigAction::new(
        SigHandler::Handler(handle_signal),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );

    unsafe {
        signal::sigaction(Signal::SIGINT, &action)
            .map_err(|e| format!("failed to install SIGINT handler: {}", e))?;
        signal::sigaction(Signal::SIGTERM, &action)
            .map_err(|e| format!("failed to install SIGTERM handler: {}", e))?;
    }

    debug!("signal handlers installed (SIGINT, SIGTERM)");
    Ok(())
}

/// Async-safe handler: atomic stores only. No allocation, locks, or I/O.
extern "C" fn handle_signal(signal: libc::c_int) {
    SIGNAL_RECEIVED.store(signal as u32, Ordering::SeqCst);
    SHUTDOWN_REQUESTED.store(true, Ordering::SeqCst);
}

/// Has the operator requested shutdown?
pub fn shutdown_requested() -> bool {
    SHUTDOWN_REQUESTED.load(Ordering::SeqCst)
}

/// Signal that was received (0 if none)
pub fn received_signal() -> u32 {
    SIGNAL_RECEIVED.load(Ordering::SeqCst)
}

/// Reset the flags (for tests)
pub fn reset() {
    SHUTDOWN_REQUESTED.store(false, Ordering::SeqCst);
    SIGNAL_RECEIVED.store(0, Ordering::SeqCst);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install() {
        assert!(install().is_ok());
    }

    #[test]
    fn test_shutdown_flag_roundtrip() {
        reset();
        assert!(!shutdown_requested());
        assert_eq!(received_signal(), 0);

        SIGNAL_RECEIVED.store(libc::SIGINT as u32, Ordering::SeqCst);
        SHUTDOWN_REQUESTED.store(true, Ordering::SeqCst);
        assert!(shutdown_requested());
        assert_eq!(received_signal(), libc::SIGINT as u32);

        reset();
        assert!(!shutdown_requested());
    }
}
