//! quizrun: build-and-run orchestrator for the IP-Quiz Java backend
//!
//! A single-shot developer tool that verifies the Java toolchain, prepares
//! the output directory, compiles the fixed set of backend source units,
//! and supervises the resulting server as a foreground process.
//!
//! # Architecture
//!
//! The pipeline is four strictly sequential stages; each runs only after
//! the previous one succeeded, and every failure is fatal-and-reported:
//!
//! - [`probe`]: project layout check and toolchain version probes
//! - [`workspace`]: idempotent output-directory preparation
//! - [`build`]: one compiler invocation over the whole unit manifest
//! - [`supervise`]: foreground execution with interrupt-as-graceful-exit
//!
//! Supporting modules:
//!
//! - [`config`]: the fixed configuration and the error taxonomy
//! - [`toolchain`]: adapter seam supplying probe/compile/run command lines
//! - [`signal`]: async-safe SIGINT/SIGTERM flags polled by the supervisor
//! - [`cli`]: driver wiring the stages together and mapping errors to
//!   exit codes
//!
//! # Design Principles
//!
//! 1. **Short-circuit pipeline** - no stage runs after a failure, no
//!    retries anywhere
//! 2. **Explicit base paths** - stages take the project/build root;
//!    the process working directory is never mutated
//! 3. **Interrupt is not an error** - Ctrl+C during supervision maps to
//!    a distinct graceful terminal state, and the final report runs on
//!    every exit path

pub mod build;
pub mod cli;
pub mod config;
pub mod probe;
pub mod signal;
pub mod supervise;
pub mod toolchain;
pub mod workspace;
