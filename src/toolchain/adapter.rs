use crate::config::RunnerConfig;

/// Toolchain adapter contract for the probe/compile/run stages.
///
/// The orchestrator core stays language-agnostic; an adapter defines
/// the version-query probes and the compile and run command lines for
/// one toolchain. Commands are argv vectors with the program first.
pub trait Toolchain: Send + Sync {
    fn language(&self) -> &'static str;

    /// Version-query invocations, one per required binary. Every probe
    /// must exit 0 before compilation proceeds.
    fn probe_commands(&self, config: &RunnerConfig) -> Vec<Vec<String>>;

    /// Fixed, ordered compile-unit manifest, relative to the build root.
    fn sources(&self) -> &'static [&'static str];

    /// Single compilation invocation covering every source unit.
    fn compile_command(&self, config: &RunnerConfig) -> Vec<String>;

    /// Foreground execution of the compiled entry point.
    fn run_command(&self, config: &RunnerConfig) -> Vec<String>;
}
