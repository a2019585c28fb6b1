use crate::build;
use crate::config::{Result, RunnerConfig, RunnerError};
use crate::probe;
use crate::signal;
use crate::supervise::{self, RunOutcome};
use crate::toolchain;
use crate::toolchain::adapter::Toolchain;
use clap::Parser;
use std::io::{BufRead, Write};

/// Build-and-run orchestrator for the IP-Quiz Java backend. All behavior
/// is fixed at build time; there are no flags or arguments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    // Foreground supervision and interrupt forwarding need Unix signals.
    if !cfg!(unix) {
        eprintln!("Error: quizrun requires a Unix-like system");
        std::process::exit(1);
    }

    let _cli = Cli::parse();

    if let Err(e) = signal::install() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = RunnerConfig::default();
    let toolchain = toolchain::for_language("java")?;

    print_header();

    match run_pipeline(&config, toolchain.as_ref()) {
        Ok(outcome) => {
            pause_before_exit();
            let code = outcome.exit_code();
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            // Single rendering point for every fatal path: diagnostic,
            // interactive pause, then the class-specific exit code.
            eprintln!();
            eprintln!("❌ ERROR: {}", e);
            pause_before_exit();
            std::process::exit(i32::from(&e));
        }
    }
}

/// Execute the four stages in strict sequence. Any stage error
/// short-circuits; no stage runs after a failure.
pub fn run_pipeline(config: &RunnerConfig, toolchain: &dyn Toolchain) -> Result<RunOutcome> {
    probe::verify_layout(config)?;
    println!("✅ Directory structure verified");

    println!("[1/4] Checking Java installation...");
    probe::verify_toolchain(config, toolchain)?;
    println!("✅ Java installation verified");

    println!();
    println!("[2/4] Creating output directory...");
    let build_root = crate::workspace::prepare_output_dir(config)?;
    println!("✅ Output directory created");

    println!();
    println!("[3/4] Compiling Java source files...");
    let built = build::compile(config, toolchain, &build_root)?;
    if !built.success {
        return Err(RunnerError::Compile { stderr: built.stderr });
    }
    println!("✅ Compilation successful");

    println!();
    println!("[4/4] Starting the Quiz Application Server...");
    supervise::run_and_supervise(config, toolchain, &build_root)
}

fn print_header() {
    println!("{}", "=".repeat(50));
    println!("    Interactive Java Quiz Application Runner");
    println!("{}", "=".repeat(50));
    println!();
}

/// Interactive-terminal accommodation for double-click launches: hold the
/// window open until the operator confirms. Suppressed when stdin is not
/// a terminal so scripted runs never block.
fn pause_before_exit() {
    if unsafe { libc::isatty(libc::STDIN_FILENO) } != 1 {
        return;
    }
    eprint!("Press Enter to exit...");
    let _ = std::io::stderr().flush();
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
