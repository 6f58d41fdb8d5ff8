//! Regression runner for HDL simulator command scripts.
//!
//! Runs each script of the built-in suite through the simulator in batch
//! mode, one after the other, from inside the script's directory.
//!
//! # Usage
//!
//! ```bash
//! # Run the whole suite with the default Riviera-PRO install
//! vregress
//!
//! # Same, explicitly
//! vregress run
//!
//! # Only the challenge scripts
//! vregress run --filter challenge
//!
//! # Point at another simulator install and regression root
//! vregress --simulator-dir /opt/aldec/bin --root ~/book run
//!
//! # Show the suite without running anything
//! vregress list
//! vregress list --format json
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vregress_core::case::TestCase;
use vregress_core::runner::{ProcessLauncher, RegressionRunner, RunError};
use vregress_core::simulator::{Simulator, DEFAULT_BIN_DIR, DEFAULT_EXECUTABLE};

/// Regression runner for HDL simulator command scripts.
#[derive(Parser)]
#[command(name = "vregress")]
#[command(about = "Run HDL simulator regression scripts one after the other")]
#[command(version)]
struct Cli {
    /// Directory containing the simulator executable
    #[arg(long, default_value = DEFAULT_BIN_DIR, env = "VREGRESS_SIMULATOR_DIR")]
    simulator_dir: PathBuf,

    /// Simulator executable name
    #[arg(long, default_value = DEFAULT_EXECUTABLE, env = "VREGRESS_EXECUTABLE")]
    executable: String,

    /// Directory that script paths are relative to
    #[arg(long, default_value = ".", env = "VREGRESS_ROOT")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Run the regression suite (default)
    Run {
        /// Only run scripts whose path contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List the regression suite without running it
    List {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

#[derive(Debug)]
enum CliError {
    Launch(String),
    Io(std::io::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Launch(_) => ExitCode::from(2),
            CliError::Io(_) => ExitCode::from(4),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Launch(msg) => write!(f, "Launch failed: {}", msg),
            CliError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl From<RunError> for CliError {
    fn from(e: RunError) -> Self {
        match e {
            RunError::Launch { .. } => CliError::Launch(e.to_string()),
            RunError::Output(io) => CliError::Io(io),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

fn select_cases(filter: Option<&str>) -> Vec<TestCase> {
    let suite = TestCase::default_suite();
    match filter {
        Some(needle) => suite
            .into_iter()
            .filter(|case| case.script.to_string_lossy().contains(needle))
            .collect(),
        None => suite,
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let simulator = Simulator::new(cli.simulator_dir, cli.executable);

    match cli.command.unwrap_or(Command::Run { filter: None }) {
        Command::Run { filter } => {
            let cases = select_cases(filter.as_deref());
            let mut runner = RegressionRunner::new(simulator, cli.root, ProcessLauncher);
            let report = runner.run(&cases, &mut std::io::stdout().lock())?;
            info!(launched = report.launched(), "regression finished");
            Ok(())
        }
        Command::List { format } => {
            let cases = TestCase::default_suite();
            let mut out = std::io::stdout().lock();
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&cases)
                        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                    writeln!(out, "{}", json)?;
                }
                OutputFormat::Text => {
                    for case in &cases {
                        let expected = if case.expected_pass { "pass" } else { "fail" };
                        writeln!(out, "{}\t{}", case.script.display(), expected)?;
                    }
                }
            }
            Ok(())
        }
    }
}
