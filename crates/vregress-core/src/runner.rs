//! Sequential regression runner.
//!
//! [`RegressionRunner`] walks a list of [`TestCase`]s in order, prints a
//! banner for each one and launches the simulator through a [`Launcher`],
//! blocking until the child exits. The simulator's exit code is recorded in
//! the [`RunReport`] but never affects control flow: a failing simulation
//! does not stop the run. A launch failure does, and the remaining cases are
//! not attempted.
//!
//! # Example
//!
//! ```no_run
//! use vregress_core::case::TestCase;
//! use vregress_core::runner::{ProcessLauncher, RegressionRunner};
//! use vregress_core::simulator::Simulator;
//!
//! let mut runner = RegressionRunner::new(Simulator::default(), ".", ProcessLauncher);
//! let report = runner
//!     .run(&TestCase::default_suite(), &mut std::io::stdout())
//!     .unwrap();
//! println!("{} scripts launched", report.launched());
//! ```

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::case::TestCase;
use crate::simulator::{Invocation, Simulator, SimulatorError};

const BANNER_RULE: &str = "-----------------------------------------------------------------";

/// Errors that abort a regression run.
#[derive(Error, Debug)]
pub enum RunError {
    /// Case `index` could not be launched. Later cases were skipped.
    #[error("case {index} ({}): {source}", .script.display())]
    Launch {
        index: usize,
        script: PathBuf,
        #[source]
        source: SimulatorError,
    },

    /// The banner could not be written.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Starts a simulator invocation and waits for it to finish.
pub trait Launcher {
    /// Returns the child's exit code, or `None` if it was killed by a signal.
    fn launch(&mut self, invocation: &Invocation) -> Result<Option<i32>, SimulatorError>;
}

/// Launches real child processes, inheriting stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<Option<i32>, SimulatorError> {
        let status = invocation
            .to_command()
            .status()
            .map_err(|e| invocation.launch_error(e))?;
        Ok(status.code())
    }
}

/// Result of one launched case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Script path as listed in the suite.
    pub script: PathBuf,

    /// The case's expected outcome, copied from the [`TestCase`].
    pub expected_pass: bool,

    /// Exit code of the simulator, `None` if it was killed by a signal.
    pub exit_code: Option<i32>,
}

/// Outcomes of every case that was launched, in launch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// One entry per launched case.
    pub outcomes: Vec<CaseOutcome>,
}

impl RunReport {
    /// Number of simulator processes that were started.
    pub fn launched(&self) -> usize {
        self.outcomes.len()
    }
}

/// Runs test cases one after the other through a [`Launcher`].
///
/// Holds the simulator location and the directory that script paths are
/// relative to.
pub struct RegressionRunner<L> {
    simulator: Simulator,
    root: PathBuf,
    launcher: L,
}

impl<L: Launcher> RegressionRunner<L> {
    /// Creates a runner. Script paths are resolved against `root`.
    pub fn new(simulator: Simulator, root: impl Into<PathBuf>, launcher: L) -> Self {
        Self {
            simulator,
            root: root.into(),
            launcher,
        }
    }

    /// The launcher this runner was built with.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Runs every case in order, writing one banner per case to `out`.
    ///
    /// # Errors
    ///
    /// - [`RunError::Launch`] on the first case whose process could not be
    ///   created; no further cases are launched
    /// - [`RunError::Output`] if writing the banner fails
    pub fn run<W: Write>(
        &mut self,
        cases: &[TestCase],
        out: &mut W,
    ) -> Result<RunReport, RunError> {
        let mut report = RunReport::default();

        for (index, case) in cases.iter().enumerate() {
            write_banner(out, case)?;

            let invocation = self.simulator.invocation(case, &self.root);
            info!(script = %case.script.display(), "running script");
            debug!(%invocation, "launching simulator");

            // TODO: compare exit_code with expected_pass once the simulator's
            // PASS/FAIL convention for these scripts is settled.
            let exit_code = self
                .launcher
                .launch(&invocation)
                .map_err(|source| RunError::Launch {
                    index,
                    script: case.script.clone(),
                    source,
                })?;
            debug!(script = %case.script.display(), ?exit_code, "simulator exited");

            report.outcomes.push(CaseOutcome {
                script: case.script.clone(),
                expected_pass: case.expected_pass,
                exit_code,
            });
        }

        Ok(report)
    }
}

fn write_banner<W: Write>(out: &mut W, case: &TestCase) -> std::io::Result<()> {
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "Run script: {}", case.script.display())?;
    writeln!(out, "{}", BANNER_RULE)?;
    out.flush()
}
