//! Invocation of the external HDL simulator.
//!
//! The simulator is run in batch mode (`-c`) with a single command script
//! (`-do <script>`), from inside the directory that holds the script so that
//! relative paths in the script resolve the way its author intended.
//!
//! # Example
//!
//! ```
//! use vregress_core::case::TestCase;
//! use vregress_core::simulator::Simulator;
//!
//! let sim = Simulator::new("/opt/aldec/bin", "vsim");
//! let inv = sim.invocation(&TestCase::new("CH2/VHDL/sim/tb.do", true), "/work");
//!
//! assert_eq!(inv.args, ["-c", "-do", "tb.do"]);
//! assert_eq!(inv.working_dir, std::path::Path::new("/work/CH2/VHDL/sim"));
//! ```

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::case::TestCase;

/// Install location of Riviera-PRO on the regression machine.
pub const DEFAULT_BIN_DIR: &str = r"C:\Aldec\Riviera-PRO-2023.04-x64\bin";

/// Simulator executable name inside [`DEFAULT_BIN_DIR`].
pub const DEFAULT_EXECUTABLE: &str = "vsim";

/// Errors that can occur when starting the simulator.
#[derive(Error, Debug)]
pub enum SimulatorError {
    /// The child process could not be created.
    ///
    /// Usually a missing executable or a missing working directory.
    #[error("failed to launch {} in {}: {source}", .program.display(), .working_dir.display())]
    Launch {
        program: PathBuf,
        working_dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Location of the simulator executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    /// Directory holding the simulator binaries.
    pub bin_dir: PathBuf,

    /// Name of the executable inside `bin_dir`.
    pub executable: String,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(DEFAULT_BIN_DIR, DEFAULT_EXECUTABLE)
    }
}

impl Simulator {
    /// Creates a simulator running `executable` from `bin_dir`.
    pub fn new(bin_dir: impl Into<PathBuf>, executable: impl Into<String>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
            executable: executable.into(),
        }
    }

    /// Full path of the simulator binary.
    pub fn executable_path(&self) -> PathBuf {
        self.bin_dir.join(&self.executable)
    }

    /// Builds the invocation that runs `case`, resolving its script
    /// directory against `root`.
    pub fn invocation(&self, case: &TestCase, root: impl AsRef<Path>) -> Invocation {
        Invocation {
            program: self.executable_path(),
            args: vec!["-c".into(), "-do".into(), case.script_name().to_os_string()],
            working_dir: root.as_ref().join(case.script_dir()),
        }
    }
}

/// A fully resolved simulator launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Full path of the simulator binary.
    pub program: PathBuf,

    /// Arguments, `-c -do <script>`.
    pub args: Vec<OsString>,

    /// Directory the child starts in.
    pub working_dir: PathBuf,
}

impl Invocation {
    /// Converts into a [`Command`] whose working directory is set on the
    /// child only.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.working_dir);
        cmd
    }

    pub(crate) fn launch_error(&self, source: std::io::Error) -> SimulatorError {
        SimulatorError::Launch {
            program: self.program.clone(),
            working_dir: self.working_dir.clone(),
            source,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        write!(f, " (in {})", self.working_dir.display())
    }
}
