//! Regression test cases.
//!
//! A [`TestCase`] names a simulator command script (a `.do` file) and the
//! outcome its author expects. The built-in suite is returned by
//! [`TestCase::default_suite`].
//!
//! # Example
//!
//! ```
//! use vregress_core::case::TestCase;
//!
//! let case = TestCase::new("CH2/VHDL/sim/tb.do", true);
//! assert_eq!(case.script_name(), "tb.do");
//! assert_eq!(case.script_dir(), std::path::Path::new("CH2/VHDL/sim"));
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Scripts run by default, in order.
const DEFAULT_SUITE: &[(&str, bool)] = &[
    ("CH2/VHDL/sim/tb.do", true),
    ("CH2/VHDL/sim/tb_challenge.do", false),
    ("CH2/VHDL/sim/tb_challenge_solution.do", true),
];

/// A single simulator script and its expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    /// Path to the command script, relative to the regression root.
    pub script: PathBuf,

    /// Whether the script is expected to pass.
    ///
    /// Reported alongside results but never compared against the
    /// simulator's exit code.
    pub expected_pass: bool,
}

impl TestCase {
    /// Creates a case for `script`, relative to the regression root.
    pub fn new(script: impl Into<PathBuf>, expected_pass: bool) -> Self {
        Self {
            script: script.into(),
            expected_pass,
        }
    }

    /// The built-in regression suite.
    pub fn default_suite() -> Vec<TestCase> {
        DEFAULT_SUITE
            .iter()
            .map(|(script, expected)| TestCase::new(*script, *expected))
            .collect()
    }

    /// File name of the script, as handed to the simulator's `-do` option.
    pub fn script_name(&self) -> &OsStr {
        self.script.file_name().unwrap_or_default()
    }

    /// Directory containing the script.
    ///
    /// A bare file name lives in `.`.
    pub fn script_dir(&self) -> &Path {
        match self.script.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}
