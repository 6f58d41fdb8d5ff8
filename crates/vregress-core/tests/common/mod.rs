//! Shared test helpers for vregress-core integration tests.

use std::collections::HashSet;

use vregress_core::runner::Launcher;
use vregress_core::simulator::{Invocation, SimulatorError};

/// Records every invocation and answers with scripted exit codes.
///
/// Exit codes are consumed in order; once exhausted every launch returns
/// `Some(0)`. Launches whose index is in `fail_at` return a launch error
/// instead, without consuming an exit code.
#[derive(Default)]
pub struct RecordingLauncher {
    pub invocations: Vec<Invocation>,
    pub exit_codes: Vec<Option<i32>>,
    pub fail_at: HashSet<usize>,
}

impl RecordingLauncher {
    pub fn with_exit_codes(exit_codes: Vec<Option<i32>>) -> Self {
        Self {
            exit_codes,
            ..Default::default()
        }
    }

    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: HashSet::from([index]),
            ..Default::default()
        }
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<Option<i32>, SimulatorError> {
        let index = self.invocations.len();
        self.invocations.push(invocation.clone());

        if self.fail_at.contains(&index) {
            return Err(SimulatorError::Launch {
                program: invocation.program.clone(),
                working_dir: invocation.working_dir.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        if self.exit_codes.is_empty() {
            Ok(Some(0))
        } else {
            Ok(self.exit_codes.remove(0))
        }
    }
}
