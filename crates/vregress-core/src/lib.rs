//! # vregress-core
//!
//! Core library for running HDL simulator regression scripts.
//!
//! Each regression case is a simulator command script (`.do` file). The
//! runner launches the simulator once per script, strictly one after the
//! other, and records what it exited with.
//!
//! ## Modules
//!
//! - [`case`] - Test case model and the built-in suite
//! - [`simulator`] - Simulator location and per-script invocation
//! - [`runner`] - Sequential runner and the [`runner::Launcher`] seam
//!
//! ## External Dependencies
//!
//! The simulator itself (Aldec Riviera-PRO `vsim` by default) must be
//! installed on the machine running the regression.
//!
//! ## Example
//!
//! ```no_run
//! use vregress_core::case::TestCase;
//! use vregress_core::runner::{ProcessLauncher, RegressionRunner};
//! use vregress_core::simulator::Simulator;
//!
//! let sim = Simulator::new("/opt/aldec/bin", "vsim");
//! let mut runner = RegressionRunner::new(sim, "/work/book", ProcessLauncher);
//! runner
//!     .run(&TestCase::default_suite(), &mut std::io::stdout())
//!     .expect("simulator could not be launched");
//! ```

pub mod case;
pub mod runner;
pub mod simulator;
