//! Verdict - minimal self-registering test harness
//!
//! This library provides the pieces of a small test harness:
//! - Leveled, colored logging (`log`)
//! - Non-propagating assertion evaluation (`check`)
//! - Explicit, ordered test registration (`registry`)
//! - Sequential test execution with aggregate counters (`runner`)
//!
//! Hosts construct a [`Logger`] and a [`TestRegistry`], call their test
//! modules' registration routines, then hand the registry to a
//! [`TestRunner`]. Assertions log their outcome and continue, so a single
//! run surfaces every failure.

/// Verdict harness version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod check;
pub mod log;
pub mod registry;
pub mod runner;

// Re-export commonly used types
pub use check::{Location, TestContext};
pub use log::{CaptureBuffer, ColorMode, LogLevel, Logger};
pub use registry::{TestCase, TestFn, TestRegistry};
pub use runner::{RunSummary, TestRunner};
