//! Shared test utilities
//!
//! Helpers for driving a registry end to end against a capture logger and
//! asserting on the emitted lines.

use verdict::{Logger, RunSummary, TestRegistry, TestRunner};

// Re-export testing utilities
pub use pretty_assertions::{assert_eq, assert_ne};

/// Run every test in the registry against a capture logger
///
/// Returns the emitted log lines and the run summary.
///
/// # Example
/// ```
/// let (lines, summary) = run_capture(&registry);
/// assert!(!summary.has_failures());
/// ```
pub fn run_capture(registry: &TestRegistry) -> (Vec<String>, RunSummary) {
    let (logger, output) = Logger::capture();
    let summary = TestRunner::new(&logger).run_all(registry);
    (output.lines(), summary)
}
