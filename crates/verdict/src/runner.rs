//! Test execution - run registered tests in order

use crate::check::TestContext;
use crate::log::Logger;
use crate::registry::{TestCase, TestRegistry};

/// Aggregate counters for one `run_all` invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of test bodies executed
    pub tests_run: usize,
    /// Number of checks that succeeded across all tests
    pub checks_passed: usize,
    /// Number of checks that failed across all tests
    pub checks_failed: usize,
}

impl RunSummary {
    /// Whether any check failed during the run
    pub fn has_failures(&self) -> bool {
        self.checks_failed > 0
    }

    /// Total number of checks evaluated during the run
    pub fn checks_run(&self) -> usize {
        self.checks_passed + self.checks_failed
    }
}

/// Executes registered tests against a logger
///
/// The runner never mutates the registry, so the same registry can be run
/// any number of times; each run re-executes every test in registration
/// order. Failed checks inside a body are reported by the body's context
/// and never interrupt the run: the runner has no concept of a failed
/// test, only of checks counted in the returned [`RunSummary`].
pub struct TestRunner<'a> {
    logger: &'a Logger,
}

impl<'a> TestRunner<'a> {
    /// Create a runner reporting through the given logger
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }

    /// Run every registered test, in registration order
    pub fn run_all(&self, registry: &TestRegistry) -> RunSummary {
        let mut summary = RunSummary::default();
        for case in registry.all() {
            let (passed, failed) = self.run_case(case);
            summary.tests_run += 1;
            summary.checks_passed += passed;
            summary.checks_failed += failed;
        }
        summary
    }

    /// Run a single case, returning its (passed, failed) check counts
    fn run_case(&self, case: &TestCase) -> (usize, usize) {
        self.logger
            .info(format_args!("Running Test: {}.{}", case.suite, case.name));

        let mut ctx = TestContext::new(self.logger);
        (case.body)(&mut ctx);

        self.logger
            .info(format_args!("Test Passed: {}.{}", case.suite, case.name));

        (ctx.checks_passed(), ctx.checks_failed())
    }
}
