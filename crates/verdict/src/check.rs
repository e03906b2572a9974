//! Assertion evaluation
//!
//! `TestContext` evaluates assertion forms and reports every outcome as a
//! single log line, success or failure. Failed assertions never unwind or
//! abort the enclosing test, so one run surfaces all failures at once.

use crate::log::{LogLevel, Logger};
use std::fmt;

/// Source location of an assertion call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// File the assertion appears in
    pub file: &'static str,
    /// Line the assertion appears on
    pub line: u32,
}

impl Location {
    /// Create a location from file and line
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Assertion evaluator handed to every test body
///
/// Each `check_*` method evaluates one predicate, logs exactly one line
/// describing the outcome, and returns normally either way. The context
/// counts successes and failures so the runner can aggregate them.
///
/// Contexts are independent of the runner: `TestContext::new` works against
/// any logger, so assertions are usable outside a registered test as well.
pub struct TestContext<'a> {
    logger: &'a Logger,
    checks_passed: usize,
    checks_failed: usize,
}

impl<'a> TestContext<'a> {
    /// Create a context reporting through the given logger
    pub fn new(logger: &'a Logger) -> Self {
        Self {
            logger,
            checks_passed: 0,
            checks_failed: 0,
        }
    }

    /// The logger this context reports through
    pub fn logger(&self) -> &Logger {
        self.logger
    }

    /// Number of checks that succeeded so far
    pub fn checks_passed(&self) -> usize {
        self.checks_passed
    }

    /// Number of checks that failed so far
    pub fn checks_failed(&self) -> usize {
        self.checks_failed
    }

    /// Check that a condition holds
    ///
    /// `source` is the condition's source text, reported in the log line.
    pub fn check(&mut self, condition: bool, source: &str, at: Location) {
        if condition {
            self.pass(format_args!("Assertion successful: {} [{}]", source, at));
        } else {
            self.fail(format_args!("Assertion failed: {} [{}]", source, at));
        }
    }

    /// Check that two values compare equal
    pub fn check_eq<T, U>(
        &mut self,
        expected: &T,
        actual: &U,
        expected_source: &str,
        actual_source: &str,
        at: Location,
    ) where
        T: PartialEq<U> + ?Sized,
        U: ?Sized,
    {
        if expected == actual {
            self.pass(format_args!(
                "Assertion successful: {} == {} [{}]",
                expected_source, actual_source, at
            ));
        } else {
            self.fail(format_args!(
                "Assertion failed: expected {}, got {} [{}]",
                expected_source, actual_source, at
            ));
        }
    }

    /// Check that two values compare unequal
    pub fn check_ne<T, U>(
        &mut self,
        not_expected: &T,
        actual: &U,
        not_expected_source: &str,
        actual_source: &str,
        at: Location,
    ) where
        T: PartialEq<U> + ?Sized,
        U: ?Sized,
    {
        if not_expected != actual {
            self.pass(format_args!(
                "Assertion successful: {} != {} [{}]",
                not_expected_source, actual_source, at
            ));
        } else {
            self.fail(format_args!(
                "Assertion failed: did not expect {}, but got {} [{}]",
                not_expected_source, actual_source, at
            ));
        }
    }

    /// Check that an option is `None`
    pub fn check_none<T>(&mut self, value: &Option<T>, source: &str, at: Location) {
        if value.is_none() {
            self.pass(format_args!(
                "Assertion successful: {} is None [{}]",
                source, at
            ));
        } else {
            self.fail(format_args!(
                "Assertion failed: expected None, got Some: {} [{}]",
                source, at
            ));
        }
    }

    /// Check that an option is `Some`
    pub fn check_some<T>(&mut self, value: &Option<T>, source: &str, at: Location) {
        if value.is_some() {
            self.pass(format_args!(
                "Assertion successful: {} is Some [{}]",
                source, at
            ));
        } else {
            self.fail(format_args!(
                "Assertion failed: did not expect None: {} [{}]",
                source, at
            ));
        }
    }

    fn pass(&mut self, message: fmt::Arguments<'_>) {
        self.checks_passed += 1;
        self.logger.log(LogLevel::Info, message);
    }

    fn fail(&mut self, message: fmt::Arguments<'_>) {
        self.checks_failed += 1;
        self.logger.log(LogLevel::Error, message);
    }
}

/// Capture the current file and line as a [`Location`]
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), line!())
    };
}

/// Check that a condition holds, logging the outcome
///
/// The condition's source text and call site are captured automatically.
///
/// ```
/// use verdict::{check, Logger, TestContext};
///
/// let (logger, output) = Logger::capture();
/// let mut t = TestContext::new(&logger);
/// check!(t, 1 + 1 == 2);
/// assert_eq!(t.checks_passed(), 1);
/// assert!(output.contents().starts_with("INFO: Assertion successful: 1 + 1 == 2"));
/// ```
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr $(,)?) => {
        $ctx.check($cond, stringify!($cond), $crate::location!())
    };
}

/// Check that `$expected == $actual`, logging the outcome
#[macro_export]
macro_rules! check_eq {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {
        $ctx.check_eq(
            &$expected,
            &$actual,
            stringify!($expected),
            stringify!($actual),
            $crate::location!(),
        )
    };
}

/// Check that `$not_expected != $actual`, logging the outcome
#[macro_export]
macro_rules! check_ne {
    ($ctx:expr, $not_expected:expr, $actual:expr $(,)?) => {
        $ctx.check_ne(
            &$not_expected,
            &$actual,
            stringify!($not_expected),
            stringify!($actual),
            $crate::location!(),
        )
    };
}

/// Check that an option is `None`, logging the outcome
#[macro_export]
macro_rules! check_none {
    ($ctx:expr, $value:expr $(,)?) => {
        $ctx.check_none(&$value, stringify!($value), $crate::location!())
    };
}

/// Check that an option is `Some`, logging the outcome
#[macro_export]
macro_rules! check_some {
    ($ctx:expr, $value:expr $(,)?) => {
        $ctx.check_some(&$value, stringify!($value), $crate::location!())
    };
}
