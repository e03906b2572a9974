//! Test registration
//!
//! Tests are installed into a [`TestRegistry`] explicitly, before execution
//! starts. The registry is an ordered sequence: registration order is
//! execution order, and duplicate suite/name pairs are legal (both run).
//!
//! The usual arrangement is one registration routine per module of tests:
//!
//! ```
//! use verdict::{check_eq, TestRegistry};
//!
//! fn register(registry: &mut TestRegistry) {
//!     registry.register("Math", "Addition", |t| check_eq!(t, 4, 2 + 2));
//! }
//!
//! let mut registry = TestRegistry::new();
//! register(&mut registry);
//! assert_eq!(registry.len(), 1);
//! ```

use crate::check::TestContext;

/// A test body: plain function pointer, no captures
///
/// Non-capturing closures coerce to this type, so registration call sites
/// can use closure syntax.
pub type TestFn = fn(&mut TestContext);

/// One registered test case
#[derive(Debug, Clone)]
pub struct TestCase {
    /// Suite the test belongs to
    pub suite: String,
    /// Name of the test within its suite
    pub name: String,
    /// The test body
    pub body: TestFn,
}

/// Ordered collection of registered tests
///
/// Grows without bound; `register` always succeeds. The registry is a plain
/// value: construct it, populate it, lend it to a runner, drop it. Programs
/// populating one registry from several threads wrap it in a `Mutex`.
#[derive(Debug, Clone, Default)]
pub struct TestRegistry {
    cases: Vec<TestCase>,
}

impl TestRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Append a test case to the end of the registry
    pub fn register(&mut self, suite: impl Into<String>, name: impl Into<String>, body: TestFn) {
        self.cases.push(TestCase {
            suite: suite.into(),
            name: name.into(),
            body,
        });
    }

    /// All registered cases, in registration order
    pub fn all(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of registered cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the registry has no cases
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_t: &mut TestContext) {}

    #[test]
    fn test_new_registry_is_empty() {
        let registry = TestRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.all().is_empty());
    }

    #[test]
    fn test_register_preserves_order() {
        let mut registry = TestRegistry::new();
        registry.register("A", "first", noop);
        registry.register("B", "second", noop);
        registry.register("A", "third", noop);

        let names: Vec<_> = registry
            .all()
            .iter()
            .map(|case| format!("{}.{}", case.suite, case.name))
            .collect();
        assert_eq!(names, vec!["A.first", "B.second", "A.third"]);
    }

    #[test]
    fn test_duplicate_descriptors_are_kept() {
        let mut registry = TestRegistry::new();
        registry.register("Suite", "same", noop);
        registry.register("Suite", "same", noop);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_closure_bodies_coerce() {
        let mut registry = TestRegistry::new();
        registry.register("Suite", "closure", |_t| {});
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_grows_past_fixed_bounds() {
        let mut registry = TestRegistry::new();
        for i in 0..501 {
            registry.register("Bulk", format!("case_{}", i), noop);
        }
        assert_eq!(registry.len(), 501);
        assert_eq!(registry.all()[500].name, "case_500");
    }
}
