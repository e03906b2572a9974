//! Sample test suites for the demo

use verdict::{check, check_eq, check_ne, check_none, check_some, TestRegistry};

/// Install every sample suite, in display order
pub fn register_all(registry: &mut TestRegistry) {
    register_harness(registry);
    register_math(registry);
    register_strings(registry);
    register_options(registry);
}

/// A test body can log directly through its context
pub fn register_harness(registry: &mut TestRegistry) {
    registry.register("Harness", "Example", |t| {
        t.logger().info("Test case macro test");
        check!(t, true);
    });
}

/// Arithmetic checks
pub fn register_math(registry: &mut TestRegistry) {
    registry.register("Math", "Addition", |t| {
        check_eq!(t, 4, 2 + 2);
        check!(t, 10 - 5 == 5);
    });
    registry.register("Math", "Multiplication", |t| {
        check_eq!(t, 42, 6 * 7);
        check_ne!(t, 0, 6 * 7);
    });
}

/// String checks
pub fn register_strings(registry: &mut TestRegistry) {
    registry.register("Strings", "Concat", |t| {
        let greeting = format!("{} {}", "hello", "world");
        check_eq!(t, "hello world", greeting);
        check!(t, greeting.len() == 11);
    });
    registry.register("Strings", "Find", |t| {
        let haystack = "the quick brown fox";
        check_some!(t, haystack.find("quick"));
        check_none!(t, haystack.find("lazy"));
    });
}

/// Option checks
pub fn register_options(registry: &mut TestRegistry) {
    registry.register("Options", "Division", |t| {
        check_some!(t, 10_u32.checked_div(2));
        check_none!(t, 10_u32.checked_div(0));
    });
}
