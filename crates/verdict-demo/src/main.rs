use clap::{Parser, ValueEnum};
use verdict::{ColorMode, Logger, RunSummary, TestRegistry, TestRunner};

mod samples;

/// Verdict test harness demo.
///
/// Registers a few sample test suites, runs them in registration order, and
/// reports every assertion outcome through the leveled logger. After the run
/// it emits one sample message at each log level, then a summary line.
///
/// EXAMPLES:
///     verdict-demo                  Run the sample suites once
///     verdict-demo --repeat 3       Run the whole registry three times
///     verdict-demo --color never    Disable colored output
#[derive(Parser)]
#[command(name = "verdict-demo")]
#[command(version)]
struct Cli {
    /// When to color output
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorArg,
    /// Number of times to run the whole registry
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    /// Auto-detect terminal capabilities
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let logger = Logger::stdout(cli.color.into());

    let mut registry = TestRegistry::new();
    samples::register_all(&mut registry);

    let runner = TestRunner::new(&logger);
    let mut summary = RunSummary::default();
    for _ in 0..cli.repeat {
        summary = runner.run_all(&registry);
    }

    logger.info("This is an informational message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.debug("This is a debug message");

    logger.blank(format_args!(
        "{} tests run, {} checks passed, {} checks failed",
        summary.tests_run, summary.checks_passed, summary.checks_failed
    ));

    // Exit with code 1 if any check failed
    if summary.has_failures() {
        std::process::exit(1);
    }
}
