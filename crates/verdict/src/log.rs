//! Leveled, color-aware logging channel
//!
//! Formats messages as `LABEL: message` with a bold colored label and writes
//! them to a shared sink. Respects NO_COLOR environment variable and
//! auto-detects terminal capabilities.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

/// Color mode for log output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Never use colors
    Never,
    /// Auto-detect terminal capabilities
    Auto,
}

impl ColorMode {
    /// Resolve to a termcolor ColorChoice
    pub fn to_color_choice(self) -> ColorChoice {
        // Always respect NO_COLOR (https://no-color.org)
        if std::env::var("NO_COLOR").is_ok() {
            return ColorChoice::Never;
        }
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => ColorChoice::Auto,
        }
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Auto
    }
}

/// Severity of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Warning message
    Warning,
    /// Error message
    Error,
    /// Debug message
    Debug,
    /// Unprefixed passthrough: the message line only, no label or color
    Blank,
}

impl LogLevel {
    fn decoration(self) -> Option<(Color, &'static str)> {
        match self {
            LogLevel::Info => Some((Color::Green, "INFO")),
            LogLevel::Warning => Some((Color::Yellow, "WARNING")),
            LogLevel::Error => Some((Color::Red, "ERROR")),
            LogLevel::Debug => Some((Color::Blue, "DEBUG")),
            LogLevel::Blank => None,
        }
    }
}

/// Leveled logger over a color-aware sink
///
/// The sink is guarded by a mutex, so a `Logger` can be shared by reference
/// between the test runner and any number of test contexts. Write errors are
/// swallowed: a diagnostic channel must not become a failure source itself.
pub struct Logger {
    sink: Mutex<Box<dyn WriteColor + Send>>,
}

impl Logger {
    /// Create a logger writing to stdout with the given color mode
    pub fn stdout(color_mode: ColorMode) -> Self {
        Self::with_writer(Box::new(StandardStream::stdout(
            color_mode.to_color_choice(),
        )))
    }

    /// Create a logger over an arbitrary color-aware sink
    pub fn with_writer(sink: Box<dyn WriteColor + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Create a logger writing to an in-memory buffer (for testing)
    ///
    /// The returned handle reads back everything the logger has written.
    /// Captured output never contains color escapes.
    pub fn capture() -> (Self, CaptureBuffer) {
        let buffer = CaptureBuffer::default();
        let logger = Self::with_writer(Box::new(NoColor::new(buffer.clone())));
        (logger, buffer)
    }

    /// Write one message line at the given level
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        let mut sink = self.sink.lock().expect("Logger sink lock poisoned");
        let _ = write_message(&mut **sink, level, &message);
    }

    /// Write one informational line
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    /// Write one warning line
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warning, message);
    }

    /// Write one error line
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Write one debug line
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    /// Write one unprefixed line
    pub fn blank(&self, message: impl fmt::Display) {
        self.log(LogLevel::Blank, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout(ColorMode::Auto)
    }
}

fn write_message(
    w: &mut (dyn WriteColor + Send),
    level: LogLevel,
    message: &dyn fmt::Display,
) -> io::Result<()> {
    if let Some((color, label)) = level.decoration() {
        w.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(w, "{}: ", label)?;
        w.reset()?;
    }
    writeln!(w, "{}", message)?;
    w.flush()?;
    Ok(())
}

/// Shared in-memory sink handle returned by [`Logger::capture`]
///
/// Cloning is shallow: all clones read the same underlying buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    data: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Everything written so far, as one string
    pub fn contents(&self) -> String {
        let data = self.data.lock().expect("CaptureBuffer lock poisoned");
        String::from_utf8_lossy(&data).into_owned()
    }

    /// Everything written so far, split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.data
            .lock()
            .expect("CaptureBuffer lock poisoned")
            .clear();
    }
}

impl io::Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data
            .lock()
            .expect("CaptureBuffer lock poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
