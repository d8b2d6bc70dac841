//! Centralized game logger
//!
//! Messages go to stdout, to an in-memory buffer, or both. Tests switch the
//! logger to capture mode and inspect `logs()` instead of parsing stdout.

use crate::game::VerbosityLevel;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log line
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Verbosity level of this log entry
    pub level: VerbosityLevel,
    pub message: String,
    /// Optional category (e.g., "controller_choice", "fallback")
    pub category: Option<&'static str>,
}

/// Guard type that provides read-only access to log entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }

    /// Does any captured line contain `needle`?
    pub fn contains(&self, needle: &str) -> bool {
        self.guard.iter().any(|entry| entry.message.contains(needle))
    }
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Game event logger
///
/// The buffer sits behind a `RefCell` so logging only needs `&self`; engine
/// code can log while holding other borrows of the game state.
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    /// Create a logger with specified verbosity
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    /// Set output mode (Stdout, Memory, or Both)
    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Capture to the in-memory buffer and suppress stdout
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn disable_capture(&mut self) {
        self.output_mode = OutputMode::Stdout;
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.output_mode, OutputMode::Memory | OutputMode::Both)
    }

    /// Print buffered lines allowed by the current verbosity, then clear the buffer
    pub fn flush_buffer(&mut self) {
        for entry in self.log_buffer.borrow().iter() {
            if entry.level <= self.verbosity {
                Self::log_to_stdout(entry.level, &entry.message);
            }
        }
        self.clear_logs();
    }

    /// Print only the last `tail_lines` buffered lines, then clear the buffer
    pub fn flush_tail(&mut self, tail_lines: usize) {
        {
            let buffer = self.log_buffer.borrow();
            let elided = buffer.len().saturating_sub(tail_lines);
            if elided > 0 {
                println!(">>> {elided} LOG LINES ELIDED. PRINTING LAST {tail_lines} LINES <<<");
            }
            for entry in buffer.iter().skip(elided) {
                if entry.level <= self.verbosity {
                    Self::log_to_stdout(entry.level, &entry.message);
                }
            }
        }
        self.clear_logs();
    }

    /// Get access to captured log entries
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    pub fn clear_logs(&mut self) {
        self.log_buffer.borrow_mut().clear();
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    /// Would a message at `level` be printed or captured?
    #[inline]
    pub fn enabled(&self, level: VerbosityLevel) -> bool {
        level <= self.verbosity || self.is_capturing()
    }

    #[inline]
    fn log_to_stdout(level: VerbosityLevel, message: &str) {
        if level == VerbosityLevel::Minimal {
            println!("{message}");
        } else {
            println!("  {message}");
        }
    }

    #[inline]
    fn emit(&self, level: VerbosityLevel, category: Option<&'static str>, message: &str) {
        let should_capture = self.is_capturing();
        let should_output = matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both);

        // Early exit if message won't be used
        if level > self.verbosity && !should_capture {
            return;
        }

        if should_capture {
            self.log_buffer.borrow_mut().push(LogEntry {
                level,
                message: message.to_string(),
                category,
            });
        }

        if should_output && level <= self.verbosity {
            Self::log_to_stdout(level, message);
        }
    }

    /// Log at Minimal level (game results)
    #[inline]
    pub fn minimal(&self, message: &str) {
        self.emit(VerbosityLevel::Minimal, None, message);
    }

    /// Log at Normal level (turns, plays, buys, gains, trashes)
    #[inline]
    pub fn normal(&self, message: &str) {
        self.emit(VerbosityLevel::Normal, None, message);
    }

    /// Log at Verbose level (draws, shuffles, reactions)
    #[inline]
    pub fn verbose(&self, message: &str) {
        self.emit(VerbosityLevel::Verbose, None, message);
    }

    /// Log a controller decision at Verbose level
    ///
    /// Only the choice is logged, not the controller type, so logs of the
    /// same game match regardless of which controller made the choice.
    #[inline]
    pub fn controller_choice(&self, player_name: &str, message: &str) {
        if VerbosityLevel::Verbose > self.verbosity && !self.is_capturing() {
            return;
        }
        self.emit(
            VerbosityLevel::Verbose,
            Some("controller_choice"),
            &format!("{player_name} chose {message}"),
        );
    }

    /// Log an invalid controller answer that was replaced by the default
    pub fn fallback(&self, controller_name: &str, message: &str) {
        if VerbosityLevel::Verbose > self.verbosity && !self.is_capturing() {
            return;
        }
        self.emit(
            VerbosityLevel::Verbose,
            Some("fallback"),
            &format!("{controller_name}: invalid choice, {message}"),
        );
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}

impl Clone for GameLogger {
    fn clone(&self) -> Self {
        GameLogger {
            verbosity: self.verbosity,
            output_mode: self.output_mode,
            log_buffer: RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = GameLogger::new();
        assert_eq!(logger.verbosity(), VerbosityLevel::Normal);
    }

    #[test]
    fn test_log_capture() {
        let mut logger = GameLogger::new();
        logger.enable_capture();

        logger.normal("test message");
        logger.minimal("minimal message");

        let logs = logger.logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "test message");
        assert_eq!(logs[1].message, "minimal message");
    }

    #[test]
    fn test_capture_ignores_verbosity() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Silent);
        logger.enable_capture();

        logger.verbose("shuffled");
        logger.fallback("Zero", "took first option");

        let logs = logger.logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[1].category, Some("fallback"));
        assert!(logs.contains("took first option"));
    }

    #[test]
    fn test_flush_buffer() {
        let mut logger = GameLogger::new();
        logger.enable_capture();

        logger.normal("message 1");
        logger.normal("message 2");
        assert_eq!(logger.logs().len(), 2);

        logger.flush_buffer();
        assert_eq!(logger.logs().len(), 0);
    }

    #[test]
    fn test_disable_capture() {
        let mut logger = GameLogger::new();
        logger.enable_capture();
        assert!(logger.is_capturing());

        logger.disable_capture();
        assert!(!logger.is_capturing());
    }
}
