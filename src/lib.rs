//! Dominion simulator
//!
//! A rules engine for the Dominion deck-building card game, built for running
//! large numbers of automated AI-vs-AI games: card effects, the turn/phase
//! state machine, supply management and a pluggable decision interface.

/// Log at Normal level, compiling the formatting away when the
/// `verbose-logging` feature is disabled
///
/// Also skips the `format!` allocation when nothing would consume the line.
macro_rules! log_if_verbose {
    ($state:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            if $state.logger.enabled($crate::game::VerbosityLevel::Normal) {
                $state.logger.normal(&format!($($arg)*));
            }
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$state; // Suppress unused variable warning
        }
    };
}

/// Same as `log_if_verbose!` at Verbose level
macro_rules! trace_if_verbose {
    ($state:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            if $state.logger.enabled($crate::game::VerbosityLevel::Verbose) {
                $state.logger.verbose(&format!($($arg)*));
            }
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$state;
        }
    };
}

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod loader;
pub mod tournament;
pub mod zones;

pub use error::{DominionError, Result};
