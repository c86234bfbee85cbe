//! Presentation layer for stylegen
//!
//! This crate contains CLI definitions, output formatters and
//! submission progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{AdArgs, Cli, Command, OutputFormat, StyleArgs};
pub use output::console::{ConsoleFormatter, SubmissionReport};
pub use progress::reporter::{SimpleNotifier, SubmissionReporter};
