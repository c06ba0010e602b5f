//! MedScan CLI - command-line interface for the diagnostic engines.
//!
//! One subcommand per analyzer plus case-bank management. Every command
//! supports `--json` for machine-readable output; the human mode prints
//! colored summaries.

pub mod commands;
pub mod input;
pub mod output;
