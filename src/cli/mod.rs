//! CLI module for adzdiag - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for browsing the tool
//! catalog from scripts, plus the default TUI launch.

pub mod commands;

pub use commands::Cli;
