//! adzdiag - Terminal catalog browser for the ADZDiag ECU tooling platform
//!
//! Renders the platform's static tool catalog with text/category filtering,
//! per-tool summary and documentation views, and deep links into the
//! external platform.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod filter;
pub mod launch;
pub mod selection;
pub mod tui;

pub use error::{AdzError, Result};
