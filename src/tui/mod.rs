//! Terminal User Interface for the catalog.
//!
//! A single-screen catalog browser: search input, category chips, and the
//! tool card list, with a summary popup and a full documentation page layered
//! on top of it. All state transitions happen synchronously in response to
//! key events.

mod app;
mod events;
mod input;
mod runner;
mod views;

pub use app::{App, Focus};
pub use events::{Event, EventHandler};
pub use input::SearchInput;
pub use runner::TuiRunner;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Green-first palette matching the platform branding.
pub mod colors {
    use ratatui::style::Color;

    pub const BRAND: Color = Color::Rgb(34, 197, 94); // Platform green
    pub const CHIP_ACTIVE: Color = Color::Rgb(22, 101, 52); // Dark green fill
    pub const DIAGNOSTICS: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SECURITY: Color = Color::Rgb(255, 215, 0); // Gold
    pub const IMMOBILIZER: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const FILE_CONVERSION: Color = Color::Rgb(218, 112, 214); // Orchid
    pub const UTILITIES: Color = Color::Rgb(100, 149, 237); // Cornflower blue
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const DIM: Color = Color::DarkGray;

    use crate::catalog::Category;

    /// Accent color for a category badge.
    pub fn for_category(category: Category) -> Color {
        match category {
            Category::Diagnostics => DIAGNOSTICS,
            Category::Security => SECURITY,
            Category::Immobilizer => IMMOBILIZER,
            Category::FileConversion => FILE_CONVERSION,
            Category::Utilities => UTILITIES,
        }
    }
}
