//! TUI application state.
//!
//! Owns the filter inputs, the list cursor, and the selection state machine,
//! and maps key events onto them. All mutation happens here, synchronously,
//! one key at a time.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

use super::input::SearchInput;
use crate::catalog::{CategoryFilter, ToolRecord};
use crate::filter::{FilterCache, FilterState};
use crate::launch::Launcher;
use crate::selection::Selection;

/// Which widget receives plain keystrokes while nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Navigating the tool list and category chips
    #[default]
    List,
    /// Typing in the search box
    Search,
}

/// All mutable state for the catalog browser.
pub struct App {
    /// Search query buffer
    pub search: SearchInput,
    /// Index into `CategoryFilter::CHIPS`
    chip_idx: usize,
    /// Cursor position within the filtered list
    cursor: usize,
    /// Summary popup / documentation page state
    pub selection: Selection,
    /// Current input focus (list or search box)
    focus: Focus,
    /// Memoized filtered view
    cache: FilterCache,
    /// Scroll offset on the documentation page
    docs_scroll: u16,
    /// Platform base URL for external opens
    base_url: String,
    /// Outbound link dispatcher
    launcher: Arc<dyn Launcher>,
    /// Transient status line message
    pub status: Option<String>,
    /// Whether the application should quit
    should_quit: bool,
}

impl App {
    /// Create an app dispatching external opens through `launcher`.
    pub fn new(base_url: impl Into<String>, launcher: Arc<dyn Launcher>) -> Self {
        Self {
            search: SearchInput::new(),
            chip_idx: 0,
            cursor: 0,
            selection: Selection::Idle,
            focus: Focus::List,
            cache: FilterCache::new(),
            docs_scroll: 0,
            base_url: base_url.into(),
            launcher,
            status: None,
            should_quit: false,
        }
    }

    /// The current filter inputs.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.search.content().to_string(),
            category: CategoryFilter::CHIPS[self.chip_idx],
        }
    }

    /// The filtered tool list for the current inputs.
    pub fn visible(&mut self) -> Vec<&'static ToolRecord> {
        let filter = self.filter_state();
        self.cache.results(&filter).to_vec()
    }

    /// Tool under the list cursor, if the filtered list is nonempty.
    pub fn tool_under_cursor(&mut self) -> Option<&'static ToolRecord> {
        let cursor = self.cursor;
        self.visible().get(cursor).copied()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn chip_idx(&self) -> usize {
        self.chip_idx
    }

    pub fn docs_scroll(&self) -> u16 {
        self.docs_scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Route a key event to the active surface.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status = None;

        // Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.selection {
            Selection::Summary(_) => self.handle_summary_key(key),
            Selection::Docs(_) => self.handle_docs_key(key),
            Selection::Idle => match self.focus {
                Focus::Search => self.handle_search_key(key),
                Focus::List => self.handle_list_key(key),
            },
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Tab | KeyCode::Right => self.next_chip(),
            KeyCode::BackTab | KeyCode::Left => self.prev_chip(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),
            KeyCode::Enter => {
                if let Some(tool) = self.tool_under_cursor() {
                    self.selection.select(tool);
                }
            }
            KeyCode::Esc => self.reset_filters(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => self.focus = Focus::List,
            _ => {
                if self.search.handle_key(&key) {
                    // The filtered list moved under the cursor
                    self.cursor = 0;
                }
            }
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.selection.close(),
            KeyCode::Enter | KeyCode::Char('o') => {
                let name = self.selection.tool().map(|t| t.name);
                self.selection.open_external(self.launcher.as_ref(), &self.base_url);
                if let Some(name) = name {
                    self.status = Some(format!("Opening {} in ADZDiag", name));
                }
            }
            KeyCode::Char('d') => {
                self.docs_scroll = 0;
                self.selection.show_docs();
            }
            _ => {}
        }
    }

    fn handle_docs_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => self.selection.back(),
            KeyCode::Char('o') => {
                let name = self.selection.tool().map(|t| t.name);
                self.selection.open_external(self.launcher.as_ref(), &self.base_url);
                if let Some(name) = name {
                    self.status = Some(format!("Opening {} in ADZDiag", name));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.docs_scroll = self.docs_scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.docs_scroll = self.docs_scroll.saturating_sub(1),
            KeyCode::PageDown => self.docs_scroll = self.docs_scroll.saturating_add(10),
            KeyCode::PageUp => self.docs_scroll = self.docs_scroll.saturating_sub(10),
            KeyCode::Home => self.docs_scroll = 0,
            _ => {}
        }
    }

    fn next_chip(&mut self) {
        self.chip_idx = (self.chip_idx + 1) % CategoryFilter::CHIPS.len();
        self.cursor = 0;
    }

    fn prev_chip(&mut self) {
        let len = CategoryFilter::CHIPS.len();
        self.chip_idx = (self.chip_idx + len - 1) % len;
        self.cursor = 0;
    }

    fn cursor_down(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    fn cursor_up(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    fn reset_filters(&mut self) {
        self.search.clear();
        self.chip_idx = 0;
        self.cursor = 0;
    }
}
