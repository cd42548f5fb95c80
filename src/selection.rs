//! Tool selection state machine.
//!
//! At most one tool is ever presented, in one of two presentations: the
//! summary popup or the full documentation page. The three-way exclusivity
//! is structural: a single tagged variant, never two independent options.
//!
//! Transitions:
//! - `Idle --select(T)--> Summary(T)`
//! - `Summary(T) --close--> Idle`
//! - `Summary(T) --show_docs--> Docs(T)`
//! - `Docs(T) --back--> Idle`
//! - `Summary(T) --open_external--> Idle` (dispatches the launcher first)
//! - `Docs(T) --open_external--> Docs(T)` (dispatches, stays on the page)
//!
//! There is no direct `Docs -> Summary` edge: reaching the summary again
//! requires going back to the list and re-selecting.

use log::debug;

use crate::catalog::ToolRecord;
use crate::launch::{self, Launcher};

/// Which presentation, if any, is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected; the tool list has focus.
    #[default]
    Idle,
    /// Summary popup for one tool.
    Summary(&'static ToolRecord),
    /// Full documentation page for one tool.
    Docs(&'static ToolRecord),
}

impl Selection {
    /// Select a tool from the list, opening its summary popup.
    ///
    /// Only meaningful from `Idle`; while a popup or the docs page is up the
    /// list is not interactive, so the request is dropped.
    pub fn select(&mut self, tool: &'static ToolRecord) {
        match self {
            Selection::Idle => *self = Selection::Summary(tool),
            _ => debug!("select({}) ignored outside Idle", tool.id),
        }
    }

    /// Close the summary popup.
    pub fn close(&mut self) {
        if let Selection::Summary(_) = self {
            *self = Selection::Idle;
        }
    }

    /// Swap the summary popup for the documentation page of the same tool.
    ///
    /// The popup is dismissed as part of this single transition; there is no
    /// observable intermediate `Idle`.
    pub fn show_docs(&mut self) {
        if let Selection::Summary(tool) = *self {
            *self = Selection::Docs(tool);
        }
    }

    /// Leave the documentation page.
    pub fn back(&mut self) {
        if let Selection::Docs(_) = self {
            *self = Selection::Idle;
        }
    }

    /// Open the presented tool on the external platform.
    ///
    /// From the summary popup this also closes the popup; the docs page stays
    /// put. The transition does not depend on whether the launch succeeded.
    pub fn open_external(&mut self, launcher: &dyn Launcher, base_url: &str) {
        match *self {
            Selection::Summary(tool) => {
                launch::open_tool(launcher, base_url, tool.id);
                *self = Selection::Idle;
            }
            Selection::Docs(tool) => {
                launch::open_tool(launcher, base_url, tool.id);
            }
            Selection::Idle => {}
        }
    }

    /// The tool currently presented, in either presentation.
    pub fn tool(&self) -> Option<&'static ToolRecord> {
        match self {
            Selection::Idle => None,
            Selection::Summary(tool) | Selection::Docs(tool) => Some(tool),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// Tool shown in the summary popup, if that presentation is active.
    pub fn summary_tool(&self) -> Option<&'static ToolRecord> {
        match self {
            Selection::Summary(tool) => Some(tool),
            _ => None,
        }
    }

    /// Tool shown on the documentation page, if that presentation is active.
    pub fn docs_tool(&self) -> Option<&'static ToolRecord> {
        match self {
            Selection::Docs(tool) => Some(tool),
            _ => None,
        }
    }
}
