//! View-mode coordination between the list and the form.
//!
//! The coordinator holds which screen is active (browse, create or edit) and,
//! for edit, which product is targeted. It does not validate the target; a
//! stale id simply is not found when the form looks it up.

use crate::core::observable::{Subject, Subscription};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Browse,
    Create,
    Edit,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Browse => "browse",
            ViewMode::Create => "create",
            ViewMode::Edit => "edit",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub mode: ViewMode,
    /// Product being edited; only meaningful in [`ViewMode::Edit`]
    pub target_id: Option<String>,
}

/// Publishes the current [`ViewState`]. Starts in browse mode.
#[derive(Default)]
pub struct ViewCoordinator {
    state: Subject<ViewState>,
}

impl ViewCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace mode and target together and notify subscribers
    pub fn set_mode(&self, mode: ViewMode, target_id: Option<String>) {
        log::debug!("View mode -> {mode} (target: {target_id:?})");
        self.state.next(ViewState { mode, target_id });
    }

    pub fn current(&self) -> ViewState {
        self.state.value()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription<ViewState>
    where
        F: FnMut(&ViewState) + 'static,
    {
        self.state.subscribe(listener)
    }
}
