//! Actions that commands resolve to

use crate::domain::Tab;

/// State changes requested by a command or key
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch to a tab
    Navigate(Tab),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Export the current view
    Export,

    /// Reload the dataset from its source
    Reload,

    /// Toggle the help popup
    ToggleHelp,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
