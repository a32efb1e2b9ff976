//! UI state shared with the renderers

use crate::config::Links;
use crate::domain::Tab;
use crate::infrastructure::ClockLocale;

/// Explicit UI state handed to every renderer.
///
/// Renderers read the active tab and the clock from here instead of from
/// globals, which keeps view selection independent of the timer.
#[derive(Debug, Clone)]
pub struct Context {
    pub active_tab: Tab,

    /// Formatted wall clock, empty until the first tick
    pub clock: String,

    pub locale: ClockLocale,

    pub links: Links,

    /// Where the current dataset came from
    pub source_name: String,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            active_tab: Tab::Dashboard,
            clock: String::new(),
            locale: ClockLocale::default(),
            links: Links::default(),
            source_name: String::new(),
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock_or_placeholder(&self) -> &str {
        if self.clock.is_empty() {
            "--:--:--"
        } else {
            &self.clock
        }
    }
}
