mod format;
mod ticker;

pub use format::{format_clock, ClockLocale};
pub use ticker::{ClockEvent, ClockTicker};
