//! Infrastructure layer - data sources and the clock timer

pub mod clock;
pub mod source;

pub use clock::{format_clock, ClockEvent, ClockLocale, ClockTicker};
pub use source::{load_or_fallback, BuiltinSource, DataSource, FileSource};
