pub mod trend;

pub use trend::{trend_text, TrendColumns};
