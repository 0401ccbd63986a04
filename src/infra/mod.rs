//! Process-level plumbing

mod logging;

pub use logging::{init_logging, level_for};
