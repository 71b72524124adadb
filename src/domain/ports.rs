use chrono::{DateTime, Utc};

use crate::domain::model::ClockFrame;

/// Source of the current instant. Swapped for a fixed clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Consumer of rendered frames (terminal, test recorder, ...).
pub trait DisplaySink: Send {
    fn render(&mut self, frame: &ClockFrame) -> std::io::Result<()>;
}
