// Adapters layer: concrete clocks and display sinks behind the domain ports.

pub mod clock;
pub mod terminal;
