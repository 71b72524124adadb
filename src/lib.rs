pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ClockConfig;

pub use adapters::clock::{FixedClock, SystemClock};
pub use app::{session::ClockSession, ticker::Ticker};
pub use core::converter::TimeConversionEngine;
pub use domain::model::{ClockFrame, ConversionResult, CustomTimeRequest, DisplayTime, Period, Zone};
pub use utils::error::{ClockError, ConversionError, Result};
