pub mod converter;
pub mod dst;
pub mod input;
pub mod zones;

pub use crate::domain::model::{ConversionResult, CustomTimeRequest, DisplayTime, Zone};
pub use crate::domain::ports::{Clock, DisplaySink};
pub use crate::utils::error::{ConversionError, Result};
