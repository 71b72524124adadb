use crate::core::converter::TimeConversionEngine;
use crate::domain::model::{ClockFrame, ConversionResult, CustomTimeRequest, FrameSource};
use crate::domain::ports::Clock;
use crate::utils::error::ConversionError;

/// Which conversion the display shows: a submitted custom time wins over the
/// live clock until it is reset.
#[derive(Debug, Clone)]
pub struct ClockSession<C: Clock> {
    engine: TimeConversionEngine<C>,
    custom: Option<(CustomTimeRequest, ConversionResult)>,
}

impl<C: Clock> ClockSession<C> {
    pub fn new(engine: TimeConversionEngine<C>) -> Self {
        Self {
            engine,
            custom: None,
        }
    }

    pub fn engine(&self) -> &TimeConversionEngine<C> {
        &self.engine
    }

    /// Converts and pins `request`. A failed conversion clears any earlier
    /// custom result so the live clock shows again.
    pub fn submit(
        &mut self,
        request: CustomTimeRequest,
    ) -> Result<&ConversionResult, ConversionError> {
        match self.engine.convert_custom(&request) {
            Ok(result) => {
                tracing::info!(
                    "Showing custom time {} {} ({})",
                    request.date,
                    request.time,
                    request.source_zone
                );
                let (_, stored) = self.custom.insert((request, result));
                Ok(&*stored)
            }
            Err(e) => {
                self.custom = None;
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        if self.custom.take().is_some() {
            tracing::info!("Custom time cleared, back to live clock");
        }
    }

    pub fn custom_request(&self) -> Option<&CustomTimeRequest> {
        self.custom.as_ref().map(|(request, _)| request)
    }

    pub fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// Frame to render right now.
    pub fn frame(&self) -> ClockFrame {
        match &self.custom {
            Some((_, result)) => ClockFrame {
                source: FrameSource::Custom,
                result: *result,
                offset_delta_hours: self.engine.utc_offset_delta_hours(),
            },
            None => self.engine.live_frame(),
        }
    }
}
