use chrono::{DateTime, Utc};

use crate::core::dst::DstPrecision;
use crate::core::input;
use crate::core::zones;
use crate::domain::model::{
    ClockFrame, ConversionResult, CustomTimeRequest, DisplayTime, FrameSource, Zone,
};
use crate::domain::ports::Clock;
use crate::utils::error::ConversionError;

/// IST and London display state for a UTC instant.
///
/// Total: a zone wall clock that falls outside chrono's range is replaced by
/// the UTC wall clock instead of failing the tick.
pub fn compute_live_display(now_utc: DateTime<Utc>, precision: DstPrecision) -> ConversionResult {
    ConversionResult {
        utc: now_utc,
        ist: live_zone(Zone::Ist, now_utc, precision),
        london: live_zone(Zone::London, now_utc, precision),
    }
}

fn live_zone(zone: Zone, now_utc: DateTime<Utc>, precision: DstPrecision) -> DisplayTime {
    let wall_clock = zones::to_wall_clock(zone, now_utc, precision).unwrap_or_else(|e| {
        tracing::warn!("{}; showing UTC wall clock for {}", e, zone);
        now_utc.naive_utc()
    });
    DisplayTime::from_wall_clock(wall_clock)
}

pub fn convert_custom(
    request: &CustomTimeRequest,
    precision: DstPrecision,
) -> Result<ConversionResult, ConversionError> {
    let date = input::parse_date(&request.date)?;
    let time = input::parse_time(&request.time)?;
    let entered = date.and_time(time);

    let source = request.source_zone;
    let utc = zones::from_wall_clock(source, entered, precision)?;

    // The source side is already known exactly; only the other zone is derived.
    let source_display = DisplayTime::from_wall_clock(entered);
    let target_display = DisplayTime::from_wall_clock(zones::to_wall_clock(
        source.other(),
        utc,
        precision,
    )?);

    let (ist, london) = match source {
        Zone::Ist => (source_display, target_display),
        Zone::London => (target_display, source_display),
    };

    tracing::debug!(
        "Converted {} {} {} -> UTC {}",
        request.date,
        request.time,
        source,
        utc
    );

    Ok(ConversionResult { utc, ist, london })
}

/// IST offset minus the UK offset at `now_utc`, in hours.
pub fn utc_offset_delta_hours(now_utc: DateTime<Utc>, precision: DstPrecision) -> f64 {
    let delta_minutes = zones::offset_minutes_at(Zone::Ist, now_utc, precision)
        - zones::offset_minutes_at(Zone::London, now_utc, precision);
    f64::from(delta_minutes) / 60.0
}

/// Binds the pure conversion functions to a clock.
#[derive(Debug, Clone)]
pub struct TimeConversionEngine<C: Clock> {
    clock: C,
    precision: DstPrecision,
}

impl<C: Clock> TimeConversionEngine<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            precision: DstPrecision::default(),
        }
    }

    pub fn with_precision(mut self, precision: DstPrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn precision(&self) -> DstPrecision {
        self.precision
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn live_display(&self) -> ConversionResult {
        compute_live_display(self.clock.now(), self.precision)
    }

    pub fn compute_live_display(&self, now_utc: DateTime<Utc>) -> ConversionResult {
        compute_live_display(now_utc, self.precision)
    }

    pub fn convert_custom(
        &self,
        request: &CustomTimeRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let outcome = convert_custom(request, self.precision);

        if let Err(e) = &outcome {
            match e {
                ConversionError::InvalidInput { .. } => {
                    tracing::warn!("Rejected custom time: {}", e)
                }
                ConversionError::InternalFailure { .. } => {
                    tracing::error!("Custom time conversion failed: {}", e)
                }
            }
        }
        outcome
    }

    /// Recomputed on every call: the UK offset can change mid-session.
    pub fn utc_offset_delta_hours(&self) -> f64 {
        utc_offset_delta_hours(self.clock.now(), self.precision)
    }

    pub fn live_frame(&self) -> ClockFrame {
        let now = self.clock.now();
        ClockFrame {
            source: FrameSource::Live,
            result: compute_live_display(now, self.precision),
            offset_delta_hours: utc_offset_delta_hours(now, self.precision),
        }
    }
}
