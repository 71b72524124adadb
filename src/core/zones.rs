use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::core::dst::{self, DstPrecision};
use crate::domain::model::Zone;
use crate::utils::error::ConversionError;

pub const IST_OFFSET_MINUTES: i32 = 5 * 60 + 30;
pub const BST_OFFSET_MINUTES: i32 = 60;
pub const GMT_OFFSET_MINUTES: i32 = 0;

/// UTC offset of `zone` at a real instant.
pub fn offset_minutes_at(zone: Zone, instant: DateTime<Utc>, precision: DstPrecision) -> i32 {
    match zone {
        Zone::Ist => IST_OFFSET_MINUTES,
        Zone::London => {
            if dst::is_uk_summer_time_at(instant, precision) {
                BST_OFFSET_MINUTES
            } else {
                GMT_OFFSET_MINUTES
            }
        }
    }
}

/// UTC offset of `zone` for a wall-clock date entered by a user.
pub fn offset_minutes_on(zone: Zone, date: NaiveDate) -> i32 {
    match zone {
        Zone::Ist => IST_OFFSET_MINUTES,
        Zone::London if dst::is_uk_summer_time(date) => BST_OFFSET_MINUTES,
        Zone::London => GMT_OFFSET_MINUTES,
    }
}

/// Zone-local wall clock for a UTC instant.
pub fn to_wall_clock(
    zone: Zone,
    instant: DateTime<Utc>,
    precision: DstPrecision,
) -> Result<NaiveDateTime, ConversionError> {
    let offset = Duration::minutes(i64::from(offset_minutes_at(zone, instant, precision)));
    instant
        .naive_utc()
        .checked_add_signed(offset)
        .ok_or_else(|| ConversionError::internal(format!("{} wall clock out of range", zone)))
}

/// UTC instant for a wall clock read in `zone`.
///
/// At transition-hour precision the UK offset is chosen so that the resulting
/// instant is itself inside (BST) or outside (GMT) the summer window; an
/// ambiguous autumn hour resolves to the earlier, BST reading.
pub fn from_wall_clock(
    zone: Zone,
    wall_clock: NaiveDateTime,
    precision: DstPrecision,
) -> Result<DateTime<Utc>, ConversionError> {
    let offset_minutes = match (zone, precision) {
        (Zone::London, DstPrecision::TransitionHour) => {
            let as_bst = shift(wall_clock, -BST_OFFSET_MINUTES)?;
            if dst::is_uk_summer_time_at(as_bst.and_utc(), precision) {
                BST_OFFSET_MINUTES
            } else {
                GMT_OFFSET_MINUTES
            }
        }
        _ => offset_minutes_on(zone, wall_clock.date()),
    };
    Ok(shift(wall_clock, -offset_minutes)?.and_utc())
}

fn shift(wall_clock: NaiveDateTime, minutes: i32) -> Result<NaiveDateTime, ConversionError> {
    wall_clock
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
        .ok_or_else(|| ConversionError::internal("date arithmetic out of range"))
}

/// Label shown under a zone's title, e.g. `UTC+5:30` or `UTC+1 (BST)`.
///
/// Takes the offset that was actually applied to the wall clock, so a custom UK
/// entry on a transition day is labelled the way it was converted.
pub fn offset_label(zone: Zone, offset_minutes: i64) -> String {
    match zone {
        Zone::Ist => "UTC+5:30".to_string(),
        Zone::London => match offset_minutes {
            m if m == i64::from(BST_OFFSET_MINUTES) => "UTC+1 (BST)".to_string(),
            _ => "UTC+0 (GMT)".to_string(),
        },
    }
}
