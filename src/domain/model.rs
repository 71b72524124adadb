use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "IST")]
    Ist,
    #[serde(rename = "London")]
    London,
}

impl Zone {
    pub fn title(&self) -> &'static str {
        match self {
            Zone::Ist => "Indian Standard Time",
            Zone::London => "London Time",
        }
    }

    pub fn other(&self) -> Zone {
        match self {
            Zone::Ist => Zone::London,
            Zone::London => Zone::Ist,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Ist => write!(f, "IST"),
            Zone::London => write!(f, "London"),
        }
    }
}

impl FromStr for Zone {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ist" | "india" => Ok(Zone::Ist),
            "london" | "uk" => Ok(Zone::London),
            _ => Err(ConversionError::invalid(
                "source zone",
                s,
                "expected IST or London",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    AM,
    PM,
}

impl Period {
    pub fn from_hour(hour24: u32) -> Self {
        if hour24 < 12 {
            Period::AM
        } else {
            Period::PM
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::AM => write!(f, "AM"),
            Period::PM => write!(f, "PM"),
        }
    }
}

/// One zone's wall-clock state, ready for rendering.
///
/// `wall_clock` is naive on purpose: its fields are the zone-local values and
/// it carries no offset, so it cannot be mistaken for a UTC timestamp. The
/// real instant lives on [`ConversionResult::utc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub period: Period,
    pub wall_clock: NaiveDateTime,
}

impl DisplayTime {
    pub fn from_wall_clock(wall_clock: NaiveDateTime) -> Self {
        let hour24 = wall_clock.hour();
        Self {
            hours: to_12_hour(hour24),
            minutes: wall_clock.minute(),
            seconds: wall_clock.second(),
            period: Period::from_hour(hour24),
            wall_clock,
        }
    }

    /// The 24-hour hour this value was derived from.
    pub fn hour24(&self) -> u32 {
        self.wall_clock.hour()
    }
}

pub fn to_12_hour(hour24: u32) -> u32 {
    match hour24 % 12 {
        0 => 12,
        h => h,
    }
}

/// A user-entered wall-clock moment, tagged with the zone it was entered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTimeRequest {
    pub date: String,
    pub time: String,
    pub source_zone: Zone,
}

impl CustomTimeRequest {
    pub fn new(date: impl Into<String>, time: impl Into<String>, source_zone: Zone) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            source_zone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub utc: DateTime<Utc>,
    pub ist: DisplayTime,
    pub london: DisplayTime,
}

impl ConversionResult {
    pub fn for_zone(&self, zone: Zone) -> &DisplayTime {
        match zone {
            Zone::Ist => &self.ist,
            Zone::London => &self.london,
        }
    }

    /// Offset from UTC, in minutes, that produced `zone`'s wall clock.
    pub fn utc_offset_minutes(&self, zone: Zone) -> i64 {
        (self.for_zone(zone).wall_clock - self.utc.naive_utc()).num_minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSource {
    Live,
    Custom,
}

/// What a display sink receives on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockFrame {
    pub source: FrameSource,
    pub result: ConversionResult,
    pub offset_delta_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_midnight_and_noon_use_twelve() {
        let midnight = DisplayTime::from_wall_clock(at(0, 5, 0));
        assert_eq!(midnight.hours, 12);
        assert_eq!(midnight.period, Period::AM);

        let noon = DisplayTime::from_wall_clock(at(12, 0, 0));
        assert_eq!(noon.hours, 12);
        assert_eq!(noon.period, Period::PM);

        let evening = DisplayTime::from_wall_clock(at(23, 59, 59));
        assert_eq!(evening.hours, 11);
        assert_eq!(evening.period, Period::PM);
        assert_eq!(evening.hour24(), 23);
    }

    #[test]
    fn test_zone_parsing() {
        assert_eq!("IST".parse::<Zone>().unwrap(), Zone::Ist);
        assert_eq!(" london ".parse::<Zone>().unwrap(), Zone::London);
        assert_eq!("uk".parse::<Zone>().unwrap(), Zone::London);
        assert!(matches!(
            "Paris".parse::<Zone>(),
            Err(ConversionError::InvalidInput { .. })
        ));
        assert_eq!(Zone::Ist.other(), Zone::London);
    }

    #[test]
    fn test_zone_serializes_with_display_names() {
        let json = serde_json::to_string(&Zone::Ist).unwrap();
        assert_eq!(json, "\"IST\"");
        let back: Zone = serde_json::from_str("\"London\"").unwrap();
        assert_eq!(back, Zone::London);
    }
}
