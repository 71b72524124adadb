use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::core::dst::DstPrecision;
use crate::core::zones;
use crate::domain::model::{to_12_hour, DisplayTime, Period, Zone};

/// `HH:MM:SS AM`
pub fn format_time(time: &DisplayTime) -> String {
    format!(
        "{:02}:{:02}:{:02} {}",
        time.hours, time.minutes, time.seconds, time.period
    )
}

/// `H:MM`, as used by the quick reference line.
pub fn format_short_time(time: &DisplayTime) -> String {
    format!("{}:{:02}", time.hours, time.minutes)
}

/// `Thursday, January 1, 2026`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `+5.5 hours`
pub fn format_offset_delta(hours: f64) -> String {
    let sign = if hours > 0.0 { "+" } else { "" };
    format!("{}{:.1} hours", sign, hours)
}

/// Today's `YYYY-MM-DD` in `zone`, used to prefill custom input.
pub fn current_date_string(zone: Zone, now: DateTime<Utc>, precision: DstPrecision) -> String {
    current_wall_clock(zone, now, precision)
        .format("%Y-%m-%d")
        .to_string()
}

/// Current `HH:MM` in `zone`, used to prefill custom input.
pub fn current_time_string(zone: Zone, now: DateTime<Utc>, precision: DstPrecision) -> String {
    current_wall_clock(zone, now, precision)
        .format("%H:%M")
        .to_string()
}

fn current_wall_clock(zone: Zone, now: DateTime<Utc>, precision: DstPrecision) -> NaiveDateTime {
    zones::to_wall_clock(zone, now, precision).unwrap_or_else(|_| now.naive_utc())
}

/// Every quarter hour of the day as `(value, label)`, e.g. `("13:45", "1:45 PM")`.
pub fn time_options() -> Vec<(String, String)> {
    (0..24u32)
        .flat_map(|hour| (0..60u32).step_by(15).map(move |minute| (hour, minute)))
        .map(|(hour, minute)| {
            (
                format!("{:02}:{:02}", hour, minute),
                format!("{}:{:02} {}", to_12_hour(hour), minute, Period::from_hour(hour)),
            )
        })
        .collect()
}
