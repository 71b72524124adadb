//! Parsing of user-entered `YYYY-MM-DD` dates and `HH:MM` times.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::utils::error::ConversionError;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

pub fn parse_date(input: &str) -> Result<NaiveDate, ConversionError> {
    let trimmed = input.trim();
    let caps = DATE_RE
        .captures(trimmed)
        .ok_or_else(|| ConversionError::invalid("date", input, "expected YYYY-MM-DD"))?;

    let year: i32 = number(&caps[1], "date", input)?;
    let month: u32 = number(&caps[2], "date", input)?;
    let day: u32 = number(&caps[3], "date", input)?;

    if !(1..=12).contains(&month) {
        return Err(ConversionError::invalid("date", input, "month must be 01-12"));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ConversionError::invalid("date", input, format!("day {} does not exist in that month", day))
    })
}

pub fn parse_time(input: &str) -> Result<NaiveTime, ConversionError> {
    let trimmed = input.trim();
    let caps = TIME_RE
        .captures(trimmed)
        .ok_or_else(|| ConversionError::invalid("time", input, "expected HH:MM"))?;

    let hour: u32 = number(&caps[1], "time", input)?;
    let minute: u32 = number(&caps[2], "time", input)?;

    if hour > 23 {
        return Err(ConversionError::invalid("time", input, "hour must be 00-23"));
    }
    if minute > 59 {
        return Err(ConversionError::invalid("time", input, "minute must be 00-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ConversionError::invalid("time", input, "not a valid time of day"))
}

fn number<T: std::str::FromStr>(
    digits: &str,
    field: &str,
    input: &str,
) -> Result<T, ConversionError> {
    digits
        .parse()
        .map_err(|_| ConversionError::invalid(field, input, "not a number"))
}
