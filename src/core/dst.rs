//! British Summer Time window.
//!
//! BST runs from the last Sunday of March to the last Sunday of October. This
//! is the modern EU rule (1996 onward), not a timezone-database lookup.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// How precisely the start and end of BST are located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DstPrecision {
    /// Whole calendar days: BST is `[march_last_sunday, october_last_sunday)`.
    #[default]
    CalendarDay,
    /// Switch at 01:00 UTC on each transition Sunday.
    TransitionHour,
}

/// Latest day on or before the 31st of `month` that is a Sunday.
/// Only meaningful for months with 31 days (March, October).
pub fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let last_day = NaiveDate::from_ymd_opt(year, month, 31)?;
    let back = i64::from(last_day.weekday().num_days_from_sunday());
    last_day.checked_sub_signed(Duration::days(back))
}

/// `(start, end)` of BST for `year`, as calendar dates.
pub fn bst_window(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((last_sunday(year, 3)?, last_sunday(year, 10)?))
}

pub fn is_uk_summer_time(date: NaiveDate) -> bool {
    match bst_window(date.year()) {
        Some((start, end)) => date >= start && date < end,
        None => false,
    }
}

/// BST check for a real instant at the requested precision.
pub fn is_uk_summer_time_at(instant: DateTime<Utc>, precision: DstPrecision) -> bool {
    match precision {
        DstPrecision::CalendarDay => is_uk_summer_time(instant.date_naive()),
        DstPrecision::TransitionHour => {
            let Some((start, end)) = bst_window(instant.year()) else {
                return false;
            };
            let one_am = NaiveTime::from_hms_opt(1, 0, 0).unwrap_or_default();
            let start = start.and_time(one_am).and_utc();
            let end = end.and_time(one_am).and_utc();
            instant >= start && instant < end
        }
    }
}
