use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use ist_london_clock::core::converter::{compute_live_display, convert_custom};
use ist_london_clock::core::dst::{self, DstPrecision};
use ist_london_clock::{CustomTimeRequest, Period, Zone};
use proptest::prelude::*;

// 2000-01-01 .. 2099-12-31
const START: i64 = 946_684_800;
const END: i64 = 4_102_444_799;

fn instant(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

proptest! {
    #[test]
    fn live_hours_are_twelve_hour_clock(secs in START..END) {
        let result = compute_live_display(instant(secs), DstPrecision::CalendarDay);
        for time in [result.ist, result.london] {
            prop_assert!((1..=12).contains(&time.hours));
            prop_assert!(time.minutes < 60 && time.seconds < 60);
            let expected = if time.wall_clock.hour() < 12 { Period::AM } else { Period::PM };
            prop_assert_eq!(time.period, expected);
        }
    }

    #[test]
    fn offsets_follow_the_bst_window(secs in START..END) {
        let now = instant(secs);
        let result = compute_live_display(now, DstPrecision::CalendarDay);

        let ist_offset = result.ist.wall_clock - now.naive_utc();
        prop_assert_eq!(ist_offset, Duration::minutes(330));

        let uk_offset = result.london.wall_clock - now.naive_utc();
        let (start, end) = dst::bst_window(now.year()).unwrap();
        let date = now.date_naive();
        let expected = if date >= start && date < end { 60 } else { 0 };
        prop_assert_eq!(uk_offset, Duration::minutes(expected));
    }

    #[test]
    fn ist_to_uk_and_back_round_trips(
        day in 0i64..36_500,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(day);

        // Calendar-day precision switches the UK back to GMT a few hours early
        // relative to the wall clock it produces; skip the autumn change-over.
        let october = dst::last_sunday(date.year(), 10).unwrap();
        prop_assume!((date - october).num_days().abs() > 1);

        let ist_request = CustomTimeRequest::new(
            date.format("%Y-%m-%d").to_string(),
            format!("{:02}:{:02}", hour, minute),
            Zone::Ist,
        );
        let first = convert_custom(&ist_request, DstPrecision::CalendarDay).unwrap();

        let uk_wall = first.london.wall_clock;
        let uk_request = CustomTimeRequest::new(
            uk_wall.format("%Y-%m-%d").to_string(),
            uk_wall.format("%H:%M").to_string(),
            Zone::London,
        );
        let second = convert_custom(&uk_request, DstPrecision::CalendarDay).unwrap();

        prop_assert_eq!(second.ist.wall_clock, first.ist.wall_clock);
        prop_assert_eq!(second.ist.seconds, 0);
        prop_assert_eq!(second.utc, first.utc);
    }

    #[test]
    fn garbage_input_never_panics(date in "\\PC{0,12}", time in "\\PC{0,6}") {
        let request = CustomTimeRequest::new(date, time, Zone::London);
        let _ = convert_custom(&request, DstPrecision::CalendarDay);
    }
}
