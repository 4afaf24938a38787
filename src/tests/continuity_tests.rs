//! Continuity tests for sun phase times.
//!
//! Solar noon and sunrise move by a few minutes at most from one day to the
//! next. A larger jump means the transit cycle or the hour angle went wrong.

extern crate std;
use crate::{get_moon_illumination, get_times, Observer};
use chrono::{DateTime, Days, TimeZone, Utc};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sun_times_change_smoothly_over_consecutive_days(
        timestamp in -15_768_000_000i64..=15_768_000_000i64,
        longitude in -180.0_f64..=180.0_f64,
        latitude in -60.0_f64..=60.0_f64,
        height in 0.0_f64..=5000.0_f64,
    ) {
        let start_date = Utc.timestamp_opt(timestamp, 0).single().unwrap();
        let observer = Observer::new(latitude, longitude).unwrap().with_height(height).unwrap();

        let max_jump_seconds = 30.0 * 60.0;

        let mut prev_noon: Option<DateTime<Utc>> = None;
        let mut prev_sunrise: Option<DateTime<Utc>> = None;

        for day_offset in 0..10 {
            let Some(current_date) = start_date.checked_add_days(Days::new(day_offset)) else {
                return Ok(());
            };
            let times = get_times(&current_date, &observer).unwrap();

            if let Some(prev) = prev_noon {
                let expected = prev.checked_add_days(Days::new(1)).unwrap();
                let diff = (times.solar_noon - expected).as_seconds_f64().abs();
                prop_assert!(diff < max_jump_seconds,
                    "Solar noon jumped {} seconds: yesterday {}, today {}", diff, prev, times.solar_noon);
            }
            prev_noon = Some(times.solar_noon);

            if let (Some(prev), Some(curr)) = (prev_sunrise, times.sunrise) {
                let expected = prev.checked_add_days(Days::new(1)).unwrap();
                let diff = (curr - expected).as_seconds_f64().abs();
                prop_assert!(diff < max_jump_seconds,
                    "Sunrise jumped {} seconds: yesterday {}, today {}", diff, prev, curr);
            }
            prev_sunrise = times.sunrise;
        }
    }

    #[test]
    fn moon_fraction_changes_smoothly(
        timestamp in -15_768_000_000i64..=15_768_000_000i64,
    ) {
        let start_date = Utc.timestamp_opt(timestamp, 0).single().unwrap();
        let mut prev_fraction: Option<f64> = None;

        // the elongation grows by about half a degree per hour
        for hour in 0..48 {
            let current_date = start_date + chrono::Duration::hours(hour);
            let fraction = get_moon_illumination(&current_date).unwrap().fraction;

            if let Some(prev) = prev_fraction {
                prop_assert!((fraction - prev).abs() < 0.01,
                    "Illuminated fraction jumped from {} to {} at {}", prev, fraction, current_date);
            }
            prev_fraction = Some(fraction);
        }
    }
}
