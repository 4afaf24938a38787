//! Recorded reference values for a spread of places and dates: equator,
//! both hemispheres, both polar regions, high altitude.

extern crate std;
use std::string::String;

use crate::{
    dates_near, format_date, get_moon_illumination, get_moon_position, get_moon_times, get_times, parse_date,
    MoonTimes, Observer, SunEvent,
};

/// Timestamps in the fixtures are truncated to the second.
const TOLERANCE_SECONDS: i64 = 2;

const ANGLE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SunTimesRow {
    date: String,
    latitude: f64,
    longitude: f64,
    height: f64,
    solar_noon: String,
    nadir: String,
    sunrise: Option<String>,
    sunset: Option<String>,
    sunrise_end: Option<String>,
    sunset_start: Option<String>,
    dawn: Option<String>,
    dusk: Option<String>,
    nautical_dawn: Option<String>,
    nautical_dusk: Option<String>,
    night_end: Option<String>,
    night: Option<String>,
    golden_hour_end: Option<String>,
    golden_hour: Option<String>,
}

impl SunTimesRow {
    fn expected(&self, event: SunEvent) -> Option<&str> {
        let value = match event {
            SunEvent::SolarNoon => return Some(self.solar_noon.as_str()),
            SunEvent::Nadir => return Some(self.nadir.as_str()),
            SunEvent::Sunrise => &self.sunrise,
            SunEvent::Sunset => &self.sunset,
            SunEvent::SunriseEnd => &self.sunrise_end,
            SunEvent::SunsetStart => &self.sunset_start,
            SunEvent::Dawn => &self.dawn,
            SunEvent::Dusk => &self.dusk,
            SunEvent::NauticalDawn => &self.nautical_dawn,
            SunEvent::NauticalDusk => &self.nautical_dusk,
            SunEvent::NightEnd => &self.night_end,
            SunEvent::Night => &self.night,
            SunEvent::GoldenHourEnd => &self.golden_hour_end,
            SunEvent::GoldenHour => &self.golden_hour,
        };
        value.as_deref()
    }
}

#[derive(Debug, serde::Deserialize)]
struct MoonTimesRow {
    date: String,
    latitude: f64,
    longitude: f64,
    rise: Option<String>,
    set: Option<String>,
    always_up: bool,
    always_down: bool,
}

#[derive(Debug, serde::Deserialize)]
struct MoonStateRow {
    date: String,
    latitude: f64,
    longitude: f64,
    azimuth: f64,
    altitude: f64,
    distance: f64,
    parallactic_angle: f64,
    fraction: f64,
    phase: f64,
    angle: f64,
}

fn read_rows<R: serde::de::DeserializeOwned>(path: &str) -> std::vec::Vec<R> {
    let mut rdr = csv::Reader::from_path(path).unwrap_or_else(|e| std::panic!("Failed to open CSV file {}: {}", path, e));
    rdr.deserialize()
        .enumerate()
        .map(|(row_num, result)| {
            result.unwrap_or_else(|e| std::panic!("Failed to parse CSV row {} of {}: {}", row_num + 2, path, e))
        })
        .collect()
}

fn assert_time(row: &str, label: &str, expected: Option<&str>, actual: Option<String>) {
    match (expected, actual) {
        (None, None) => {}
        (Some(expected), Some(actual)) => assert!(
            dates_near(expected, &actual, TOLERANCE_SECONDS).unwrap(),
            "{row}: {label} expected {expected}, got {actual}"
        ),
        (expected, actual) => std::panic!("{row}: {label} expected {expected:?}, got {actual:?}"),
    }
}

#[test]
fn sun_times_match_recorded_values() {
    super::init_logger();
    let rows: std::vec::Vec<SunTimesRow> = read_rows(concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/sun_times.csv"));
    assert!(!rows.is_empty());

    for record in &rows {
        let label = std::format!("{} at ({}, {}, {} m)", record.date, record.latitude, record.longitude, record.height);
        let date = parse_date(&record.date).unwrap();
        let observer = Observer::new(record.latitude, record.longitude)
            .and_then(|o| o.with_height(record.height))
            .unwrap();

        let times = get_times(&date, &observer).unwrap();
        for event in SunEvent::CHRONOLOGICAL {
            assert_time(
                &label,
                event.name(),
                record.expected(event),
                times.get(event).map(|t| format_date(&t)),
            );
        }
    }
}

#[test]
fn moon_times_match_recorded_values() {
    let rows: std::vec::Vec<MoonTimesRow> = read_rows(concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/moon_times.csv"));
    assert!(!rows.is_empty());

    for record in &rows {
        let label = std::format!("{} at ({}, {})", record.date, record.latitude, record.longitude);
        let date = parse_date(&record.date).unwrap();
        let observer = Observer::new(record.latitude, record.longitude).unwrap();

        let times = get_moon_times(&date, &observer).unwrap();
        assert_eq!(times == MoonTimes::AlwaysUp, record.always_up, "{label}: always up");
        assert_eq!(times == MoonTimes::AlwaysDown, record.always_down, "{label}: always down");
        assert_time(&label, "rise", record.rise.as_deref(), times.rise().map(|t| format_date(&t)));
        assert_time(&label, "set", record.set.as_deref(), times.set().map(|t| format_date(&t)));
    }
}

#[test]
fn moon_state_matches_recorded_values() {
    let rows: std::vec::Vec<MoonStateRow> = read_rows(concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/moon_state.csv"));
    assert!(!rows.is_empty());

    for record in &rows {
        let label = std::format!("{} at ({}, {})", record.date, record.latitude, record.longitude);
        let date = parse_date(&record.date).unwrap();
        let observer = Observer::new(record.latitude, record.longitude).unwrap();

        let position = get_moon_position(&date, &observer).unwrap();
        let illumination = get_moon_illumination(&date).unwrap();

        for (name, actual, expected, tolerance) in [
            ("azimuth", position.azimuth, record.azimuth, ANGLE_TOLERANCE),
            ("altitude", position.altitude, record.altitude, ANGLE_TOLERANCE),
            ("distance", position.distance, record.distance, 1e-3),
            ("parallactic angle", position.parallactic_angle, record.parallactic_angle, ANGLE_TOLERANCE),
            ("fraction", illumination.fraction, record.fraction, ANGLE_TOLERANCE),
            ("phase", illumination.phase, record.phase, ANGLE_TOLERANCE),
            ("angle", illumination.angle, record.angle, ANGLE_TOLERANCE),
        ] {
            assert!(
                (actual - expected).abs() < tolerance,
                "{label}: {name} expected {expected}, got {actual}"
            );
        }
    }
}
