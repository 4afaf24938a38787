#![allow(missing_docs, clippy::unwrap_used)]
use chrono::{DateTime, Timelike, Utc};
use std::time::{SystemTime, UNIX_EPOCH};
use chrono_tz::Europe::Kyiv;
use suncalc::{
    format_date, get_moon_illumination, get_moon_position, get_moon_times, get_position, get_times, MoonTimes,
    Observer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Kyiv coordinates
    let latitude = 50.4501;
    let longitude = 30.5234;
    let height = 179.0; // meters above sea level

    let now_timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| "System time is before Unix epoch")?
        .as_secs() as i64;
    let now = DateTime::from_timestamp(now_timestamp, 0).ok_or("Invalid timestamp")?;
    let date = now.with_hour(12).ok_or("Invalid hour")?;
    let observer = Observer::new(latitude, longitude)?.with_height(height)?;

    println!("Sun and Moon Example - Kyiv");
    println!("Location: {:.4}°N, {:.4}°E", latitude, longitude);
    println!("Date: {}", date.with_timezone(&Kyiv).format("%B %d, %Y"));
    println!("Height: {:.1} meters", height);
    println!("{:=<60}", "");

    let position = get_position(&now, &observer)?;
    println!("Current Sun Position (at {} UTC):", now.format("%H:%M:%S"));
    // azimuth is measured from south, clockwise
    println!("  Azimuth: {:.2}°", position.azimuth.to_degrees() + 180.0);
    println!("  Altitude: {:.2}°", position.altitude.to_degrees());
    println!();

    println!("Sun Phases (local time):");
    for (event, time) in get_times(&date, &observer)?.iter() {
        println!("  {:<14} {}", event.name(), format_date(&time.with_timezone(&Kyiv)));
    }
    println!();

    let moon = get_moon_position(&now, &observer)?;
    let illumination = get_moon_illumination(&now)?;
    println!("Moon:");
    println!("  Azimuth: {:.2}°", moon.azimuth.to_degrees() + 180.0);
    println!("  Altitude: {:.2}°", moon.altitude.to_degrees());
    println!("  Distance: {:.0} km", moon.distance);
    println!("  Illuminated: {:.1}%", illumination.fraction * 100.0);
    println!("  Phase: {:.3}", illumination.phase);

    match get_moon_times(&date, &observer)? {
        MoonTimes::Crossings { rise, set } => {
            let local = |time: Option<DateTime<Utc>>| {
                time.map_or_else(|| "N/A".to_string(), |t| format_date(&t.with_timezone(&Kyiv)))
            };
            println!("  Moonrise: {}", local(rise));
            println!("  Moonset: {}", local(set));
        }
        MoonTimes::AlwaysUp => println!("  Moon stays up all day"),
        MoonTimes::AlwaysDown => println!("  Moon stays down all day"),
    }

    Ok(())
}
