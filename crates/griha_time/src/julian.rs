//! Julian Date conversions.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.
//! Gregorian calendar only.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Date from a Gregorian calendar date with fractional day.
///
/// `day_frac` = day of month plus the fraction of the day elapsed,
/// e.g. `1.5` is noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date (UTC) of a UTC instant, including sub-second precision.
pub fn datetime_to_jd(instant: &DateTime<Utc>) -> f64 {
    let seconds = instant.second() as f64 + instant.nanosecond() as f64 * 1e-9;
    let day_frac = instant.day() as f64
        + instant.hour() as f64 / 24.0
        + instant.minute() as f64 / 1440.0
        + seconds / SECONDS_PER_DAY;
    calendar_to_jd(instant.year(), instant.month(), day_frac)
}

/// Decimal year used to index Delta T polynomials: `year + (month - 0.5) / 12`.
pub fn decimal_year(instant: &DateTime<Utc>) -> f64 {
    instant.year() as f64 + (instant.month() as f64 - 0.5) / 12.0
}

/// Julian centuries elapsed since J2000.0 for a Julian Date.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
