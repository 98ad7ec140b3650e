//! Time-scale support for the griha house engine.
//!
//! This crate provides:
//! - Strict RFC 3339 UTC instant parsing
//! - Julian Date ↔ calendar conversion
//! - ΔT (TT − UT) polynomials for UTC → TT
//! - Earth Rotation Angle, GMST, GAST and local sidereal time

pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

use chrono::{DateTime, Utc};

pub use delta_t::{delta_t_for, delta_t_seconds, jd_tt};
pub use error::TimeError;
pub use instant::parse_utc;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, datetime_to_jd,
    decimal_year, jd_to_centuries,
};
pub use sidereal::{earth_rotation_angle_deg, gast_deg, gmst_deg, local_sidereal_time_deg};

/// The time scales of one UTC instant, computed once per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScales {
    /// Julian Date in UTC (also used as UT1).
    pub jd_utc: f64,
    /// ΔT = TT − UT in seconds.
    pub delta_t_s: f64,
    /// Julian Date in TT.
    pub jd_tt: f64,
}

impl TimeScales {
    pub fn from_utc(instant: &DateTime<Utc>) -> Self {
        let jd_utc = datetime_to_jd(instant);
        let delta_t_s = delta_t_for(instant);
        Self {
            jd_utc,
            delta_t_s,
            jd_tt: jd_utc + delta_t_s / SECONDS_PER_DAY,
        }
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(&self) -> f64 {
        jd_to_centuries(self.jd_tt)
    }
}
