//! Mean obliquity of the ecliptic.
//!
//! ε = 23°26′ + (21.448 − 46.8150·T − 0.00059·T² + 0.001813·T³)″
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2. Public domain.

/// Mean obliquity at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111;

/// Mean obliquity in arcseconds. `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    84_381.448 + t * (-46.8150 + t * (-0.00059 + t * 0.001813))
}

/// Mean obliquity in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_arcsec(t) / 3600.0
}
