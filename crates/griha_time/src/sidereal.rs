//! Earth Rotation Angle and Greenwich/local sidereal time, in degrees.
//!
//! Functions take UT1 Julian Dates. This crate treats UT1 as UTC, so callers
//! pass [`crate::datetime_to_jd`] directly.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Earth Rotation Angle in degrees, [0, 360).
///
/// θ = 360° × (0.7790572732640 + 1.00273781191135448 × Du),
/// Du = JD_UT1 − 2451545.0.
pub fn earth_rotation_angle_deg(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    // Split the day count so the large integer part does not eat precision.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    (turns.rem_euclid(1.0) * 360.0).rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///        − 0.000029956·T⁴ − 0.0000000368·T⁵)″
pub fn gmst_deg(jd_ut1: f64) -> f64 {
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let higher = -0.00000044 + t * (-0.000029956 - t * 0.0000000368);
    let poly_arcsec = 0.014506 + t * (4612.156534 + t * (1.3915817 + t * higher));
    (earth_rotation_angle_deg(jd_ut1) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Greenwich Apparent Sidereal Time in degrees, [0, 360).
///
/// `equation_of_equinoxes_deg` is Δψ·cos ε, supplied by the frame layer.
pub fn gast_deg(jd_ut1: f64, equation_of_equinoxes_deg: f64) -> f64 {
    (gmst_deg(jd_ut1) + equation_of_equinoxes_deg).rem_euclid(360.0)
}

/// Local sidereal time in degrees from a Greenwich sidereal time and
/// east-positive longitude. Equivalent to `(GST_h + lon/15) × 15`.
pub fn local_sidereal_time_deg(greenwich_deg: f64, east_longitude_deg: f64) -> f64 {
    (greenwich_deg + east_longitude_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta = earth_rotation_angle_deg(J2000_JD);
        assert!((theta - 280.46).abs() < 0.01, "ERA at J2000 = {theta}°");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT1: GMST = 6h 39m 51.27s ≈ 99.9678°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.9678).abs() < 0.001, "GMST = {g}°");
    }

    #[test]
    fn gmst_gains_about_a_degree_per_day() {
        let g1 = gmst_deg(2_451_545.0);
        let g2 = gmst_deg(2_451_546.0);
        let gain = (g2 - g1).rem_euclid(360.0);
        assert!((gain - 0.9856).abs() < 0.001, "daily gain = {gain}°");
    }

    #[test]
    fn gast_adds_equation_of_equinoxes() {
        let jd = 2_460_000.5;
        let diff = gast_deg(jd, 0.004) - gmst_deg(jd);
        assert!((diff.rem_euclid(360.0) - 0.004).abs() < 1e-9);
    }

    #[test]
    fn lst_wraps_west_longitudes() {
        let lst = local_sidereal_time_deg(10.0, -30.0);
        assert!((lst - 340.0).abs() < 1e-12);
    }

    #[test]
    fn ranges() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5, 2_300_000.25] {
            let era = earth_rotation_angle_deg(jd);
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&era), "ERA out of range: {era}");
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }
}
