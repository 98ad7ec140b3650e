//! Ascendant and Midheaven from RAMC, obliquity and latitude.
//!
//! MC  = atan2(sin RAMC, cos RAMC · cos ε)
//! ASC = atan2(−cos RAMC, cos ε · sin RAMC + tan φ · sin ε), then + 180°
//!
//! The raw ascendant expression lands on the western horizon point under
//! this sign convention. [`ascendant_longitude_deg`] applies the half-turn
//! as a separate step so the raw value can be checked on its own.
//!
//! At φ = ±90° `tan φ` is huge but finite; the result is defined and
//! numerically unstable.

use griha_frames::normalize_deg;
use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// MC ecliptic longitude in degrees, [0, 360).
pub fn mc_longitude_deg(ramc_deg: f64, obliquity_deg: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_deg(ramc.sin().atan2(ramc.cos() * eps.cos()).to_degrees())
}

/// Raw ascendant expression before the half-turn correction, [0, 360).
pub fn ascendant_raw_deg(ramc_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let y = -ramc.cos();
    let x = eps.cos() * ramc.sin() + phi.tan() * eps.sin();
    normalize_deg(y.atan2(x).to_degrees())
}

/// Ascendant ecliptic longitude in degrees, [0, 360).
pub fn ascendant_longitude_deg(ramc_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    normalize_deg(ascendant_raw_deg(ramc_deg, obliquity_deg, latitude_deg) + 180.0)
}

/// The four angles. DSC and IC are always antipodes, never solved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub ascendant: f64,
    pub mc: f64,
    pub descendant: f64,
    pub ic: f64,
}

impl Angles {
    /// Angles from an ascendant and MC.
    pub fn new(ascendant: f64, mc: f64) -> Self {
        let ascendant = normalize_deg(ascendant);
        let mc = normalize_deg(mc);
        Self {
            ascendant,
            mc,
            descendant: normalize_deg(ascendant + 180.0),
            ic: normalize_deg(mc + 180.0),
        }
    }

    pub fn from_frame(frame: &Frame, latitude_deg: f64) -> Self {
        let asc = ascendant_longitude_deg(frame.ramc_deg, frame.obliquity_deg, latitude_deg);
        let mc = mc_longitude_deg(frame.ramc_deg, frame.obliquity_deg);
        log::debug!("angles: asc={asc:.6} mc={mc:.6} (lat={latitude_deg})");
        Self::new(asc, mc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.4392911;

    #[test]
    fn equator_at_ramc_zero() {
        // 0° Cancer rises while 0° Aries culminates.
        let asc = ascendant_longitude_deg(0.0, EPS, 0.0);
        let mc = mc_longitude_deg(0.0, EPS);
        assert!((asc - 90.0).abs() < 1e-10, "asc = {asc}");
        assert!(mc.abs() < 1e-10, "mc = {mc}");
    }

    #[test]
    fn raw_formula_is_the_descendant() {
        let raw = ascendant_raw_deg(0.0, EPS, 0.0);
        assert!((raw - 270.0).abs() < 1e-10, "raw = {raw}");
    }

    #[test]
    fn mc_at_ramc_90_and_270() {
        assert!((mc_longitude_deg(90.0, EPS) - 90.0).abs() < 1e-10);
        assert!((mc_longitude_deg(270.0, EPS) - 270.0).abs() < 1e-10);
    }

    #[test]
    fn aries_rises_at_ramc_270_on_equator() {
        let asc = ascendant_longitude_deg(270.0, EPS, 0.0);
        assert!(asc.abs() < 1e-10 || (asc - 360.0).abs() < 1e-10, "asc = {asc}");
    }

    #[test]
    fn tokyo_millennium() {
        let f = Frame::new(239.655923, 23.43929129);
        let a = Angles::from_frame(&f, 35.6895);
        assert!((a.ascendant - 315.049890).abs() < 1e-4, "asc = {}", a.ascendant);
        assert!((a.mc - 241.760623).abs() < 1e-4, "mc = {}", a.mc);
    }

    #[test]
    fn antipodes_exact() {
        let a = Angles::new(350.0, 260.0);
        assert!((a.descendant - 170.0).abs() < 1e-12);
        assert!((a.ic - 80.0).abs() < 1e-12);
    }

    #[test]
    fn polar_latitudes_finite() {
        for &lat in &[90.0, -90.0, 89.9, -89.9] {
            for i in 0..24 {
                let asc = ascendant_longitude_deg(i as f64 * 15.0, EPS, lat);
                assert!(asc.is_finite() && (0.0..360.0).contains(&asc), "lat {lat}: {asc}");
            }
        }
    }
}
