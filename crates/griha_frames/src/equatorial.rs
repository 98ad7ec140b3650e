//! Ecliptic → equatorial conversion for points on the ecliptic.

use crate::angle::normalize_deg;

/// Right ascension and declination, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in [0, 360).
    pub ra_deg: f64,
    /// Declination in [-90, 90].
    pub dec_deg: f64,
}

/// Equatorial coordinates of the ecliptic point at longitude `lon_deg`
/// (ecliptic latitude zero) for obliquity `eps_deg`.
///
/// α = atan2(sin λ·cos ε, cos λ), δ = asin(sin λ·sin ε)
pub fn ecliptic_to_equatorial(lon_deg: f64, eps_deg: f64) -> EquatorialCoords {
    let lam = lon_deg.to_radians();
    let eps = eps_deg.to_radians();
    let ra = (lam.sin() * eps.cos()).atan2(lam.cos());
    let dec = (lam.sin() * eps.sin()).clamp(-1.0, 1.0).asin();
    EquatorialCoords {
        ra_deg: normalize_deg(ra.to_degrees()),
        dec_deg: dec.to_degrees(),
    }
}
