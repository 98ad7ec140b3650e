//! Low-precision nutation, good to about 0.5″ in Δψ and 0.1″ in Δε.
//!
//! Only the four largest terms are kept. That is enough for the equation
//! of the equinoxes at house-cusp precision.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22. Public domain.

/// Nutation in longitude and obliquity, arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub dpsi_arcsec: f64,
    pub deps_arcsec: f64,
}

/// Nutation for `t` Julian centuries of TT since J2000.0.
pub fn nutation_low_precision(t: f64) -> Nutation {
    // Ω: longitude of the Moon's ascending node
    let om = (125.044_52 - 1_934.136_261 * t).to_radians();
    // L, L′: mean longitudes of the Sun and Moon
    let l = (280.466_5 + 36_000.769_8 * t).to_radians();
    let lp = (218.316_5 + 481_267.881_3 * t).to_radians();

    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * l).sin() - 0.23 * (2.0 * lp).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * l).cos() + 0.10 * (2.0 * lp).cos()
        - 0.09 * (2.0 * om).cos();

    Nutation {
        dpsi_arcsec: dpsi,
        deps_arcsec: deps,
    }
}

/// Equation of the equinoxes in degrees: Δψ·cos(ε + Δε).
///
/// `mean_eps_deg` is the mean obliquity at the same `t`.
pub fn equation_of_equinoxes_deg(t: f64, mean_eps_deg: f64) -> f64 {
    let n = nutation_low_precision(t);
    let true_eps = (mean_eps_deg + n.deps_arcsec / 3600.0).to_radians();
    n.dpsi_arcsec / 3600.0 * true_eps.cos()
}
