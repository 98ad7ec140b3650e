//! Frame helpers for house computations.
//!
//! Provides circular angle arithmetic, the mean obliquity of the ecliptic,
//! a low-precision nutation model for the equation of the equinoxes, and
//! the ecliptic → equatorial transform used by semi-arc methods.

pub mod angle;
pub mod equatorial;
pub mod nutation;
pub mod obliquity;

pub use angle::{arc_forward_deg, circular_diff_deg, normalize_deg};
pub use equatorial::{EquatorialCoords, ecliptic_to_equatorial};
pub use nutation::{Nutation, equation_of_equinoxes_deg, nutation_low_precision};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_arcsec, mean_obliquity_deg};
