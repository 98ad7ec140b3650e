//! Ascendant, Midheaven and house cusps for a UTC instant and location.
//!
//! Pipeline: instant → [`Frame`] (RAMC, obliquity) → [`Angles`] (ASC, MC,
//! DSC, IC) → cusps for the selected [`HouseSystem`]. Equal and Koch are
//! closed-form; Placidus is solved numerically per cusp (see [`placidus`]).
//!
//! Every call is a pure function of its inputs. Cusps that cannot be solved
//! (circumpolar geometry near the poles) fall back to Equal-house values
//! and are flagged in [`Diagnostics`].
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use griha_houses::{HouseSystem, compute_houses};
//!
//! let t = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
//! let r = compute_houses(&t, 35.6895, 139.6917, HouseSystem::Placidus).unwrap();
//! println!("ASC {:.4}  MC {:.4}", r.ascendant.longitude, r.mc.longitude);
//! ```

pub mod angles;
pub mod config;
pub mod cusps;
pub mod engine;
pub mod error;
pub mod frame;
pub mod placidus;
pub mod reference;
#[cfg(feature = "swiss")]
pub mod swiss;
pub mod types;

use chrono::{DateTime, Utc};

pub use angles::{Angles, ascendant_longitude_deg, ascendant_raw_deg, mc_longitude_deg};
pub use config::{HousesConfig, SolverConfig};
pub use cusps::{CuspSet, build_cusps, compute_cusps, equal_cusps, koch_cusps};
pub use engine::{FormulaEngine, HouseEngine, compute_with_fallback, engine_for};
pub use error::HouseError;
pub use frame::{Frame, FrameTrace};
pub use placidus::{
    ArcMode, CuspSolution, SemiArcEquation, SolverContext, Window, dense_secant,
    oblique_ascension_deg, oblique_descension_deg, placidus_cusps, residual, scan_and_bisect,
    semi_diurnal_arc_deg, solve_cusp,
};
pub use reference::{CuspDelta, ReferenceCusps, max_abs_delta};
#[cfg(feature = "swiss")]
pub use swiss::SwissEngine;
pub use types::{
    ALL_HOUSE_SYSTEMS, AnglePoint, Cusp, CuspMethod, Diagnostics, EngineKind, GeoLocation,
    HouseResult, HouseSystem,
};

/// Compute angles and cusps with the formula engine and default solver
/// settings.
pub fn compute_houses(
    instant: &DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
    system: HouseSystem,
) -> Result<HouseResult, HouseError> {
    let location = GeoLocation::new(latitude_deg, longitude_deg)?;
    FormulaEngine::default().compute(instant, &location, system)
}

/// Like [`compute_houses`], parsing an RFC 3339 instant and a house-system
/// token. Both must be well formed.
pub fn compute_houses_from_str(
    instant: &str,
    latitude_deg: f64,
    longitude_deg: f64,
    system: &str,
) -> Result<HouseResult, HouseError> {
    let instant = griha_time::parse_utc(instant)?;
    let system: HouseSystem = system.parse()?;
    compute_houses(&instant, latitude_deg, longitude_deg, system)
}
