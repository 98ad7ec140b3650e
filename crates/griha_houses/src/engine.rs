//! House engines: the formula path and optional external implementations
//! behind one trait.

use chrono::{DateTime, Utc};

use crate::angles::Angles;
use crate::config::{HousesConfig, SolverConfig};
use crate::cusps::{CuspSet, build_cusps, compute_cusps};
use crate::error::HouseError;
use crate::frame::Frame;
use crate::types::{AnglePoint, Diagnostics, EngineKind, GeoLocation, HouseResult, HouseSystem};

/// Something that can produce a [`HouseResult`] for an instant and place.
pub trait HouseEngine: Send + Sync {
    fn kind(&self) -> EngineKind;

    fn compute(
        &self,
        instant: &DateTime<Utc>,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseResult, HouseError>;
}

/// Closed-form angles and Equal/Koch cusps plus the numeric Placidus solver.
/// Always available.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormulaEngine {
    solver: SolverConfig,
}

impl FormulaEngine {
    /// Engine with validated solver settings.
    pub fn new(solver: SolverConfig) -> Result<Self, HouseError> {
        solver.validate()?;
        Ok(Self { solver })
    }

    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Compute from an already derived frame.
    pub fn compute_in_frame(
        &self,
        frame: &Frame,
        latitude_deg: f64,
        system: HouseSystem,
    ) -> HouseResult {
        let angles = Angles::from_frame(frame, latitude_deg);
        let set = compute_cusps(system, frame, &angles, latitude_deg, &self.solver);
        assemble_result(system, &angles, &set, frame, EngineKind::Formula)
    }
}

impl HouseEngine for FormulaEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Formula
    }

    fn compute(
        &self,
        instant: &DateTime<Utc>,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseResult, HouseError> {
        let location = GeoLocation::new(location.latitude_deg, location.longitude_deg)?;
        let frame = Frame::from_utc(instant, location.longitude_deg)?;
        Ok(self.compute_in_frame(&frame, location.latitude_deg, system))
    }
}

/// Build the public result. DSC and IC are always the antipodes.
pub(crate) fn assemble_result(
    system: HouseSystem,
    angles: &Angles,
    set: &CuspSet,
    frame: &Frame,
    engine: EngineKind,
) -> HouseResult {
    let ascendant = AnglePoint::new(angles.ascendant);
    let mc = AnglePoint::new(angles.mc);
    HouseResult {
        system,
        ascendant,
        descendant: ascendant.antipode(),
        mc,
        ic: mc.antipode(),
        houses: build_cusps(&set.longitudes),
        diagnostics: Diagnostics {
            ramc_deg: frame.ramc_deg,
            obliquity_deg: frame.obliquity_deg,
            engine,
            methods: set.methods,
        },
    }
}

/// Instantiate the engine selected in `config`.
pub fn engine_for(config: &HousesConfig) -> Result<Box<dyn HouseEngine>, HouseError> {
    config.solver.validate()?;
    match config.engine {
        EngineKind::Formula => Ok(Box::new(FormulaEngine::new(config.solver)?)),
        #[cfg(feature = "swiss")]
        EngineKind::Swiss => Ok(Box::new(crate::swiss::SwissEngine::new(config.ephe_path.clone()))),
        #[cfg(not(feature = "swiss"))]
        EngineKind::Swiss => Err(HouseError::Engine(
            "swiss engine requested but griha_houses was built without the `swiss` feature"
                .to_string(),
        )),
    }
}

/// Run `primary`; if it fails with an engine error, log and recompute with
/// `fallback`. Input errors are returned as-is.
pub fn compute_with_fallback(
    primary: &dyn HouseEngine,
    fallback: &FormulaEngine,
    instant: &DateTime<Utc>,
    location: &GeoLocation,
    system: HouseSystem,
) -> Result<HouseResult, HouseError> {
    match primary.compute(instant, location, system) {
        Err(HouseError::Engine(reason)) => {
            log::warn!(
                "{} engine failed ({reason}), falling back to formula engine",
                primary.kind()
            );
            fallback.compute(instant, location, system)
        }
        other => other,
    }
}
