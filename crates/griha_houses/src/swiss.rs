//! Swiss Ephemeris house engine (cargo feature `swiss`).
//!
//! Cusps and angles come from `houses_ex`. DSC and IC are still taken as
//! the antipodes of ASC and MC. RAMC and obliquity in the diagnostics are
//! the formula frame, for comparison.
//!
//! The ephemeris directory is the configured path, else `SWISSEPH_PATH`,
//! else the library default.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use griha_time::datetime_to_jd;
use swisseph::swe::{houses_ex, set_ephe_path};
use swisseph::{AscMc, Cusp as SweCusp};

use crate::angles::Angles;
use crate::cusps::CuspSet;
use crate::engine::{HouseEngine, assemble_result};
use crate::error::HouseError;
use crate::frame::Frame;
use crate::types::{CuspMethod, EngineKind, GeoLocation, HouseResult, HouseSystem};

/// Swiss Ephemeris calculation flag: use the Swiss ephemeris files.
const FLG_SWIEPH: i32 = 2;

/// Environment variable read when no ephemeris path is configured.
pub const EPHE_PATH_ENV: &str = "SWISSEPH_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwissEngine {
    pub flags: i32,
    ephe_path: Option<PathBuf>,
}

impl Default for SwissEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SwissEngine {
    pub fn new(ephe_path: Option<PathBuf>) -> Self {
        Self {
            flags: FLG_SWIEPH,
            ephe_path,
        }
    }

    /// Configured path, else the value of `SWISSEPH_PATH`.
    pub fn resolved_ephe_path(&self) -> Option<PathBuf> {
        self.ephe_path
            .clone()
            .or_else(|| std::env::var_os(EPHE_PATH_ENV).map(PathBuf::from))
    }

    fn apply_ephe_path(&self) -> Result<(), HouseError> {
        let Some(path) = self.resolved_ephe_path() else {
            return Ok(());
        };
        if !path.is_dir() {
            return Err(HouseError::Engine(format!(
                "ephemeris path {} is not a directory",
                path.display()
            )));
        }
        let Some(text) = path.to_str() else {
            return Err(HouseError::Engine(format!(
                "ephemeris path {} is not valid UTF-8",
                path.display()
            )));
        };
        log::debug!("swiss: ephemeris path {text}");
        set_ephe_path(text);
        Ok(())
    }
}

impl HouseEngine for SwissEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Swiss
    }

    fn compute(
        &self,
        instant: &DateTime<Utc>,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseResult, HouseError> {
        let location = GeoLocation::new(location.latitude_deg, location.longitude_deg)?;
        let frame = Frame::from_utc(instant, location.longitude_deg)?;
        self.apply_ephe_path()?;
        let jd = datetime_to_jd(instant);

        let (c, a) = houses_ex(
            jd,
            self.flags,
            location.latitude_deg,
            location.longitude_deg,
            i32::from(system.swiss_code()),
        );
        let cusps = SweCusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let longitudes = [
            cusps.first,
            cusps.second,
            cusps.third,
            cusps.fourth,
            cusps.fifth,
            cusps.sixth,
            cusps.seventh,
            cusps.eighth,
            cusps.ninth,
            cusps.tenth,
            cusps.eleventh,
            cusps.twelfth,
        ];
        if !ascmc.ascendant.is_finite()
            || !ascmc.mc.is_finite()
            || longitudes.iter().any(|l| !l.is_finite())
        {
            return Err(HouseError::Engine(format!(
                "houses_ex returned non-finite values for {system} at lat {}",
                location.latitude_deg
            )));
        }

        log::debug!(
            "swiss: asc={:.6} mc={:.6} ({})",
            ascmc.ascendant,
            ascmc.mc,
            char::from(system.swiss_code())
        );

        let angles = Angles::new(ascmc.ascendant, ascmc.mc);
        let mut methods = [CuspMethod::Formula; 12];
        for i in [0, 3, 6, 9] {
            methods[i] = CuspMethod::Angle;
        }
        let set = CuspSet {
            longitudes,
            methods,
        };
        Ok(assemble_result(system, &angles, &set, &frame, EngineKind::Swiss))
    }
}
