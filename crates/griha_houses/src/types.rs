//! Types for house computation.
//!
//! Provides the house-system selector, observer location, result records
//! and the per-cusp diagnostics that make fallbacks observable.

use std::fmt;
use std::str::FromStr;

use griha_frames::normalize_deg;
use serde::{Deserialize, Serialize};

use crate::error::HouseError;

/// The supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseSystem {
    /// Equal houses: 30° steps from the Ascendant.
    Equal,
    /// Koch, approximated: fixed angles with 30° steps between them.
    Koch,
    /// Placidus: trisection of the semi-diurnal and semi-nocturnal arcs.
    #[default]
    Placidus,
}

/// All house systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 3] =
    [HouseSystem::Equal, HouseSystem::Koch, HouseSystem::Placidus];

impl HouseSystem {
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Koch => "koch",
            Self::Placidus => "placidus",
        }
    }

    /// One-letter Swiss Ephemeris house code.
    pub const fn swiss_code(self) -> u8 {
        match self {
            Self::Equal => b'E',
            Self::Koch => b'K',
            Self::Placidus => b'P',
        }
    }

    /// Whether cusp `n` and cusp `n + 6` are always antipodal.
    pub const fn antipodal_cusps(self) -> bool {
        matches!(self, Self::Equal | Self::Placidus)
    }

    /// Lenient parse: unknown tokens resolve to Placidus with a warning.
    pub fn from_token_or_default(token: &str) -> Self {
        match token.parse() {
            Ok(system) => system,
            Err(_) => {
                log::warn!("unknown house system '{token}', defaulting to placidus");
                Self::Placidus
            }
        }
    }
}

impl FromStr for HouseSystem {
    type Err = HouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equal" | "e" => Ok(Self::Equal),
            "koch" | "k" => Ok(Self::Koch),
            "placidus" | "p" => Ok(Self::Placidus),
            _ => Err(HouseError::UnknownHouseSystem(s.to_string())),
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which engine produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Closed-form angles plus the numeric Placidus solver.
    #[default]
    Formula,
    /// Swiss Ephemeris `houses_ex` (cargo feature `swiss`).
    Swiss,
}

impl EngineKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Formula => "formula",
            Self::Swiss => "swiss",
        }
    }
}

impl FromStr for EngineKind {
    type Err = HouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formula" => Ok(Self::Formula),
            "swiss" => Ok(Self::Swiss),
            _ => Err(HouseError::InvalidConfig(format!(
                "unknown engine '{s}' (expected formula or swiss)"
            ))),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observer location on the Earth. No altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Any finite value.
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Validated location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, HouseError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(HouseError::InvalidLatitude(latitude_deg));
        }
        if !longitude_deg.is_finite() {
            return Err(HouseError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// An ecliptic point such as the Ascendant or MC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnglePoint {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude: f64,
}

impl AnglePoint {
    pub fn new(longitude: f64) -> Self {
        Self {
            longitude: normalize_deg(longitude),
        }
    }

    /// The diametrically opposite point.
    pub fn antipode(self) -> Self {
        Self::new(self.longitude + 180.0)
    }
}

/// A single house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cusp {
    /// House number, 1-12.
    pub number: u8,
    /// Ecliptic longitude of the cusp in degrees, [0, 360).
    pub longitude: f64,
}

/// How a cusp longitude was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuspMethod {
    /// One of the four angles (ASC, IC, DSC, MC).
    Angle,
    /// Closed-form system formula (Equal, Koch, external engine).
    Formula,
    /// Bracketed root refined by bisection.
    Bisection,
    /// Dense scan with secant polish.
    Secant,
    /// Antipode of a solved cusp.
    Mirrored,
    /// Equal-house value substituted for an unsolvable cusp.
    EqualFallback,
}

/// Side-channel information about a computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Right ascension of the Midheaven, degrees.
    pub ramc_deg: f64,
    /// Mean obliquity of the ecliptic, degrees.
    pub obliquity_deg: f64,
    /// Engine that produced the result.
    pub engine: EngineKind,
    /// Method per cusp, indexed 0..12 (methods[0] = house 1).
    pub methods: [CuspMethod; 12],
}

impl Diagnostics {
    /// House numbers whose cusp was replaced by the Equal-house value.
    pub fn degraded_houses(&self) -> Vec<u8> {
        self.methods
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == CuspMethod::EqualFallback)
            .map(|(i, _)| i as u8 + 1)
            .collect()
    }

    pub fn is_degraded(&self) -> bool {
        self.methods.contains(&CuspMethod::EqualFallback)
    }
}

/// Full result: the four angles, 12 cusps and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseResult {
    pub system: HouseSystem,
    pub ascendant: AnglePoint,
    pub descendant: AnglePoint,
    pub mc: AnglePoint,
    pub ic: AnglePoint,
    /// The 12 cusps, indexed 0..12 (houses[0] = house 1).
    pub houses: [Cusp; 12],
    pub diagnostics: Diagnostics,
}

impl HouseResult {
    /// Cusp longitudes in house order.
    pub fn longitudes(&self) -> [f64; 12] {
        self.houses.map(|c| c.longitude)
    }

    /// Longitude of house `number` (1-12), or `None` if out of range.
    pub fn cusp(&self, number: u8) -> Option<f64> {
        self.houses
            .get(usize::from(number).checked_sub(1)?)
            .map(|c| c.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parse_accepts_names_and_codes() {
        assert_eq!("Placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!(" koch ".parse::<HouseSystem>().unwrap(), HouseSystem::Koch);
        assert_eq!("E".parse::<HouseSystem>().unwrap(), HouseSystem::Equal);
        assert!(matches!(
            "whole_sign".parse::<HouseSystem>(),
            Err(HouseError::UnknownHouseSystem(_))
        ));
    }

    #[test]
    fn lenient_parse_defaults_to_placidus() {
        assert_eq!(HouseSystem::from_token_or_default("equal"), HouseSystem::Equal);
        assert_eq!(HouseSystem::from_token_or_default("regiomontanus"), HouseSystem::Placidus);
        assert_eq!(HouseSystem::from_token_or_default(""), HouseSystem::Placidus);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for &s in HouseSystem::all() {
            assert_eq!(s.to_string().parse::<HouseSystem>().unwrap(), s);
        }
    }

    #[test]
    fn swiss_codes() {
        let codes: Vec<u8> = HouseSystem::all().iter().map(|s| s.swiss_code()).collect();
        assert_eq!(codes, vec![b'E', b'K', b'P']);
    }

    #[test]
    fn only_koch_breaks_antipodal_cusps() {
        assert!(HouseSystem::Equal.antipodal_cusps());
        assert!(HouseSystem::Placidus.antipodal_cusps());
        assert!(!HouseSystem::Koch.antipodal_cusps());
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(90.0, -180.0).is_ok());
        assert!(matches!(GeoLocation::new(90.5, 0.0), Err(HouseError::InvalidLatitude(_))));
        assert!(matches!(GeoLocation::new(f64::NAN, 0.0), Err(HouseError::InvalidLatitude(_))));
        assert!(matches!(
            GeoLocation::new(0.0, f64::INFINITY),
            Err(HouseError::InvalidLongitude(_))
        ));
        // Longitudes are normalized downstream, not range-checked.
        assert!(GeoLocation::new(0.0, 400.0).is_ok());
    }

    #[test]
    fn antipode_wraps() {
        let p = AnglePoint::new(300.0).antipode();
        assert!((p.longitude - 120.0).abs() < 1e-12);
    }

    #[test]
    fn degraded_houses_lists_fallbacks() {
        let mut methods = [CuspMethod::Formula; 12];
        methods[4] = CuspMethod::EqualFallback;
        methods[10] = CuspMethod::EqualFallback;
        let d = Diagnostics {
            ramc_deg: 0.0,
            obliquity_deg: 23.44,
            engine: EngineKind::Formula,
            methods,
        };
        assert!(d.is_degraded());
        assert_eq!(d.degraded_houses(), vec![5, 11]);
    }

    #[test]
    fn engine_kind_parse() {
        assert_eq!("Swiss".parse::<EngineKind>().unwrap(), EngineKind::Swiss);
        assert!(matches!("jpl".parse::<EngineKind>(), Err(HouseError::InvalidConfig(_))));
    }
}
