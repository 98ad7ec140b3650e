//! Cusp dispatch and the closed-form Equal and Koch systems.

use griha_frames::normalize_deg;

use crate::angles::Angles;
use crate::config::SolverConfig;
use crate::frame::Frame;
use crate::placidus::placidus_cusps;
use crate::types::{Cusp, CuspMethod, HouseSystem};

/// Raw cusp longitudes with the method behind each, indexed 0..12.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuspSet {
    pub longitudes: [f64; 12],
    pub methods: [CuspMethod; 12],
}

/// Equal houses: `ASC + (i − 1)·30°`.
pub fn equal_cusps(ascendant_deg: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_deg(ascendant_deg + i as f64 * 30.0))
}

/// Koch, approximated: the four angles fixed, every other cusp at its
/// Equal-house position. Intermediate cusps are not guaranteed antipodal.
pub fn koch_cusps(angles: &Angles) -> [f64; 12] {
    let mut cusps = equal_cusps(angles.ascendant);
    cusps[0] = angles.ascendant;
    cusps[3] = angles.ic;
    cusps[6] = angles.descendant;
    cusps[9] = angles.mc;
    cusps
}

/// Compute the 12 cusps for `system`.
pub fn compute_cusps(
    system: HouseSystem,
    frame: &Frame,
    angles: &Angles,
    latitude_deg: f64,
    config: &SolverConfig,
) -> CuspSet {
    match system {
        HouseSystem::Equal => {
            let mut methods = [CuspMethod::Formula; 12];
            methods[0] = CuspMethod::Angle;
            CuspSet {
                longitudes: equal_cusps(angles.ascendant),
                methods,
            }
        }
        HouseSystem::Koch => {
            let mut methods = [CuspMethod::Formula; 12];
            for i in [0, 3, 6, 9] {
                methods[i] = CuspMethod::Angle;
            }
            CuspSet {
                longitudes: koch_cusps(angles),
                methods,
            }
        }
        HouseSystem::Placidus => placidus_cusps(frame, angles, latitude_deg, config),
    }
}

/// Number the longitudes 1..=12.
pub fn build_cusps(longitudes: &[f64; 12]) -> [Cusp; 12] {
    std::array::from_fn(|i| Cusp {
        number: i as u8 + 1,
        longitude: normalize_deg(longitudes[i]),
    })
}
