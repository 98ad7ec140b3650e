//! Sidereal frame of an instant: RAMC and mean obliquity.

use chrono::{DateTime, Utc};
use griha_frames::{equation_of_equinoxes_deg, mean_obliquity_deg, normalize_deg};
use griha_time::{TimeScales, gast_deg, gmst_deg, local_sidereal_time_deg};
use serde::{Deserialize, Serialize};

use crate::error::HouseError;

/// RAMC and obliquity, the two frame quantities every house system needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Right ascension of the Midheaven in degrees, [0, 360).
    pub ramc_deg: f64,
    /// Mean obliquity of the ecliptic in degrees.
    pub obliquity_deg: f64,
}

/// Intermediate quantities behind a [`Frame`], for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameTrace {
    pub jd_utc: f64,
    pub delta_t_s: f64,
    pub jd_tt: f64,
    /// Julian centuries of TT since J2000.0.
    pub centuries_tt: f64,
    pub gmst_deg: f64,
    pub equation_of_equinoxes_deg: f64,
    pub gast_deg: f64,
}

impl Frame {
    /// Frame from explicit values, normalizing RAMC.
    pub fn new(ramc_deg: f64, obliquity_deg: f64) -> Self {
        Self {
            ramc_deg: normalize_deg(ramc_deg),
            obliquity_deg,
        }
    }

    /// Frame for a UTC instant at an east-positive longitude.
    pub fn from_utc(instant: &DateTime<Utc>, longitude_deg: f64) -> Result<Self, HouseError> {
        Self::traced_from_utc(instant, longitude_deg).map(|(frame, _)| frame)
    }

    /// Like [`Frame::from_utc`], also returning the intermediate time scales.
    pub fn traced_from_utc(
        instant: &DateTime<Utc>,
        longitude_deg: f64,
    ) -> Result<(Self, FrameTrace), HouseError> {
        if !longitude_deg.is_finite() {
            return Err(HouseError::InvalidLongitude(longitude_deg));
        }
        let scales = TimeScales::from_utc(instant);
        let t = scales.centuries_tt();
        let eps = mean_obliquity_deg(t);
        let eqeq = equation_of_equinoxes_deg(t, eps);
        let gmst = gmst_deg(scales.jd_utc);
        let gast = gast_deg(scales.jd_utc, eqeq);
        let ramc = local_sidereal_time_deg(gast, longitude_deg);

        log::debug!(
            "frame: jd_utc={:.6} dT={:.3}s T={:.9} eps={:.8} gast={:.6} ramc={:.6}",
            scales.jd_utc,
            scales.delta_t_s,
            t,
            eps,
            gast,
            ramc
        );

        let trace = FrameTrace {
            jd_utc: scales.jd_utc,
            delta_t_s: scales.delta_t_s,
            jd_tt: scales.jd_tt,
            centuries_tt: t,
            gmst_deg: gmst,
            equation_of_equinoxes_deg: eqeq,
            gast_deg: gast,
        };
        Ok((Self::new(ramc, eps), trace))
    }
}
