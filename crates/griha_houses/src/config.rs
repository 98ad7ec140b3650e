//! Solver and engine configuration, loadable from TOML.
//!
//! ```toml
//! engine = "formula"
//! system = "placidus"
//!
//! [solver]
//! coarse_step_deg = 0.5
//! fine_step_deg = 0.1
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HouseError;
use crate::types::{EngineKind, HouseSystem};

/// Upper bound on bisection and secant iteration counts.
pub const MAX_SOLVER_ITERATIONS: u32 = 1000;

/// Tunables of the Placidus root-finder. Every field has a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Scan step for the ascension cusps (11, 12), degrees.
    pub coarse_step_deg: f64,
    /// Scan step for the descension cusps (2, 3), degrees.
    pub fine_step_deg: f64,
    /// Dense sampling step of the secant fallback, degrees.
    pub fallback_step_deg: f64,
    pub bisection_iterations: u32,
    pub secant_iterations: u32,
    /// Residual below which a root is accepted, degrees.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            coarse_step_deg: 0.5,
            fine_step_deg: 0.1,
            fallback_step_deg: 0.05,
            bisection_iterations: 30,
            secant_iterations: 20,
            tolerance: 1e-6,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), HouseError> {
        let steps = [
            ("coarse_step_deg", self.coarse_step_deg),
            ("fine_step_deg", self.fine_step_deg),
            ("fallback_step_deg", self.fallback_step_deg),
        ];
        for (name, step) in steps {
            if !step.is_finite() || step <= 0.0 || step > 90.0 {
                return Err(HouseError::InvalidConfig(format!(
                    "{name} must be in (0, 90], got {step}"
                )));
            }
        }
        let iterations = [
            ("bisection_iterations", self.bisection_iterations),
            ("secant_iterations", self.secant_iterations),
        ];
        for (name, n) in iterations {
            if !(1..=MAX_SOLVER_ITERATIONS).contains(&n) {
                return Err(HouseError::InvalidConfig(format!(
                    "{name} must be in 1..={MAX_SOLVER_ITERATIONS}, got {n}"
                )));
            }
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(HouseError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Top-level configuration: engine, default system and solver tunables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HousesConfig {
    pub engine: EngineKind,
    pub system: HouseSystem,
    pub solver: SolverConfig,
    /// Swiss Ephemeris data directory. Falls back to `SWISSEPH_PATH`.
    pub ephe_path: Option<PathBuf>,
}

impl HousesConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, HouseError> {
        let config: Self =
            toml::from_str(text).map_err(|e| HouseError::ConfigParse(e.to_string()))?;
        config.solver.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, HouseError> {
        let text = std::fs::read_to_string(path).map_err(|e| HouseError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }
}
