//! Error types for house computation.

use griha_time::TimeError;
use thiserror::Error;

/// Errors surfaced to callers of the house engine.
///
/// Circumpolar geometry and root-finder non-convergence are not errors:
/// they are recovered per cusp and reported through
/// [`Diagnostics`](crate::Diagnostics).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HouseError {
    /// Latitude is not finite or lies outside [-90, 90].
    #[error("invalid latitude {0}: must be finite and within [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude is not finite.
    #[error("invalid longitude {0}: must be finite")]
    InvalidLongitude(f64),
    /// House-system token is not one of equal, koch or placidus.
    #[error("unknown house system '{0}' (expected equal, koch or placidus)")]
    UnknownHouseSystem(String),
    /// Malformed or naive instant.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Solver or engine configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration file could not be read.
    #[error("cannot read config '{path}': {reason}")]
    ConfigIo { path: String, reason: String },
    /// Configuration text is not valid TOML for [`HousesConfig`](crate::HousesConfig).
    #[error("cannot parse config: {0}")]
    ConfigParse(String),
    /// An optional engine failed or is not compiled in.
    #[error("engine error: {0}")]
    Engine(String),
    /// Reference cusp list could not be parsed.
    #[error("invalid reference cusps: {0}")]
    InvalidReference(String),
}
