//! Comparison of computed cusps against an externally supplied reference.
//!
//! Accepted JSON shapes:
//!
//! ```json
//! [195.1, 225.3, 254.0]
//! [{"number": 1, "longitude": 195.1}, {"number": 10, "longitude": 108.8}]
//! ```
//!
//! A plain array is read in house order starting at house 1. This is a
//! reporting aid only; nothing here feeds back into the computation.

use griha_frames::circular_diff_deg;
use serde::{Deserialize, Serialize};

use crate::error::HouseError;
use crate::types::HouseResult;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReference {
    Plain(Vec<f64>),
    Numbered(Vec<NumberedCusp>),
}

#[derive(Deserialize)]
struct NumberedCusp {
    number: u8,
    longitude: f64,
}

/// Reference cusp longitudes keyed by house number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceCusps {
    entries: Vec<(u8, f64)>,
}

/// Difference between a computed cusp and its reference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CuspDelta {
    pub house: u8,
    pub computed: f64,
    pub reference: f64,
    /// `computed − reference`, in (−180, 180].
    pub delta_deg: f64,
}

impl ReferenceCusps {
    pub fn from_json(text: &str) -> Result<Self, HouseError> {
        let raw: RawReference =
            serde_json::from_str(text).map_err(|e| HouseError::InvalidReference(e.to_string()))?;
        let entries: Vec<(u8, f64)> = match raw {
            RawReference::Plain(values) => {
                if values.len() > 12 {
                    return Err(HouseError::InvalidReference(format!(
                        "{} longitudes given, at most 12 allowed",
                        values.len()
                    )));
                }
                values
                    .into_iter()
                    .enumerate()
                    .map(|(i, lon)| (i as u8 + 1, lon))
                    .collect()
            }
            RawReference::Numbered(cusps) => {
                cusps.into_iter().map(|c| (c.number, c.longitude)).collect()
            }
        };

        let mut seen = [false; 12];
        for &(house, lon) in &entries {
            if !(1..=12).contains(&house) {
                return Err(HouseError::InvalidReference(format!(
                    "house number {house} outside 1..=12"
                )));
            }
            if !lon.is_finite() {
                return Err(HouseError::InvalidReference(format!(
                    "house {house}: longitude is not finite"
                )));
            }
            let slot = &mut seen[usize::from(house - 1)];
            if *slot {
                return Err(HouseError::InvalidReference(format!(
                    "house {house} given twice"
                )));
            }
            *slot = true;
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-house deltas for every reference entry, in the order given.
    pub fn compare(&self, result: &HouseResult) -> Vec<CuspDelta> {
        let deltas: Vec<CuspDelta> = self
            .entries
            .iter()
            .filter_map(|&(house, reference)| {
                let computed = result.cusp(house)?;
                Some(CuspDelta {
                    house,
                    computed,
                    reference,
                    delta_deg: circular_diff_deg(reference, computed),
                })
            })
            .collect();
        for d in &deltas {
            log::info!(
                "house {:>2}: computed {:9.4} reference {:9.4} delta {:+.4}",
                d.house,
                d.computed,
                d.reference,
                d.delta_deg
            );
        }
        deltas
    }
}

/// Largest absolute delta, or `None` for an empty comparison.
pub fn max_abs_delta(deltas: &[CuspDelta]) -> Option<f64> {
    deltas.iter().map(|d| d.delta_deg.abs()).reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_array() {
        let r = ReferenceCusps::from_json("[10, 40.5, 70]").unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.entries[1], (2, 40.5));
    }

    #[test]
    fn numbered_objects() {
        let r = ReferenceCusps::from_json(r#"[{"number": 10, "longitude": 108.8}]"#).unwrap();
        assert_eq!(r.entries, vec![(10, 108.8)]);
    }

    #[test]
    fn rejects_bad_input() {
        for text in [
            "not json",
            r#"{"number": 1}"#,
            "[1,2,3,4,5,6,7,8,9,10,11,12,13]",
            r#"[{"number": 13, "longitude": 1.0}]"#,
            r#"[{"number": 2, "longitude": 1.0}, {"number": 2, "longitude": 3.0}]"#,
        ] {
            assert!(
                matches!(ReferenceCusps::from_json(text), Err(HouseError::InvalidReference(_))),
                "accepted {text}"
            );
        }
    }

    #[test]
    fn max_delta() {
        let d = |delta_deg| CuspDelta {
            house: 1,
            computed: 0.0,
            reference: 0.0,
            delta_deg,
        };
        assert_eq!(max_abs_delta(&[]), None);
        assert_eq!(max_abs_delta(&[d(0.1), d(-0.4), d(0.2)]), Some(0.4));
    }
}
