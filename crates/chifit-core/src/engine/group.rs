use super::error::FitError;
use crate::core::rotation::Axis;
use serde::{Deserialize, Serialize};

/// An ordered kinematic chain of rotatable bonds.
///
/// Axis `i` rotates exactly the point-index set at position `i`. The sets
/// are typically nested outward along the chain: the set for axis 0 usually
/// contains the endpoints of axis 1, axis 2, and so on, which is what makes
/// later rotations compose in the frame already moved by earlier ones.
///
/// The equal-length invariant between the axis list and the rotatable-set
/// list is checked once at construction (including on deserialization), so
/// the search loop can rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRotationGroup")]
pub struct RotationGroup {
    axes: Vec<Axis>,
    rotatable: Vec<Vec<usize>>,
}

#[derive(Deserialize)]
struct RawRotationGroup {
    axes: Vec<Axis>,
    rotatable: Vec<Vec<usize>>,
}

impl TryFrom<RawRotationGroup> for RotationGroup {
    type Error = FitError;

    fn try_from(raw: RawRotationGroup) -> Result<Self, FitError> {
        Self::new(raw.axes, raw.rotatable)
    }
}

impl RotationGroup {
    pub fn new(axes: Vec<Axis>, rotatable: Vec<Vec<usize>>) -> Result<Self, FitError> {
        if axes.len() != rotatable.len() {
            return Err(FitError::GroupLengthMismatch {
                axes: axes.len(),
                point_sets: rotatable.len(),
            });
        }
        for (i, axis) in axes.iter().enumerate() {
            if axis.start == axis.end {
                return Err(FitError::CoincidentAxisSites {
                    axis: i,
                    index: axis.start,
                });
            }
        }
        Ok(Self { axes, rotatable })
    }

    /// The number of axes (and thus the required length of every angle set).
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn rotatable(&self) -> &[Vec<usize>] {
        &self.rotatable
    }

    /// Checks every candidate's angle count against the axis count.
    /// Any mismatch aborts the whole search; there is no per-candidate
    /// recovery.
    pub fn check_candidates(&self, candidates: &[Vec<f64>]) -> Result<(), FitError> {
        for (candidate, angles) in candidates.iter().enumerate() {
            if angles.len() != self.axes.len() {
                return Err(FitError::CandidateAngleCount {
                    candidate,
                    expected: self.axes.len(),
                    found: angles.len(),
                });
            }
        }
        Ok(())
    }
}
