use crate::core::rotation::RotationError;
use thiserror::Error;

/// Errors raised by one search invocation.
///
/// All of these are deterministic input-validation failures; they abort the
/// whole search rather than skipping the offending candidate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FitError {
    #[error("Rotation group mismatch: {axes} axes but {point_sets} rotatable point sets")]
    GroupLengthMismatch { axes: usize, point_sets: usize },

    #[error("Axis {axis} uses the same site index {index} for both endpoints")]
    CoincidentAxisSites { axis: usize, index: usize },

    #[error("Candidate {candidate} has {found} angles, expected {expected} (one per axis)")]
    CandidateAngleCount {
        candidate: usize,
        expected: usize,
        found: usize,
    },

    #[error("Angle set has {found} angles, expected {expected} (one per axis)")]
    AngleCountMismatch { expected: usize, found: usize },

    #[error("Reference geometry has {reference} sites, candidate has {candidate}")]
    ReferenceLengthMismatch { reference: usize, candidate: usize },

    #[error("Selection index {index} is out of bounds for {len} sites")]
    SelectionOutOfBounds { index: usize, len: usize },

    #[error("Rotation about axis {axis} failed: {source}")]
    Rotation {
        axis: usize,
        #[source]
        source: RotationError,
    },
}
