use super::trig::TrigTable;
use nalgebra::{Point3, Unit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Axes shorter than this are treated as degenerate; a rotation about a
/// zero-length axis is numerically undefined.
pub const MIN_AXIS_LENGTH: f64 = 1e-9;

/// A rotation axis defined by two site indices into the working coordinate
/// array (the two atoms of a rotatable bond).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("Axis site index {index} is out of bounds for {len} sites")]
    AxisIndexOutOfBounds { index: usize, len: usize },

    #[error("Rotatable site index {index} is out of bounds for {len} sites")]
    TargetIndexOutOfBounds { index: usize, len: usize },

    #[error("Degenerate axis: sites {start} and {end} coincide")]
    DegenerateAxis { start: usize, end: usize },
}

/// Rotates the sites listed in `targets` about the axis through
/// `sites[axis.start]` and `sites[axis.end]` by `angle` radians, in place.
///
/// Only the target sites are mutated. The axis endpoints are read from the
/// current state of `sites`, so earlier rotations of a kinematic chain are
/// reflected in later axes. Sine and cosine come from the lookup table;
/// see [`TrigTable::sin_cos`] for the angle wrapping policy.
pub fn rotate_points_around_axis(
    sites: &mut [Point3<f64>],
    axis: Axis,
    targets: &[usize],
    angle: f64,
    table: &TrigTable,
) -> Result<(), RotationError> {
    let len = sites.len();
    for index in [axis.start, axis.end] {
        if index >= len {
            return Err(RotationError::AxisIndexOutOfBounds { index, len });
        }
    }
    if let Some(&index) = targets.iter().find(|&&i| i >= len) {
        return Err(RotationError::TargetIndexOutOfBounds { index, len });
    }

    let origin = sites[axis.start];
    let direction = sites[axis.end] - origin;
    if direction.norm() < MIN_AXIS_LENGTH {
        return Err(RotationError::DegenerateAxis {
            start: axis.start,
            end: axis.end,
        });
    }
    let dir = Unit::new_normalize(direction);
    let (sin, cos) = table.sin_cos(angle);

    // Rodrigues rotation about the unit axis through `origin`.
    for &index in targets {
        let r = sites[index] - origin;
        let rotated = r * cos + dir.cross(&r) * sin + dir.into_inner() * (dir.dot(&r) * (1.0 - cos));
        sites[index] = origin + rotated;
    }
    Ok(())
}
