use super::error::FitError;
use super::group::RotationGroup;
use crate::core::rotation::rotate_points_around_axis;
use crate::core::trig::TrigTable;
use nalgebra::Point3;

/// Builds one candidate arrangement by applying `angles` along the chain.
///
/// The base geometry is copied into `scratch` and the axes are applied in
/// order (0, 1, 2, ...). Each axis resolves its endpoints from the current
/// working coordinates, which earlier rotations have already moved; applying
/// the axes in order is what composes the rotations along the kinematic
/// chain instead of rotating independently about the base axes. The base
/// slice is never mutated.
///
/// The scratch buffer lets the search loop reuse one allocation across
/// candidates; [`compose`] is the owned-output convenience form.
pub fn compose_into(
    scratch: &mut Vec<Point3<f64>>,
    base: &[Point3<f64>],
    group: &RotationGroup,
    angles: &[f64],
    table: &TrigTable,
) -> Result<(), FitError> {
    if angles.len() != group.len() {
        return Err(FitError::AngleCountMismatch {
            expected: group.len(),
            found: angles.len(),
        });
    }

    scratch.clear();
    scratch.extend_from_slice(base);

    for (axis_index, ((axis, targets), &angle)) in group
        .axes()
        .iter()
        .zip(group.rotatable())
        .zip(angles)
        .enumerate()
    {
        rotate_points_around_axis(scratch, *axis, targets, angle, table).map_err(|source| {
            FitError::Rotation {
                axis: axis_index,
                source,
            }
        })?;
    }
    Ok(())
}

/// Like [`compose_into`], returning a freshly allocated arrangement.
pub fn compose(
    base: &[Point3<f64>],
    group: &RotationGroup,
    angles: &[f64],
    table: &TrigTable,
) -> Result<Vec<Point3<f64>>, FitError> {
    let mut sites = Vec::with_capacity(base.len());
    compose_into(&mut sites, base, group, angles, table)?;
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rotation::{Axis, RotationError};
    use std::f64::consts::FRAC_PI_2;

    fn table() -> TrigTable {
        TrigTable::new(3600)
    }

    /// Base geometry for a two-bond chain: sites 0/1 span the outer axis
    /// (z through the origin), sites 2/3 span the inner axis, site 4 is the
    /// leaf moved by both.
    fn chain_base() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
        ]
    }

    fn chain_group() -> RotationGroup {
        RotationGroup::new(
            vec![Axis { start: 0, end: 1 }, Axis { start: 2, end: 3 }],
            vec![vec![2, 3, 4], vec![4]],
        )
        .unwrap()
    }

    #[test]
    fn all_zero_angles_reproduce_the_base_geometry() {
        let base = chain_base();
        let sites = compose(&base, &chain_group(), &[0.0, 0.0], &table()).unwrap();

        for (site, orig) in sites.iter().zip(&base) {
            assert!((site - orig).norm() < 1e-9);
        }
    }

    #[test]
    fn base_geometry_is_never_mutated() {
        let base = chain_base();
        let before = base.clone();

        compose(&base, &chain_group(), &[FRAC_PI_2, FRAC_PI_2], &table()).unwrap();

        assert_eq!(base, before);
    }

    #[test]
    fn resolves_inner_axis_endpoints_from_the_rotated_frame() {
        // After the outer quarter turn, the inner axis has moved to the y
        // direction through (0, 1, 0); the leaf must rotate about that moved
        // axis, not about the base-frame x axis.
        let sites = compose(
            &chain_base(),
            &chain_group(),
            &[FRAC_PI_2, FRAC_PI_2],
            &table(),
        )
        .unwrap();

        assert!((sites[2] - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
        assert!((sites[3] - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-6);
        assert!((sites[4] - Point3::new(1.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn axis_order_changes_the_leaf_position() {
        // Two fixed perpendicular axes acting on the same leaf: neither
        // rotation moves the other's endpoints, so swapping the order is a
        // genuine change of composition order and must land the leaf
        // somewhere else.
        let base = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let z_axis = Axis { start: 0, end: 1 };
        let x_axis = Axis { start: 2, end: 3 };

        let z_then_x =
            RotationGroup::new(vec![z_axis, x_axis], vec![vec![4], vec![4]]).unwrap();
        let x_then_z =
            RotationGroup::new(vec![x_axis, z_axis], vec![vec![4], vec![4]]).unwrap();

        let forward = compose(&base, &z_then_x, &[FRAC_PI_2, FRAC_PI_2], &table()).unwrap();
        let swapped = compose(&base, &x_then_z, &[FRAC_PI_2, FRAC_PI_2], &table()).unwrap();

        assert!((forward[4] - Point3::new(-1.0, 0.0, 0.0)).norm() < 1e-6);
        assert!((swapped[4] - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
        assert!((forward[4] - swapped[4]).norm() > 1.0);
    }

    #[test]
    fn rejects_angle_set_of_the_wrong_length() {
        let result = compose(&chain_base(), &chain_group(), &[0.0], &table());

        assert_eq!(
            result,
            Err(FitError::AngleCountMismatch {
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn propagates_a_geometrically_degenerate_axis() {
        // Distinct indices whose coordinates coincide: structurally valid,
        // geometrically undefined.
        let base = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let group =
            RotationGroup::new(vec![Axis { start: 0, end: 1 }], vec![vec![2]]).unwrap();

        let result = compose(&base, &group, &[1.0], &table());

        assert_eq!(
            result,
            Err(FitError::Rotation {
                axis: 0,
                source: RotationError::DegenerateAxis { start: 0, end: 1 },
            })
        );
    }
}
