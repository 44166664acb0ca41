use nalgebra::{Matrix3, Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions {dims:?} require {expected} values, but {found} were provided")]
    ValueCountMismatch {
        dims: [usize; 3],
        expected: usize,
        found: usize,
    },

    #[error("Grid dimensions must all be non-zero, got {dims:?}")]
    EmptyDimension { dims: [usize; 3] },
}

/// A 3D scalar field sampled on a periodic grid over one unit cell.
///
/// Values are stored in row-major order (`x` slowest, `z` fastest); grid
/// point `(ix, iy, iz)` lives at `values[(ix * ny + iy) * nz + iz]`. The
/// fractionalization matrix maps Cartesian coordinates into fractional cell
/// coordinates, which wrap back into `[0, 1)` on lookup, matching the
/// periodic boundary convention of crystallographic maps.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGrid {
    values: Vec<f64>,
    dims: [usize; 3],
    fractionalizer: Matrix3<f64>,
}

impl DensityGrid {
    pub fn new(
        values: Vec<f64>,
        dims: [usize; 3],
        fractionalizer: Matrix3<f64>,
    ) -> Result<Self, GridError> {
        if dims.iter().any(|&d| d == 0) {
            return Err(GridError::EmptyDimension { dims });
        }
        let expected = dims[0] * dims[1] * dims[2];
        if values.len() != expected {
            return Err(GridError::ValueCountMismatch {
                dims,
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            values,
            dims,
            fractionalizer,
        })
    }

    /// Convenience constructor for an orthogonal cell with the given edge
    /// lengths in the same units as the query coordinates.
    pub fn with_cell_lengths(
        values: Vec<f64>,
        dims: [usize; 3],
        lengths: [f64; 3],
    ) -> Result<Self, GridError> {
        let fractionalizer = Matrix3::from_diagonal(&Vector3::new(
            1.0 / lengths[0],
            1.0 / lengths[1],
            1.0 / lengths[2],
        ));
        Self::new(values, dims, fractionalizer)
    }

    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    fn value(&self, ix: usize, iy: usize, iz: usize) -> f64 {
        let [nx, ny, nz] = self.dims;
        self.values[((ix % nx) * ny + iy % ny) * nz + iz % nz]
    }

    /// Eight-point (trilinear) interpolation of the field at an arbitrary
    /// Cartesian site. The site is fractionalized, wrapped into the unit
    /// cell, and blended from the eight surrounding grid points.
    pub fn interpolate(&self, site: &Point3<f64>) -> f64 {
        let frac = self.fractionalizer * site.coords;
        let [nx, ny, nz] = self.dims;

        let gx = frac.x.rem_euclid(1.0) * nx as f64;
        let gy = frac.y.rem_euclid(1.0) * ny as f64;
        let gz = frac.z.rem_euclid(1.0) * nz as f64;

        let (x0, fx) = (gx.floor() as usize, gx.fract());
        let (y0, fy) = (gy.floor() as usize, gy.fract());
        let (z0, fz) = (gz.floor() as usize, gz.fract());

        let mut result = 0.0;
        for (dx, wx) in [(0, 1.0 - fx), (1, fx)] {
            for (dy, wy) in [(0, 1.0 - fy), (1, fy)] {
                for (dz, wz) in [(0, 1.0 - fz), (1, fz)] {
                    result += wx * wy * wz * self.value(x0 + dx, y0 + dy, z0 + dz);
                }
            }
        }
        result
    }
}
