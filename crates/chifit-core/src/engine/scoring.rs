use super::error::FitError;
use crate::core::field::DensityGrid;
use nalgebra::Point3;

/// Scoring strategy for one candidate arrangement.
///
/// The two implementations share the contract but have opposite polarity:
/// density agreement is maximized, deviation from a reference geometry is
/// minimized. [`ScoreFunction::improves`] is strict in both directions, so
/// the search keeps the earliest candidate on exact ties.
pub trait ScoreFunction {
    /// Scores a full candidate arrangement.
    fn score(&self, sites: &[Point3<f64>]) -> Result<f64, FitError>;

    /// Whether `candidate` strictly beats `incumbent` under this function's
    /// polarity.
    fn improves(&self, candidate: f64, incumbent: f64) -> bool;

    /// The score the first candidate has to beat.
    fn initial_score(&self) -> f64;
}

/// Real-space density agreement: the sum of eight-point interpolated map
/// values over the selected sites. Higher is better.
///
/// The selection is independent of the rotatable sets, so callers may score
/// only a subset of the moved points (or points that never move at all).
/// A candidate is only recorded if it strictly beats `threshold`, typically
/// the score of the unperturbed starting geometry.
pub struct DensityScore<'a> {
    grid: &'a DensityGrid,
    selection: &'a [usize],
    threshold: f64,
}

impl<'a> DensityScore<'a> {
    pub fn new(grid: &'a DensityGrid, selection: &'a [usize], threshold: f64) -> Self {
        Self {
            grid,
            selection,
            threshold,
        }
    }

    /// Scores an arbitrary geometry, e.g. to derive the threshold from the
    /// starting arrangement.
    pub fn target_value(grid: &DensityGrid, sites: &[Point3<f64>], selection: &[usize]) -> Result<f64, FitError> {
        let mut total = 0.0;
        for &index in selection {
            let site = sites.get(index).ok_or(FitError::SelectionOutOfBounds {
                index,
                len: sites.len(),
            })?;
            total += grid.interpolate(site);
        }
        Ok(total)
    }
}

impl ScoreFunction for DensityScore<'_> {
    fn score(&self, sites: &[Point3<f64>]) -> Result<f64, FitError> {
        Self::target_value(self.grid, sites, self.selection)
    }

    fn improves(&self, candidate: f64, incumbent: f64) -> bool {
        candidate > incumbent
    }

    fn initial_score(&self) -> f64 {
        self.threshold
    }
}

/// Summed Euclidean deviation from a reference geometry of equal length.
/// Lower is better; the initial score is `f64::INFINITY`, so the first
/// candidate is always recorded unless the candidate list is empty.
pub struct DistanceScore<'a> {
    reference: &'a [Point3<f64>],
    selection: Option<&'a [usize]>,
}

impl<'a> DistanceScore<'a> {
    pub fn new(reference: &'a [Point3<f64>]) -> Self {
        Self {
            reference,
            selection: None,
        }
    }

    /// Restricts the sum to a subset of site indices.
    pub fn with_selection(reference: &'a [Point3<f64>], selection: &'a [usize]) -> Self {
        Self {
            reference,
            selection: Some(selection),
        }
    }
}

impl ScoreFunction for DistanceScore<'_> {
    fn score(&self, sites: &[Point3<f64>]) -> Result<f64, FitError> {
        if self.reference.len() != sites.len() {
            return Err(FitError::ReferenceLengthMismatch {
                reference: self.reference.len(),
                candidate: sites.len(),
            });
        }
        match self.selection {
            None => Ok(sites
                .iter()
                .zip(self.reference)
                .map(|(site, reference)| (site - reference).norm())
                .sum()),
            Some(selection) => {
                let mut total = 0.0;
                for &index in selection {
                    let site = sites.get(index).ok_or(FitError::SelectionOutOfBounds {
                        index,
                        len: sites.len(),
                    })?;
                    total += (site - self.reference[index]).norm();
                }
                Ok(total)
            }
        }
    }

    fn improves(&self, candidate: f64, incumbent: f64) -> bool {
        candidate < incumbent
    }

    fn initial_score(&self) -> f64 {
        f64::INFINITY
    }
}
